/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>DescribeCluster</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DescribeClusterInput {
    /// <p>The identifier of the cluster to describe.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
}
impl DescribeClusterInput {
    /// <p>The identifier of the cluster to describe.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl DescribeClusterInput {
    /// Creates a new builder-style object to manufacture [`DescribeClusterInput`](crate::operation::describe_cluster::DescribeClusterInput).
    pub fn builder() -> crate::operation::describe_cluster::builders::DescribeClusterInputBuilder {
        crate::operation::describe_cluster::builders::DescribeClusterInputBuilder::default()
    }
    /// Converts this [`DescribeClusterInput`](crate::operation::describe_cluster::DescribeClusterInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_cluster::builders::DescribeClusterInputBuilder {
        crate::operation::describe_cluster::builders::DescribeClusterInputBuilder {
            cluster_id: self.cluster_id,
        }
    }
}

/// A builder for [`DescribeClusterInput`](crate::operation::describe_cluster::DescribeClusterInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeClusterInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
}
impl DescribeClusterInputBuilder {
    /// <p>The identifier of the cluster to describe.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the cluster to describe.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The identifier of the cluster to describe.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// Consumes the builder and constructs a [`DescribeClusterInput`](crate::operation::describe_cluster::DescribeClusterInput).
    pub fn build(self) -> crate::operation::describe_cluster::DescribeClusterInput {
        crate::operation::describe_cluster::DescribeClusterInput {
            cluster_id: self.cluster_id,
        }
    }
}
