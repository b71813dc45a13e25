/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>DescribeCluster</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::fmt::Debug)]
pub struct DescribeClusterOutput {
    /// <p>This output contains the details for the requested cluster.</p>
    pub cluster: ::std::option::Option<crate::types::Cluster>,
}
impl DescribeClusterOutput {
    /// <p>This output contains the details for the requested cluster.</p>
    pub fn cluster(&self) -> ::std::option::Option<&crate::types::Cluster> {
        self.cluster.as_ref()
    }
}
impl DescribeClusterOutput {
    /// Creates a new builder-style object to manufacture [`DescribeClusterOutput`](crate::operation::describe_cluster::DescribeClusterOutput).
    pub fn builder() -> crate::operation::describe_cluster::builders::DescribeClusterOutputBuilder {
        crate::operation::describe_cluster::builders::DescribeClusterOutputBuilder::default()
    }
    /// Converts this [`DescribeClusterOutput`](crate::operation::describe_cluster::DescribeClusterOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_cluster::builders::DescribeClusterOutputBuilder {
        crate::operation::describe_cluster::builders::DescribeClusterOutputBuilder {
            cluster: self.cluster,
        }
    }
}

/// A builder for [`DescribeClusterOutput`](crate::operation::describe_cluster::DescribeClusterOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeClusterOutputBuilder {
    pub(crate) cluster: ::std::option::Option<crate::types::Cluster>,
}
impl DescribeClusterOutputBuilder {
    /// <p>This output contains the details for the requested cluster.</p>
    pub fn cluster(mut self, input: crate::types::Cluster) -> Self {
        self.cluster = ::std::option::Option::Some(input);
        self
    }
    /// <p>This output contains the details for the requested cluster.</p>
    pub fn set_cluster(mut self, input: ::std::option::Option<crate::types::Cluster>) -> Self {
        self.cluster = input;
        self
    }
    /// <p>This output contains the details for the requested cluster.</p>
    pub fn get_cluster(&self) -> &::std::option::Option<crate::types::Cluster> {
        &self.cluster
    }
    /// Consumes the builder and constructs a [`DescribeClusterOutput`](crate::operation::describe_cluster::DescribeClusterOutput).
    pub fn build(self) -> crate::operation::describe_cluster::DescribeClusterOutput {
        crate::operation::describe_cluster::DescribeClusterOutput {
            cluster: self.cluster,
        }
    }
}
