/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The summary description of the cluster, as returned by <code>ListClusters</code>.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ClusterSummary {
    /// <p>The unique identifier for the cluster.</p>
    pub id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the cluster.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The details about the current status of the cluster.</p>
    pub status: ::std::option::Option<crate::types::ClusterStatus>,
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours.</p>
    pub normalized_instance_hours: ::std::option::Option<i32>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub cluster_arn: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub outpost_arn: ::std::option::Option<::std::string::String>,
}
impl ClusterSummary {
    /// <p>The unique identifier for the cluster.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The details about the current status of the cluster.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::ClusterStatus> {
        self.status.as_ref()
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours.</p>
    pub fn normalized_instance_hours(&self) -> ::std::option::Option<i32> {
        self.normalized_instance_hours
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> ::std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn outpost_arn(&self) -> ::std::option::Option<&str> {
        self.outpost_arn.as_deref()
    }
}
impl ClusterSummary {
    /// Creates a new builder-style object to manufacture [`ClusterSummary`](crate::types::ClusterSummary).
    pub fn builder() -> crate::types::builders::ClusterSummaryBuilder {
        crate::types::builders::ClusterSummaryBuilder::default()
    }
    /// Converts this [`ClusterSummary`](crate::types::ClusterSummary) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ClusterSummaryBuilder {
        crate::types::builders::ClusterSummaryBuilder {
            id: self.id,
            name: self.name,
            status: self.status,
            normalized_instance_hours: self.normalized_instance_hours,
            cluster_arn: self.cluster_arn,
            outpost_arn: self.outpost_arn,
        }
    }
}

/// A builder for [`ClusterSummary`](crate::types::ClusterSummary).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ClusterSummaryBuilder {
    pub(crate) id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) status: ::std::option::Option<crate::types::ClusterStatus>,
    pub(crate) normalized_instance_hours: ::std::option::Option<i32>,
    pub(crate) cluster_arn: ::std::option::Option<::std::string::String>,
    pub(crate) outpost_arn: ::std::option::Option<::std::string::String>,
}
impl ClusterSummaryBuilder {
    /// <p>The unique identifier for the cluster.</p>
    pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier for the cluster.</p>
    pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.id = input;
        self
    }
    /// <p>The unique identifier for the cluster.</p>
    pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.id
    }
    /// <p>The name of the cluster.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the cluster.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the cluster.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The details about the current status of the cluster.</p>
    pub fn status(mut self, input: crate::types::ClusterStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The details about the current status of the cluster.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::ClusterStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The details about the current status of the cluster.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::ClusterStatus> {
        &self.status
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours.</p>
    pub fn normalized_instance_hours(mut self, input: i32) -> Self {
        self.normalized_instance_hours = ::std::option::Option::Some(input);
        self
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours.</p>
    pub fn set_normalized_instance_hours(mut self, input: ::std::option::Option<i32>) -> Self {
        self.normalized_instance_hours = input;
        self
    }
    /// <p>An approximation of the cost of the cluster, represented in m1.small/hours.</p>
    pub fn get_normalized_instance_hours(&self) -> &::std::option::Option<i32> {
        &self.normalized_instance_hours
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn set_cluster_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_arn = input;
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn get_cluster_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_arn
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn outpost_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.outpost_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn set_outpost_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.outpost_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the Outpost where the cluster is launched.</p>
    pub fn get_outpost_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.outpost_arn
    }
    /// Consumes the builder and constructs a [`ClusterSummary`](crate::types::ClusterSummary).
    pub fn build(self) -> crate::types::ClusterSummary {
        crate::types::ClusterSummary {
            id: self.id,
            name: self.name,
            status: self.status,
            normalized_instance_hours: self.normalized_instance_hours,
            cluster_arn: self.cluster_arn,
            outpost_arn: self.outpost_arn,
        }
    }
}
