/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides cluster-level details including status, hardware and software configuration, VPC settings, and so on.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeCluster;
impl DescribeCluster {
    /// Creates a new `DescribeCluster`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for DescribeCluster {
    const NAME: &'static str = "DescribeCluster";

    type Input = crate::operation::describe_cluster::DescribeClusterInput;
    type Output = crate::operation::describe_cluster::DescribeClusterOutput;
    type Error = crate::Error;
}

pub use crate::operation::describe_cluster::_describe_cluster_input::DescribeClusterInput;

pub use crate::operation::describe_cluster::_describe_cluster_output::DescribeClusterOutput;

mod _describe_cluster_input;

mod _describe_cluster_output;

/// Builders
pub mod builders {
    pub use crate::operation::describe_cluster::_describe_cluster_input::DescribeClusterInputBuilder;

    pub use crate::operation::describe_cluster::_describe_cluster_output::DescribeClusterOutputBuilder;
}
