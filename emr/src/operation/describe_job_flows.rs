/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>This API is deprecated and will eventually be removed. We recommend you use <code>ListClusters</code>, <code>DescribeCluster</code>, <code>ListSteps</code>, <code>ListInstanceGroups</code> and <code>ListBootstrapActions</code> instead.</p>
/// <p>DescribeJobFlows returns a list of job flows that match all of the supplied parameters. The parameters can include a list of job flow IDs, job flow states, and restrictions on job flow creation date and time.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeJobFlows;
impl DescribeJobFlows {
    /// Creates a new `DescribeJobFlows`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for DescribeJobFlows {
    const NAME: &'static str = "DescribeJobFlows";

    type Input = crate::operation::describe_job_flows::DescribeJobFlowsInput;
    type Output = crate::operation::describe_job_flows::DescribeJobFlowsOutput;
    type Error = crate::Error;
}

pub use crate::operation::describe_job_flows::_describe_job_flows_input::DescribeJobFlowsInput;

pub use crate::operation::describe_job_flows::_describe_job_flows_output::DescribeJobFlowsOutput;

mod _describe_job_flows_input;

mod _describe_job_flows_output;

/// Builders
pub mod builders {
    pub use crate::operation::describe_job_flows::_describe_job_flows_input::DescribeJobFlowsInputBuilder;

    pub use crate::operation::describe_job_flows::_describe_job_flows_output::DescribeJobFlowsOutputBuilder;
}
