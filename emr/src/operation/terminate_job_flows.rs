/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>TerminateJobFlows shuts a list of clusters (job flows) down. When a job flow is shut down, any step not yet completed is canceled and the EC2 instances on which the cluster is running are stopped. Any log files not already saved are uploaded to Amazon S3 if a <code>log_uri</code> was specified when the cluster was created.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct TerminateJobFlows;
impl TerminateJobFlows {
    /// Creates a new `TerminateJobFlows`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for TerminateJobFlows {
    const NAME: &'static str = "TerminateJobFlows";

    type Input = crate::operation::terminate_job_flows::TerminateJobFlowsInput;
    type Output = crate::operation::terminate_job_flows::TerminateJobFlowsOutput;
    type Error = crate::Error;
}

pub use crate::operation::terminate_job_flows::_terminate_job_flows_input::TerminateJobFlowsInput;

pub use crate::operation::terminate_job_flows::_terminate_job_flows_output::TerminateJobFlowsOutput;

mod _terminate_job_flows_input;

mod _terminate_job_flows_output;

/// Builders
pub mod builders {
    pub use crate::operation::terminate_job_flows::_terminate_job_flows_input::TerminateJobFlowsInputBuilder;

    pub use crate::operation::terminate_job_flows::_terminate_job_flows_output::TerminateJobFlowsOutputBuilder;
}
