/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>RunJobFlow creates and starts running a new cluster (job flow). The cluster runs the steps specified. After the steps complete, the cluster stops and the HDFS partition is lost. To prevent loss of data, configure the last step of the job flow to store results in Amazon S3.</p>
/// <p>If <code>JobFlowInstancesConfig::keep_job_flow_alive_when_no_steps</code> is set to <code>true</code>, the cluster transitions to the WAITING state rather than shutting down after the steps have completed.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct RunJobFlow;
impl RunJobFlow {
    /// Creates a new `RunJobFlow`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for RunJobFlow {
    const NAME: &'static str = "RunJobFlow";

    type Input = crate::operation::run_job_flow::RunJobFlowInput;
    type Output = crate::operation::run_job_flow::RunJobFlowOutput;
    type Error = crate::Error;
}

pub use crate::operation::run_job_flow::_run_job_flow_input::RunJobFlowInput;

pub use crate::operation::run_job_flow::_run_job_flow_output::RunJobFlowOutput;

mod _run_job_flow_input;

mod _run_job_flow_output;

/// Builders
pub mod builders {
    pub use crate::operation::run_job_flow::_run_job_flow_input::RunJobFlowInputBuilder;

    pub use crate::operation::run_job_flow::_run_job_flow_output::RunJobFlowOutputBuilder;
}
