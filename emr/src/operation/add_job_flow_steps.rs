/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>AddJobFlowSteps adds new steps to a running cluster. A maximum of 256 steps are allowed in each job flow.</p>
/// <p>If your cluster is long-running (such as a Hive data warehouse) or complex, you may require more than 256 steps to process your data. You can bypass the limit by using SSH to connect to the master node and submitting queries directly to the software running there.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AddJobFlowSteps;
impl AddJobFlowSteps {
    /// Creates a new `AddJobFlowSteps`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for AddJobFlowSteps {
    const NAME: &'static str = "AddJobFlowSteps";

    type Input = crate::operation::add_job_flow_steps::AddJobFlowStepsInput;
    type Output = crate::operation::add_job_flow_steps::AddJobFlowStepsOutput;
    type Error = crate::Error;
}

pub use crate::operation::add_job_flow_steps::_add_job_flow_steps_input::AddJobFlowStepsInput;

pub use crate::operation::add_job_flow_steps::_add_job_flow_steps_output::AddJobFlowStepsOutput;

mod _add_job_flow_steps_input;

mod _add_job_flow_steps_output;

/// Builders
pub mod builders {
    pub use crate::operation::add_job_flow_steps::_add_job_flow_steps_input::AddJobFlowStepsInputBuilder;

    pub use crate::operation::add_job_flow_steps::_add_job_flow_steps_output::AddJobFlowStepsOutputBuilder;
}
