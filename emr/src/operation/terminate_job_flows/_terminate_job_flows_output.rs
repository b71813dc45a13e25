/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>TerminateJobFlows</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct TerminateJobFlowsOutput {}
impl TerminateJobFlowsOutput {
    /// Creates a new builder-style object to manufacture [`TerminateJobFlowsOutput`](crate::operation::terminate_job_flows::TerminateJobFlowsOutput).
    pub fn builder() -> crate::operation::terminate_job_flows::builders::TerminateJobFlowsOutputBuilder {
        crate::operation::terminate_job_flows::builders::TerminateJobFlowsOutputBuilder::default()
    }
    /// Converts this [`TerminateJobFlowsOutput`](crate::operation::terminate_job_flows::TerminateJobFlowsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::terminate_job_flows::builders::TerminateJobFlowsOutputBuilder {
        crate::operation::terminate_job_flows::builders::TerminateJobFlowsOutputBuilder {}
    }
}

/// A builder for [`TerminateJobFlowsOutput`](crate::operation::terminate_job_flows::TerminateJobFlowsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct TerminateJobFlowsOutputBuilder {}
impl TerminateJobFlowsOutputBuilder {
    /// Consumes the builder and constructs a [`TerminateJobFlowsOutput`](crate::operation::terminate_job_flows::TerminateJobFlowsOutput).
    pub fn build(self) -> crate::operation::terminate_job_flows::TerminateJobFlowsOutput {
        crate::operation::terminate_job_flows::TerminateJobFlowsOutput {}
    }
}
