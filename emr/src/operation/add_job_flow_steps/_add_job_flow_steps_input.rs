/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>AddJobFlowSteps</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AddJobFlowStepsInput {
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <code>RunJobFlow</code> and can also be obtained from <code>ListClusters</code>.</p>
    pub job_flow_id: ::std::option::Option<::std::string::String>,
    /// <p>A list of <code>StepConfig</code> to be executed by the job flow.</p>
    pub steps: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>,
}
impl AddJobFlowStepsInput {
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <code>RunJobFlow</code> and can also be obtained from <code>ListClusters</code>.</p>
    pub fn job_flow_id(&self) -> ::std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>A list of <code>StepConfig</code> to be executed by the job flow.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.steps.is_none()</code>.
    pub fn steps(&self) -> &[crate::types::StepConfig] {
        self.steps.as_deref().unwrap_or_default()
    }
}
impl AddJobFlowStepsInput {
    /// Creates a new builder-style object to manufacture [`AddJobFlowStepsInput`](crate::operation::add_job_flow_steps::AddJobFlowStepsInput).
    pub fn builder() -> crate::operation::add_job_flow_steps::builders::AddJobFlowStepsInputBuilder {
        crate::operation::add_job_flow_steps::builders::AddJobFlowStepsInputBuilder::default()
    }
    /// Converts this [`AddJobFlowStepsInput`](crate::operation::add_job_flow_steps::AddJobFlowStepsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_job_flow_steps::builders::AddJobFlowStepsInputBuilder {
        crate::operation::add_job_flow_steps::builders::AddJobFlowStepsInputBuilder {
            job_flow_id: self.job_flow_id,
            steps: self.steps,
        }
    }
}

/// A builder for [`AddJobFlowStepsInput`](crate::operation::add_job_flow_steps::AddJobFlowStepsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddJobFlowStepsInputBuilder {
    pub(crate) job_flow_id: ::std::option::Option<::std::string::String>,
    pub(crate) steps: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>,
}
impl AddJobFlowStepsInputBuilder {
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <code>RunJobFlow</code> and can also be obtained from <code>ListClusters</code>.</p>
    pub fn job_flow_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <code>RunJobFlow</code> and can also be obtained from <code>ListClusters</code>.</p>
    pub fn set_job_flow_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_id = input;
        self
    }
    /// <p>A string that uniquely identifies the job flow. This identifier is returned by <code>RunJobFlow</code> and can also be obtained from <code>ListClusters</code>.</p>
    pub fn get_job_flow_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_id
    }
    /// Appends an item to `steps`.
    ///
    /// To override the contents of this collection use [`set_steps`](Self::set_steps).
    ///
    /// <p>A list of <code>StepConfig</code> to be executed by the job flow.</p>
    pub fn steps(mut self, input: crate::types::StepConfig) -> Self {
        let mut v = self.steps.unwrap_or_default();
        v.push(input);
        self.steps = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of <code>StepConfig</code> to be executed by the job flow.</p>
    pub fn set_steps(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>) -> Self {
        self.steps = input;
        self
    }
    /// <p>A list of <code>StepConfig</code> to be executed by the job flow.</p>
    pub fn get_steps(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::StepConfig>> {
        &self.steps
    }
    /// Consumes the builder and constructs a [`AddJobFlowStepsInput`](crate::operation::add_job_flow_steps::AddJobFlowStepsInput).
    pub fn build(self) -> crate::operation::add_job_flow_steps::AddJobFlowStepsInput {
        crate::operation::add_job_flow_steps::AddJobFlowStepsInput {
            job_flow_id: self.job_flow_id,
            steps: self.steps,
        }
    }
}
