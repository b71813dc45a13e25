/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>AddJobFlowSteps</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AddJobFlowStepsOutput {
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    pub step_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl AddJobFlowStepsOutput {
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.step_ids.is_none()</code>.
    pub fn step_ids(&self) -> &[::std::string::String] {
        self.step_ids.as_deref().unwrap_or_default()
    }
}
impl AddJobFlowStepsOutput {
    /// Creates a new builder-style object to manufacture [`AddJobFlowStepsOutput`](crate::operation::add_job_flow_steps::AddJobFlowStepsOutput).
    pub fn builder() -> crate::operation::add_job_flow_steps::builders::AddJobFlowStepsOutputBuilder {
        crate::operation::add_job_flow_steps::builders::AddJobFlowStepsOutputBuilder::default()
    }
    /// Converts this [`AddJobFlowStepsOutput`](crate::operation::add_job_flow_steps::AddJobFlowStepsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_job_flow_steps::builders::AddJobFlowStepsOutputBuilder {
        crate::operation::add_job_flow_steps::builders::AddJobFlowStepsOutputBuilder {
            step_ids: self.step_ids,
        }
    }
}

/// A builder for [`AddJobFlowStepsOutput`](crate::operation::add_job_flow_steps::AddJobFlowStepsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddJobFlowStepsOutputBuilder {
    pub(crate) step_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl AddJobFlowStepsOutputBuilder {
    /// Appends an item to `step_ids`.
    ///
    /// To override the contents of this collection use [`set_step_ids`](Self::set_step_ids).
    ///
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    pub fn step_ids(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.step_ids.unwrap_or_default();
        v.push(input.into());
        self.step_ids = ::std::option::Option::Some(v);
        self
    }
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    pub fn set_step_ids(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.step_ids = input;
        self
    }
    /// <p>The identifiers of the list of steps added to the job flow.</p>
    pub fn get_step_ids(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.step_ids
    }
    /// Consumes the builder and constructs a [`AddJobFlowStepsOutput`](crate::operation::add_job_flow_steps::AddJobFlowStepsOutput).
    pub fn build(self) -> crate::operation::add_job_flow_steps::AddJobFlowStepsOutput {
        crate::operation::add_job_flow_steps::AddJobFlowStepsOutput {
            step_ids: self.step_ids,
        }
    }
}
