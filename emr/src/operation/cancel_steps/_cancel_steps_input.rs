/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>CancelSteps</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct CancelStepsInput {
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <code>RunJobFlow</code> and <code>ListClusters</code> to get ClusterIDs.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>The list of <code>StepIDs</code> to cancel. Use <code>ListSteps</code> to get steps and their states for the specified cluster.</p>
    pub step_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub step_cancellation_option: ::std::option::Option<crate::types::StepCancellationOption>,
}
impl CancelStepsInput {
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <code>RunJobFlow</code> and <code>ListClusters</code> to get ClusterIDs.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The list of <code>StepIDs</code> to cancel. Use <code>ListSteps</code> to get steps and their states for the specified cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.step_ids.is_none()</code>.
    pub fn step_ids(&self) -> &[::std::string::String] {
        self.step_ids.as_deref().unwrap_or_default()
    }
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub fn step_cancellation_option(&self) -> ::std::option::Option<&crate::types::StepCancellationOption> {
        self.step_cancellation_option.as_ref()
    }
}
impl CancelStepsInput {
    /// Creates a new builder-style object to manufacture [`CancelStepsInput`](crate::operation::cancel_steps::CancelStepsInput).
    pub fn builder() -> crate::operation::cancel_steps::builders::CancelStepsInputBuilder {
        crate::operation::cancel_steps::builders::CancelStepsInputBuilder::default()
    }
    /// Converts this [`CancelStepsInput`](crate::operation::cancel_steps::CancelStepsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::cancel_steps::builders::CancelStepsInputBuilder {
        crate::operation::cancel_steps::builders::CancelStepsInputBuilder {
            cluster_id: self.cluster_id,
            step_ids: self.step_ids,
            step_cancellation_option: self.step_cancellation_option,
        }
    }
}

/// A builder for [`CancelStepsInput`](crate::operation::cancel_steps::CancelStepsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CancelStepsInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) step_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) step_cancellation_option: ::std::option::Option<crate::types::StepCancellationOption>,
}
impl CancelStepsInputBuilder {
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <code>RunJobFlow</code> and <code>ListClusters</code> to get ClusterIDs.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <code>RunJobFlow</code> and <code>ListClusters</code> to get ClusterIDs.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The <code>ClusterID</code> for the specified steps that will be canceled. Use <code>RunJobFlow</code> and <code>ListClusters</code> to get ClusterIDs.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// Appends an item to `step_ids`.
    ///
    /// To override the contents of this collection use [`set_step_ids`](Self::set_step_ids).
    ///
    /// <p>The list of <code>StepIDs</code> to cancel. Use <code>ListSteps</code> to get steps and their states for the specified cluster.</p>
    pub fn step_ids(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.step_ids.unwrap_or_default();
        v.push(input.into());
        self.step_ids = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of <code>StepIDs</code> to cancel. Use <code>ListSteps</code> to get steps and their states for the specified cluster.</p>
    pub fn set_step_ids(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.step_ids = input;
        self
    }
    /// <p>The list of <code>StepIDs</code> to cancel. Use <code>ListSteps</code> to get steps and their states for the specified cluster.</p>
    pub fn get_step_ids(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.step_ids
    }
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub fn step_cancellation_option(mut self, input: crate::types::StepCancellationOption) -> Self {
        self.step_cancellation_option = ::std::option::Option::Some(input);
        self
    }
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub fn set_step_cancellation_option(mut self, input: ::std::option::Option<crate::types::StepCancellationOption>) -> Self {
        self.step_cancellation_option = input;
        self
    }
    /// <p>The option to choose to cancel <code>RUNNING</code> steps. By default, the value is <code>SEND_INTERRUPT</code>.</p>
    pub fn get_step_cancellation_option(&self) -> &::std::option::Option<crate::types::StepCancellationOption> {
        &self.step_cancellation_option
    }
    /// Consumes the builder and constructs a [`CancelStepsInput`](crate::operation::cancel_steps::CancelStepsInput).
    pub fn build(self) -> crate::operation::cancel_steps::CancelStepsInput {
        crate::operation::cancel_steps::CancelStepsInput {
            cluster_id: self.cluster_id,
            step_ids: self.step_ids,
            step_cancellation_option: self.step_cancellation_option,
        }
    }
}
