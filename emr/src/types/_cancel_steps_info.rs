/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Specification of the status of a <code>CancelSteps</code> request.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct CancelStepsInfo {
    /// <p>The encrypted StepId of a step.</p>
    pub step_id: ::std::option::Option<::std::string::String>,
    /// <p>The status of a <code>CancelSteps</code> request. The value may be <code>SUBMITTED</code> or <code>FAILED</code>.</p>
    pub status: ::std::option::Option<crate::types::CancelStepsRequestStatus>,
    /// <p>The reason for the failure if the request failed.</p>
    pub reason: ::std::option::Option<::std::string::String>,
}
impl CancelStepsInfo {
    /// <p>The encrypted StepId of a step.</p>
    pub fn step_id(&self) -> ::std::option::Option<&str> {
        self.step_id.as_deref()
    }
    /// <p>The status of a <code>CancelSteps</code> request. The value may be <code>SUBMITTED</code> or <code>FAILED</code>.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::CancelStepsRequestStatus> {
        self.status.as_ref()
    }
    /// <p>The reason for the failure if the request failed.</p>
    pub fn reason(&self) -> ::std::option::Option<&str> {
        self.reason.as_deref()
    }
}
impl CancelStepsInfo {
    /// Creates a new builder-style object to manufacture [`CancelStepsInfo`](crate::types::CancelStepsInfo).
    pub fn builder() -> crate::types::builders::CancelStepsInfoBuilder {
        crate::types::builders::CancelStepsInfoBuilder::default()
    }
    /// Converts this [`CancelStepsInfo`](crate::types::CancelStepsInfo) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::CancelStepsInfoBuilder {
        crate::types::builders::CancelStepsInfoBuilder {
            step_id: self.step_id,
            status: self.status,
            reason: self.reason,
        }
    }
}

/// A builder for [`CancelStepsInfo`](crate::types::CancelStepsInfo).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CancelStepsInfoBuilder {
    pub(crate) step_id: ::std::option::Option<::std::string::String>,
    pub(crate) status: ::std::option::Option<crate::types::CancelStepsRequestStatus>,
    pub(crate) reason: ::std::option::Option<::std::string::String>,
}
impl CancelStepsInfoBuilder {
    /// <p>The encrypted StepId of a step.</p>
    pub fn step_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.step_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The encrypted StepId of a step.</p>
    pub fn set_step_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.step_id = input;
        self
    }
    /// <p>The encrypted StepId of a step.</p>
    pub fn get_step_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.step_id
    }
    /// <p>The status of a <code>CancelSteps</code> request. The value may be <code>SUBMITTED</code> or <code>FAILED</code>.</p>
    pub fn status(mut self, input: crate::types::CancelStepsRequestStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status of a <code>CancelSteps</code> request. The value may be <code>SUBMITTED</code> or <code>FAILED</code>.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::CancelStepsRequestStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The status of a <code>CancelSteps</code> request. The value may be <code>SUBMITTED</code> or <code>FAILED</code>.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::CancelStepsRequestStatus> {
        &self.status
    }
    /// <p>The reason for the failure if the request failed.</p>
    pub fn reason(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.reason = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The reason for the failure if the request failed.</p>
    pub fn set_reason(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.reason = input;
        self
    }
    /// <p>The reason for the failure if the request failed.</p>
    pub fn get_reason(&self) -> &::std::option::Option<::std::string::String> {
        &self.reason
    }
    /// Consumes the builder and constructs a [`CancelStepsInfo`](crate::types::CancelStepsInfo).
    pub fn build(self) -> crate::types::CancelStepsInfo {
        crate::types::CancelStepsInfo {
            step_id: self.step_id,
            status: self.status,
            reason: self.reason,
        }
    }
}
