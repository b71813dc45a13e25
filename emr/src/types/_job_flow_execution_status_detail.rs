/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Describes the status of the cluster (job flow).</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct JobFlowExecutionStatusDetail {
    /// <p>The state of the job flow.</p>
    pub state: ::std::option::Option<crate::types::JobFlowExecutionState>,
    /// <p>The creation date and time of the job flow.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The start date and time of the job flow.</p>
    pub start_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The completion date and time of the job flow.</p>
    pub end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>Description of the job flow last changed state.</p>
    pub last_state_change_reason: ::std::option::Option<::std::string::String>,
}
impl JobFlowExecutionStatusDetail {
    /// <p>The state of the job flow.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::JobFlowExecutionState> {
        self.state.as_ref()
    }
    /// <p>The creation date and time of the job flow.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>The start date and time of the job flow.</p>
    pub fn start_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.start_date_time.as_ref()
    }
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub fn ready_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.ready_date_time.as_ref()
    }
    /// <p>The completion date and time of the job flow.</p>
    pub fn end_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.end_date_time.as_ref()
    }
    /// <p>Description of the job flow last changed state.</p>
    pub fn last_state_change_reason(&self) -> ::std::option::Option<&str> {
        self.last_state_change_reason.as_deref()
    }
}
impl JobFlowExecutionStatusDetail {
    /// Creates a new builder-style object to manufacture [`JobFlowExecutionStatusDetail`](crate::types::JobFlowExecutionStatusDetail).
    pub fn builder() -> crate::types::builders::JobFlowExecutionStatusDetailBuilder {
        crate::types::builders::JobFlowExecutionStatusDetailBuilder::default()
    }
    /// Converts this [`JobFlowExecutionStatusDetail`](crate::types::JobFlowExecutionStatusDetail) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::JobFlowExecutionStatusDetailBuilder {
        crate::types::builders::JobFlowExecutionStatusDetailBuilder {
            state: self.state,
            creation_date_time: self.creation_date_time,
            start_date_time: self.start_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
            last_state_change_reason: self.last_state_change_reason,
        }
    }
}

/// A builder for [`JobFlowExecutionStatusDetail`](crate::types::JobFlowExecutionStatusDetail).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct JobFlowExecutionStatusDetailBuilder {
    pub(crate) state: ::std::option::Option<crate::types::JobFlowExecutionState>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) start_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) last_state_change_reason: ::std::option::Option<::std::string::String>,
}
impl JobFlowExecutionStatusDetailBuilder {
    /// <p>The state of the job flow.</p>
    pub fn state(mut self, input: crate::types::JobFlowExecutionState) -> Self {
        self.state = ::std::option::Option::Some(input);
        self
    }
    /// <p>The state of the job flow.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::JobFlowExecutionState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The state of the job flow.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::JobFlowExecutionState> {
        &self.state
    }
    /// <p>The creation date and time of the job flow.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The creation date and time of the job flow.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The creation date and time of the job flow.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>The start date and time of the job flow.</p>
    pub fn start_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.start_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The start date and time of the job flow.</p>
    pub fn set_start_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.start_date_time = input;
        self
    }
    /// <p>The start date and time of the job flow.</p>
    pub fn get_start_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.start_date_time
    }
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub fn ready_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.ready_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub fn set_ready_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.ready_date_time = input;
        self
    }
    /// <p>The date and time when the job flow was ready to start running bootstrap actions.</p>
    pub fn get_ready_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.ready_date_time
    }
    /// <p>The completion date and time of the job flow.</p>
    pub fn end_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.end_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The completion date and time of the job flow.</p>
    pub fn set_end_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.end_date_time = input;
        self
    }
    /// <p>The completion date and time of the job flow.</p>
    pub fn get_end_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.end_date_time
    }
    /// <p>Description of the job flow last changed state.</p>
    pub fn last_state_change_reason(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.last_state_change_reason = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Description of the job flow last changed state.</p>
    pub fn set_last_state_change_reason(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.last_state_change_reason = input;
        self
    }
    /// <p>Description of the job flow last changed state.</p>
    pub fn get_last_state_change_reason(&self) -> &::std::option::Option<::std::string::String> {
        &self.last_state_change_reason
    }
    /// Consumes the builder and constructs a [`JobFlowExecutionStatusDetail`](crate::types::JobFlowExecutionStatusDetail).
    pub fn build(self) -> crate::types::JobFlowExecutionStatusDetail {
        crate::types::JobFlowExecutionStatusDetail {
            state: self.state,
            creation_date_time: self.creation_date_time,
            start_date_time: self.start_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
            last_state_change_reason: self.last_state_change_reason,
        }
    }
}
