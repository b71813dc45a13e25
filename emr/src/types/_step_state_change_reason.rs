/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The details of the step state change reason.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct StepStateChangeReason {
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub code: ::std::option::Option<crate::types::StepStateChangeReasonCode>,
    /// <p>The descriptive message for the state change reason.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl StepStateChangeReason {
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub fn code(&self) -> ::std::option::Option<&crate::types::StepStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl StepStateChangeReason {
    /// Creates a new builder-style object to manufacture [`StepStateChangeReason`](crate::types::StepStateChangeReason).
    pub fn builder() -> crate::types::builders::StepStateChangeReasonBuilder {
        crate::types::builders::StepStateChangeReasonBuilder::default()
    }
    /// Converts this [`StepStateChangeReason`](crate::types::StepStateChangeReason) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::StepStateChangeReasonBuilder {
        crate::types::builders::StepStateChangeReasonBuilder {
            code: self.code,
            message: self.message,
        }
    }
}

/// A builder for [`StepStateChangeReason`](crate::types::StepStateChangeReason).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct StepStateChangeReasonBuilder {
    pub(crate) code: ::std::option::Option<crate::types::StepStateChangeReasonCode>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl StepStateChangeReasonBuilder {
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub fn code(mut self, input: crate::types::StepStateChangeReasonCode) -> Self {
        self.code = ::std::option::Option::Some(input);
        self
    }
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub fn set_code(mut self, input: ::std::option::Option<crate::types::StepStateChangeReasonCode>) -> Self {
        self.code = input;
        self
    }
    /// <p>The programmable code for the state change reason. Note: Currently, the service provides no code for the state change.</p>
    pub fn get_code(&self) -> &::std::option::Option<crate::types::StepStateChangeReasonCode> {
        &self.code
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Consumes the builder and constructs a [`StepStateChangeReason`](crate::types::StepStateChangeReason).
    pub fn build(self) -> crate::types::StepStateChangeReason {
        crate::types::StepStateChangeReason {
            code: self.code,
            message: self.message,
        }
    }
}
