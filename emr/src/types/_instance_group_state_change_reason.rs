/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The status change reason details for the instance group.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceGroupStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    pub code: ::std::option::Option<crate::types::InstanceGroupStateChangeReasonCode>,
    /// <p>The status change reason description.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl InstanceGroupStateChangeReason {
    /// <p>The programmable code for the state change reason.</p>
    pub fn code(&self) -> ::std::option::Option<&crate::types::InstanceGroupStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The status change reason description.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl InstanceGroupStateChangeReason {
    /// Creates a new builder-style object to manufacture [`InstanceGroupStateChangeReason`](crate::types::InstanceGroupStateChangeReason).
    pub fn builder() -> crate::types::builders::InstanceGroupStateChangeReasonBuilder {
        crate::types::builders::InstanceGroupStateChangeReasonBuilder::default()
    }
    /// Converts this [`InstanceGroupStateChangeReason`](crate::types::InstanceGroupStateChangeReason) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceGroupStateChangeReasonBuilder {
        crate::types::builders::InstanceGroupStateChangeReasonBuilder {
            code: self.code,
            message: self.message,
        }
    }
}

/// A builder for [`InstanceGroupStateChangeReason`](crate::types::InstanceGroupStateChangeReason).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceGroupStateChangeReasonBuilder {
    pub(crate) code: ::std::option::Option<crate::types::InstanceGroupStateChangeReasonCode>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl InstanceGroupStateChangeReasonBuilder {
    /// <p>The programmable code for the state change reason.</p>
    pub fn code(mut self, input: crate::types::InstanceGroupStateChangeReasonCode) -> Self {
        self.code = ::std::option::Option::Some(input);
        self
    }
    /// <p>The programmable code for the state change reason.</p>
    pub fn set_code(mut self, input: ::std::option::Option<crate::types::InstanceGroupStateChangeReasonCode>) -> Self {
        self.code = input;
        self
    }
    /// <p>The programmable code for the state change reason.</p>
    pub fn get_code(&self) -> &::std::option::Option<crate::types::InstanceGroupStateChangeReasonCode> {
        &self.code
    }
    /// <p>The status change reason description.</p>
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The status change reason description.</p>
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    /// <p>The status change reason description.</p>
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Consumes the builder and constructs a [`InstanceGroupStateChangeReason`](crate::types::InstanceGroupStateChangeReason).
    pub fn build(self) -> crate::types::InstanceGroupStateChangeReason {
        crate::types::InstanceGroupStateChangeReason {
            code: self.code,
            message: self.message,
        }
    }
}
