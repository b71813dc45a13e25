/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides status change reason details for the instance fleet.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceFleetStateChangeReason {
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub code: ::std::option::Option<crate::types::InstanceFleetStateChangeReasonCode>,
    /// <p>An explanatory message.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl InstanceFleetStateChangeReason {
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub fn code(&self) -> ::std::option::Option<&crate::types::InstanceFleetStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>An explanatory message.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl InstanceFleetStateChangeReason {
    /// Creates a new builder-style object to manufacture [`InstanceFleetStateChangeReason`](crate::types::InstanceFleetStateChangeReason).
    pub fn builder() -> crate::types::builders::InstanceFleetStateChangeReasonBuilder {
        crate::types::builders::InstanceFleetStateChangeReasonBuilder::default()
    }
    /// Converts this [`InstanceFleetStateChangeReason`](crate::types::InstanceFleetStateChangeReason) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceFleetStateChangeReasonBuilder {
        crate::types::builders::InstanceFleetStateChangeReasonBuilder {
            code: self.code,
            message: self.message,
        }
    }
}

/// A builder for [`InstanceFleetStateChangeReason`](crate::types::InstanceFleetStateChangeReason).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceFleetStateChangeReasonBuilder {
    pub(crate) code: ::std::option::Option<crate::types::InstanceFleetStateChangeReasonCode>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl InstanceFleetStateChangeReasonBuilder {
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub fn code(mut self, input: crate::types::InstanceFleetStateChangeReasonCode) -> Self {
        self.code = ::std::option::Option::Some(input);
        self
    }
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub fn set_code(mut self, input: ::std::option::Option<crate::types::InstanceFleetStateChangeReasonCode>) -> Self {
        self.code = input;
        self
    }
    /// <p>A code corresponding to the reason the state change occurred.</p>
    pub fn get_code(&self) -> &::std::option::Option<crate::types::InstanceFleetStateChangeReasonCode> {
        &self.code
    }
    /// <p>An explanatory message.</p>
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An explanatory message.</p>
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    /// <p>An explanatory message.</p>
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Consumes the builder and constructs a [`InstanceFleetStateChangeReason`](crate::types::InstanceFleetStateChangeReason).
    pub fn build(self) -> crate::types::InstanceFleetStateChangeReason {
        crate::types::InstanceFleetStateChangeReason {
            code: self.code,
            message: self.message,
        }
    }
}
