/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The reason that the cluster changed to its current state.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ClusterStateChangeReason {
    /// <p>The programmatic code for the state change reason.</p>
    pub code: ::std::option::Option<crate::types::ClusterStateChangeReasonCode>,
    /// <p>The descriptive message for the state change reason.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl ClusterStateChangeReason {
    /// <p>The programmatic code for the state change reason.</p>
    pub fn code(&self) -> ::std::option::Option<&crate::types::ClusterStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>The descriptive message for the state change reason.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl ClusterStateChangeReason {
    /// Creates a new builder-style object to manufacture [`ClusterStateChangeReason`](crate::types::ClusterStateChangeReason).
    pub fn builder() -> crate::types::builders::ClusterStateChangeReasonBuilder {
        crate::types::builders::ClusterStateChangeReasonBuilder::default()
    }
    /// Converts this [`ClusterStateChangeReason`](crate::types::ClusterStateChangeReason) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ClusterStateChangeReasonBuilder {
        crate::types::builders::ClusterStateChangeReasonBuilder {
            code: self.code,
            message: self.message,
        }
    }
}

/// A builder for [`ClusterStateChangeReason`](crate::types::ClusterStateChangeReason).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ClusterStateChangeReasonBuilder {
    pub(crate) code: ::std::option::Option<crate::types::ClusterStateChangeReasonCode>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl ClusterStateChangeReasonBuilder {
    /// <p>The programmatic code for the state change reason.</p>
    pub fn code(mut self, input: crate::types::ClusterStateChangeReasonCode) -> Self {
        self.code = ::std::option::Option::Some(input);
        self
    }
    /// <p>The programmatic code for the state change reason.</p>
    pub fn set_code(mut self, input: ::std::option::Option<crate::types::ClusterStateChangeReasonCode>) -> Self {
        self.code = input;
        self
    }
    /// <p>The programmatic code for the state change reason.</p>
    pub fn get_code(&self) -> &::std::option::Option<crate::types::ClusterStateChangeReasonCode> {
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
    /// Consumes the builder and constructs a [`ClusterStateChangeReason`](crate::types::ClusterStateChangeReason).
    pub fn build(self) -> crate::types::ClusterStateChangeReason {
        crate::types::ClusterStateChangeReason {
            code: self.code,
            message: self.message,
        }
    }
}
