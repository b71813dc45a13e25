/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The reason for an [`AutoScalingPolicyStatus`](crate::types::AutoScalingPolicyStatus) change.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AutoScalingPolicyStateChangeReason {
    /// <p>The code indicating the reason for the change. <code>USER_REQUEST</code> means the user requested it; <code>PROVISION_FAILURE</code> means the policy failed to attach; <code>CLEANUP_FAILURE</code> means the policy failed to detach.</p>
    pub code: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReasonCode>,
    /// <p>A friendly, more verbose message that accompanies the change.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl AutoScalingPolicyStateChangeReason {
    /// <p>The code indicating the reason for the change. <code>USER_REQUEST</code> means the user requested it; <code>PROVISION_FAILURE</code> means the policy failed to attach; <code>CLEANUP_FAILURE</code> means the policy failed to detach.</p>
    pub fn code(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicyStateChangeReasonCode> {
        self.code.as_ref()
    }
    /// <p>A friendly, more verbose message that accompanies the change.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl AutoScalingPolicyStateChangeReason {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyStateChangeReason`](crate::types::AutoScalingPolicyStateChangeReason).
    pub fn builder() -> crate::types::builders::AutoScalingPolicyStateChangeReasonBuilder {
        crate::types::builders::AutoScalingPolicyStateChangeReasonBuilder::default()
    }
    /// Converts this [`AutoScalingPolicyStateChangeReason`](crate::types::AutoScalingPolicyStateChangeReason) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::AutoScalingPolicyStateChangeReasonBuilder {
        crate::types::builders::AutoScalingPolicyStateChangeReasonBuilder {
            code: self.code,
            message: self.message,
        }
    }
}

/// A builder for [`AutoScalingPolicyStateChangeReason`](crate::types::AutoScalingPolicyStateChangeReason).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AutoScalingPolicyStateChangeReasonBuilder {
    pub(crate) code: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReasonCode>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl AutoScalingPolicyStateChangeReasonBuilder {
    /// <p>The code indicating the reason for the change. <code>USER_REQUEST</code> means the user requested it; <code>PROVISION_FAILURE</code> means the policy failed to attach; <code>CLEANUP_FAILURE</code> means the policy failed to detach.</p>
    pub fn code(mut self, input: crate::types::AutoScalingPolicyStateChangeReasonCode) -> Self {
        self.code = ::std::option::Option::Some(input);
        self
    }
    /// <p>The code indicating the reason for the change. <code>USER_REQUEST</code> means the user requested it; <code>PROVISION_FAILURE</code> means the policy failed to attach; <code>CLEANUP_FAILURE</code> means the policy failed to detach.</p>
    pub fn set_code(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReasonCode>) -> Self {
        self.code = input;
        self
    }
    /// <p>The code indicating the reason for the change. <code>USER_REQUEST</code> means the user requested it; <code>PROVISION_FAILURE</code> means the policy failed to attach; <code>CLEANUP_FAILURE</code> means the policy failed to detach.</p>
    pub fn get_code(&self) -> &::std::option::Option<crate::types::AutoScalingPolicyStateChangeReasonCode> {
        &self.code
    }
    /// <p>A friendly, more verbose message that accompanies the change.</p>
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A friendly, more verbose message that accompanies the change.</p>
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    /// <p>A friendly, more verbose message that accompanies the change.</p>
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Consumes the builder and constructs a [`AutoScalingPolicyStateChangeReason`](crate::types::AutoScalingPolicyStateChangeReason).
    pub fn build(self) -> crate::types::AutoScalingPolicyStateChangeReason {
        crate::types::AutoScalingPolicyStateChangeReason {
            code: self.code,
            message: self.message,
        }
    }
}
