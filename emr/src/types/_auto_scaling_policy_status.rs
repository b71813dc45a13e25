/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The status of an automatic scaling policy.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AutoScalingPolicyStatus {
    /// <p>The current state of the policy.</p>
    pub state: ::std::option::Option<crate::types::AutoScalingPolicyState>,
    /// <p>The reason for the last state change.</p>
    pub state_change_reason: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReason>,
}
impl AutoScalingPolicyStatus {
    /// <p>The current state of the policy.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicyState> {
        self.state.as_ref()
    }
    /// <p>The reason for the last state change.</p>
    pub fn state_change_reason(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicyStateChangeReason> {
        self.state_change_reason.as_ref()
    }
}
impl AutoScalingPolicyStatus {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyStatus`](crate::types::AutoScalingPolicyStatus).
    pub fn builder() -> crate::types::builders::AutoScalingPolicyStatusBuilder {
        crate::types::builders::AutoScalingPolicyStatusBuilder::default()
    }
    /// Converts this [`AutoScalingPolicyStatus`](crate::types::AutoScalingPolicyStatus) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::AutoScalingPolicyStatusBuilder {
        crate::types::builders::AutoScalingPolicyStatusBuilder {
            state: self.state,
            state_change_reason: self.state_change_reason,
        }
    }
}

/// A builder for [`AutoScalingPolicyStatus`](crate::types::AutoScalingPolicyStatus).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AutoScalingPolicyStatusBuilder {
    pub(crate) state: ::std::option::Option<crate::types::AutoScalingPolicyState>,
    pub(crate) state_change_reason: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReason>,
}
impl AutoScalingPolicyStatusBuilder {
    /// <p>The current state of the policy.</p>
    pub fn state(mut self, input: crate::types::AutoScalingPolicyState) -> Self {
        self.state = ::std::option::Option::Some(input);
        self
    }
    /// <p>The current state of the policy.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicyState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The current state of the policy.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::AutoScalingPolicyState> {
        &self.state
    }
    /// <p>The reason for the last state change.</p>
    pub fn state_change_reason(mut self, input: crate::types::AutoScalingPolicyStateChangeReason) -> Self {
        self.state_change_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The reason for the last state change.</p>
    pub fn set_state_change_reason(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicyStateChangeReason>) -> Self {
        self.state_change_reason = input;
        self
    }
    /// <p>The reason for the last state change.</p>
    pub fn get_state_change_reason(&self) -> &::std::option::Option<crate::types::AutoScalingPolicyStateChangeReason> {
        &self.state_change_reason
    }
    /// Consumes the builder and constructs a [`AutoScalingPolicyStatus`](crate::types::AutoScalingPolicyStatus).
    pub fn build(self) -> crate::types::AutoScalingPolicyStatus {
        crate::types::AutoScalingPolicyStatus {
            state: self.state,
            state_change_reason: self.state_change_reason,
        }
    }
}
