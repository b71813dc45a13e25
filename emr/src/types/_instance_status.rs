/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The instance status details.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceStatus {
    /// <p>The current state of the instance.</p>
    pub state: ::std::option::Option<crate::types::InstanceState>,
    /// <p>The details of the status change reason for the instance.</p>
    pub state_change_reason: ::std::option::Option<crate::types::InstanceStateChangeReason>,
    /// <p>The timeline of the instance status over time.</p>
    pub timeline: ::std::option::Option<crate::types::InstanceTimeline>,
}
impl InstanceStatus {
    /// <p>The current state of the instance.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::InstanceState> {
        self.state.as_ref()
    }
    /// <p>The details of the status change reason for the instance.</p>
    pub fn state_change_reason(&self) -> ::std::option::Option<&crate::types::InstanceStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>The timeline of the instance status over time.</p>
    pub fn timeline(&self) -> ::std::option::Option<&crate::types::InstanceTimeline> {
        self.timeline.as_ref()
    }
}
impl InstanceStatus {
    /// Creates a new builder-style object to manufacture [`InstanceStatus`](crate::types::InstanceStatus).
    pub fn builder() -> crate::types::builders::InstanceStatusBuilder {
        crate::types::builders::InstanceStatusBuilder::default()
    }
    /// Converts this [`InstanceStatus`](crate::types::InstanceStatus) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceStatusBuilder {
        crate::types::builders::InstanceStatusBuilder {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}

/// A builder for [`InstanceStatus`](crate::types::InstanceStatus).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceStatusBuilder {
    pub(crate) state: ::std::option::Option<crate::types::InstanceState>,
    pub(crate) state_change_reason: ::std::option::Option<crate::types::InstanceStateChangeReason>,
    pub(crate) timeline: ::std::option::Option<crate::types::InstanceTimeline>,
}
impl InstanceStatusBuilder {
    /// <p>The current state of the instance.</p>
    pub fn state(mut self, input: crate::types::InstanceState) -> Self {
        self.state = ::std::option::Option::Some(input);
        self
    }
    /// <p>The current state of the instance.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::InstanceState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The current state of the instance.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::InstanceState> {
        &self.state
    }
    /// <p>The details of the status change reason for the instance.</p>
    pub fn state_change_reason(mut self, input: crate::types::InstanceStateChangeReason) -> Self {
        self.state_change_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The details of the status change reason for the instance.</p>
    pub fn set_state_change_reason(mut self, input: ::std::option::Option<crate::types::InstanceStateChangeReason>) -> Self {
        self.state_change_reason = input;
        self
    }
    /// <p>The details of the status change reason for the instance.</p>
    pub fn get_state_change_reason(&self) -> &::std::option::Option<crate::types::InstanceStateChangeReason> {
        &self.state_change_reason
    }
    /// <p>The timeline of the instance status over time.</p>
    pub fn timeline(mut self, input: crate::types::InstanceTimeline) -> Self {
        self.timeline = ::std::option::Option::Some(input);
        self
    }
    /// <p>The timeline of the instance status over time.</p>
    pub fn set_timeline(mut self, input: ::std::option::Option<crate::types::InstanceTimeline>) -> Self {
        self.timeline = input;
        self
    }
    /// <p>The timeline of the instance status over time.</p>
    pub fn get_timeline(&self) -> &::std::option::Option<crate::types::InstanceTimeline> {
        &self.timeline
    }
    /// Consumes the builder and constructs a [`InstanceStatus`](crate::types::InstanceStatus).
    pub fn build(self) -> crate::types::InstanceStatus {
        crate::types::InstanceStatus {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}
