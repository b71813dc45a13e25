/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The details of the instance group status.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceGroupStatus {
    /// <p>The current state of the instance group.</p>
    pub state: ::std::option::Option<crate::types::InstanceGroupState>,
    /// <p>The status change reason details for the instance group.</p>
    pub state_change_reason: ::std::option::Option<crate::types::InstanceGroupStateChangeReason>,
    /// <p>The timeline of the instance group status over time.</p>
    pub timeline: ::std::option::Option<crate::types::InstanceGroupTimeline>,
}
impl InstanceGroupStatus {
    /// <p>The current state of the instance group.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::InstanceGroupState> {
        self.state.as_ref()
    }
    /// <p>The status change reason details for the instance group.</p>
    pub fn state_change_reason(&self) -> ::std::option::Option<&crate::types::InstanceGroupStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>The timeline of the instance group status over time.</p>
    pub fn timeline(&self) -> ::std::option::Option<&crate::types::InstanceGroupTimeline> {
        self.timeline.as_ref()
    }
}
impl InstanceGroupStatus {
    /// Creates a new builder-style object to manufacture [`InstanceGroupStatus`](crate::types::InstanceGroupStatus).
    pub fn builder() -> crate::types::builders::InstanceGroupStatusBuilder {
        crate::types::builders::InstanceGroupStatusBuilder::default()
    }
    /// Converts this [`InstanceGroupStatus`](crate::types::InstanceGroupStatus) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceGroupStatusBuilder {
        crate::types::builders::InstanceGroupStatusBuilder {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}

/// A builder for [`InstanceGroupStatus`](crate::types::InstanceGroupStatus).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceGroupStatusBuilder {
    pub(crate) state: ::std::option::Option<crate::types::InstanceGroupState>,
    pub(crate) state_change_reason: ::std::option::Option<crate::types::InstanceGroupStateChangeReason>,
    pub(crate) timeline: ::std::option::Option<crate::types::InstanceGroupTimeline>,
}
impl InstanceGroupStatusBuilder {
    /// <p>The current state of the instance group.</p>
    pub fn state(mut self, input: crate::types::InstanceGroupState) -> Self {
        self.state = ::std::option::Option::Some(input);
        self
    }
    /// <p>The current state of the instance group.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::InstanceGroupState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The current state of the instance group.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::InstanceGroupState> {
        &self.state
    }
    /// <p>The status change reason details for the instance group.</p>
    pub fn state_change_reason(mut self, input: crate::types::InstanceGroupStateChangeReason) -> Self {
        self.state_change_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status change reason details for the instance group.</p>
    pub fn set_state_change_reason(mut self, input: ::std::option::Option<crate::types::InstanceGroupStateChangeReason>) -> Self {
        self.state_change_reason = input;
        self
    }
    /// <p>The status change reason details for the instance group.</p>
    pub fn get_state_change_reason(&self) -> &::std::option::Option<crate::types::InstanceGroupStateChangeReason> {
        &self.state_change_reason
    }
    /// <p>The timeline of the instance group status over time.</p>
    pub fn timeline(mut self, input: crate::types::InstanceGroupTimeline) -> Self {
        self.timeline = ::std::option::Option::Some(input);
        self
    }
    /// <p>The timeline of the instance group status over time.</p>
    pub fn set_timeline(mut self, input: ::std::option::Option<crate::types::InstanceGroupTimeline>) -> Self {
        self.timeline = input;
        self
    }
    /// <p>The timeline of the instance group status over time.</p>
    pub fn get_timeline(&self) -> &::std::option::Option<crate::types::InstanceGroupTimeline> {
        &self.timeline
    }
    /// Consumes the builder and constructs a [`InstanceGroupStatus`](crate::types::InstanceGroupStatus).
    pub fn build(self) -> crate::types::InstanceGroupStatus {
        crate::types::InstanceGroupStatus {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}
