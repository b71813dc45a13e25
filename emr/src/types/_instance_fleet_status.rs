/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The status of the instance fleet.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceFleetStatus {
    /// <p>A code representing the instance fleet status.</p>
    pub state: ::std::option::Option<crate::types::InstanceFleetState>,
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub state_change_reason: ::std::option::Option<crate::types::InstanceFleetStateChangeReason>,
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub timeline: ::std::option::Option<crate::types::InstanceFleetTimeline>,
}
impl InstanceFleetStatus {
    /// <p>A code representing the instance fleet status.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::InstanceFleetState> {
        self.state.as_ref()
    }
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub fn state_change_reason(&self) -> ::std::option::Option<&crate::types::InstanceFleetStateChangeReason> {
        self.state_change_reason.as_ref()
    }
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub fn timeline(&self) -> ::std::option::Option<&crate::types::InstanceFleetTimeline> {
        self.timeline.as_ref()
    }
}
impl InstanceFleetStatus {
    /// Creates a new builder-style object to manufacture [`InstanceFleetStatus`](crate::types::InstanceFleetStatus).
    pub fn builder() -> crate::types::builders::InstanceFleetStatusBuilder {
        crate::types::builders::InstanceFleetStatusBuilder::default()
    }
    /// Converts this [`InstanceFleetStatus`](crate::types::InstanceFleetStatus) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceFleetStatusBuilder {
        crate::types::builders::InstanceFleetStatusBuilder {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}

/// A builder for [`InstanceFleetStatus`](crate::types::InstanceFleetStatus).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceFleetStatusBuilder {
    pub(crate) state: ::std::option::Option<crate::types::InstanceFleetState>,
    pub(crate) state_change_reason: ::std::option::Option<crate::types::InstanceFleetStateChangeReason>,
    pub(crate) timeline: ::std::option::Option<crate::types::InstanceFleetTimeline>,
}
impl InstanceFleetStatusBuilder {
    /// <p>A code representing the instance fleet status.</p>
    pub fn state(mut self, input: crate::types::InstanceFleetState) -> Self {
        self.state = ::std::option::Option::Some(input);
        self
    }
    /// <p>A code representing the instance fleet status.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::InstanceFleetState>) -> Self {
        self.state = input;
        self
    }
    /// <p>A code representing the instance fleet status.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::InstanceFleetState> {
        &self.state
    }
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub fn state_change_reason(mut self, input: crate::types::InstanceFleetStateChangeReason) -> Self {
        self.state_change_reason = ::std::option::Option::Some(input);
        self
    }
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub fn set_state_change_reason(mut self, input: ::std::option::Option<crate::types::InstanceFleetStateChangeReason>) -> Self {
        self.state_change_reason = input;
        self
    }
    /// <p>Provides status change reason details for the instance fleet.</p>
    pub fn get_state_change_reason(&self) -> &::std::option::Option<crate::types::InstanceFleetStateChangeReason> {
        &self.state_change_reason
    }
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub fn timeline(mut self, input: crate::types::InstanceFleetTimeline) -> Self {
        self.timeline = ::std::option::Option::Some(input);
        self
    }
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub fn set_timeline(mut self, input: ::std::option::Option<crate::types::InstanceFleetTimeline>) -> Self {
        self.timeline = input;
        self
    }
    /// <p>Provides historical timestamps for the instance fleet, including the time of creation, the time it became ready to run jobs, and the time of termination.</p>
    pub fn get_timeline(&self) -> &::std::option::Option<crate::types::InstanceFleetTimeline> {
        &self.timeline
    }
    /// Consumes the builder and constructs a [`InstanceFleetStatus`](crate::types::InstanceFleetStatus).
    pub fn build(self) -> crate::types::InstanceFleetStatus {
        crate::types::InstanceFleetStatus {
            state: self.state,
            state_change_reason: self.state_change_reason,
            timeline: self.timeline,
        }
    }
}
