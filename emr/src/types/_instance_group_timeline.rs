/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The timeline of the instance group lifecycle.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceGroupTimeline {
    /// <p>The creation date and time of the instance group.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the instance group terminated.</p>
    pub end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl InstanceGroupTimeline {
    /// <p>The creation date and time of the instance group.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub fn ready_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.ready_date_time.as_ref()
    }
    /// <p>The date and time when the instance group terminated.</p>
    pub fn end_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.end_date_time.as_ref()
    }
}
impl InstanceGroupTimeline {
    /// Creates a new builder-style object to manufacture [`InstanceGroupTimeline`](crate::types::InstanceGroupTimeline).
    pub fn builder() -> crate::types::builders::InstanceGroupTimelineBuilder {
        crate::types::builders::InstanceGroupTimelineBuilder::default()
    }
    /// Converts this [`InstanceGroupTimeline`](crate::types::InstanceGroupTimeline) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceGroupTimelineBuilder {
        crate::types::builders::InstanceGroupTimelineBuilder {
            creation_date_time: self.creation_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
        }
    }
}

/// A builder for [`InstanceGroupTimeline`](crate::types::InstanceGroupTimeline).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceGroupTimelineBuilder {
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl InstanceGroupTimelineBuilder {
    /// <p>The creation date and time of the instance group.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The creation date and time of the instance group.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The creation date and time of the instance group.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub fn ready_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.ready_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub fn set_ready_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.ready_date_time = input;
        self
    }
    /// <p>The date and time when the instance group became ready to perform tasks.</p>
    pub fn get_ready_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.ready_date_time
    }
    /// <p>The date and time when the instance group terminated.</p>
    pub fn end_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.end_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the instance group terminated.</p>
    pub fn set_end_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.end_date_time = input;
        self
    }
    /// <p>The date and time when the instance group terminated.</p>
    pub fn get_end_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.end_date_time
    }
    /// Consumes the builder and constructs a [`InstanceGroupTimeline`](crate::types::InstanceGroupTimeline).
    pub fn build(self) -> crate::types::InstanceGroupTimeline {
        crate::types::InstanceGroupTimeline {
            creation_date_time: self.creation_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
        }
    }
}
