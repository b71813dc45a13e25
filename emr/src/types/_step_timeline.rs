/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The timeline of the cluster step lifecycle.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct StepTimeline {
    /// <p>The date and time when the cluster step was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the cluster step execution started.</p>
    pub start_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl StepTimeline {
    /// <p>The date and time when the cluster step was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>The date and time when the cluster step execution started.</p>
    pub fn start_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.start_date_time.as_ref()
    }
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub fn end_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.end_date_time.as_ref()
    }
}
impl StepTimeline {
    /// Creates a new builder-style object to manufacture [`StepTimeline`](crate::types::StepTimeline).
    pub fn builder() -> crate::types::builders::StepTimelineBuilder {
        crate::types::builders::StepTimelineBuilder::default()
    }
    /// Converts this [`StepTimeline`](crate::types::StepTimeline) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::StepTimelineBuilder {
        crate::types::builders::StepTimelineBuilder {
            creation_date_time: self.creation_date_time,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
        }
    }
}

/// A builder for [`StepTimeline`](crate::types::StepTimeline).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct StepTimelineBuilder {
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) start_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl StepTimelineBuilder {
    /// <p>The date and time when the cluster step was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the cluster step was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time when the cluster step was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>The date and time when the cluster step execution started.</p>
    pub fn start_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.start_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the cluster step execution started.</p>
    pub fn set_start_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.start_date_time = input;
        self
    }
    /// <p>The date and time when the cluster step execution started.</p>
    pub fn get_start_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.start_date_time
    }
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub fn end_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.end_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub fn set_end_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.end_date_time = input;
        self
    }
    /// <p>The date and time when the cluster step execution completed or failed.</p>
    pub fn get_end_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.end_date_time
    }
    /// Consumes the builder and constructs a [`StepTimeline`](crate::types::StepTimeline).
    pub fn build(self) -> crate::types::StepTimeline {
        crate::types::StepTimeline {
            creation_date_time: self.creation_date_time,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
        }
    }
}
