/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Represents the timeline of the cluster's lifecycle.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ClusterTimeline {
    /// <p>The creation date and time of the cluster.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the cluster was ready to run steps.</p>
    pub ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The date and time when the cluster was terminated.</p>
    pub end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl ClusterTimeline {
    /// <p>The creation date and time of the cluster.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>The date and time when the cluster was ready to run steps.</p>
    pub fn ready_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.ready_date_time.as_ref()
    }
    /// <p>The date and time when the cluster was terminated.</p>
    pub fn end_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.end_date_time.as_ref()
    }
}
impl ClusterTimeline {
    /// Creates a new builder-style object to manufacture [`ClusterTimeline`](crate::types::ClusterTimeline).
    pub fn builder() -> crate::types::builders::ClusterTimelineBuilder {
        crate::types::builders::ClusterTimelineBuilder::default()
    }
    /// Converts this [`ClusterTimeline`](crate::types::ClusterTimeline) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ClusterTimelineBuilder {
        crate::types::builders::ClusterTimelineBuilder {
            creation_date_time: self.creation_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
        }
    }
}

/// A builder for [`ClusterTimeline`](crate::types::ClusterTimeline).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ClusterTimelineBuilder {
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) ready_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) end_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl ClusterTimelineBuilder {
    /// <p>The creation date and time of the cluster.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The creation date and time of the cluster.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The creation date and time of the cluster.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>The date and time when the cluster was ready to run steps.</p>
    pub fn ready_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.ready_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the cluster was ready to run steps.</p>
    pub fn set_ready_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.ready_date_time = input;
        self
    }
    /// <p>The date and time when the cluster was ready to run steps.</p>
    pub fn get_ready_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.ready_date_time
    }
    /// <p>The date and time when the cluster was terminated.</p>
    pub fn end_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.end_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the cluster was terminated.</p>
    pub fn set_end_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.end_date_time = input;
        self
    }
    /// <p>The date and time when the cluster was terminated.</p>
    pub fn get_end_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.end_date_time
    }
    /// Consumes the builder and constructs a [`ClusterTimeline`](crate::types::ClusterTimeline).
    pub fn build(self) -> crate::types::ClusterTimeline {
        crate::types::ClusterTimeline {
            creation_date_time: self.creation_date_time,
            ready_date_time: self.ready_date_time,
            end_date_time: self.end_date_time,
        }
    }
}
