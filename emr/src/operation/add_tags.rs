/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Adds tags to an Amazon EMR resource. Tags make it easier to associate clusters in various ways, such as grouping clusters to track your Amazon EMR resource allocation costs.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AddTags;
impl AddTags {
    /// Creates a new `AddTags`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for AddTags {
    const NAME: &'static str = "AddTags";

    type Input = crate::operation::add_tags::AddTagsInput;
    type Output = crate::operation::add_tags::AddTagsOutput;
    type Error = crate::Error;
}

pub use crate::operation::add_tags::_add_tags_input::AddTagsInput;

pub use crate::operation::add_tags::_add_tags_output::AddTagsOutput;

mod _add_tags_input;

mod _add_tags_output;

/// Builders
pub mod builders {
    pub use crate::operation::add_tags::_add_tags_input::AddTagsInputBuilder;

    pub use crate::operation::add_tags::_add_tags_output::AddTagsOutputBuilder;
}
