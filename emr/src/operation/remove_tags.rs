/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Removes tags from an Amazon EMR resource. Tags make it easier to associate clusters in various ways, such as grouping clusters to track your Amazon EMR resource allocation costs.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct RemoveTags;
impl RemoveTags {
    /// Creates a new `RemoveTags`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for RemoveTags {
    const NAME: &'static str = "RemoveTags";

    type Input = crate::operation::remove_tags::RemoveTagsInput;
    type Output = crate::operation::remove_tags::RemoveTagsOutput;
    type Error = crate::Error;
}

pub use crate::operation::remove_tags::_remove_tags_input::RemoveTagsInput;

pub use crate::operation::remove_tags::_remove_tags_output::RemoveTagsOutput;

mod _remove_tags_input;

mod _remove_tags_output;

/// Builders
pub mod builders {
    pub use crate::operation::remove_tags::_remove_tags_input::RemoveTagsInputBuilder;

    pub use crate::operation::remove_tags::_remove_tags_output::RemoveTagsOutputBuilder;
}
