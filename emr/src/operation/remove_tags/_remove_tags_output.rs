/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>RemoveTags</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveTagsOutput {}
impl RemoveTagsOutput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsOutput`](crate::operation::remove_tags::RemoveTagsOutput).
    pub fn builder() -> crate::operation::remove_tags::builders::RemoveTagsOutputBuilder {
        crate::operation::remove_tags::builders::RemoveTagsOutputBuilder::default()
    }
    /// Converts this [`RemoveTagsOutput`](crate::operation::remove_tags::RemoveTagsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_tags::builders::RemoveTagsOutputBuilder {
        crate::operation::remove_tags::builders::RemoveTagsOutputBuilder {}
    }
}

/// A builder for [`RemoveTagsOutput`](crate::operation::remove_tags::RemoveTagsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveTagsOutputBuilder {}
impl RemoveTagsOutputBuilder {
    /// Consumes the builder and constructs a [`RemoveTagsOutput`](crate::operation::remove_tags::RemoveTagsOutput).
    pub fn build(self) -> crate::operation::remove_tags::RemoveTagsOutput {
        crate::operation::remove_tags::RemoveTagsOutput {}
    }
}
