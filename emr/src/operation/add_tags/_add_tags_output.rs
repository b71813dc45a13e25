/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>AddTags</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AddTagsOutput {}
impl AddTagsOutput {
    /// Creates a new builder-style object to manufacture [`AddTagsOutput`](crate::operation::add_tags::AddTagsOutput).
    pub fn builder() -> crate::operation::add_tags::builders::AddTagsOutputBuilder {
        crate::operation::add_tags::builders::AddTagsOutputBuilder::default()
    }
    /// Converts this [`AddTagsOutput`](crate::operation::add_tags::AddTagsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_tags::builders::AddTagsOutputBuilder {
        crate::operation::add_tags::builders::AddTagsOutputBuilder {}
    }
}

/// A builder for [`AddTagsOutput`](crate::operation::add_tags::AddTagsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddTagsOutputBuilder {}
impl AddTagsOutputBuilder {
    /// Consumes the builder and constructs a [`AddTagsOutput`](crate::operation::add_tags::AddTagsOutput).
    pub fn build(self) -> crate::operation::add_tags::AddTagsOutput {
        crate::operation::add_tags::AddTagsOutput {}
    }
}
