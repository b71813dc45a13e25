/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>RemoveTags</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveTagsInput {
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub resource_id: ::std::option::Option<::std::string::String>,
    /// <p>A list of tag keys to remove from a resource.</p>
    pub tag_keys: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl RemoveTagsInput {
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub fn resource_id(&self) -> ::std::option::Option<&str> {
        self.resource_id.as_deref()
    }
    /// <p>A list of tag keys to remove from a resource.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.tag_keys.is_none()</code>.
    pub fn tag_keys(&self) -> &[::std::string::String] {
        self.tag_keys.as_deref().unwrap_or_default()
    }
}
impl RemoveTagsInput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsInput`](crate::operation::remove_tags::RemoveTagsInput).
    pub fn builder() -> crate::operation::remove_tags::builders::RemoveTagsInputBuilder {
        crate::operation::remove_tags::builders::RemoveTagsInputBuilder::default()
    }
    /// Converts this [`RemoveTagsInput`](crate::operation::remove_tags::RemoveTagsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_tags::builders::RemoveTagsInputBuilder {
        crate::operation::remove_tags::builders::RemoveTagsInputBuilder {
            resource_id: self.resource_id,
            tag_keys: self.tag_keys,
        }
    }
}

/// A builder for [`RemoveTagsInput`](crate::operation::remove_tags::RemoveTagsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveTagsInputBuilder {
    pub(crate) resource_id: ::std::option::Option<::std::string::String>,
    pub(crate) tag_keys: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl RemoveTagsInputBuilder {
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub fn resource_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.resource_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub fn set_resource_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.resource_id = input;
        self
    }
    /// <p>The Amazon EMR resource identifier from which tags will be removed. This value must be a cluster identifier.</p>
    pub fn get_resource_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.resource_id
    }
    /// Appends an item to `tag_keys`.
    ///
    /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
    ///
    /// <p>A list of tag keys to remove from a resource.</p>
    pub fn tag_keys(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.tag_keys.unwrap_or_default();
        v.push(input.into());
        self.tag_keys = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of tag keys to remove from a resource.</p>
    pub fn set_tag_keys(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.tag_keys = input;
        self
    }
    /// <p>A list of tag keys to remove from a resource.</p>
    pub fn get_tag_keys(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.tag_keys
    }
    /// Consumes the builder and constructs a [`RemoveTagsInput`](crate::operation::remove_tags::RemoveTagsInput).
    pub fn build(self) -> crate::operation::remove_tags::RemoveTagsInput {
        crate::operation::remove_tags::RemoveTagsInput {
            resource_id: self.resource_id,
            tag_keys: self.tag_keys,
        }
    }
}
