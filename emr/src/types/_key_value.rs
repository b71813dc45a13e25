/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A key-value pair.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct KeyValue {
    /// <p>The unique identifier of a key-value pair.</p>
    pub key: ::std::option::Option<::std::string::String>,
    /// <p>The value part of the identified key.</p>
    pub value: ::std::option::Option<::std::string::String>,
}
impl KeyValue {
    /// <p>The unique identifier of a key-value pair.</p>
    pub fn key(&self) -> ::std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>The value part of the identified key.</p>
    pub fn value(&self) -> ::std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl KeyValue {
    /// Creates a new builder-style object to manufacture [`KeyValue`](crate::types::KeyValue).
    pub fn builder() -> crate::types::builders::KeyValueBuilder {
        crate::types::builders::KeyValueBuilder::default()
    }
    /// Converts this [`KeyValue`](crate::types::KeyValue) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::KeyValueBuilder {
        crate::types::builders::KeyValueBuilder {
            key: self.key,
            value: self.value,
        }
    }
}

/// A builder for [`KeyValue`](crate::types::KeyValue).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct KeyValueBuilder {
    pub(crate) key: ::std::option::Option<::std::string::String>,
    pub(crate) value: ::std::option::Option<::std::string::String>,
}
impl KeyValueBuilder {
    /// <p>The unique identifier of a key-value pair.</p>
    pub fn key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of a key-value pair.</p>
    pub fn set_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.key = input;
        self
    }
    /// <p>The unique identifier of a key-value pair.</p>
    pub fn get_key(&self) -> &::std::option::Option<::std::string::String> {
        &self.key
    }
    /// <p>The value part of the identified key.</p>
    pub fn value(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.value = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The value part of the identified key.</p>
    pub fn set_value(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.value = input;
        self
    }
    /// <p>The value part of the identified key.</p>
    pub fn get_value(&self) -> &::std::option::Option<::std::string::String> {
        &self.value
    }
    /// Consumes the builder and constructs a [`KeyValue`](crate::types::KeyValue).
    pub fn build(self) -> crate::types::KeyValue {
        crate::types::KeyValue {
            key: self.key,
            value: self.value,
        }
    }
}
