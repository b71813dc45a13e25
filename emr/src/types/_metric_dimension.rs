/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A CloudWatch dimension, which is specified using a <code>key</code> (known as a <code>Name</code> in CloudWatch), <code>value</code> pair. By default, Amazon EMR uses one dimension whose key is <code>JobFlowID</code> and value is a variable representing the cluster ID.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct MetricDimension {
    /// <p>The dimension name.</p>
    pub key: ::std::option::Option<::std::string::String>,
    /// <p>The dimension value.</p>
    pub value: ::std::option::Option<::std::string::String>,
}
impl MetricDimension {
    /// <p>The dimension name.</p>
    pub fn key(&self) -> ::std::option::Option<&str> {
        self.key.as_deref()
    }
    /// <p>The dimension value.</p>
    pub fn value(&self) -> ::std::option::Option<&str> {
        self.value.as_deref()
    }
}
impl MetricDimension {
    /// Creates a new builder-style object to manufacture [`MetricDimension`](crate::types::MetricDimension).
    pub fn builder() -> crate::types::builders::MetricDimensionBuilder {
        crate::types::builders::MetricDimensionBuilder::default()
    }
    /// Converts this [`MetricDimension`](crate::types::MetricDimension) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::MetricDimensionBuilder {
        crate::types::builders::MetricDimensionBuilder {
            key: self.key,
            value: self.value,
        }
    }
}

/// A builder for [`MetricDimension`](crate::types::MetricDimension).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct MetricDimensionBuilder {
    pub(crate) key: ::std::option::Option<::std::string::String>,
    pub(crate) value: ::std::option::Option<::std::string::String>,
}
impl MetricDimensionBuilder {
    /// <p>The dimension name.</p>
    pub fn key(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.key = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The dimension name.</p>
    pub fn set_key(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.key = input;
        self
    }
    /// <p>The dimension name.</p>
    pub fn get_key(&self) -> &::std::option::Option<::std::string::String> {
        &self.key
    }
    /// <p>The dimension value.</p>
    pub fn value(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.value = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The dimension value.</p>
    pub fn set_value(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.value = input;
        self
    }
    /// <p>The dimension value.</p>
    pub fn get_value(&self) -> &::std::option::Option<::std::string::String> {
        &self.value
    }
    /// Consumes the builder and constructs a [`MetricDimension`](crate::types::MetricDimension).
    pub fn build(self) -> crate::types::MetricDimension {
        crate::types::MetricDimension {
            key: self.key,
            value: self.value,
        }
    }
}
