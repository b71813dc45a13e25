/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The list of supported product configurations which allow user-supplied arguments. EMR accepts these arguments and forwards them to the corresponding installation script as bootstrap action arguments.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SupportedProductConfig {
    /// <p>The name of the product configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The list of user-supplied arguments.</p>
    pub args: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl SupportedProductConfig {
    /// <p>The name of the product configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The list of user-supplied arguments.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.args.is_none()</code>.
    pub fn args(&self) -> &[::std::string::String] {
        self.args.as_deref().unwrap_or_default()
    }
}
impl SupportedProductConfig {
    /// Creates a new builder-style object to manufacture [`SupportedProductConfig`](crate::types::SupportedProductConfig).
    pub fn builder() -> crate::types::builders::SupportedProductConfigBuilder {
        crate::types::builders::SupportedProductConfigBuilder::default()
    }
    /// Converts this [`SupportedProductConfig`](crate::types::SupportedProductConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::SupportedProductConfigBuilder {
        crate::types::builders::SupportedProductConfigBuilder {
            name: self.name,
            args: self.args,
        }
    }
}

/// A builder for [`SupportedProductConfig`](crate::types::SupportedProductConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SupportedProductConfigBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) args: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl SupportedProductConfigBuilder {
    /// <p>The name of the product configuration.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the product configuration.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the product configuration.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Appends an item to `args`.
    ///
    /// To override the contents of this collection use [`set_args`](Self::set_args).
    ///
    /// <p>The list of user-supplied arguments.</p>
    pub fn args(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.args.unwrap_or_default();
        v.push(input.into());
        self.args = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of user-supplied arguments.</p>
    pub fn set_args(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.args = input;
        self
    }
    /// <p>The list of user-supplied arguments.</p>
    pub fn get_args(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.args
    }
    /// Consumes the builder and constructs a [`SupportedProductConfig`](crate::types::SupportedProductConfig).
    pub fn build(self) -> crate::types::SupportedProductConfig {
        crate::types::SupportedProductConfig {
            name: self.name,
            args: self.args,
        }
    }
}
