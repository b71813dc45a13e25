/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Configuration of the script to run during a bootstrap action.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ScriptBootstrapActionConfig {
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub path: ::std::option::Option<::std::string::String>,
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    pub args: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl ScriptBootstrapActionConfig {
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub fn path(&self) -> ::std::option::Option<&str> {
        self.path.as_deref()
    }
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.args.is_none()</code>.
    pub fn args(&self) -> &[::std::string::String] {
        self.args.as_deref().unwrap_or_default()
    }
}
impl ScriptBootstrapActionConfig {
    /// Creates a new builder-style object to manufacture [`ScriptBootstrapActionConfig`](crate::types::ScriptBootstrapActionConfig).
    pub fn builder() -> crate::types::builders::ScriptBootstrapActionConfigBuilder {
        crate::types::builders::ScriptBootstrapActionConfigBuilder::default()
    }
    /// Converts this [`ScriptBootstrapActionConfig`](crate::types::ScriptBootstrapActionConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ScriptBootstrapActionConfigBuilder {
        crate::types::builders::ScriptBootstrapActionConfigBuilder {
            path: self.path,
            args: self.args,
        }
    }
}

/// A builder for [`ScriptBootstrapActionConfig`](crate::types::ScriptBootstrapActionConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ScriptBootstrapActionConfigBuilder {
    pub(crate) path: ::std::option::Option<::std::string::String>,
    pub(crate) args: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl ScriptBootstrapActionConfigBuilder {
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub fn path(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.path = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub fn set_path(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.path = input;
        self
    }
    /// <p>Location of the script to run during a bootstrap action. Can be either a location in Amazon S3 or on a local file system.</p>
    pub fn get_path(&self) -> &::std::option::Option<::std::string::String> {
        &self.path
    }
    /// Appends an item to `args`.
    ///
    /// To override the contents of this collection use [`set_args`](Self::set_args).
    ///
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    pub fn args(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.args.unwrap_or_default();
        v.push(input.into());
        self.args = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    pub fn set_args(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.args = input;
        self
    }
    /// <p>A list of command line arguments to pass to the bootstrap action script.</p>
    pub fn get_args(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.args
    }
    /// Consumes the builder and constructs a [`ScriptBootstrapActionConfig`](crate::types::ScriptBootstrapActionConfig).
    pub fn build(self) -> crate::types::ScriptBootstrapActionConfig {
        crate::types::ScriptBootstrapActionConfig {
            path: self.path,
            args: self.args,
        }
    }
}
