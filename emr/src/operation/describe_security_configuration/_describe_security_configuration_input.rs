/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>DescribeSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DescribeSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl DescribeSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl DescribeSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityConfigurationInput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput).
    pub fn builder() -> crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationInputBuilder {
        crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationInputBuilder::default()
    }
    /// Converts this [`DescribeSecurityConfigurationInput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationInputBuilder {
        crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationInputBuilder {
            name: self.name,
        }
    }
}

/// A builder for [`DescribeSecurityConfigurationInput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeSecurityConfigurationInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl DescribeSecurityConfigurationInputBuilder {
    /// <p>The name of the security configuration.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the security configuration.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the security configuration.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// Consumes the builder and constructs a [`DescribeSecurityConfigurationInput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput).
    pub fn build(self) -> crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput {
        crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput {
            name: self.name,
        }
    }
}
