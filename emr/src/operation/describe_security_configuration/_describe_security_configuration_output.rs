/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>DescribeSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DescribeSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The security configuration details in JSON format.</p>
    pub security_configuration: ::std::option::Option<::std::string::String>,
    /// <p>The date and time the security configuration was created</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl DescribeSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The security configuration details in JSON format.</p>
    pub fn security_configuration(&self) -> ::std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
    /// <p>The date and time the security configuration was created</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
}
impl DescribeSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSecurityConfigurationOutput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput).
    pub fn builder() -> crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationOutputBuilder {
        crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationOutputBuilder::default()
    }
    /// Converts this [`DescribeSecurityConfigurationOutput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationOutputBuilder {
        crate::operation::describe_security_configuration::builders::DescribeSecurityConfigurationOutputBuilder {
            name: self.name,
            security_configuration: self.security_configuration,
            creation_date_time: self.creation_date_time,
        }
    }
}

/// A builder for [`DescribeSecurityConfigurationOutput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeSecurityConfigurationOutputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) security_configuration: ::std::option::Option<::std::string::String>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl DescribeSecurityConfigurationOutputBuilder {
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
    /// <p>The security configuration details in JSON format.</p>
    pub fn security_configuration(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.security_configuration = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The security configuration details in JSON format.</p>
    pub fn set_security_configuration(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.security_configuration = input;
        self
    }
    /// <p>The security configuration details in JSON format.</p>
    pub fn get_security_configuration(&self) -> &::std::option::Option<::std::string::String> {
        &self.security_configuration
    }
    /// <p>The date and time the security configuration was created</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time the security configuration was created</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time the security configuration was created</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// Consumes the builder and constructs a [`DescribeSecurityConfigurationOutput`](crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput).
    pub fn build(self) -> crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput {
        crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput {
            name: self.name,
            security_configuration: self.security_configuration,
            creation_date_time: self.creation_date_time,
        }
    }
}
