/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>CreateSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct CreateSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The date and time the security configuration was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl CreateSecurityConfigurationOutput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
}
impl CreateSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`CreateSecurityConfigurationOutput`](crate::operation::create_security_configuration::CreateSecurityConfigurationOutput).
    pub fn builder() -> crate::operation::create_security_configuration::builders::CreateSecurityConfigurationOutputBuilder {
        crate::operation::create_security_configuration::builders::CreateSecurityConfigurationOutputBuilder::default()
    }
    /// Converts this [`CreateSecurityConfigurationOutput`](crate::operation::create_security_configuration::CreateSecurityConfigurationOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::create_security_configuration::builders::CreateSecurityConfigurationOutputBuilder {
        crate::operation::create_security_configuration::builders::CreateSecurityConfigurationOutputBuilder {
            name: self.name,
            creation_date_time: self.creation_date_time,
        }
    }
}

/// A builder for [`CreateSecurityConfigurationOutput`](crate::operation::create_security_configuration::CreateSecurityConfigurationOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSecurityConfigurationOutputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl CreateSecurityConfigurationOutputBuilder {
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
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// Consumes the builder and constructs a [`CreateSecurityConfigurationOutput`](crate::operation::create_security_configuration::CreateSecurityConfigurationOutput).
    pub fn build(self) -> crate::operation::create_security_configuration::CreateSecurityConfigurationOutput {
        crate::operation::create_security_configuration::CreateSecurityConfigurationOutput {
            name: self.name,
            creation_date_time: self.creation_date_time,
        }
    }
}
