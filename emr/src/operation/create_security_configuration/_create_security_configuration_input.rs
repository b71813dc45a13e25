/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>CreateSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct CreateSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The security configuration details in JSON format.</p>
    pub security_configuration: ::std::option::Option<::std::string::String>,
}
impl CreateSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The security configuration details in JSON format.</p>
    pub fn security_configuration(&self) -> ::std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
}
impl CreateSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`CreateSecurityConfigurationInput`](crate::operation::create_security_configuration::CreateSecurityConfigurationInput).
    pub fn builder() -> crate::operation::create_security_configuration::builders::CreateSecurityConfigurationInputBuilder {
        crate::operation::create_security_configuration::builders::CreateSecurityConfigurationInputBuilder::default()
    }
    /// Converts this [`CreateSecurityConfigurationInput`](crate::operation::create_security_configuration::CreateSecurityConfigurationInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::create_security_configuration::builders::CreateSecurityConfigurationInputBuilder {
        crate::operation::create_security_configuration::builders::CreateSecurityConfigurationInputBuilder {
            name: self.name,
            security_configuration: self.security_configuration,
        }
    }
}

/// A builder for [`CreateSecurityConfigurationInput`](crate::operation::create_security_configuration::CreateSecurityConfigurationInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CreateSecurityConfigurationInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) security_configuration: ::std::option::Option<::std::string::String>,
}
impl CreateSecurityConfigurationInputBuilder {
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
    /// Consumes the builder and constructs a [`CreateSecurityConfigurationInput`](crate::operation::create_security_configuration::CreateSecurityConfigurationInput).
    pub fn build(self) -> crate::operation::create_security_configuration::CreateSecurityConfigurationInput {
        crate::operation::create_security_configuration::CreateSecurityConfigurationInput {
            name: self.name,
            security_configuration: self.security_configuration,
        }
    }
}
