/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>DeleteSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DeleteSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
}
impl DeleteSecurityConfigurationInput {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
}
impl DeleteSecurityConfigurationInput {
    /// Creates a new builder-style object to manufacture [`DeleteSecurityConfigurationInput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput).
    pub fn builder() -> crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationInputBuilder {
        crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationInputBuilder::default()
    }
    /// Converts this [`DeleteSecurityConfigurationInput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationInputBuilder {
        crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationInputBuilder {
            name: self.name,
        }
    }
}

/// A builder for [`DeleteSecurityConfigurationInput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSecurityConfigurationInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
}
impl DeleteSecurityConfigurationInputBuilder {
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
    /// Consumes the builder and constructs a [`DeleteSecurityConfigurationInput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput).
    pub fn build(self) -> crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput {
        crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput {
            name: self.name,
        }
    }
}
