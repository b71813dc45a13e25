/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>DeleteSecurityConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DeleteSecurityConfigurationOutput {}
impl DeleteSecurityConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DeleteSecurityConfigurationOutput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput).
    pub fn builder() -> crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationOutputBuilder {
        crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationOutputBuilder::default()
    }
    /// Converts this [`DeleteSecurityConfigurationOutput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationOutputBuilder {
        crate::operation::delete_security_configuration::builders::DeleteSecurityConfigurationOutputBuilder {}
    }
}

/// A builder for [`DeleteSecurityConfigurationOutput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DeleteSecurityConfigurationOutputBuilder {}
impl DeleteSecurityConfigurationOutputBuilder {
    /// Consumes the builder and constructs a [`DeleteSecurityConfigurationOutput`](crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput).
    pub fn build(self) -> crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput {
        crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput {}
    }
}
