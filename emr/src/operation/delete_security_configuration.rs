/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Deletes a security configuration.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteSecurityConfiguration;
impl DeleteSecurityConfiguration {
    /// Creates a new `DeleteSecurityConfiguration`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for DeleteSecurityConfiguration {
    const NAME: &'static str = "DeleteSecurityConfiguration";

    type Input = crate::operation::delete_security_configuration::DeleteSecurityConfigurationInput;
    type Output = crate::operation::delete_security_configuration::DeleteSecurityConfigurationOutput;
    type Error = crate::Error;
}

pub use crate::operation::delete_security_configuration::_delete_security_configuration_input::DeleteSecurityConfigurationInput;

pub use crate::operation::delete_security_configuration::_delete_security_configuration_output::DeleteSecurityConfigurationOutput;

mod _delete_security_configuration_input;

mod _delete_security_configuration_output;

/// Builders
pub mod builders {
    pub use crate::operation::delete_security_configuration::_delete_security_configuration_input::DeleteSecurityConfigurationInputBuilder;

    pub use crate::operation::delete_security_configuration::_delete_security_configuration_output::DeleteSecurityConfigurationOutputBuilder;
}
