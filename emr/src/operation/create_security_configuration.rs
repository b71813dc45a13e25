/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Creates a security configuration, which is stored in the service and can be specified when a cluster is created.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CreateSecurityConfiguration;
impl CreateSecurityConfiguration {
    /// Creates a new `CreateSecurityConfiguration`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for CreateSecurityConfiguration {
    const NAME: &'static str = "CreateSecurityConfiguration";

    type Input = crate::operation::create_security_configuration::CreateSecurityConfigurationInput;
    type Output = crate::operation::create_security_configuration::CreateSecurityConfigurationOutput;
    type Error = crate::Error;
}

pub use crate::operation::create_security_configuration::_create_security_configuration_input::CreateSecurityConfigurationInput;

pub use crate::operation::create_security_configuration::_create_security_configuration_output::CreateSecurityConfigurationOutput;

mod _create_security_configuration_input;

mod _create_security_configuration_output;

/// Builders
pub mod builders {
    pub use crate::operation::create_security_configuration::_create_security_configuration_input::CreateSecurityConfigurationInputBuilder;

    pub use crate::operation::create_security_configuration::_create_security_configuration_output::CreateSecurityConfigurationOutputBuilder;
}
