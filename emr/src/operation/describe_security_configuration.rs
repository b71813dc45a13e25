/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides the details of a security configuration by returning the configuration JSON.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeSecurityConfiguration;
impl DescribeSecurityConfiguration {
    /// Creates a new `DescribeSecurityConfiguration`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for DescribeSecurityConfiguration {
    const NAME: &'static str = "DescribeSecurityConfiguration";

    type Input = crate::operation::describe_security_configuration::DescribeSecurityConfigurationInput;
    type Output = crate::operation::describe_security_configuration::DescribeSecurityConfigurationOutput;
    type Error = crate::Error;
}

pub use crate::operation::describe_security_configuration::_describe_security_configuration_input::DescribeSecurityConfigurationInput;

pub use crate::operation::describe_security_configuration::_describe_security_configuration_output::DescribeSecurityConfigurationOutput;

mod _describe_security_configuration_input;

mod _describe_security_configuration_output;

/// Builders
pub mod builders {
    pub use crate::operation::describe_security_configuration::_describe_security_configuration_input::DescribeSecurityConfigurationInputBuilder;

    pub use crate::operation::describe_security_configuration::_describe_security_configuration_output::DescribeSecurityConfigurationOutputBuilder;
}
