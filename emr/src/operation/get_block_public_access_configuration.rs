/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Returns the Amazon EMR block public access configuration for your AWS account in the current Region.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetBlockPublicAccessConfiguration;
impl GetBlockPublicAccessConfiguration {
    /// Creates a new `GetBlockPublicAccessConfiguration`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for GetBlockPublicAccessConfiguration {
    const NAME: &'static str = "GetBlockPublicAccessConfiguration";

    type Input = crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput;
    type Output = crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput;
    type Error = crate::Error;
}

pub use crate::operation::get_block_public_access_configuration::_get_block_public_access_configuration_input::GetBlockPublicAccessConfigurationInput;

pub use crate::operation::get_block_public_access_configuration::_get_block_public_access_configuration_output::GetBlockPublicAccessConfigurationOutput;

mod _get_block_public_access_configuration_input;

mod _get_block_public_access_configuration_output;

/// Builders
pub mod builders {
    pub use crate::operation::get_block_public_access_configuration::_get_block_public_access_configuration_input::GetBlockPublicAccessConfigurationInputBuilder;

    pub use crate::operation::get_block_public_access_configuration::_get_block_public_access_configuration_output::GetBlockPublicAccessConfigurationOutputBuilder;
}
