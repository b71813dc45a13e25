/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Creates or updates an Amazon EMR block public access configuration for your AWS account in the current Region.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutBlockPublicAccessConfiguration;
impl PutBlockPublicAccessConfiguration {
    /// Creates a new `PutBlockPublicAccessConfiguration`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for PutBlockPublicAccessConfiguration {
    const NAME: &'static str = "PutBlockPublicAccessConfiguration";

    type Input = crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput;
    type Output = crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput;
    type Error = crate::Error;
}

pub use crate::operation::put_block_public_access_configuration::_put_block_public_access_configuration_input::PutBlockPublicAccessConfigurationInput;

pub use crate::operation::put_block_public_access_configuration::_put_block_public_access_configuration_output::PutBlockPublicAccessConfigurationOutput;

mod _put_block_public_access_configuration_input;

mod _put_block_public_access_configuration_output;

/// Builders
pub mod builders {
    pub use crate::operation::put_block_public_access_configuration::_put_block_public_access_configuration_input::PutBlockPublicAccessConfigurationInputBuilder;

    pub use crate::operation::put_block_public_access_configuration::_put_block_public_access_configuration_output::PutBlockPublicAccessConfigurationOutputBuilder;
}
