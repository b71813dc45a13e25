/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>GetBlockPublicAccessConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct GetBlockPublicAccessConfigurationInput {}
impl GetBlockPublicAccessConfigurationInput {
    /// Creates a new builder-style object to manufacture [`GetBlockPublicAccessConfigurationInput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput).
    pub fn builder() -> crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationInputBuilder {
        crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationInputBuilder::default()
    }
    /// Converts this [`GetBlockPublicAccessConfigurationInput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationInputBuilder {
        crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationInputBuilder {}
    }
}

/// A builder for [`GetBlockPublicAccessConfigurationInput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetBlockPublicAccessConfigurationInputBuilder {}
impl GetBlockPublicAccessConfigurationInputBuilder {
    /// Consumes the builder and constructs a [`GetBlockPublicAccessConfigurationInput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput).
    pub fn build(self) -> crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput {
        crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationInput {}
    }
}
