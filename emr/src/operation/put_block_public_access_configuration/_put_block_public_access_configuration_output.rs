/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>PutBlockPublicAccessConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct PutBlockPublicAccessConfigurationOutput {}
impl PutBlockPublicAccessConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`PutBlockPublicAccessConfigurationOutput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput).
    pub fn builder() -> crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationOutputBuilder {
        crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationOutputBuilder::default()
    }
    /// Converts this [`PutBlockPublicAccessConfigurationOutput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationOutputBuilder {
        crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationOutputBuilder {}
    }
}

/// A builder for [`PutBlockPublicAccessConfigurationOutput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutBlockPublicAccessConfigurationOutputBuilder {}
impl PutBlockPublicAccessConfigurationOutputBuilder {
    /// Consumes the builder and constructs a [`PutBlockPublicAccessConfigurationOutput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput).
    pub fn build(self) -> crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput {
        crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationOutput {}
    }
}
