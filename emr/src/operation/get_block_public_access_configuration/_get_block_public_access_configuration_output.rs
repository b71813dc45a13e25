/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>GetBlockPublicAccessConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct GetBlockPublicAccessConfigurationOutput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region.</p>
    pub block_public_access_configuration: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>,
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created.</p>
    pub block_public_access_configuration_metadata: ::std::option::Option<crate::types::BlockPublicAccessConfigurationMetadata>,
}
impl GetBlockPublicAccessConfigurationOutput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region.</p>
    pub fn block_public_access_configuration(&self) -> ::std::option::Option<&crate::types::BlockPublicAccessConfiguration> {
        self.block_public_access_configuration.as_ref()
    }
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created.</p>
    pub fn block_public_access_configuration_metadata(&self) -> ::std::option::Option<&crate::types::BlockPublicAccessConfigurationMetadata> {
        self.block_public_access_configuration_metadata.as_ref()
    }
}
impl GetBlockPublicAccessConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`GetBlockPublicAccessConfigurationOutput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput).
    pub fn builder() -> crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationOutputBuilder {
        crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationOutputBuilder::default()
    }
    /// Converts this [`GetBlockPublicAccessConfigurationOutput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationOutputBuilder {
        crate::operation::get_block_public_access_configuration::builders::GetBlockPublicAccessConfigurationOutputBuilder {
            block_public_access_configuration: self.block_public_access_configuration,
            block_public_access_configuration_metadata: self.block_public_access_configuration_metadata,
        }
    }
}

/// A builder for [`GetBlockPublicAccessConfigurationOutput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetBlockPublicAccessConfigurationOutputBuilder {
    pub(crate) block_public_access_configuration: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>,
    pub(crate) block_public_access_configuration_metadata: ::std::option::Option<crate::types::BlockPublicAccessConfigurationMetadata>,
}
impl GetBlockPublicAccessConfigurationOutputBuilder {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region.</p>
    pub fn block_public_access_configuration(mut self, input: crate::types::BlockPublicAccessConfiguration) -> Self {
        self.block_public_access_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region.</p>
    pub fn set_block_public_access_configuration(mut self, input: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>) -> Self {
        self.block_public_access_configuration = input;
        self
    }
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region.</p>
    pub fn get_block_public_access_configuration(&self) -> &::std::option::Option<crate::types::BlockPublicAccessConfiguration> {
        &self.block_public_access_configuration
    }
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created.</p>
    pub fn block_public_access_configuration_metadata(mut self, input: crate::types::BlockPublicAccessConfigurationMetadata) -> Self {
        self.block_public_access_configuration_metadata = ::std::option::Option::Some(input);
        self
    }
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created.</p>
    pub fn set_block_public_access_configuration_metadata(mut self, input: ::std::option::Option<crate::types::BlockPublicAccessConfigurationMetadata>) -> Self {
        self.block_public_access_configuration_metadata = input;
        self
    }
    /// <p>Properties that describe the AWS principal that created the <code>BlockPublicAccessConfiguration</code> using the <code>PutBlockPublicAccessConfiguration</code> action as well as the date and time that the configuration was created.</p>
    pub fn get_block_public_access_configuration_metadata(&self) -> &::std::option::Option<crate::types::BlockPublicAccessConfigurationMetadata> {
        &self.block_public_access_configuration_metadata
    }
    /// Consumes the builder and constructs a [`GetBlockPublicAccessConfigurationOutput`](crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput).
    pub fn build(self) -> crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput {
        crate::operation::get_block_public_access_configuration::GetBlockPublicAccessConfigurationOutput {
            block_public_access_configuration: self.block_public_access_configuration,
            block_public_access_configuration_metadata: self.block_public_access_configuration_metadata,
        }
    }
}
