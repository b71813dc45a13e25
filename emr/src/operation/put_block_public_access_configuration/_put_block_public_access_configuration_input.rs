/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>PutBlockPublicAccessConfiguration</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct PutBlockPublicAccessConfigurationInput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub block_public_access_configuration: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>,
}
impl PutBlockPublicAccessConfigurationInput {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn block_public_access_configuration(&self) -> ::std::option::Option<&crate::types::BlockPublicAccessConfiguration> {
        self.block_public_access_configuration.as_ref()
    }
}
impl PutBlockPublicAccessConfigurationInput {
    /// Creates a new builder-style object to manufacture [`PutBlockPublicAccessConfigurationInput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput).
    pub fn builder() -> crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationInputBuilder {
        crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationInputBuilder::default()
    }
    /// Converts this [`PutBlockPublicAccessConfigurationInput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationInputBuilder {
        crate::operation::put_block_public_access_configuration::builders::PutBlockPublicAccessConfigurationInputBuilder {
            block_public_access_configuration: self.block_public_access_configuration,
        }
    }
}

/// A builder for [`PutBlockPublicAccessConfigurationInput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutBlockPublicAccessConfigurationInputBuilder {
    pub(crate) block_public_access_configuration: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>,
}
impl PutBlockPublicAccessConfigurationInputBuilder {
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn block_public_access_configuration(mut self, input: crate::types::BlockPublicAccessConfiguration) -> Self {
        self.block_public_access_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn set_block_public_access_configuration(mut self, input: ::std::option::Option<crate::types::BlockPublicAccessConfiguration>) -> Self {
        self.block_public_access_configuration = input;
        self
    }
    /// <p>A configuration for Amazon EMR block public access. The configuration applies to all clusters created in your account for the current Region. The configuration specifies whether block public access is enabled. If block public access is enabled, security groups associated with the cluster cannot have rules that allow inbound traffic from 0.0.0.0/0 or ::/0 on a port, unless the port is specified as an exception using <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn get_block_public_access_configuration(&self) -> &::std::option::Option<crate::types::BlockPublicAccessConfiguration> {
        &self.block_public_access_configuration
    }
    /// Consumes the builder and constructs a [`PutBlockPublicAccessConfigurationInput`](crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput).
    pub fn build(self) -> crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput {
        crate::operation::put_block_public_access_configuration::PutBlockPublicAccessConfigurationInput {
            block_public_access_configuration: self.block_public_access_configuration,
        }
    }
}
