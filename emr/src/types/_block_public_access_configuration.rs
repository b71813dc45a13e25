/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The block public access configuration for the account in the current Region.</p>
/// <p>When enabled, a cluster cannot be created if it has a security group with an inbound rule that allows public access on a port outside the permitted ranges.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct BlockPublicAccessConfiguration {
    /// <p>Whether public access is blocked for security group rules outside <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub block_public_security_group_rules: ::std::option::Option<bool>,
    /// <p>The port ranges that may stay open to public access. Port 22 is included by default.</p>
    pub permitted_public_security_group_rule_ranges: ::std::option::Option<::std::vec::Vec<crate::types::PortRange>>,
}
impl BlockPublicAccessConfiguration {
    /// <p>Whether public access is blocked for security group rules outside <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn block_public_security_group_rules(&self) -> ::std::option::Option<bool> {
        self.block_public_security_group_rules
    }
    /// <p>The port ranges that may stay open to public access. Port 22 is included by default.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.permitted_public_security_group_rule_ranges.is_none()</code>.
    pub fn permitted_public_security_group_rule_ranges(&self) -> &[crate::types::PortRange] {
        self.permitted_public_security_group_rule_ranges.as_deref().unwrap_or_default()
    }
}
impl BlockPublicAccessConfiguration {
    /// Creates a new builder-style object to manufacture [`BlockPublicAccessConfiguration`](crate::types::BlockPublicAccessConfiguration).
    pub fn builder() -> crate::types::builders::BlockPublicAccessConfigurationBuilder {
        crate::types::builders::BlockPublicAccessConfigurationBuilder::default()
    }
    /// Converts this [`BlockPublicAccessConfiguration`](crate::types::BlockPublicAccessConfiguration) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::BlockPublicAccessConfigurationBuilder {
        crate::types::builders::BlockPublicAccessConfigurationBuilder {
            block_public_security_group_rules: self.block_public_security_group_rules,
            permitted_public_security_group_rule_ranges: self.permitted_public_security_group_rule_ranges,
        }
    }
}

/// A builder for [`BlockPublicAccessConfiguration`](crate::types::BlockPublicAccessConfiguration).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct BlockPublicAccessConfigurationBuilder {
    pub(crate) block_public_security_group_rules: ::std::option::Option<bool>,
    pub(crate) permitted_public_security_group_rule_ranges: ::std::option::Option<::std::vec::Vec<crate::types::PortRange>>,
}
impl BlockPublicAccessConfigurationBuilder {
    /// <p>Whether public access is blocked for security group rules outside <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn block_public_security_group_rules(mut self, input: bool) -> Self {
        self.block_public_security_group_rules = ::std::option::Option::Some(input);
        self
    }
    /// <p>Whether public access is blocked for security group rules outside <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn set_block_public_security_group_rules(mut self, input: ::std::option::Option<bool>) -> Self {
        self.block_public_security_group_rules = input;
        self
    }
    /// <p>Whether public access is blocked for security group rules outside <code>permitted_public_security_group_rule_ranges</code>.</p>
    pub fn get_block_public_security_group_rules(&self) -> &::std::option::Option<bool> {
        &self.block_public_security_group_rules
    }
    /// Appends an item to `permitted_public_security_group_rule_ranges`.
    ///
    /// To override the contents of this collection use [`set_permitted_public_security_group_rule_ranges`](Self::set_permitted_public_security_group_rule_ranges).
    ///
    /// <p>The port ranges that may stay open to public access. Port 22 is included by default.</p>
    pub fn permitted_public_security_group_rule_ranges(mut self, input: crate::types::PortRange) -> Self {
        let mut v = self.permitted_public_security_group_rule_ranges.unwrap_or_default();
        v.push(input);
        self.permitted_public_security_group_rule_ranges = ::std::option::Option::Some(v);
        self
    }
    /// <p>The port ranges that may stay open to public access. Port 22 is included by default.</p>
    pub fn set_permitted_public_security_group_rule_ranges(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::PortRange>>) -> Self {
        self.permitted_public_security_group_rule_ranges = input;
        self
    }
    /// <p>The port ranges that may stay open to public access. Port 22 is included by default.</p>
    pub fn get_permitted_public_security_group_rule_ranges(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::PortRange>> {
        &self.permitted_public_security_group_rule_ranges
    }
    /// Consumes the builder and constructs a [`BlockPublicAccessConfiguration`](crate::types::BlockPublicAccessConfiguration).
    pub fn build(self) -> crate::types::BlockPublicAccessConfiguration {
        crate::types::BlockPublicAccessConfiguration {
            block_public_security_group_rules: self.block_public_security_group_rules,
            permitted_public_security_group_rule_ranges: self.permitted_public_security_group_rule_ranges,
        }
    }
}
