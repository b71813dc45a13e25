/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Reports the configuration of a bootstrap action in a cluster (job flow).</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct BootstrapActionDetail {
    /// <p>A description of the bootstrap action.</p>
    pub bootstrap_action_config: ::std::option::Option<crate::types::BootstrapActionConfig>,
}
impl BootstrapActionDetail {
    /// <p>A description of the bootstrap action.</p>
    pub fn bootstrap_action_config(&self) -> ::std::option::Option<&crate::types::BootstrapActionConfig> {
        self.bootstrap_action_config.as_ref()
    }
}
impl BootstrapActionDetail {
    /// Creates a new builder-style object to manufacture [`BootstrapActionDetail`](crate::types::BootstrapActionDetail).
    pub fn builder() -> crate::types::builders::BootstrapActionDetailBuilder {
        crate::types::builders::BootstrapActionDetailBuilder::default()
    }
    /// Converts this [`BootstrapActionDetail`](crate::types::BootstrapActionDetail) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::BootstrapActionDetailBuilder {
        crate::types::builders::BootstrapActionDetailBuilder {
            bootstrap_action_config: self.bootstrap_action_config,
        }
    }
}

/// A builder for [`BootstrapActionDetail`](crate::types::BootstrapActionDetail).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct BootstrapActionDetailBuilder {
    pub(crate) bootstrap_action_config: ::std::option::Option<crate::types::BootstrapActionConfig>,
}
impl BootstrapActionDetailBuilder {
    /// <p>A description of the bootstrap action.</p>
    pub fn bootstrap_action_config(mut self, input: crate::types::BootstrapActionConfig) -> Self {
        self.bootstrap_action_config = ::std::option::Option::Some(input);
        self
    }
    /// <p>A description of the bootstrap action.</p>
    pub fn set_bootstrap_action_config(mut self, input: ::std::option::Option<crate::types::BootstrapActionConfig>) -> Self {
        self.bootstrap_action_config = input;
        self
    }
    /// <p>A description of the bootstrap action.</p>
    pub fn get_bootstrap_action_config(&self) -> &::std::option::Option<crate::types::BootstrapActionConfig> {
        &self.bootstrap_action_config
    }
    /// Consumes the builder and constructs a [`BootstrapActionDetail`](crate::types::BootstrapActionDetail).
    pub fn build(self) -> crate::types::BootstrapActionDetail {
        crate::types::BootstrapActionDetail {
            bootstrap_action_config: self.bootstrap_action_config,
        }
    }
}
