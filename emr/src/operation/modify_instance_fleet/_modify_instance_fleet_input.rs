/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>ModifyInstanceFleet</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ModifyInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier of the instance fleet.</p>
    pub instance_fleet: ::std::option::Option<crate::types::InstanceFleetModifyConfig>,
}
impl ModifyInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet(&self) -> ::std::option::Option<&crate::types::InstanceFleetModifyConfig> {
        self.instance_fleet.as_ref()
    }
}
impl ModifyInstanceFleetInput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceFleetInput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetInput).
    pub fn builder() -> crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetInputBuilder {
        crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetInputBuilder::default()
    }
    /// Converts this [`ModifyInstanceFleetInput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetInputBuilder {
        crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetInputBuilder {
            cluster_id: self.cluster_id,
            instance_fleet: self.instance_fleet,
        }
    }
}

/// A builder for [`ModifyInstanceFleetInput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ModifyInstanceFleetInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_fleet: ::std::option::Option<crate::types::InstanceFleetModifyConfig>,
}
impl ModifyInstanceFleetInputBuilder {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of the cluster.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The unique identifier of the cluster.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet(mut self, input: crate::types::InstanceFleetModifyConfig) -> Self {
        self.instance_fleet = ::std::option::Option::Some(input);
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn set_instance_fleet(mut self, input: ::std::option::Option<crate::types::InstanceFleetModifyConfig>) -> Self {
        self.instance_fleet = input;
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn get_instance_fleet(&self) -> &::std::option::Option<crate::types::InstanceFleetModifyConfig> {
        &self.instance_fleet
    }
    /// Consumes the builder and constructs a [`ModifyInstanceFleetInput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetInput).
    pub fn build(self) -> crate::operation::modify_instance_fleet::ModifyInstanceFleetInput {
        crate::operation::modify_instance_fleet::ModifyInstanceFleetInput {
            cluster_id: self.cluster_id,
            instance_fleet: self.instance_fleet,
        }
    }
}
