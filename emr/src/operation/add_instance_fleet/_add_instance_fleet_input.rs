/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>AddInstanceFleet</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct AddInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub instance_fleet: ::std::option::Option<crate::types::InstanceFleetConfig>,
}
impl AddInstanceFleetInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub fn instance_fleet(&self) -> ::std::option::Option<&crate::types::InstanceFleetConfig> {
        self.instance_fleet.as_ref()
    }
}
impl AddInstanceFleetInput {
    /// Creates a new builder-style object to manufacture [`AddInstanceFleetInput`](crate::operation::add_instance_fleet::AddInstanceFleetInput).
    pub fn builder() -> crate::operation::add_instance_fleet::builders::AddInstanceFleetInputBuilder {
        crate::operation::add_instance_fleet::builders::AddInstanceFleetInputBuilder::default()
    }
    /// Converts this [`AddInstanceFleetInput`](crate::operation::add_instance_fleet::AddInstanceFleetInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_instance_fleet::builders::AddInstanceFleetInputBuilder {
        crate::operation::add_instance_fleet::builders::AddInstanceFleetInputBuilder {
            cluster_id: self.cluster_id,
            instance_fleet: self.instance_fleet,
        }
    }
}

/// A builder for [`AddInstanceFleetInput`](crate::operation::add_instance_fleet::AddInstanceFleetInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddInstanceFleetInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_fleet: ::std::option::Option<crate::types::InstanceFleetConfig>,
}
impl AddInstanceFleetInputBuilder {
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
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub fn instance_fleet(mut self, input: crate::types::InstanceFleetConfig) -> Self {
        self.instance_fleet = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub fn set_instance_fleet(mut self, input: ::std::option::Option<crate::types::InstanceFleetConfig>) -> Self {
        self.instance_fleet = input;
        self
    }
    /// <p>Specifies the configuration of the instance fleet.</p>
    pub fn get_instance_fleet(&self) -> &::std::option::Option<crate::types::InstanceFleetConfig> {
        &self.instance_fleet
    }
    /// Consumes the builder and constructs a [`AddInstanceFleetInput`](crate::operation::add_instance_fleet::AddInstanceFleetInput).
    pub fn build(self) -> crate::operation::add_instance_fleet::AddInstanceFleetInput {
        crate::operation::add_instance_fleet::AddInstanceFleetInput {
            cluster_id: self.cluster_id,
            instance_fleet: self.instance_fleet,
        }
    }
}
