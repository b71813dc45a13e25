/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>AddInstanceFleet</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct AddInstanceFleetOutput {
    /// <p>The unique identifier of the cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>The unique identifier of the instance fleet.</p>
    pub instance_fleet_id: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub cluster_arn: ::std::option::Option<::std::string::String>,
}
impl AddInstanceFleetOutput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn instance_fleet_id(&self) -> ::std::option::Option<&str> {
        self.instance_fleet_id.as_deref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> ::std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl AddInstanceFleetOutput {
    /// Creates a new builder-style object to manufacture [`AddInstanceFleetOutput`](crate::operation::add_instance_fleet::AddInstanceFleetOutput).
    pub fn builder() -> crate::operation::add_instance_fleet::builders::AddInstanceFleetOutputBuilder {
        crate::operation::add_instance_fleet::builders::AddInstanceFleetOutputBuilder::default()
    }
    /// Converts this [`AddInstanceFleetOutput`](crate::operation::add_instance_fleet::AddInstanceFleetOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_instance_fleet::builders::AddInstanceFleetOutputBuilder {
        crate::operation::add_instance_fleet::builders::AddInstanceFleetOutputBuilder {
            cluster_id: self.cluster_id,
            instance_fleet_id: self.instance_fleet_id,
            cluster_arn: self.cluster_arn,
        }
    }
}

/// A builder for [`AddInstanceFleetOutput`](crate::operation::add_instance_fleet::AddInstanceFleetOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddInstanceFleetOutputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_fleet_id: ::std::option::Option<::std::string::String>,
    pub(crate) cluster_arn: ::std::option::Option<::std::string::String>,
}
impl AddInstanceFleetOutputBuilder {
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
    pub fn instance_fleet_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.instance_fleet_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn set_instance_fleet_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.instance_fleet_id = input;
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn get_instance_fleet_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.instance_fleet_id
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn set_cluster_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_arn = input;
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn get_cluster_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_arn
    }
    /// Consumes the builder and constructs a [`AddInstanceFleetOutput`](crate::operation::add_instance_fleet::AddInstanceFleetOutput).
    pub fn build(self) -> crate::operation::add_instance_fleet::AddInstanceFleetOutput {
        crate::operation::add_instance_fleet::AddInstanceFleetOutput {
            cluster_id: self.cluster_id,
            instance_fleet_id: self.instance_fleet_id,
            cluster_arn: self.cluster_arn,
        }
    }
}
