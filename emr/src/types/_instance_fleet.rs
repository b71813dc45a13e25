/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Describes an instance fleet, which is a group of EC2 instances that host a particular node type (master, core, or task) in an Amazon EMR cluster. Instance fleets can consist of a mix of instance types and On-Demand and Spot Instances, which are provisioned to meet a defined target capacity.</p>
/// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct InstanceFleet {
    /// <p>The unique identifier of the instance fleet.</p>
    pub id: ::std::option::Option<::std::string::String>,
    /// <p>A friendly name for the instance fleet.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The current status of the instance fleet.</p>
    pub status: ::std::option::Option<crate::types::InstanceFleetStatus>,
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub instance_fleet_type: ::std::option::Option<crate::types::InstanceFleetType>,
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision.</p>
    pub target_on_demand_capacity: ::std::option::Option<i32>,
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub target_spot_capacity: ::std::option::Option<i32>,
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>target_on_demand_capacity</code>. This provisioned capacity might be less than or greater than <code>target_on_demand_capacity</code>.</p>
    pub provisioned_on_demand_capacity: ::std::option::Option<i32>,
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>target_spot_capacity</code>.</p>
    pub provisioned_spot_capacity: ::std::option::Option<i32>,
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    pub instance_type_specifications: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeSpecification>>,
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub launch_specifications: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleet {
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>A friendly name for the instance fleet.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The current status of the instance fleet.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::InstanceFleetStatus> {
        self.status.as_ref()
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub fn instance_fleet_type(&self) -> ::std::option::Option<&crate::types::InstanceFleetType> {
        self.instance_fleet_type.as_ref()
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision.</p>
    pub fn target_on_demand_capacity(&self) -> ::std::option::Option<i32> {
        self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub fn target_spot_capacity(&self) -> ::std::option::Option<i32> {
        self.target_spot_capacity
    }
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>target_on_demand_capacity</code>. This provisioned capacity might be less than or greater than <code>target_on_demand_capacity</code>.</p>
    pub fn provisioned_on_demand_capacity(&self) -> ::std::option::Option<i32> {
        self.provisioned_on_demand_capacity
    }
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>target_spot_capacity</code>.</p>
    pub fn provisioned_spot_capacity(&self) -> ::std::option::Option<i32> {
        self.provisioned_spot_capacity
    }
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_type_specifications.is_none()</code>.
    pub fn instance_type_specifications(&self) -> &[crate::types::InstanceTypeSpecification] {
        self.instance_type_specifications.as_deref().unwrap_or_default()
    }
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub fn launch_specifications(&self) -> ::std::option::Option<&crate::types::InstanceFleetProvisioningSpecifications> {
        self.launch_specifications.as_ref()
    }
}
impl InstanceFleet {
    /// Creates a new builder-style object to manufacture [`InstanceFleet`](crate::types::InstanceFleet).
    pub fn builder() -> crate::types::builders::InstanceFleetBuilder {
        crate::types::builders::InstanceFleetBuilder::default()
    }
    /// Converts this [`InstanceFleet`](crate::types::InstanceFleet) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceFleetBuilder {
        crate::types::builders::InstanceFleetBuilder {
            id: self.id,
            name: self.name,
            status: self.status,
            instance_fleet_type: self.instance_fleet_type,
            target_on_demand_capacity: self.target_on_demand_capacity,
            target_spot_capacity: self.target_spot_capacity,
            provisioned_on_demand_capacity: self.provisioned_on_demand_capacity,
            provisioned_spot_capacity: self.provisioned_spot_capacity,
            instance_type_specifications: self.instance_type_specifications,
            launch_specifications: self.launch_specifications,
        }
    }
}

/// A builder for [`InstanceFleet`](crate::types::InstanceFleet).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceFleetBuilder {
    pub(crate) id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) status: ::std::option::Option<crate::types::InstanceFleetStatus>,
    pub(crate) instance_fleet_type: ::std::option::Option<crate::types::InstanceFleetType>,
    pub(crate) target_on_demand_capacity: ::std::option::Option<i32>,
    pub(crate) target_spot_capacity: ::std::option::Option<i32>,
    pub(crate) provisioned_on_demand_capacity: ::std::option::Option<i32>,
    pub(crate) provisioned_spot_capacity: ::std::option::Option<i32>,
    pub(crate) instance_type_specifications: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeSpecification>>,
    pub(crate) launch_specifications: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleetBuilder {
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.id = input;
        self
    }
    /// <p>The unique identifier of the instance fleet.</p>
    pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.id
    }
    /// <p>A friendly name for the instance fleet.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A friendly name for the instance fleet.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>A friendly name for the instance fleet.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The current status of the instance fleet.</p>
    pub fn status(mut self, input: crate::types::InstanceFleetStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The current status of the instance fleet.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::InstanceFleetStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The current status of the instance fleet.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::InstanceFleetStatus> {
        &self.status
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub fn instance_fleet_type(mut self, input: crate::types::InstanceFleetType) -> Self {
        self.instance_fleet_type = ::std::option::Option::Some(input);
        self
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub fn set_instance_fleet_type(mut self, input: ::std::option::Option<crate::types::InstanceFleetType>) -> Self {
        self.instance_fleet_type = input;
        self
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, or TASK.</p>
    pub fn get_instance_fleet_type(&self) -> &::std::option::Option<crate::types::InstanceFleetType> {
        &self.instance_fleet_type
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision.</p>
    pub fn target_on_demand_capacity(mut self, input: i32) -> Self {
        self.target_on_demand_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision.</p>
    pub fn set_target_on_demand_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.target_on_demand_capacity = input;
        self
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision.</p>
    pub fn get_target_on_demand_capacity(&self) -> &::std::option::Option<i32> {
        &self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub fn target_spot_capacity(mut self, input: i32) -> Self {
        self.target_spot_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub fn set_target_spot_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.target_spot_capacity = input;
        self
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub fn get_target_spot_capacity(&self) -> &::std::option::Option<i32> {
        &self.target_spot_capacity
    }
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>target_on_demand_capacity</code>. This provisioned capacity might be less than or greater than <code>target_on_demand_capacity</code>.</p>
    pub fn provisioned_on_demand_capacity(mut self, input: i32) -> Self {
        self.provisioned_on_demand_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>target_on_demand_capacity</code>. This provisioned capacity might be less than or greater than <code>target_on_demand_capacity</code>.</p>
    pub fn set_provisioned_on_demand_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.provisioned_on_demand_capacity = input;
        self
    }
    /// <p>The number of On-Demand units that have been provisioned for the instance fleet to fulfill <code>target_on_demand_capacity</code>. This provisioned capacity might be less than or greater than <code>target_on_demand_capacity</code>.</p>
    pub fn get_provisioned_on_demand_capacity(&self) -> &::std::option::Option<i32> {
        &self.provisioned_on_demand_capacity
    }
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>target_spot_capacity</code>.</p>
    pub fn provisioned_spot_capacity(mut self, input: i32) -> Self {
        self.provisioned_spot_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>target_spot_capacity</code>.</p>
    pub fn set_provisioned_spot_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.provisioned_spot_capacity = input;
        self
    }
    /// <p>The number of Spot units that have been provisioned for this instance fleet to fulfill <code>target_spot_capacity</code>.</p>
    pub fn get_provisioned_spot_capacity(&self) -> &::std::option::Option<i32> {
        &self.provisioned_spot_capacity
    }
    /// Appends an item to `instance_type_specifications`.
    ///
    /// To override the contents of this collection use [`set_instance_type_specifications`](Self::set_instance_type_specifications).
    ///
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    pub fn instance_type_specifications(mut self, input: crate::types::InstanceTypeSpecification) -> Self {
        let mut v = self.instance_type_specifications.unwrap_or_default();
        v.push(input);
        self.instance_type_specifications = ::std::option::Option::Some(v);
        self
    }
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    pub fn set_instance_type_specifications(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeSpecification>>) -> Self {
        self.instance_type_specifications = input;
        self
    }
    /// <p>The specification for the instance types that comprise an instance fleet. Up to five unique instance specifications may be defined for each instance fleet.</p>
    pub fn get_instance_type_specifications(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeSpecification>> {
        &self.instance_type_specifications
    }
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub fn launch_specifications(mut self, input: crate::types::InstanceFleetProvisioningSpecifications) -> Self {
        self.launch_specifications = ::std::option::Option::Some(input);
        self
    }
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub fn set_launch_specifications(mut self, input: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>) -> Self {
        self.launch_specifications = input;
        self
    }
    /// <p>Describes the launch specification for an instance fleet.</p>
    pub fn get_launch_specifications(&self) -> &::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications> {
        &self.launch_specifications
    }
    /// Consumes the builder and constructs a [`InstanceFleet`](crate::types::InstanceFleet).
    pub fn build(self) -> crate::types::InstanceFleet {
        crate::types::InstanceFleet {
            id: self.id,
            name: self.name,
            status: self.status,
            instance_fleet_type: self.instance_fleet_type,
            target_on_demand_capacity: self.target_on_demand_capacity,
            target_spot_capacity: self.target_spot_capacity,
            provisioned_on_demand_capacity: self.provisioned_on_demand_capacity,
            provisioned_spot_capacity: self.provisioned_spot_capacity,
            instance_type_specifications: self.instance_type_specifications,
            launch_specifications: self.launch_specifications,
        }
    }
}
