/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The configuration that defines an instance fleet.</p>
/// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct InstanceFleetConfig {
    /// <p>The friendly name of the instance fleet.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, and TASK.</p>
    pub instance_fleet_type: ::std::option::Option<crate::types::InstanceFleetType>,
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand Instances as specified by <code>InstanceTypeConfig</code>.</p>
    pub target_on_demand_capacity: ::std::option::Option<i32>,
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub target_spot_capacity: ::std::option::Option<i32>,
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    pub instance_type_configs: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeConfig>>,
    /// <p>The launch specification for the instance fleet.</p>
    pub launch_specifications: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleetConfig {
    /// <p>The friendly name of the instance fleet.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, and TASK.</p>
    pub fn instance_fleet_type(&self) -> ::std::option::Option<&crate::types::InstanceFleetType> {
        self.instance_fleet_type.as_ref()
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand Instances as specified by <code>InstanceTypeConfig</code>.</p>
    pub fn target_on_demand_capacity(&self) -> ::std::option::Option<i32> {
        self.target_on_demand_capacity
    }
    /// <p>The target capacity of Spot units for the instance fleet, which determines how many Spot Instances to provision.</p>
    pub fn target_spot_capacity(&self) -> ::std::option::Option<i32> {
        self.target_spot_capacity
    }
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_type_configs.is_none()</code>.
    pub fn instance_type_configs(&self) -> &[crate::types::InstanceTypeConfig] {
        self.instance_type_configs.as_deref().unwrap_or_default()
    }
    /// <p>The launch specification for the instance fleet.</p>
    pub fn launch_specifications(&self) -> ::std::option::Option<&crate::types::InstanceFleetProvisioningSpecifications> {
        self.launch_specifications.as_ref()
    }
}
impl InstanceFleetConfig {
    /// Creates a new builder-style object to manufacture [`InstanceFleetConfig`](crate::types::InstanceFleetConfig).
    pub fn builder() -> crate::types::builders::InstanceFleetConfigBuilder {
        crate::types::builders::InstanceFleetConfigBuilder::default()
    }
    /// Converts this [`InstanceFleetConfig`](crate::types::InstanceFleetConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceFleetConfigBuilder {
        crate::types::builders::InstanceFleetConfigBuilder {
            name: self.name,
            instance_fleet_type: self.instance_fleet_type,
            target_on_demand_capacity: self.target_on_demand_capacity,
            target_spot_capacity: self.target_spot_capacity,
            instance_type_configs: self.instance_type_configs,
            launch_specifications: self.launch_specifications,
        }
    }
}

/// A builder for [`InstanceFleetConfig`](crate::types::InstanceFleetConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceFleetConfigBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) instance_fleet_type: ::std::option::Option<crate::types::InstanceFleetType>,
    pub(crate) target_on_demand_capacity: ::std::option::Option<i32>,
    pub(crate) target_spot_capacity: ::std::option::Option<i32>,
    pub(crate) instance_type_configs: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeConfig>>,
    pub(crate) launch_specifications: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>,
}
impl InstanceFleetConfigBuilder {
    /// <p>The friendly name of the instance fleet.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The friendly name of the instance fleet.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The friendly name of the instance fleet.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, and TASK.</p>
    pub fn instance_fleet_type(mut self, input: crate::types::InstanceFleetType) -> Self {
        self.instance_fleet_type = ::std::option::Option::Some(input);
        self
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, and TASK.</p>
    pub fn set_instance_fleet_type(mut self, input: ::std::option::Option<crate::types::InstanceFleetType>) -> Self {
        self.instance_fleet_type = input;
        self
    }
    /// <p>The node type that the instance fleet hosts. Valid values are MASTER, CORE, and TASK.</p>
    pub fn get_instance_fleet_type(&self) -> &::std::option::Option<crate::types::InstanceFleetType> {
        &self.instance_fleet_type
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand Instances as specified by <code>InstanceTypeConfig</code>.</p>
    pub fn target_on_demand_capacity(mut self, input: i32) -> Self {
        self.target_on_demand_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand Instances as specified by <code>InstanceTypeConfig</code>.</p>
    pub fn set_target_on_demand_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.target_on_demand_capacity = input;
        self
    }
    /// <p>The target capacity of On-Demand units for the instance fleet, which determines how many On-Demand Instances to provision. When the instance fleet launches, Amazon EMR tries to provision On-Demand Instances as specified by <code>InstanceTypeConfig</code>.</p>
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
    /// Appends an item to `instance_type_configs`.
    ///
    /// To override the contents of this collection use [`set_instance_type_configs`](Self::set_instance_type_configs).
    ///
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    pub fn instance_type_configs(mut self, input: crate::types::InstanceTypeConfig) -> Self {
        let mut v = self.instance_type_configs.unwrap_or_default();
        v.push(input);
        self.instance_type_configs = ::std::option::Option::Some(v);
        self
    }
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    pub fn set_instance_type_configs(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeConfig>>) -> Self {
        self.instance_type_configs = input;
        self
    }
    /// <p>The instance type configurations that define the EC2 instances in the instance fleet.</p>
    pub fn get_instance_type_configs(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceTypeConfig>> {
        &self.instance_type_configs
    }
    /// <p>The launch specification for the instance fleet.</p>
    pub fn launch_specifications(mut self, input: crate::types::InstanceFleetProvisioningSpecifications) -> Self {
        self.launch_specifications = ::std::option::Option::Some(input);
        self
    }
    /// <p>The launch specification for the instance fleet.</p>
    pub fn set_launch_specifications(mut self, input: ::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications>) -> Self {
        self.launch_specifications = input;
        self
    }
    /// <p>The launch specification for the instance fleet.</p>
    pub fn get_launch_specifications(&self) -> &::std::option::Option<crate::types::InstanceFleetProvisioningSpecifications> {
        &self.launch_specifications
    }
    /// Consumes the builder and constructs a [`InstanceFleetConfig`](crate::types::InstanceFleetConfig).
    pub fn build(self) -> crate::types::InstanceFleetConfig {
        crate::types::InstanceFleetConfig {
            name: self.name,
            instance_fleet_type: self.instance_fleet_type,
            target_on_demand_capacity: self.target_on_demand_capacity,
            target_spot_capacity: self.target_spot_capacity,
            instance_type_configs: self.instance_type_configs,
            launch_specifications: self.launch_specifications,
        }
    }
}
