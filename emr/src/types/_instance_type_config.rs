/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>An instance type configuration for each instance type in an instance fleet, which determines the EC2 instances Amazon EMR attempts to provision to fulfill On-Demand and Spot target capacities. There can be a maximum of five instance type configurations in a fleet.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct InstanceTypeConfig {
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub instance_type: ::std::option::Option<::std::string::String>,
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <code>InstanceFleetConfig</code>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub weighted_capacity: ::std::option::Option<i32>,
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither <code>bid_price</code> nor <code>bid_price_as_percentage_of_on_demand_price</code> is provided, <code>bid_price_as_percentage_of_on_demand_price</code> defaults to 100%.</p>
    pub bid_price: ::std::option::Option<::std::string::String>,
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by <code>instance_type</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub bid_price_as_percentage_of_on_demand_price: ::std::option::Option<f64>,
    /// <p>The configuration of Amazon Elastic Block Storage (Amazon EBS) attached to each instance as defined by <code>instance_type</code>.</p>
    pub ebs_configuration: ::std::option::Option<crate::types::EbsConfiguration>,
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    pub configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
}
impl InstanceTypeConfig {
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub fn instance_type(&self) -> ::std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <code>InstanceFleetConfig</code>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub fn weighted_capacity(&self) -> ::std::option::Option<i32> {
        self.weighted_capacity
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither <code>bid_price</code> nor <code>bid_price_as_percentage_of_on_demand_price</code> is provided, <code>bid_price_as_percentage_of_on_demand_price</code> defaults to 100%.</p>
    pub fn bid_price(&self) -> ::std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by <code>instance_type</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub fn bid_price_as_percentage_of_on_demand_price(&self) -> ::std::option::Option<f64> {
        self.bid_price_as_percentage_of_on_demand_price
    }
    /// <p>The configuration of Amazon Elastic Block Storage (Amazon EBS) attached to each instance as defined by <code>instance_type</code>.</p>
    pub fn ebs_configuration(&self) -> ::std::option::Option<&crate::types::EbsConfiguration> {
        self.ebs_configuration.as_ref()
    }
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.configurations.is_none()</code>.
    pub fn configurations(&self) -> &[crate::types::Configuration] {
        self.configurations.as_deref().unwrap_or_default()
    }
}
impl InstanceTypeConfig {
    /// Creates a new builder-style object to manufacture [`InstanceTypeConfig`](crate::types::InstanceTypeConfig).
    pub fn builder() -> crate::types::builders::InstanceTypeConfigBuilder {
        crate::types::builders::InstanceTypeConfigBuilder::default()
    }
    /// Converts this [`InstanceTypeConfig`](crate::types::InstanceTypeConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceTypeConfigBuilder {
        crate::types::builders::InstanceTypeConfigBuilder {
            instance_type: self.instance_type,
            weighted_capacity: self.weighted_capacity,
            bid_price: self.bid_price,
            bid_price_as_percentage_of_on_demand_price: self.bid_price_as_percentage_of_on_demand_price,
            ebs_configuration: self.ebs_configuration,
            configurations: self.configurations,
        }
    }
}

/// A builder for [`InstanceTypeConfig`](crate::types::InstanceTypeConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceTypeConfigBuilder {
    pub(crate) instance_type: ::std::option::Option<::std::string::String>,
    pub(crate) weighted_capacity: ::std::option::Option<i32>,
    pub(crate) bid_price: ::std::option::Option<::std::string::String>,
    pub(crate) bid_price_as_percentage_of_on_demand_price: ::std::option::Option<f64>,
    pub(crate) ebs_configuration: ::std::option::Option<crate::types::EbsConfiguration>,
    pub(crate) configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
}
impl InstanceTypeConfigBuilder {
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub fn instance_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.instance_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub fn set_instance_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.instance_type = input;
        self
    }
    /// <p>An EC2 instance type, such as <code>m3.xlarge</code>.</p>
    pub fn get_instance_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.instance_type
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <code>InstanceFleetConfig</code>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub fn weighted_capacity(mut self, input: i32) -> Self {
        self.weighted_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <code>InstanceFleetConfig</code>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub fn set_weighted_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.weighted_capacity = input;
        self
    }
    /// <p>The number of units that a provisioned instance of this type provides toward fulfilling the target capacities defined in <code>InstanceFleetConfig</code>. This value is 1 for a master instance fleet, and must be 1 or greater for core and task instance fleets. Defaults to 1 if not specified.</p>
    pub fn get_weighted_capacity(&self) -> &::std::option::Option<i32> {
        &self.weighted_capacity
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither <code>bid_price</code> nor <code>bid_price_as_percentage_of_on_demand_price</code> is provided, <code>bid_price_as_percentage_of_on_demand_price</code> defaults to 100%.</p>
    pub fn bid_price(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.bid_price = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither <code>bid_price</code> nor <code>bid_price_as_percentage_of_on_demand_price</code> is provided, <code>bid_price_as_percentage_of_on_demand_price</code> defaults to 100%.</p>
    pub fn set_bid_price(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.bid_price = input;
        self
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither <code>bid_price</code> nor <code>bid_price_as_percentage_of_on_demand_price</code> is provided, <code>bid_price_as_percentage_of_on_demand_price</code> defaults to 100%.</p>
    pub fn get_bid_price(&self) -> &::std::option::Option<::std::string::String> {
        &self.bid_price
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by <code>instance_type</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub fn bid_price_as_percentage_of_on_demand_price(mut self, input: f64) -> Self {
        self.bid_price_as_percentage_of_on_demand_price = ::std::option::Option::Some(input);
        self
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by <code>instance_type</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub fn set_bid_price_as_percentage_of_on_demand_price(mut self, input: ::std::option::Option<f64>) -> Self {
        self.bid_price_as_percentage_of_on_demand_price = input;
        self
    }
    /// <p>The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by <code>instance_type</code>. Expressed as a number (for example, 20 specifies 20%).</p>
    pub fn get_bid_price_as_percentage_of_on_demand_price(&self) -> &::std::option::Option<f64> {
        &self.bid_price_as_percentage_of_on_demand_price
    }
    /// <p>The configuration of Amazon Elastic Block Storage (Amazon EBS) attached to each instance as defined by <code>instance_type</code>.</p>
    pub fn ebs_configuration(mut self, input: crate::types::EbsConfiguration) -> Self {
        self.ebs_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The configuration of Amazon Elastic Block Storage (Amazon EBS) attached to each instance as defined by <code>instance_type</code>.</p>
    pub fn set_ebs_configuration(mut self, input: ::std::option::Option<crate::types::EbsConfiguration>) -> Self {
        self.ebs_configuration = input;
        self
    }
    /// <p>The configuration of Amazon Elastic Block Storage (Amazon EBS) attached to each instance as defined by <code>instance_type</code>.</p>
    pub fn get_ebs_configuration(&self) -> &::std::option::Option<crate::types::EbsConfiguration> {
        &self.ebs_configuration
    }
    /// Appends an item to `configurations`.
    ///
    /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
    ///
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    pub fn configurations(mut self, input: crate::types::Configuration) -> Self {
        let mut v = self.configurations.unwrap_or_default();
        v.push(input);
        self.configurations = ::std::option::Option::Some(v);
        self
    }
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    pub fn set_configurations(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>) -> Self {
        self.configurations = input;
        self
    }
    /// <p>A configuration classification that applies when provisioning cluster instances, which can include configurations for applications and software that run on the cluster.</p>
    pub fn get_configurations(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Configuration>> {
        &self.configurations
    }
    /// Consumes the builder and constructs a [`InstanceTypeConfig`](crate::types::InstanceTypeConfig).
    pub fn build(self) -> crate::types::InstanceTypeConfig {
        crate::types::InstanceTypeConfig {
            instance_type: self.instance_type,
            weighted_capacity: self.weighted_capacity,
            bid_price: self.bid_price,
            bid_price_as_percentage_of_on_demand_price: self.bid_price_as_percentage_of_on_demand_price,
            ebs_configuration: self.ebs_configuration,
            configurations: self.configurations,
        }
    }
}
