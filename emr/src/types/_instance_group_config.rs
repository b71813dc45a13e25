/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Configuration defining a new instance group.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct InstanceGroupConfig {
    /// <p>Friendly name given to the instance group.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub market: ::std::option::Option<crate::types::MarketType>,
    /// <p>The role of the instance group in the cluster.</p>
    pub instance_role: ::std::option::Option<crate::types::InstanceRoleType>,
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither a bid price nor a percentage is provided, the default is 100% of the On-Demand price.</p>
    pub bid_price: ::std::option::Option<::std::string::String>,
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub instance_type: ::std::option::Option<::std::string::String>,
    /// <p>Target number of instances for the instance group.</p>
    pub instance_count: ::std::option::Option<i32>,
    /// <p>Amazon EMR releases 4.x or later.</p>
    /// <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub ebs_configuration: ::std::option::Option<crate::types::EbsConfiguration>,
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.</p>
    pub auto_scaling_policy: ::std::option::Option<crate::types::AutoScalingPolicy>,
}
impl InstanceGroupConfig {
    /// <p>Friendly name given to the instance group.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn market(&self) -> ::std::option::Option<&crate::types::MarketType> {
        self.market.as_ref()
    }
    /// <p>The role of the instance group in the cluster.</p>
    pub fn instance_role(&self) -> ::std::option::Option<&crate::types::InstanceRoleType> {
        self.instance_role.as_ref()
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither a bid price nor a percentage is provided, the default is 100% of the On-Demand price.</p>
    pub fn bid_price(&self) -> ::std::option::Option<&str> {
        self.bid_price.as_deref()
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn instance_type(&self) -> ::std::option::Option<&str> {
        self.instance_type.as_deref()
    }
    /// <p>Target number of instances for the instance group.</p>
    pub fn instance_count(&self) -> ::std::option::Option<i32> {
        self.instance_count
    }
    /// <p>Amazon EMR releases 4.x or later.</p>
    /// <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.configurations.is_none()</code>.
    pub fn configurations(&self) -> &[crate::types::Configuration] {
        self.configurations.as_deref().unwrap_or_default()
    }
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub fn ebs_configuration(&self) -> ::std::option::Option<&crate::types::EbsConfiguration> {
        self.ebs_configuration.as_ref()
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.</p>
    pub fn auto_scaling_policy(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicy> {
        self.auto_scaling_policy.as_ref()
    }
}
impl InstanceGroupConfig {
    /// Creates a new builder-style object to manufacture [`InstanceGroupConfig`](crate::types::InstanceGroupConfig).
    pub fn builder() -> crate::types::builders::InstanceGroupConfigBuilder {
        crate::types::builders::InstanceGroupConfigBuilder::default()
    }
    /// Converts this [`InstanceGroupConfig`](crate::types::InstanceGroupConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceGroupConfigBuilder {
        crate::types::builders::InstanceGroupConfigBuilder {
            name: self.name,
            market: self.market,
            instance_role: self.instance_role,
            bid_price: self.bid_price,
            instance_type: self.instance_type,
            instance_count: self.instance_count,
            configurations: self.configurations,
            ebs_configuration: self.ebs_configuration,
            auto_scaling_policy: self.auto_scaling_policy,
        }
    }
}

/// A builder for [`InstanceGroupConfig`](crate::types::InstanceGroupConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceGroupConfigBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) market: ::std::option::Option<crate::types::MarketType>,
    pub(crate) instance_role: ::std::option::Option<crate::types::InstanceRoleType>,
    pub(crate) bid_price: ::std::option::Option<::std::string::String>,
    pub(crate) instance_type: ::std::option::Option<::std::string::String>,
    pub(crate) instance_count: ::std::option::Option<i32>,
    pub(crate) configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
    pub(crate) ebs_configuration: ::std::option::Option<crate::types::EbsConfiguration>,
    pub(crate) auto_scaling_policy: ::std::option::Option<crate::types::AutoScalingPolicy>,
}
impl InstanceGroupConfigBuilder {
    /// <p>Friendly name given to the instance group.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Friendly name given to the instance group.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>Friendly name given to the instance group.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn market(mut self, input: crate::types::MarketType) -> Self {
        self.market = ::std::option::Option::Some(input);
        self
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn set_market(mut self, input: ::std::option::Option<crate::types::MarketType>) -> Self {
        self.market = input;
        self
    }
    /// <p>Market type of the EC2 instances used to create a cluster node.</p>
    pub fn get_market(&self) -> &::std::option::Option<crate::types::MarketType> {
        &self.market
    }
    /// <p>The role of the instance group in the cluster.</p>
    pub fn instance_role(mut self, input: crate::types::InstanceRoleType) -> Self {
        self.instance_role = ::std::option::Option::Some(input);
        self
    }
    /// <p>The role of the instance group in the cluster.</p>
    pub fn set_instance_role(mut self, input: ::std::option::Option<crate::types::InstanceRoleType>) -> Self {
        self.instance_role = input;
        self
    }
    /// <p>The role of the instance group in the cluster.</p>
    pub fn get_instance_role(&self) -> &::std::option::Option<crate::types::InstanceRoleType> {
        &self.instance_role
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither a bid price nor a percentage is provided, the default is 100% of the On-Demand price.</p>
    pub fn bid_price(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.bid_price = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither a bid price nor a percentage is provided, the default is 100% of the On-Demand price.</p>
    pub fn set_bid_price(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.bid_price = input;
        self
    }
    /// <p>The bid price for each EC2 Spot Instance type as defined by <code>instance_type</code>. Expressed in USD. If neither a bid price nor a percentage is provided, the default is 100% of the On-Demand price.</p>
    pub fn get_bid_price(&self) -> &::std::option::Option<::std::string::String> {
        &self.bid_price
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn instance_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.instance_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn set_instance_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.instance_type = input;
        self
    }
    /// <p>The EC2 instance type for all instances in the instance group.</p>
    pub fn get_instance_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.instance_type
    }
    /// <p>Target number of instances for the instance group.</p>
    pub fn instance_count(mut self, input: i32) -> Self {
        self.instance_count = ::std::option::Option::Some(input);
        self
    }
    /// <p>Target number of instances for the instance group.</p>
    pub fn set_instance_count(mut self, input: ::std::option::Option<i32>) -> Self {
        self.instance_count = input;
        self
    }
    /// <p>Target number of instances for the instance group.</p>
    pub fn get_instance_count(&self) -> &::std::option::Option<i32> {
        &self.instance_count
    }
    /// Appends an item to `configurations`.
    ///
    /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
    ///
    /// <p>Amazon EMR releases 4.x or later.</p>
    /// <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub fn configurations(mut self, input: crate::types::Configuration) -> Self {
        let mut v = self.configurations.unwrap_or_default();
        v.push(input);
        self.configurations = ::std::option::Option::Some(v);
        self
    }
    /// <p>Amazon EMR releases 4.x or later.</p>
    /// <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub fn set_configurations(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>) -> Self {
        self.configurations = input;
        self
    }
    /// <p>Amazon EMR releases 4.x or later.</p>
    /// <p>The list of configurations supplied for an EMR cluster instance group. You can specify a separate configuration for each instance group (master, core, and task).</p>
    pub fn get_configurations(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Configuration>> {
        &self.configurations
    }
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub fn ebs_configuration(mut self, input: crate::types::EbsConfiguration) -> Self {
        self.ebs_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub fn set_ebs_configuration(mut self, input: ::std::option::Option<crate::types::EbsConfiguration>) -> Self {
        self.ebs_configuration = input;
        self
    }
    /// <p>EBS configurations that will be attached to each EC2 instance in the instance group.</p>
    pub fn get_ebs_configuration(&self) -> &::std::option::Option<crate::types::EbsConfiguration> {
        &self.ebs_configuration
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.</p>
    pub fn auto_scaling_policy(mut self, input: crate::types::AutoScalingPolicy) -> Self {
        self.auto_scaling_policy = ::std::option::Option::Some(input);
        self
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.</p>
    pub fn set_auto_scaling_policy(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicy>) -> Self {
        self.auto_scaling_policy = input;
        self
    }
    /// <p>An automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster.</p>
    pub fn get_auto_scaling_policy(&self) -> &::std::option::Option<crate::types::AutoScalingPolicy> {
        &self.auto_scaling_policy
    }
    /// Consumes the builder and constructs a [`InstanceGroupConfig`](crate::types::InstanceGroupConfig).
    pub fn build(self) -> crate::types::InstanceGroupConfig {
        crate::types::InstanceGroupConfig {
            name: self.name,
            market: self.market,
            instance_role: self.instance_role,
            bid_price: self.bid_price,
            instance_type: self.instance_type,
            instance_count: self.instance_count,
            configurations: self.configurations,
            ebs_configuration: self.ebs_configuration,
            auto_scaling_policy: self.auto_scaling_policy,
        }
    }
}
