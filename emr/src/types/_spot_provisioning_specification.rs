/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The launch specification for Spot Instances in the instance fleet, which determines the defined duration, provisioning timeout behavior, and allocation strategy.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SpotProvisioningSpecification {
    /// <p>The spot provisioning timeout period in minutes. If Spot Instances are not provisioned within this time period, the <code>timeout_action</code> is taken. Minimum value is 5 and maximum value is 1440.</p>
    pub timeout_duration_minutes: ::std::option::Option<i32>,
    /// <p>The action to take when <code>target_spot_capacity</code> has not been fulfilled when the <code>timeout_duration_minutes</code> has expired.</p>
    pub timeout_action: ::std::option::Option<crate::types::SpotProvisioningTimeoutAction>,
    /// <p>The defined duration for Spot Instances (also known as Spot blocks) in minutes. When specified, the Spot Instance does not terminate before the defined duration expires. Valid values are 60, 120, 180, 240, 300, or 360.</p>
    pub block_duration_minutes: ::std::option::Option<i32>,
    /// <p>Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option is capacity-optimized (the default), which launches instances from Spot Instance pools with optimal capacity for the number of instances that are launching.</p>
    pub allocation_strategy: ::std::option::Option<crate::types::SpotProvisioningAllocationStrategy>,
}
impl SpotProvisioningSpecification {
    /// <p>The spot provisioning timeout period in minutes. If Spot Instances are not provisioned within this time period, the <code>timeout_action</code> is taken. Minimum value is 5 and maximum value is 1440.</p>
    pub fn timeout_duration_minutes(&self) -> ::std::option::Option<i32> {
        self.timeout_duration_minutes
    }
    /// <p>The action to take when <code>target_spot_capacity</code> has not been fulfilled when the <code>timeout_duration_minutes</code> has expired.</p>
    pub fn timeout_action(&self) -> ::std::option::Option<&crate::types::SpotProvisioningTimeoutAction> {
        self.timeout_action.as_ref()
    }
    /// <p>The defined duration for Spot Instances (also known as Spot blocks) in minutes. When specified, the Spot Instance does not terminate before the defined duration expires. Valid values are 60, 120, 180, 240, 300, or 360.</p>
    pub fn block_duration_minutes(&self) -> ::std::option::Option<i32> {
        self.block_duration_minutes
    }
    /// <p>Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option is capacity-optimized (the default), which launches instances from Spot Instance pools with optimal capacity for the number of instances that are launching.</p>
    pub fn allocation_strategy(&self) -> ::std::option::Option<&crate::types::SpotProvisioningAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }
}
impl SpotProvisioningSpecification {
    /// Creates a new builder-style object to manufacture [`SpotProvisioningSpecification`](crate::types::SpotProvisioningSpecification).
    pub fn builder() -> crate::types::builders::SpotProvisioningSpecificationBuilder {
        crate::types::builders::SpotProvisioningSpecificationBuilder::default()
    }
    /// Converts this [`SpotProvisioningSpecification`](crate::types::SpotProvisioningSpecification) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::SpotProvisioningSpecificationBuilder {
        crate::types::builders::SpotProvisioningSpecificationBuilder {
            timeout_duration_minutes: self.timeout_duration_minutes,
            timeout_action: self.timeout_action,
            block_duration_minutes: self.block_duration_minutes,
            allocation_strategy: self.allocation_strategy,
        }
    }
}

/// A builder for [`SpotProvisioningSpecification`](crate::types::SpotProvisioningSpecification).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SpotProvisioningSpecificationBuilder {
    pub(crate) timeout_duration_minutes: ::std::option::Option<i32>,
    pub(crate) timeout_action: ::std::option::Option<crate::types::SpotProvisioningTimeoutAction>,
    pub(crate) block_duration_minutes: ::std::option::Option<i32>,
    pub(crate) allocation_strategy: ::std::option::Option<crate::types::SpotProvisioningAllocationStrategy>,
}
impl SpotProvisioningSpecificationBuilder {
    /// <p>The spot provisioning timeout period in minutes. If Spot Instances are not provisioned within this time period, the <code>timeout_action</code> is taken. Minimum value is 5 and maximum value is 1440.</p>
    pub fn timeout_duration_minutes(mut self, input: i32) -> Self {
        self.timeout_duration_minutes = ::std::option::Option::Some(input);
        self
    }
    /// <p>The spot provisioning timeout period in minutes. If Spot Instances are not provisioned within this time period, the <code>timeout_action</code> is taken. Minimum value is 5 and maximum value is 1440.</p>
    pub fn set_timeout_duration_minutes(mut self, input: ::std::option::Option<i32>) -> Self {
        self.timeout_duration_minutes = input;
        self
    }
    /// <p>The spot provisioning timeout period in minutes. If Spot Instances are not provisioned within this time period, the <code>timeout_action</code> is taken. Minimum value is 5 and maximum value is 1440.</p>
    pub fn get_timeout_duration_minutes(&self) -> &::std::option::Option<i32> {
        &self.timeout_duration_minutes
    }
    /// <p>The action to take when <code>target_spot_capacity</code> has not been fulfilled when the <code>timeout_duration_minutes</code> has expired.</p>
    pub fn timeout_action(mut self, input: crate::types::SpotProvisioningTimeoutAction) -> Self {
        self.timeout_action = ::std::option::Option::Some(input);
        self
    }
    /// <p>The action to take when <code>target_spot_capacity</code> has not been fulfilled when the <code>timeout_duration_minutes</code> has expired.</p>
    pub fn set_timeout_action(mut self, input: ::std::option::Option<crate::types::SpotProvisioningTimeoutAction>) -> Self {
        self.timeout_action = input;
        self
    }
    /// <p>The action to take when <code>target_spot_capacity</code> has not been fulfilled when the <code>timeout_duration_minutes</code> has expired.</p>
    pub fn get_timeout_action(&self) -> &::std::option::Option<crate::types::SpotProvisioningTimeoutAction> {
        &self.timeout_action
    }
    /// <p>The defined duration for Spot Instances (also known as Spot blocks) in minutes. When specified, the Spot Instance does not terminate before the defined duration expires. Valid values are 60, 120, 180, 240, 300, or 360.</p>
    pub fn block_duration_minutes(mut self, input: i32) -> Self {
        self.block_duration_minutes = ::std::option::Option::Some(input);
        self
    }
    /// <p>The defined duration for Spot Instances (also known as Spot blocks) in minutes. When specified, the Spot Instance does not terminate before the defined duration expires. Valid values are 60, 120, 180, 240, 300, or 360.</p>
    pub fn set_block_duration_minutes(mut self, input: ::std::option::Option<i32>) -> Self {
        self.block_duration_minutes = input;
        self
    }
    /// <p>The defined duration for Spot Instances (also known as Spot blocks) in minutes. When specified, the Spot Instance does not terminate before the defined duration expires. Valid values are 60, 120, 180, 240, 300, or 360.</p>
    pub fn get_block_duration_minutes(&self) -> &::std::option::Option<i32> {
        &self.block_duration_minutes
    }
    /// <p>Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option is capacity-optimized (the default), which launches instances from Spot Instance pools with optimal capacity for the number of instances that are launching.</p>
    pub fn allocation_strategy(mut self, input: crate::types::SpotProvisioningAllocationStrategy) -> Self {
        self.allocation_strategy = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option is capacity-optimized (the default), which launches instances from Spot Instance pools with optimal capacity for the number of instances that are launching.</p>
    pub fn set_allocation_strategy(mut self, input: ::std::option::Option<crate::types::SpotProvisioningAllocationStrategy>) -> Self {
        self.allocation_strategy = input;
        self
    }
    /// <p>Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option is capacity-optimized (the default), which launches instances from Spot Instance pools with optimal capacity for the number of instances that are launching.</p>
    pub fn get_allocation_strategy(&self) -> &::std::option::Option<crate::types::SpotProvisioningAllocationStrategy> {
        &self.allocation_strategy
    }
    /// Consumes the builder and constructs a [`SpotProvisioningSpecification`](crate::types::SpotProvisioningSpecification).
    pub fn build(self) -> crate::types::SpotProvisioningSpecification {
        crate::types::SpotProvisioningSpecification {
            timeout_duration_minutes: self.timeout_duration_minutes,
            timeout_action: self.timeout_action,
            block_duration_minutes: self.block_duration_minutes,
            allocation_strategy: self.allocation_strategy,
        }
    }
}
