/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The launch specification for On-Demand Instances in the instance fleet, which determines the allocation strategy.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct OnDemandProvisioningSpecification {
    /// <p>Specifies the strategy to use in launching On-Demand Instance fleets. Currently, the only option is <code>lowest-price</code> (the default), which launches the lowest price first.</p>
    pub allocation_strategy: ::std::option::Option<crate::types::OnDemandProvisioningAllocationStrategy>,
}
impl OnDemandProvisioningSpecification {
    /// <p>Specifies the strategy to use in launching On-Demand Instance fleets. Currently, the only option is <code>lowest-price</code> (the default), which launches the lowest price first.</p>
    pub fn allocation_strategy(&self) -> ::std::option::Option<&crate::types::OnDemandProvisioningAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }
}
impl OnDemandProvisioningSpecification {
    /// Creates a new builder-style object to manufacture [`OnDemandProvisioningSpecification`](crate::types::OnDemandProvisioningSpecification).
    pub fn builder() -> crate::types::builders::OnDemandProvisioningSpecificationBuilder {
        crate::types::builders::OnDemandProvisioningSpecificationBuilder::default()
    }
    /// Converts this [`OnDemandProvisioningSpecification`](crate::types::OnDemandProvisioningSpecification) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::OnDemandProvisioningSpecificationBuilder {
        crate::types::builders::OnDemandProvisioningSpecificationBuilder {
            allocation_strategy: self.allocation_strategy,
        }
    }
}

/// A builder for [`OnDemandProvisioningSpecification`](crate::types::OnDemandProvisioningSpecification).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct OnDemandProvisioningSpecificationBuilder {
    pub(crate) allocation_strategy: ::std::option::Option<crate::types::OnDemandProvisioningAllocationStrategy>,
}
impl OnDemandProvisioningSpecificationBuilder {
    /// <p>Specifies the strategy to use in launching On-Demand Instance fleets. Currently, the only option is <code>lowest-price</code> (the default), which launches the lowest price first.</p>
    pub fn allocation_strategy(mut self, input: crate::types::OnDemandProvisioningAllocationStrategy) -> Self {
        self.allocation_strategy = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the strategy to use in launching On-Demand Instance fleets. Currently, the only option is <code>lowest-price</code> (the default), which launches the lowest price first.</p>
    pub fn set_allocation_strategy(mut self, input: ::std::option::Option<crate::types::OnDemandProvisioningAllocationStrategy>) -> Self {
        self.allocation_strategy = input;
        self
    }
    /// <p>Specifies the strategy to use in launching On-Demand Instance fleets. Currently, the only option is <code>lowest-price</code> (the default), which launches the lowest price first.</p>
    pub fn get_allocation_strategy(&self) -> &::std::option::Option<crate::types::OnDemandProvisioningAllocationStrategy> {
        &self.allocation_strategy
    }
    /// Consumes the builder and constructs a [`OnDemandProvisioningSpecification`](crate::types::OnDemandProvisioningSpecification).
    pub fn build(self) -> crate::types::OnDemandProvisioningSpecification {
        crate::types::OnDemandProvisioningSpecification {
            allocation_strategy: self.allocation_strategy,
        }
    }
}
