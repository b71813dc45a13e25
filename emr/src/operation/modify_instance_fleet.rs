/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Modifies the target On-Demand and target Spot capacities for the instance fleet with the specified InstanceFleetID within the cluster specified using ClusterID. The call either succeeds or fails atomically.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ModifyInstanceFleet;
impl ModifyInstanceFleet {
    /// Creates a new `ModifyInstanceFleet`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ModifyInstanceFleet {
    const NAME: &'static str = "ModifyInstanceFleet";

    type Input = crate::operation::modify_instance_fleet::ModifyInstanceFleetInput;
    type Output = crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput;
    type Error = crate::Error;
}

pub use crate::operation::modify_instance_fleet::_modify_instance_fleet_input::ModifyInstanceFleetInput;

pub use crate::operation::modify_instance_fleet::_modify_instance_fleet_output::ModifyInstanceFleetOutput;

mod _modify_instance_fleet_input;

mod _modify_instance_fleet_output;

/// Builders
pub mod builders {
    pub use crate::operation::modify_instance_fleet::_modify_instance_fleet_input::ModifyInstanceFleetInputBuilder;

    pub use crate::operation::modify_instance_fleet::_modify_instance_fleet_output::ModifyInstanceFleetOutputBuilder;
}
