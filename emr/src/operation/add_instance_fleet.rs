/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Adds an instance fleet to a running cluster.</p>
/// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AddInstanceFleet;
impl AddInstanceFleet {
    /// Creates a new `AddInstanceFleet`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for AddInstanceFleet {
    const NAME: &'static str = "AddInstanceFleet";

    type Input = crate::operation::add_instance_fleet::AddInstanceFleetInput;
    type Output = crate::operation::add_instance_fleet::AddInstanceFleetOutput;
    type Error = crate::Error;
}

pub use crate::operation::add_instance_fleet::_add_instance_fleet_input::AddInstanceFleetInput;

pub use crate::operation::add_instance_fleet::_add_instance_fleet_output::AddInstanceFleetOutput;

mod _add_instance_fleet_input;

mod _add_instance_fleet_output;

/// Builders
pub mod builders {
    pub use crate::operation::add_instance_fleet::_add_instance_fleet_input::AddInstanceFleetInputBuilder;

    pub use crate::operation::add_instance_fleet::_add_instance_fleet_output::AddInstanceFleetOutputBuilder;
}
