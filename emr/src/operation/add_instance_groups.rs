/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Adds one or more instance groups to a running cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AddInstanceGroups;
impl AddInstanceGroups {
    /// Creates a new `AddInstanceGroups`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for AddInstanceGroups {
    const NAME: &'static str = "AddInstanceGroups";

    type Input = crate::operation::add_instance_groups::AddInstanceGroupsInput;
    type Output = crate::operation::add_instance_groups::AddInstanceGroupsOutput;
    type Error = crate::Error;
}

pub use crate::operation::add_instance_groups::_add_instance_groups_input::AddInstanceGroupsInput;

pub use crate::operation::add_instance_groups::_add_instance_groups_output::AddInstanceGroupsOutput;

mod _add_instance_groups_input;

mod _add_instance_groups_output;

/// Builders
pub mod builders {
    pub use crate::operation::add_instance_groups::_add_instance_groups_input::AddInstanceGroupsInputBuilder;

    pub use crate::operation::add_instance_groups::_add_instance_groups_output::AddInstanceGroupsOutputBuilder;
}
