/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>ModifyInstanceGroups modifies the number of nodes and configuration settings of an instance group. The input parameters include the new target instance count for the group and the instance group ID. The call will either succeed or fail atomically.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ModifyInstanceGroups;
impl ModifyInstanceGroups {
    /// Creates a new `ModifyInstanceGroups`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ModifyInstanceGroups {
    const NAME: &'static str = "ModifyInstanceGroups";

    type Input = crate::operation::modify_instance_groups::ModifyInstanceGroupsInput;
    type Output = crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput;
    type Error = crate::Error;
}

pub use crate::operation::modify_instance_groups::_modify_instance_groups_input::ModifyInstanceGroupsInput;

pub use crate::operation::modify_instance_groups::_modify_instance_groups_output::ModifyInstanceGroupsOutput;

mod _modify_instance_groups_input;

mod _modify_instance_groups_output;

/// Builders
pub mod builders {
    pub use crate::operation::modify_instance_groups::_modify_instance_groups_input::ModifyInstanceGroupsInputBuilder;

    pub use crate::operation::modify_instance_groups::_modify_instance_groups_output::ModifyInstanceGroupsOutputBuilder;
}
