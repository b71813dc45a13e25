/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides all available details about the instance groups in a cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListInstanceGroups;
impl ListInstanceGroups {
    /// Creates a new `ListInstanceGroups`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListInstanceGroups {
    const NAME: &'static str = "ListInstanceGroups";

    type Input = crate::operation::list_instance_groups::ListInstanceGroupsInput;
    type Output = crate::operation::list_instance_groups::ListInstanceGroupsOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_instance_groups::_list_instance_groups_input::ListInstanceGroupsInput;

pub use crate::operation::list_instance_groups::_list_instance_groups_output::ListInstanceGroupsOutput;

mod _list_instance_groups_input;

mod _list_instance_groups_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_instance_groups::_list_instance_groups_input::ListInstanceGroupsInputBuilder;

    pub use crate::operation::list_instance_groups::_list_instance_groups_output::ListInstanceGroupsOutputBuilder;
}
