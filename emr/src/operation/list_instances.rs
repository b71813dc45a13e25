/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides information for all active EC2 instances and EC2 instances terminated in the last 30 days, up to a maximum of 2,000. EC2 instances in any of the following states are considered active: AWAITING_FULFILLMENT, PROVISIONING, BOOTSTRAPPING, RUNNING.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListInstances;
impl ListInstances {
    /// Creates a new `ListInstances`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListInstances {
    const NAME: &'static str = "ListInstances";

    type Input = crate::operation::list_instances::ListInstancesInput;
    type Output = crate::operation::list_instances::ListInstancesOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_instances::_list_instances_input::ListInstancesInput;

pub use crate::operation::list_instances::_list_instances_output::ListInstancesOutput;

mod _list_instances_input;

mod _list_instances_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_instances::_list_instances_input::ListInstancesInputBuilder;

    pub use crate::operation::list_instances::_list_instances_output::ListInstancesOutputBuilder;
}
