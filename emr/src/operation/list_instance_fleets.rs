/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Lists all available details about the instance fleets in a cluster.</p>
/// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListInstanceFleets;
impl ListInstanceFleets {
    /// Creates a new `ListInstanceFleets`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListInstanceFleets {
    const NAME: &'static str = "ListInstanceFleets";

    type Input = crate::operation::list_instance_fleets::ListInstanceFleetsInput;
    type Output = crate::operation::list_instance_fleets::ListInstanceFleetsOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_instance_fleets::_list_instance_fleets_input::ListInstanceFleetsInput;

pub use crate::operation::list_instance_fleets::_list_instance_fleets_output::ListInstanceFleetsOutput;

mod _list_instance_fleets_input;

mod _list_instance_fleets_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_instance_fleets::_list_instance_fleets_input::ListInstanceFleetsInputBuilder;

    pub use crate::operation::list_instance_fleets::_list_instance_fleets_output::ListInstanceFleetsOutputBuilder;
}
