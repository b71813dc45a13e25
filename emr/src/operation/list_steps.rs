/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides a list of steps for the cluster in reverse order unless you specify <code>step_ids</code> with the request of filter by <code>step_states</code>. You can specify a maximum of ten <code>step_ids</code>.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListSteps;
impl ListSteps {
    /// Creates a new `ListSteps`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListSteps {
    const NAME: &'static str = "ListSteps";

    type Input = crate::operation::list_steps::ListStepsInput;
    type Output = crate::operation::list_steps::ListStepsOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_steps::_list_steps_input::ListStepsInput;

pub use crate::operation::list_steps::_list_steps_output::ListStepsOutput;

mod _list_steps_input;

mod _list_steps_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_steps::_list_steps_input::ListStepsInputBuilder;

    pub use crate::operation::list_steps::_list_steps_output::ListStepsOutputBuilder;
}
