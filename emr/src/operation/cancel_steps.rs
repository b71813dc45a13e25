/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Cancels a pending step or steps in a running cluster. Available only in Amazon EMR versions 4.8.0 and later, excluding version 5.0.0. A maximum of 256 steps are allowed in each CancelSteps request.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct CancelSteps;
impl CancelSteps {
    /// Creates a new `CancelSteps`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for CancelSteps {
    const NAME: &'static str = "CancelSteps";

    type Input = crate::operation::cancel_steps::CancelStepsInput;
    type Output = crate::operation::cancel_steps::CancelStepsOutput;
    type Error = crate::Error;
}

pub use crate::operation::cancel_steps::_cancel_steps_input::CancelStepsInput;

pub use crate::operation::cancel_steps::_cancel_steps_output::CancelStepsOutput;

mod _cancel_steps_input;

mod _cancel_steps_output;

/// Builders
pub mod builders {
    pub use crate::operation::cancel_steps::_cancel_steps_input::CancelStepsInputBuilder;

    pub use crate::operation::cancel_steps::_cancel_steps_output::CancelStepsOutputBuilder;
}
