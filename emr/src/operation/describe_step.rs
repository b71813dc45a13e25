/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides more detail about the cluster step.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DescribeStep;
impl DescribeStep {
    /// Creates a new `DescribeStep`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for DescribeStep {
    const NAME: &'static str = "DescribeStep";

    type Input = crate::operation::describe_step::DescribeStepInput;
    type Output = crate::operation::describe_step::DescribeStepOutput;
    type Error = crate::Error;
}

pub use crate::operation::describe_step::_describe_step_input::DescribeStepInput;

pub use crate::operation::describe_step::_describe_step_output::DescribeStepOutput;

mod _describe_step_input;

mod _describe_step_output;

/// Builders
pub mod builders {
    pub use crate::operation::describe_step::_describe_step_input::DescribeStepInputBuilder;

    pub use crate::operation::describe_step::_describe_step_output::DescribeStepOutputBuilder;
}
