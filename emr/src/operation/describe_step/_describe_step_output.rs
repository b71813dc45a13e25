/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>DescribeStep</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::fmt::Debug)]
pub struct DescribeStepOutput {
    /// <p>The step details for the requested step identifier.</p>
    pub step: ::std::option::Option<crate::types::Step>,
}
impl DescribeStepOutput {
    /// <p>The step details for the requested step identifier.</p>
    pub fn step(&self) -> ::std::option::Option<&crate::types::Step> {
        self.step.as_ref()
    }
}
impl DescribeStepOutput {
    /// Creates a new builder-style object to manufacture [`DescribeStepOutput`](crate::operation::describe_step::DescribeStepOutput).
    pub fn builder() -> crate::operation::describe_step::builders::DescribeStepOutputBuilder {
        crate::operation::describe_step::builders::DescribeStepOutputBuilder::default()
    }
    /// Converts this [`DescribeStepOutput`](crate::operation::describe_step::DescribeStepOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_step::builders::DescribeStepOutputBuilder {
        crate::operation::describe_step::builders::DescribeStepOutputBuilder {
            step: self.step,
        }
    }
}

/// A builder for [`DescribeStepOutput`](crate::operation::describe_step::DescribeStepOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeStepOutputBuilder {
    pub(crate) step: ::std::option::Option<crate::types::Step>,
}
impl DescribeStepOutputBuilder {
    /// <p>The step details for the requested step identifier.</p>
    pub fn step(mut self, input: crate::types::Step) -> Self {
        self.step = ::std::option::Option::Some(input);
        self
    }
    /// <p>The step details for the requested step identifier.</p>
    pub fn set_step(mut self, input: ::std::option::Option<crate::types::Step>) -> Self {
        self.step = input;
        self
    }
    /// <p>The step details for the requested step identifier.</p>
    pub fn get_step(&self) -> &::std::option::Option<crate::types::Step> {
        &self.step
    }
    /// Consumes the builder and constructs a [`DescribeStepOutput`](crate::operation::describe_step::DescribeStepOutput).
    pub fn build(self) -> crate::operation::describe_step::DescribeStepOutput {
        crate::operation::describe_step::DescribeStepOutput {
            step: self.step,
        }
    }
}
