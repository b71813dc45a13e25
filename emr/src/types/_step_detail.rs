/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Combines the execution state and configuration of a step.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct StepDetail {
    /// <p>The step configuration.</p>
    pub step_config: ::std::option::Option<crate::types::StepConfig>,
    /// <p>The description of the step status.</p>
    pub execution_status_detail: ::std::option::Option<crate::types::StepExecutionStatusDetail>,
}
impl StepDetail {
    /// <p>The step configuration.</p>
    pub fn step_config(&self) -> ::std::option::Option<&crate::types::StepConfig> {
        self.step_config.as_ref()
    }
    /// <p>The description of the step status.</p>
    pub fn execution_status_detail(&self) -> ::std::option::Option<&crate::types::StepExecutionStatusDetail> {
        self.execution_status_detail.as_ref()
    }
}
impl StepDetail {
    /// Creates a new builder-style object to manufacture [`StepDetail`](crate::types::StepDetail).
    pub fn builder() -> crate::types::builders::StepDetailBuilder {
        crate::types::builders::StepDetailBuilder::default()
    }
    /// Converts this [`StepDetail`](crate::types::StepDetail) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::StepDetailBuilder {
        crate::types::builders::StepDetailBuilder {
            step_config: self.step_config,
            execution_status_detail: self.execution_status_detail,
        }
    }
}

/// A builder for [`StepDetail`](crate::types::StepDetail).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct StepDetailBuilder {
    pub(crate) step_config: ::std::option::Option<crate::types::StepConfig>,
    pub(crate) execution_status_detail: ::std::option::Option<crate::types::StepExecutionStatusDetail>,
}
impl StepDetailBuilder {
    /// <p>The step configuration.</p>
    pub fn step_config(mut self, input: crate::types::StepConfig) -> Self {
        self.step_config = ::std::option::Option::Some(input);
        self
    }
    /// <p>The step configuration.</p>
    pub fn set_step_config(mut self, input: ::std::option::Option<crate::types::StepConfig>) -> Self {
        self.step_config = input;
        self
    }
    /// <p>The step configuration.</p>
    pub fn get_step_config(&self) -> &::std::option::Option<crate::types::StepConfig> {
        &self.step_config
    }
    /// <p>The description of the step status.</p>
    pub fn execution_status_detail(mut self, input: crate::types::StepExecutionStatusDetail) -> Self {
        self.execution_status_detail = ::std::option::Option::Some(input);
        self
    }
    /// <p>The description of the step status.</p>
    pub fn set_execution_status_detail(mut self, input: ::std::option::Option<crate::types::StepExecutionStatusDetail>) -> Self {
        self.execution_status_detail = input;
        self
    }
    /// <p>The description of the step status.</p>
    pub fn get_execution_status_detail(&self) -> &::std::option::Option<crate::types::StepExecutionStatusDetail> {
        &self.execution_status_detail
    }
    /// Consumes the builder and constructs a [`StepDetail`](crate::types::StepDetail).
    pub fn build(self) -> crate::types::StepDetail {
        crate::types::StepDetail {
            step_config: self.step_config,
            execution_status_detail: self.execution_status_detail,
        }
    }
}
