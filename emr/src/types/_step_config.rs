/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Specification of a cluster (job flow) step.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct StepConfig {
    /// <p>The name of the step.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The action to take when the step fails.</p>
    pub action_on_failure: ::std::option::Option<crate::types::ActionOnFailure>,
    /// <p>The JAR file used for the step.</p>
    pub hadoop_jar_step: ::std::option::Option<crate::types::HadoopJarStepConfig>,
}
impl StepConfig {
    /// <p>The name of the step.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The action to take when the step fails.</p>
    pub fn action_on_failure(&self) -> ::std::option::Option<&crate::types::ActionOnFailure> {
        self.action_on_failure.as_ref()
    }
    /// <p>The JAR file used for the step.</p>
    pub fn hadoop_jar_step(&self) -> ::std::option::Option<&crate::types::HadoopJarStepConfig> {
        self.hadoop_jar_step.as_ref()
    }
}
impl StepConfig {
    /// Creates a new builder-style object to manufacture [`StepConfig`](crate::types::StepConfig).
    pub fn builder() -> crate::types::builders::StepConfigBuilder {
        crate::types::builders::StepConfigBuilder::default()
    }
    /// Converts this [`StepConfig`](crate::types::StepConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::StepConfigBuilder {
        crate::types::builders::StepConfigBuilder {
            name: self.name,
            action_on_failure: self.action_on_failure,
            hadoop_jar_step: self.hadoop_jar_step,
        }
    }
}

/// A builder for [`StepConfig`](crate::types::StepConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct StepConfigBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) action_on_failure: ::std::option::Option<crate::types::ActionOnFailure>,
    pub(crate) hadoop_jar_step: ::std::option::Option<crate::types::HadoopJarStepConfig>,
}
impl StepConfigBuilder {
    /// <p>The name of the step.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the step.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the step.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The action to take when the step fails.</p>
    pub fn action_on_failure(mut self, input: crate::types::ActionOnFailure) -> Self {
        self.action_on_failure = ::std::option::Option::Some(input);
        self
    }
    /// <p>The action to take when the step fails.</p>
    pub fn set_action_on_failure(mut self, input: ::std::option::Option<crate::types::ActionOnFailure>) -> Self {
        self.action_on_failure = input;
        self
    }
    /// <p>The action to take when the step fails.</p>
    pub fn get_action_on_failure(&self) -> &::std::option::Option<crate::types::ActionOnFailure> {
        &self.action_on_failure
    }
    /// <p>The JAR file used for the step.</p>
    pub fn hadoop_jar_step(mut self, input: crate::types::HadoopJarStepConfig) -> Self {
        self.hadoop_jar_step = ::std::option::Option::Some(input);
        self
    }
    /// <p>The JAR file used for the step.</p>
    pub fn set_hadoop_jar_step(mut self, input: ::std::option::Option<crate::types::HadoopJarStepConfig>) -> Self {
        self.hadoop_jar_step = input;
        self
    }
    /// <p>The JAR file used for the step.</p>
    pub fn get_hadoop_jar_step(&self) -> &::std::option::Option<crate::types::HadoopJarStepConfig> {
        &self.hadoop_jar_step
    }
    /// Consumes the builder and constructs a [`StepConfig`](crate::types::StepConfig).
    pub fn build(self) -> crate::types::StepConfig {
        crate::types::StepConfig {
            name: self.name,
            action_on_failure: self.action_on_failure,
            hadoop_jar_step: self.hadoop_jar_step,
        }
    }
}
