/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>This represents a step in a cluster.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::fmt::Debug)]
pub struct Step {
    /// <p>The identifier of the cluster step.</p>
    pub id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the cluster step.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub config: ::std::option::Option<crate::types::HadoopStepConfig>,
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility.</p>
    pub action_on_failure: ::std::option::Option<crate::types::ActionOnFailure>,
    /// <p>The current execution status details of the cluster step.</p>
    pub status: ::std::option::Option<crate::types::StepStatus>,
}
impl Step {
    /// <p>The identifier of the cluster step.</p>
    pub fn id(&self) -> ::std::option::Option<&str> {
        self.id.as_deref()
    }
    /// <p>The name of the cluster step.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn config(&self) -> ::std::option::Option<&crate::types::HadoopStepConfig> {
        self.config.as_ref()
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility.</p>
    pub fn action_on_failure(&self) -> ::std::option::Option<&crate::types::ActionOnFailure> {
        self.action_on_failure.as_ref()
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::StepStatus> {
        self.status.as_ref()
    }
}
impl Step {
    /// Creates a new builder-style object to manufacture [`Step`](crate::types::Step).
    pub fn builder() -> crate::types::builders::StepBuilder {
        crate::types::builders::StepBuilder::default()
    }
    /// Converts this [`Step`](crate::types::Step) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::StepBuilder {
        crate::types::builders::StepBuilder {
            id: self.id,
            name: self.name,
            config: self.config,
            action_on_failure: self.action_on_failure,
            status: self.status,
        }
    }
}

/// A builder for [`Step`](crate::types::Step).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct StepBuilder {
    pub(crate) id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) config: ::std::option::Option<crate::types::HadoopStepConfig>,
    pub(crate) action_on_failure: ::std::option::Option<crate::types::ActionOnFailure>,
    pub(crate) status: ::std::option::Option<crate::types::StepStatus>,
}
impl StepBuilder {
    /// <p>The identifier of the cluster step.</p>
    pub fn id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the cluster step.</p>
    pub fn set_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.id = input;
        self
    }
    /// <p>The identifier of the cluster step.</p>
    pub fn get_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.id
    }
    /// <p>The name of the cluster step.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the cluster step.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the cluster step.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn config(mut self, input: crate::types::HadoopStepConfig) -> Self {
        self.config = ::std::option::Option::Some(input);
        self
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn set_config(mut self, input: ::std::option::Option<crate::types::HadoopStepConfig>) -> Self {
        self.config = input;
        self
    }
    /// <p>The Hadoop job configuration of the cluster step.</p>
    pub fn get_config(&self) -> &::std::option::Option<crate::types::HadoopStepConfig> {
        &self.config
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility.</p>
    pub fn action_on_failure(mut self, input: crate::types::ActionOnFailure) -> Self {
        self.action_on_failure = ::std::option::Option::Some(input);
        self
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility.</p>
    pub fn set_action_on_failure(mut self, input: ::std::option::Option<crate::types::ActionOnFailure>) -> Self {
        self.action_on_failure = input;
        self
    }
    /// <p>The action to take when the cluster step fails. Possible values are TERMINATE_CLUSTER, CANCEL_AND_WAIT, and CONTINUE. TERMINATE_JOB_FLOW is provided for backward compatibility.</p>
    pub fn get_action_on_failure(&self) -> &::std::option::Option<crate::types::ActionOnFailure> {
        &self.action_on_failure
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn status(mut self, input: crate::types::StepStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::StepStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The current execution status details of the cluster step.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::StepStatus> {
        &self.status
    }
    /// Consumes the builder and constructs a [`Step`](crate::types::Step).
    pub fn build(self) -> crate::types::Step {
        crate::types::Step {
            id: self.id,
            name: self.name,
            config: self.config,
            action_on_failure: self.action_on_failure,
            status: self.status,
        }
    }
}
