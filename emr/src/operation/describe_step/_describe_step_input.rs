/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>DescribeStep</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DescribeStepInput {
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>The identifier of the step to describe.</p>
    pub step_id: ::std::option::Option<::std::string::String>,
}
impl DescribeStepInput {
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The identifier of the step to describe.</p>
    pub fn step_id(&self) -> ::std::option::Option<&str> {
        self.step_id.as_deref()
    }
}
impl DescribeStepInput {
    /// Creates a new builder-style object to manufacture [`DescribeStepInput`](crate::operation::describe_step::DescribeStepInput).
    pub fn builder() -> crate::operation::describe_step::builders::DescribeStepInputBuilder {
        crate::operation::describe_step::builders::DescribeStepInputBuilder::default()
    }
    /// Converts this [`DescribeStepInput`](crate::operation::describe_step::DescribeStepInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_step::builders::DescribeStepInputBuilder {
        crate::operation::describe_step::builders::DescribeStepInputBuilder {
            cluster_id: self.cluster_id,
            step_id: self.step_id,
        }
    }
}

/// A builder for [`DescribeStepInput`](crate::operation::describe_step::DescribeStepInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeStepInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) step_id: ::std::option::Option<::std::string::String>,
}
impl DescribeStepInputBuilder {
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The identifier of the cluster with steps to describe.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// <p>The identifier of the step to describe.</p>
    pub fn step_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.step_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the step to describe.</p>
    pub fn set_step_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.step_id = input;
        self
    }
    /// <p>The identifier of the step to describe.</p>
    pub fn get_step_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.step_id
    }
    /// Consumes the builder and constructs a [`DescribeStepInput`](crate::operation::describe_step::DescribeStepInput).
    pub fn build(self) -> crate::operation::describe_step::DescribeStepInput {
        crate::operation::describe_step::DescribeStepInput {
            cluster_id: self.cluster_id,
            step_id: self.step_id,
        }
    }
}
