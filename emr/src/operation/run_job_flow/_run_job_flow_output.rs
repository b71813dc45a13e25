/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>RunJobFlow</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RunJobFlowOutput {
    /// <p>An unique identifier for the job flow.</p>
    pub job_flow_id: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub cluster_arn: ::std::option::Option<::std::string::String>,
}
impl RunJobFlowOutput {
    /// <p>An unique identifier for the job flow.</p>
    pub fn job_flow_id(&self) -> ::std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(&self) -> ::std::option::Option<&str> {
        self.cluster_arn.as_deref()
    }
}
impl RunJobFlowOutput {
    /// Creates a new builder-style object to manufacture [`RunJobFlowOutput`](crate::operation::run_job_flow::RunJobFlowOutput).
    pub fn builder() -> crate::operation::run_job_flow::builders::RunJobFlowOutputBuilder {
        crate::operation::run_job_flow::builders::RunJobFlowOutputBuilder::default()
    }
    /// Converts this [`RunJobFlowOutput`](crate::operation::run_job_flow::RunJobFlowOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::run_job_flow::builders::RunJobFlowOutputBuilder {
        crate::operation::run_job_flow::builders::RunJobFlowOutputBuilder {
            job_flow_id: self.job_flow_id,
            cluster_arn: self.cluster_arn,
        }
    }
}

/// A builder for [`RunJobFlowOutput`](crate::operation::run_job_flow::RunJobFlowOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RunJobFlowOutputBuilder {
    pub(crate) job_flow_id: ::std::option::Option<::std::string::String>,
    pub(crate) cluster_arn: ::std::option::Option<::std::string::String>,
}
impl RunJobFlowOutputBuilder {
    /// <p>An unique identifier for the job flow.</p>
    pub fn job_flow_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An unique identifier for the job flow.</p>
    pub fn set_job_flow_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_id = input;
        self
    }
    /// <p>An unique identifier for the job flow.</p>
    pub fn get_job_flow_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_id
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn cluster_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn set_cluster_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_arn = input;
        self
    }
    /// <p>The Amazon Resource Name of the cluster.</p>
    pub fn get_cluster_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_arn
    }
    /// Consumes the builder and constructs a [`RunJobFlowOutput`](crate::operation::run_job_flow::RunJobFlowOutput).
    pub fn build(self) -> crate::operation::run_job_flow::RunJobFlowOutput {
        crate::operation::run_job_flow::RunJobFlowOutput {
            job_flow_id: self.job_flow_id,
            cluster_arn: self.cluster_arn,
        }
    }
}
