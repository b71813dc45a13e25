/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>DescribeJobFlows</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct DescribeJobFlowsOutput {
    /// <p>A list of job flows matching the parameters supplied.</p>
    pub job_flows: ::std::option::Option<::std::vec::Vec<crate::types::JobFlowDetail>>,
}
impl DescribeJobFlowsOutput {
    /// <p>A list of job flows matching the parameters supplied.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.job_flows.is_none()</code>.
    pub fn job_flows(&self) -> &[crate::types::JobFlowDetail] {
        self.job_flows.as_deref().unwrap_or_default()
    }
}
impl DescribeJobFlowsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeJobFlowsOutput`](crate::operation::describe_job_flows::DescribeJobFlowsOutput).
    pub fn builder() -> crate::operation::describe_job_flows::builders::DescribeJobFlowsOutputBuilder {
        crate::operation::describe_job_flows::builders::DescribeJobFlowsOutputBuilder::default()
    }
    /// Converts this [`DescribeJobFlowsOutput`](crate::operation::describe_job_flows::DescribeJobFlowsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::describe_job_flows::builders::DescribeJobFlowsOutputBuilder {
        crate::operation::describe_job_flows::builders::DescribeJobFlowsOutputBuilder {
            job_flows: self.job_flows,
        }
    }
}

/// A builder for [`DescribeJobFlowsOutput`](crate::operation::describe_job_flows::DescribeJobFlowsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct DescribeJobFlowsOutputBuilder {
    pub(crate) job_flows: ::std::option::Option<::std::vec::Vec<crate::types::JobFlowDetail>>,
}
impl DescribeJobFlowsOutputBuilder {
    /// Appends an item to `job_flows`.
    ///
    /// To override the contents of this collection use [`set_job_flows`](Self::set_job_flows).
    ///
    /// <p>A list of job flows matching the parameters supplied.</p>
    pub fn job_flows(mut self, input: crate::types::JobFlowDetail) -> Self {
        let mut v = self.job_flows.unwrap_or_default();
        v.push(input);
        self.job_flows = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of job flows matching the parameters supplied.</p>
    pub fn set_job_flows(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::JobFlowDetail>>) -> Self {
        self.job_flows = input;
        self
    }
    /// <p>A list of job flows matching the parameters supplied.</p>
    pub fn get_job_flows(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::JobFlowDetail>> {
        &self.job_flows
    }
    /// Consumes the builder and constructs a [`DescribeJobFlowsOutput`](crate::operation::describe_job_flows::DescribeJobFlowsOutput).
    pub fn build(self) -> crate::operation::describe_job_flows::DescribeJobFlowsOutput {
        crate::operation::describe_job_flows::DescribeJobFlowsOutput {
            job_flows: self.job_flows,
        }
    }
}
