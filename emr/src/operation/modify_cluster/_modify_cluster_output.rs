/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ModifyCluster</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ModifyClusterOutput {
    /// <p>The number of steps that can be executed concurrently.</p>
    pub step_concurrency_level: ::std::option::Option<i32>,
}
impl ModifyClusterOutput {
    /// <p>The number of steps that can be executed concurrently.</p>
    pub fn step_concurrency_level(&self) -> ::std::option::Option<i32> {
        self.step_concurrency_level
    }
}
impl ModifyClusterOutput {
    /// Creates a new builder-style object to manufacture [`ModifyClusterOutput`](crate::operation::modify_cluster::ModifyClusterOutput).
    pub fn builder() -> crate::operation::modify_cluster::builders::ModifyClusterOutputBuilder {
        crate::operation::modify_cluster::builders::ModifyClusterOutputBuilder::default()
    }
    /// Converts this [`ModifyClusterOutput`](crate::operation::modify_cluster::ModifyClusterOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::modify_cluster::builders::ModifyClusterOutputBuilder {
        crate::operation::modify_cluster::builders::ModifyClusterOutputBuilder {
            step_concurrency_level: self.step_concurrency_level,
        }
    }
}

/// A builder for [`ModifyClusterOutput`](crate::operation::modify_cluster::ModifyClusterOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ModifyClusterOutputBuilder {
    pub(crate) step_concurrency_level: ::std::option::Option<i32>,
}
impl ModifyClusterOutputBuilder {
    /// <p>The number of steps that can be executed concurrently.</p>
    pub fn step_concurrency_level(mut self, input: i32) -> Self {
        self.step_concurrency_level = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of steps that can be executed concurrently.</p>
    pub fn set_step_concurrency_level(mut self, input: ::std::option::Option<i32>) -> Self {
        self.step_concurrency_level = input;
        self
    }
    /// <p>The number of steps that can be executed concurrently.</p>
    pub fn get_step_concurrency_level(&self) -> &::std::option::Option<i32> {
        &self.step_concurrency_level
    }
    /// Consumes the builder and constructs a [`ModifyClusterOutput`](crate::operation::modify_cluster::ModifyClusterOutput).
    pub fn build(self) -> crate::operation::modify_cluster::ModifyClusterOutput {
        crate::operation::modify_cluster::ModifyClusterOutput {
            step_concurrency_level: self.step_concurrency_level,
        }
    }
}
