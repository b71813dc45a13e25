/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Modifies the number of steps that can be executed concurrently for the cluster specified using ClusterID.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ModifyCluster;
impl ModifyCluster {
    /// Creates a new `ModifyCluster`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ModifyCluster {
    const NAME: &'static str = "ModifyCluster";

    type Input = crate::operation::modify_cluster::ModifyClusterInput;
    type Output = crate::operation::modify_cluster::ModifyClusterOutput;
    type Error = crate::Error;
}

pub use crate::operation::modify_cluster::_modify_cluster_input::ModifyClusterInput;

pub use crate::operation::modify_cluster::_modify_cluster_output::ModifyClusterOutput;

mod _modify_cluster_input;

mod _modify_cluster_output;

/// Builders
pub mod builders {
    pub use crate::operation::modify_cluster::_modify_cluster_input::ModifyClusterInputBuilder;

    pub use crate::operation::modify_cluster::_modify_cluster_output::ModifyClusterOutputBuilder;
}
