/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation shapes for Amazon EMR.
//!
//! Each submodule holds the input and output structures of one operation, plus a unit type that
//! implements [`OperationShape`] and ties them together.

/// Models the [Smithy Operation shape].
///
/// [Smithy Operation shape]: https://awslabs.github.io/smithy/1.0/spec/core/model.html#operation
pub trait OperationShape {
    /// The name of the operation.
    const NAME: &'static str;

    /// The operation input.
    type Input;
    /// The operation output.
    type Output;
    /// The operation error.
    type Error;

    /// The `X-Amz-Target` value that identifies this operation on the wire.
    fn target() -> String {
        format!("{}.{}", SERVICE_TARGET_PREFIX, Self::NAME)
    }
}

/// Prefix of every operation's `X-Amz-Target` value.
pub const SERVICE_TARGET_PREFIX: &str = "ElasticMapReduce";

/// The names of every operation in the service, in alphabetical order.
pub const OPERATION_NAMES: &[&str] = &[
    "AddInstanceFleet",
    "AddInstanceGroups",
    "AddJobFlowSteps",
    "AddTags",
    "CancelSteps",
    "CreateSecurityConfiguration",
    "DeleteSecurityConfiguration",
    "DescribeCluster",
    "DescribeJobFlows",
    "DescribeSecurityConfiguration",
    "DescribeStep",
    "GetBlockPublicAccessConfiguration",
    "GetManagedScalingPolicy",
    "ListBootstrapActions",
    "ListClusters",
    "ListInstanceFleets",
    "ListInstanceGroups",
    "ListInstances",
    "ListSecurityConfigurations",
    "ListSteps",
    "ModifyCluster",
    "ModifyInstanceFleet",
    "ModifyInstanceGroups",
    "PutAutoScalingPolicy",
    "PutBlockPublicAccessConfiguration",
    "PutManagedScalingPolicy",
    "RemoveAutoScalingPolicy",
    "RemoveManagedScalingPolicy",
    "RemoveTags",
    "RunJobFlow",
    "SetTerminationProtection",
    "SetVisibleToAllUsers",
    "TerminateJobFlows",
];

/// Types for the `AddInstanceFleet` operation.
pub mod add_instance_fleet;

/// Types for the `AddInstanceGroups` operation.
pub mod add_instance_groups;

/// Types for the `AddJobFlowSteps` operation.
pub mod add_job_flow_steps;

/// Types for the `AddTags` operation.
pub mod add_tags;

/// Types for the `CancelSteps` operation.
pub mod cancel_steps;

/// Types for the `CreateSecurityConfiguration` operation.
pub mod create_security_configuration;

/// Types for the `DeleteSecurityConfiguration` operation.
pub mod delete_security_configuration;

/// Types for the `DescribeCluster` operation.
pub mod describe_cluster;

/// Types for the `DescribeJobFlows` operation.
pub mod describe_job_flows;

/// Types for the `DescribeSecurityConfiguration` operation.
pub mod describe_security_configuration;

/// Types for the `DescribeStep` operation.
pub mod describe_step;

/// Types for the `GetBlockPublicAccessConfiguration` operation.
pub mod get_block_public_access_configuration;

/// Types for the `GetManagedScalingPolicy` operation.
pub mod get_managed_scaling_policy;

/// Types for the `ListBootstrapActions` operation.
pub mod list_bootstrap_actions;

/// Types for the `ListClusters` operation.
pub mod list_clusters;

/// Types for the `ListInstanceFleets` operation.
pub mod list_instance_fleets;

/// Types for the `ListInstanceGroups` operation.
pub mod list_instance_groups;

/// Types for the `ListInstances` operation.
pub mod list_instances;

/// Types for the `ListSecurityConfigurations` operation.
pub mod list_security_configurations;

/// Types for the `ListSteps` operation.
pub mod list_steps;

/// Types for the `ModifyCluster` operation.
pub mod modify_cluster;

/// Types for the `ModifyInstanceFleet` operation.
pub mod modify_instance_fleet;

/// Types for the `ModifyInstanceGroups` operation.
pub mod modify_instance_groups;

/// Types for the `PutAutoScalingPolicy` operation.
pub mod put_auto_scaling_policy;

/// Types for the `PutBlockPublicAccessConfiguration` operation.
pub mod put_block_public_access_configuration;

/// Types for the `PutManagedScalingPolicy` operation.
pub mod put_managed_scaling_policy;

/// Types for the `RemoveAutoScalingPolicy` operation.
pub mod remove_auto_scaling_policy;

/// Types for the `RemoveManagedScalingPolicy` operation.
pub mod remove_managed_scaling_policy;

/// Types for the `RemoveTags` operation.
pub mod remove_tags;

/// Types for the `RunJobFlow` operation.
pub mod run_job_flow;

/// Types for the `SetTerminationProtection` operation.
pub mod set_termination_protection;

/// Types for the `SetVisibleToAllUsers` operation.
pub mod set_visible_to_all_users;

/// Types for the `TerminateJobFlows` operation.
pub mod terminate_job_flows;

#[cfg(test)]
mod test {
    use super::{OperationShape, OPERATION_NAMES};
    use crate::operation::describe_cluster::DescribeCluster;
    use crate::operation::run_job_flow::RunJobFlow;

    #[test]
    fn target_is_prefixed_with_the_service_name() {
        assert_eq!("ElasticMapReduce.RunJobFlow", RunJobFlow::target());
        assert_eq!("DescribeCluster", DescribeCluster::NAME);
    }

    #[test]
    fn operation_names_are_sorted_and_unique() {
        let mut sorted = OPERATION_NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(OPERATION_NAMES, sorted.as_slice());
        assert_eq!(33, OPERATION_NAMES.len());
    }

    fn name_and_target<Op: OperationShape>() -> (&'static str, String) {
        (Op::NAME, Op::target())
    }

    macro_rules! check_operations {
        ($($module:ident::$op:ident),* $(,)?) => {{
            let mut listed = Vec::new();
            $(
                let (name, target) = name_and_target::<crate::operation::$module::$op>();
                assert_eq!(stringify!($op), name);
                assert_eq!(format!("ElasticMapReduce.{}", stringify!($op)), target);
                listed.push(name);
            )*
            listed
        }};
    }

    #[test]
    fn every_operation_marker_matches_its_listed_name() {
        let listed = check_operations!(
            add_instance_fleet::AddInstanceFleet,
            add_instance_groups::AddInstanceGroups,
            add_job_flow_steps::AddJobFlowSteps,
            add_tags::AddTags,
            cancel_steps::CancelSteps,
            create_security_configuration::CreateSecurityConfiguration,
            delete_security_configuration::DeleteSecurityConfiguration,
            describe_cluster::DescribeCluster,
            describe_job_flows::DescribeJobFlows,
            describe_security_configuration::DescribeSecurityConfiguration,
            describe_step::DescribeStep,
            get_block_public_access_configuration::GetBlockPublicAccessConfiguration,
            get_managed_scaling_policy::GetManagedScalingPolicy,
            list_bootstrap_actions::ListBootstrapActions,
            list_clusters::ListClusters,
            list_instance_fleets::ListInstanceFleets,
            list_instance_groups::ListInstanceGroups,
            list_instances::ListInstances,
            list_security_configurations::ListSecurityConfigurations,
            list_steps::ListSteps,
            modify_cluster::ModifyCluster,
            modify_instance_fleet::ModifyInstanceFleet,
            modify_instance_groups::ModifyInstanceGroups,
            put_auto_scaling_policy::PutAutoScalingPolicy,
            put_block_public_access_configuration::PutBlockPublicAccessConfiguration,
            put_managed_scaling_policy::PutManagedScalingPolicy,
            remove_auto_scaling_policy::RemoveAutoScalingPolicy,
            remove_managed_scaling_policy::RemoveManagedScalingPolicy,
            remove_tags::RemoveTags,
            run_job_flow::RunJobFlow,
            set_termination_protection::SetTerminationProtection,
            set_visible_to_all_users::SetVisibleToAllUsers,
            terminate_job_flows::TerminateJobFlows,
        );
        assert_eq!(OPERATION_NAMES, listed.as_slice());
    }
}
