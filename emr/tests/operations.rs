/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use emr::operation::add_instance_fleet::{
    AddInstanceFleet, AddInstanceFleetInput, AddInstanceFleetOutput,
};
use emr::operation::list_clusters::ListClustersInput;
use emr::operation::run_job_flow::{RunJobFlow, RunJobFlowInput, RunJobFlowOutput};
use emr::operation::terminate_job_flows::TerminateJobFlowsOutput;
use emr::operation::{OperationShape, OPERATION_NAMES};
use emr::primitives::DateTime;
use emr::types::{
    ActionOnFailure, Application, BootstrapActionConfig, ClusterState, ComputeLimits,
    ComputeLimitsUnitType, Configuration, HadoopJarStepConfig, InstanceFleetConfig,
    InstanceFleetType, InstanceGroupConfig, InstanceRoleType, InstanceTypeConfig,
    JobFlowInstancesConfig, KerberosAttributes, ManagedScalingPolicy, MarketType,
    RepoUpgradeOnBoot, ScaleDownBehavior, ScriptBootstrapActionConfig, StepConfig,
    SupportedProductConfig, Tag,
};
use pretty_assertions::assert_eq;

fn run_job_flow_input() -> RunJobFlowInput {
    RunJobFlowInput::builder()
        .name("nightly-etl")
        .release_label("emr-6.2.0")
        .log_uri("s3://logs/emr/")
        .applications(Application::builder().name("Spark").build())
        .applications(Application::builder().name("Hive").build())
        .instances(
            JobFlowInstancesConfig::builder()
                .instance_groups(
                    InstanceGroupConfig::builder()
                        .instance_role(InstanceRoleType::Master)
                        .market(MarketType::OnDemand)
                        .instance_type("m5.xlarge")
                        .instance_count(1)
                        .build(),
                )
                .keep_job_flow_alive_when_no_steps(false)
                .build(),
        )
        .steps(
            StepConfig::builder()
                .name("spark-submit")
                .action_on_failure(ActionOnFailure::TerminateCluster)
                .hadoop_jar_step(
                    HadoopJarStepConfig::builder()
                        .jar("command-runner.jar")
                        .args("spark-submit")
                        .args("s3://code/job.py")
                        .build(),
                )
                .build(),
        )
        .kerberos_attributes(
            KerberosAttributes::builder()
                .realm("EC2.INTERNAL")
                .kdc_admin_password("hunter2")
                .build(),
        )
        .visible_to_all_users(true)
        .step_concurrency_level(1)
        .build()
}

#[test]
fn run_job_flow_input_reads_back() {
    let input = run_job_flow_input();
    assert_eq!(Some("nightly-etl"), input.name());
    let names: Vec<_> = input.applications().iter().filter_map(|a| a.name()).collect();
    assert_eq!(vec!["Spark", "Hive"], names);

    let group = &input.instances().expect("instances").instance_groups()[0];
    assert_eq!(Some(&InstanceRoleType::Master), group.instance_role());
    assert_eq!(Some(1), group.instance_count());

    let step = &input.steps()[0];
    assert_eq!(Some(&ActionOnFailure::TerminateCluster), step.action_on_failure());
    assert_eq!(
        &["spark-submit".to_string(), "s3://code/job.py".to_string()],
        step.hadoop_jar_step().expect("jar step").args()
    );
    assert!(input.bootstrap_actions().is_empty());
    assert_eq!(Some(true), input.visible_to_all_users());
}

#[test]
fn nested_sensitive_members_stay_redacted() {
    let debug = format!("{:?}", run_job_flow_input());
    assert!(debug.contains("nightly-etl"));
    assert!(!debug.contains("hunter2"));
}

/// Clears each named member of a fully populated value in turn and checks that the result
/// differs from the original.
macro_rules! check_each_member_matters {
    ($value:expr; $($setter:ident),* $(,)?) => {
        let value = $value;
        $(
            let cleared = value.clone().into_builder().$setter(None).build();
            assert_ne!(value, cleared, "clearing `{}` kept the value equal", stringify!($setter));
        )*
    };
}

fn full_run_job_flow_input() -> RunJobFlowInput {
    run_job_flow_input()
        .into_builder()
        .additional_info("{\"jobFlowType\":\"batch\"}")
        .ami_version("3.11.0")
        .bootstrap_actions(
            BootstrapActionConfig::builder()
                .name("install-deps")
                .script_bootstrap_action(
                    ScriptBootstrapActionConfig::builder()
                        .path("s3://code/bootstrap.sh")
                        .args("--quiet")
                        .build(),
                )
                .build(),
        )
        .supported_products("mapr-m5")
        .new_supported_products(
            SupportedProductConfig::builder()
                .name("mapr-m7")
                .args("--edition")
                .args("m7")
                .build(),
        )
        .configurations(
            Configuration::builder()
                .classification("spark-defaults")
                .properties("spark.executor.memory", "4g")
                .build(),
        )
        .job_flow_role("EMR_EC2_DefaultRole")
        .service_role("EMR_DefaultRole")
        .tags(Tag::builder().key("team").value("data").build())
        .security_configuration("kerberos-config")
        .auto_scaling_role("EMR_AutoScaling_DefaultRole")
        .scale_down_behavior(ScaleDownBehavior::TerminateAtInstanceHour)
        .custom_ami_id("ami-0123456789abcdef0")
        .ebs_root_volume_size(32)
        .repo_upgrade_on_boot(RepoUpgradeOnBoot::None)
        .managed_scaling_policy(
            ManagedScalingPolicy::builder()
                .compute_limits(
                    ComputeLimits::builder()
                        .unit_type(ComputeLimitsUnitType::InstanceFleetUnits)
                        .minimum_capacity_units(2)
                        .maximum_capacity_units(20)
                        .build(),
                )
                .build(),
        )
        .build()
}

#[test]
fn into_builder_preserves_every_member() {
    let input = full_run_job_flow_input();
    let rebuilt = input.clone().into_builder().build();
    assert_eq!(input, rebuilt);

    let changed = input.clone().into_builder().release_label("emr-6.3.0").build();
    assert_ne!(input, changed);
    assert_eq!(input.steps(), changed.steps());
}

#[test]
fn full_run_job_flow_input_reads_back() {
    let input = full_run_job_flow_input();
    assert_eq!(Some("{\"jobFlowType\":\"batch\"}"), input.additional_info());
    assert_eq!(Some("3.11.0"), input.ami_version());
    assert_eq!(
        Some("s3://code/bootstrap.sh"),
        input.bootstrap_actions()[0]
            .script_bootstrap_action()
            .and_then(|a| a.path())
    );
    assert_eq!(&["mapr-m5".to_string()], input.supported_products());
    assert_eq!(
        &["--edition".to_string(), "m7".to_string()],
        input.new_supported_products()[0].args()
    );
    assert_eq!(Some("spark-defaults"), input.configurations()[0].classification());
    assert_eq!(Some("EMR_EC2_DefaultRole"), input.job_flow_role());
    assert_eq!(Some("EMR_DefaultRole"), input.service_role());
    assert_eq!(Some("team"), input.tags()[0].key());
    assert_eq!(Some("kerberos-config"), input.security_configuration());
    assert_eq!(Some("EMR_AutoScaling_DefaultRole"), input.auto_scaling_role());
    assert_eq!(
        Some(&ScaleDownBehavior::TerminateAtInstanceHour),
        input.scale_down_behavior()
    );
    assert_eq!(Some("ami-0123456789abcdef0"), input.custom_ami_id());
    assert_eq!(Some(32), input.ebs_root_volume_size());
    assert_eq!(Some(&RepoUpgradeOnBoot::None), input.repo_upgrade_on_boot());
    assert_eq!(Some(1), input.step_concurrency_level());
    let limits = input
        .managed_scaling_policy()
        .and_then(|p| p.compute_limits())
        .expect("compute limits");
    assert_eq!(
        Some(&ComputeLimitsUnitType::InstanceFleetUnits),
        limits.unit_type()
    );
    assert_eq!(Some(20), limits.maximum_capacity_units());
    assert_eq!(None, limits.maximum_core_capacity_units());
}

#[test]
fn every_run_job_flow_member_takes_part_in_equality() {
    check_each_member_matters!(
        full_run_job_flow_input();
        set_name,
        set_log_uri,
        set_additional_info,
        set_ami_version,
        set_release_label,
        set_instances,
        set_steps,
        set_bootstrap_actions,
        set_supported_products,
        set_new_supported_products,
        set_applications,
        set_configurations,
        set_visible_to_all_users,
        set_job_flow_role,
        set_service_role,
        set_tags,
        set_security_configuration,
        set_auto_scaling_role,
        set_scale_down_behavior,
        set_custom_ami_id,
        set_ebs_root_volume_size,
        set_repo_upgrade_on_boot,
        set_kerberos_attributes,
        set_step_concurrency_level,
        set_managed_scaling_policy,
    );
}

#[test]
fn add_instance_fleet_round_trip() {
    let input = AddInstanceFleetInput::builder()
        .cluster_id("j-3SD91U2E1L2QX")
        .instance_fleet(
            InstanceFleetConfig::builder()
                .name("task-fleet")
                .instance_fleet_type(InstanceFleetType::Task)
                .target_spot_capacity(10)
                .instance_type_configs(
                    InstanceTypeConfig::builder()
                        .instance_type("r5.2xlarge")
                        .weighted_capacity(2)
                        .bid_price_as_percentage_of_on_demand_price(50.0)
                        .build(),
                )
                .build(),
        )
        .build();
    let fleet = input.instance_fleet().expect("fleet");
    assert_eq!(Some(&InstanceFleetType::Task), fleet.instance_fleet_type());
    assert_eq!(Some(10), fleet.target_spot_capacity());
    assert_eq!(None, fleet.target_on_demand_capacity());
    assert_eq!(
        Some(50.0),
        fleet.instance_type_configs()[0].bid_price_as_percentage_of_on_demand_price()
    );

    let output = AddInstanceFleetOutput::builder()
        .cluster_id("j-3SD91U2E1L2QX")
        .instance_fleet_id("if-1ABC")
        .cluster_arn("arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-3SD91U2E1L2QX")
        .build();
    assert_eq!(Some("if-1ABC"), output.instance_fleet_id());
}

#[test]
fn list_filters_keep_enum_order() {
    let input = ListClustersInput::builder()
        .created_after(DateTime::from_secs(0))
        .cluster_states(ClusterState::Waiting)
        .cluster_states(ClusterState::Running)
        .build();
    assert_eq!(
        &[ClusterState::Waiting, ClusterState::Running],
        input.cluster_states()
    );
    assert_eq!(Some(&DateTime::from_secs(0)), input.created_after());
    assert_eq!(None, input.marker());
}

#[test]
fn memberless_outputs_are_all_equal() {
    assert_eq!(
        TerminateJobFlowsOutput::builder().build(),
        TerminateJobFlowsOutput::builder().build()
    );
}

#[test]
fn operation_shapes_link_input_and_output() {
    fn names<Op: OperationShape>() -> (&'static str, String) {
        (Op::NAME, Op::target())
    }
    assert_eq!(
        ("RunJobFlow", "ElasticMapReduce.RunJobFlow".to_string()),
        names::<RunJobFlow>()
    );
    assert_eq!("AddInstanceFleet", AddInstanceFleet::NAME);
    assert!(OPERATION_NAMES.contains(&RunJobFlow::NAME));

    let output: <RunJobFlow as OperationShape>::Output =
        RunJobFlowOutput::builder().job_flow_id("j-1").build();
    assert_eq!(Some("j-1"), output.job_flow_id());
}
