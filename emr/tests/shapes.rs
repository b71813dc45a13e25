/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use emr::primitives::DateTime;
use emr::types::{
    Application, Cluster, ClusterState, ClusterStateChangeReason, ClusterStateChangeReasonCode,
    ClusterStatus, ClusterTimeline, Command, Configuration, EbsConfiguration,
    Ec2InstanceAttributes, HadoopStepConfig, InstanceCollectionType, InstanceTypeConfig,
    KerberosAttributes, MarketType, RepoUpgradeOnBoot, ScaleDownBehavior, ScalingAction,
    SimpleScalingPolicyConfiguration, Tag, VolumeSpecification,
};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn command() -> Command {
    Command::builder()
        .name("my-cmd")
        .script_path("s3://bucket/script.sh")
        .args("a")
        .args("b")
        .build()
}

#[test]
fn command_reads_back_every_field() {
    let command = command();
    assert_eq!(Some("my-cmd"), command.name());
    assert_eq!(Some("s3://bucket/script.sh"), command.script_path());
    assert_eq!(&["a".to_string(), "b".to_string()], command.args());
}

#[test]
fn unset_members_are_absent() {
    let command = Command::builder().build();
    assert_eq!(None, command.name());
    assert_eq!(None, command.script_path());
    assert!(command.args().is_empty());
    assert!(command.args.is_none());
}

#[test]
fn equal_members_mean_equal_values_and_hashes() {
    assert_eq!(command(), command());
    assert_eq!(hash_of(&command()), hash_of(&command()));

    let renamed = command().into_builder().name("other-cmd").build();
    assert_ne!(command(), renamed);

    let reordered = Command::builder()
        .name("my-cmd")
        .script_path("s3://bucket/script.sh")
        .args("b")
        .args("a")
        .build();
    assert_ne!(command(), reordered);
}

#[test]
fn withers_and_setters_reach_the_same_state() {
    let with_setters = Command::builder()
        .set_name(Some("my-cmd".to_string()))
        .set_script_path(Some("s3://bucket/script.sh".to_string()))
        .set_args(Some(vec!["a".to_string(), "b".to_string()]))
        .build();
    assert_eq!(command(), with_setters);

    let tag = Tag::builder().key("team").value("data").build();
    let same = Tag::builder()
        .set_key(Some("team".into()))
        .set_value(Some("data".into()))
        .build();
    assert_eq!(tag, same);
}

#[test]
fn setting_none_clears_a_member() {
    let builder = command().into_builder().set_args(None).set_name(None);
    assert_eq!(&None, builder.get_args());
    assert_eq!(&None, builder.get_name());
    let command = builder.build();
    assert!(command.args().is_empty());
    assert_eq!(None, command.name());
    assert_eq!(Some("s3://bucket/script.sh"), command.script_path());
}

#[test]
fn setting_none_clears_a_map_member() {
    let builder = Application::builder()
        .name("Spark")
        .additional_info("spark.dynamicAllocation.enabled", "true")
        .set_additional_info(None);
    assert_eq!(&None, builder.get_additional_info());
    let application = builder.build();
    assert_eq!(None, application.additional_info());
    assert_eq!(Some("Spark"), application.name());

    let config = Configuration::builder()
        .classification("spark-defaults")
        .properties("spark.executor.memory", "4g")
        .build()
        .into_builder()
        .set_properties(None)
        .build();
    assert_eq!(None, config.properties());
    assert_eq!(Some("spark-defaults"), config.classification());

    let step = HadoopStepConfig::builder()
        .jar("command-runner.jar")
        .properties("mapreduce.job.reduces", "4")
        .set_properties(None)
        .build();
    assert_eq!(None, step.properties());
}

#[test]
fn stored_lists_are_independent_of_the_callers_copy() {
    let mut args = vec!["a".to_string()];
    let command = Command::builder().set_args(Some(args.clone())).build();
    args.push("b".to_string());
    assert_eq!(&["a".to_string()], command.args());

    let mut properties = HashMap::new();
    properties.insert("fs.s3.maxRetries".to_string(), "20".to_string());
    let config = Configuration::builder()
        .classification("emrfs-site")
        .set_properties(Some(properties.clone()))
        .build();
    properties.clear();
    assert_eq!(1, config.properties().map(|p| p.len()).unwrap_or_default());
}

#[test]
fn set_replaces_what_withers_accumulated() {
    let command = Command::builder()
        .args("a")
        .args("b")
        .set_args(Some(vec!["c".to_string()]))
        .args("d")
        .build();
    assert_eq!(&["c".to_string(), "d".to_string()], command.args());
}

#[test]
fn nested_status_round_trips() {
    let created = DateTime::from_secs(1_600_000_000);
    let status = ClusterStatus::builder()
        .state(ClusterState::TerminatedWithErrors)
        .state_change_reason(
            ClusterStateChangeReason::builder()
                .code(ClusterStateChangeReasonCode::BootstrapFailure)
                .message("bootstrap action 1 returned a non-zero return code")
                .build(),
        )
        .timeline(ClusterTimeline::builder().creation_date_time(created).build())
        .build();

    assert_eq!(Some(&ClusterState::TerminatedWithErrors), status.state());
    let reason = status.state_change_reason().expect("reason is set");
    assert_eq!(
        Some(&ClusterStateChangeReasonCode::BootstrapFailure),
        reason.code()
    );
    let timeline = status.timeline().expect("timeline is set");
    assert_eq!(Some(&created), timeline.creation_date_time());
    assert_eq!(None, timeline.end_date_time());

    assert_eq!(hash_of(&status), hash_of(&status.clone()));
}

#[test]
fn floating_point_members_compare_structurally() {
    let build = |percentage: f64| {
        InstanceTypeConfig::builder()
            .instance_type("m5.xlarge")
            .weighted_capacity(4)
            .bid_price_as_percentage_of_on_demand_price(percentage)
            .ebs_configuration(
                EbsConfiguration::builder()
                    .ebs_optimized(true)
                    .build(),
            )
            .build()
    };
    assert_eq!(build(20.0), build(20.0));
    assert_ne!(build(20.0), build(25.0));
    assert_eq!(Some(20.0), build(20.0).bid_price_as_percentage_of_on_demand_price());
    assert_eq!(Some(4), build(20.0).weighted_capacity());
    assert_eq!(
        Some(true),
        build(20.0).ebs_configuration().and_then(|c| c.ebs_optimized())
    );
}

#[test]
fn scaling_action_carries_signed_adjustments() {
    let action = ScalingAction::builder()
        .market(MarketType::Spot)
        .simple_scaling_policy_configuration(
            SimpleScalingPolicyConfiguration::builder()
                .scaling_adjustment(-2)
                .cool_down(300)
                .build(),
        )
        .build();
    let config = action
        .simple_scaling_policy_configuration()
        .expect("configuration is set");
    assert_eq!(Some(-2), config.scaling_adjustment());
    assert_eq!(None, config.adjustment_type());
    assert_eq!(Some(&MarketType::Spot), action.market());
}

#[test]
fn builders_are_inspectable_before_build() {
    let builder = VolumeSpecification::builder().volume_type("gp2").size_in_gb(100);
    assert_eq!(&Some("gp2".to_string()), builder.get_volume_type());
    assert_eq!(&Some(100), builder.get_size_in_gb());
    assert_eq!(&None, builder.get_iops());
    assert_eq!(Some(100), builder.build().size_in_gb());
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

fn full_cluster() -> Cluster {
    Cluster::builder()
        .id("j-3SD91U2E1L2QX")
        .name("nightly-etl")
        .status(
            ClusterStatus::builder()
                .state(ClusterState::Waiting)
                .timeline(
                    ClusterTimeline::builder()
                        .creation_date_time(DateTime::from_secs(1_600_000_000))
                        .ready_date_time(DateTime::from_secs(1_600_000_600))
                        .build(),
                )
                .build(),
        )
        .ec2_instance_attributes(
            Ec2InstanceAttributes::builder()
                .ec2_key_name("ops")
                .ec2_subnet_id("subnet-0abc")
                .additional_master_security_groups("sg-0123")
                .build(),
        )
        .instance_collection_type(InstanceCollectionType::InstanceGroup)
        .log_uri("s3://logs/emr/")
        .requested_ami_version("3.11.0")
        .running_ami_version("3.11.0")
        .release_label("emr-6.2.0")
        .auto_terminate(false)
        .termination_protected(true)
        .visible_to_all_users(true)
        .applications(Application::builder().name("Spark").version("3.0.1").build())
        .tags(Tag::builder().key("team").value("data").build())
        .service_role("EMR_DefaultRole")
        .normalized_instance_hours(96)
        .master_public_dns_name("ec2-203-0-113-25.compute-1.amazonaws.com")
        .configurations(
            Configuration::builder()
                .classification("spark-defaults")
                .properties("spark.executor.memory", "4g")
                .build(),
        )
        .security_configuration("kerberos-config")
        .auto_scaling_role("EMR_AutoScaling_DefaultRole")
        .scale_down_behavior(ScaleDownBehavior::TerminateAtTaskCompletion)
        .custom_ami_id("ami-0123456789abcdef0")
        .ebs_root_volume_size(20)
        .repo_upgrade_on_boot(RepoUpgradeOnBoot::Security)
        .kerberos_attributes(
            KerberosAttributes::builder()
                .realm("EC2.INTERNAL")
                .kdc_admin_password("kdc-secret")
                .build(),
        )
        .cluster_arn("arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-3SD91U2E1L2QX")
        .outpost_arn("arn:aws:outposts:us-east-1:123456789012:outpost/op-0abc")
        .step_concurrency_level(10)
        .build()
}

#[test]
fn full_cluster_reads_back_every_member() {
    let cluster = full_cluster();
    assert_eq!(Some("j-3SD91U2E1L2QX"), cluster.id());
    assert_eq!(Some("nightly-etl"), cluster.name());
    assert_eq!(
        Some(&ClusterState::Waiting),
        cluster.status().and_then(|s| s.state())
    );
    assert_eq!(
        Some("subnet-0abc"),
        cluster.ec2_instance_attributes().and_then(|a| a.ec2_subnet_id())
    );
    assert_eq!(
        Some(&InstanceCollectionType::InstanceGroup),
        cluster.instance_collection_type()
    );
    assert_eq!(Some("s3://logs/emr/"), cluster.log_uri());
    assert_eq!(Some("3.11.0"), cluster.requested_ami_version());
    assert_eq!(Some("3.11.0"), cluster.running_ami_version());
    assert_eq!(Some("emr-6.2.0"), cluster.release_label());
    assert_eq!(Some(false), cluster.auto_terminate());
    assert_eq!(Some(true), cluster.termination_protected());
    assert_eq!(Some(true), cluster.visible_to_all_users());
    assert_eq!(Some("3.0.1"), cluster.applications()[0].version());
    assert_eq!(Some("data"), cluster.tags()[0].value());
    assert_eq!(Some("EMR_DefaultRole"), cluster.service_role());
    assert_eq!(Some(96), cluster.normalized_instance_hours());
    assert_eq!(
        Some("ec2-203-0-113-25.compute-1.amazonaws.com"),
        cluster.master_public_dns_name()
    );
    assert_eq!(Some("spark-defaults"), cluster.configurations()[0].classification());
    assert_eq!(Some("kerberos-config"), cluster.security_configuration());
    assert_eq!(Some("EMR_AutoScaling_DefaultRole"), cluster.auto_scaling_role());
    assert_eq!(
        Some(&ScaleDownBehavior::TerminateAtTaskCompletion),
        cluster.scale_down_behavior()
    );
    assert_eq!(Some("ami-0123456789abcdef0"), cluster.custom_ami_id());
    assert_eq!(Some(20), cluster.ebs_root_volume_size());
    assert_eq!(Some(&RepoUpgradeOnBoot::Security), cluster.repo_upgrade_on_boot());
    assert_eq!(
        Some("EC2.INTERNAL"),
        cluster.kerberos_attributes().and_then(|k| k.realm())
    );
    assert_eq!(
        Some("arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-3SD91U2E1L2QX"),
        cluster.cluster_arn()
    );
    assert_eq!(
        Some("arn:aws:outposts:us-east-1:123456789012:outpost/op-0abc"),
        cluster.outpost_arn()
    );
    assert_eq!(Some(10), cluster.step_concurrency_level());
}

#[test]
fn full_cluster_survives_into_builder() {
    let cluster = full_cluster();
    assert_eq!(cluster, cluster.clone().into_builder().build());
    assert_eq!(full_cluster(), cluster);
}

#[test]
fn every_cluster_member_takes_part_in_equality() {
    check_each_member_matters!(
        full_cluster();
        set_id,
        set_name,
        set_status,
        set_ec2_instance_attributes,
        set_instance_collection_type,
        set_log_uri,
        set_requested_ami_version,
        set_running_ami_version,
        set_release_label,
        set_auto_terminate,
        set_termination_protected,
        set_visible_to_all_users,
        set_applications,
        set_tags,
        set_service_role,
        set_normalized_instance_hours,
        set_master_public_dns_name,
        set_configurations,
        set_security_configuration,
        set_auto_scaling_role,
        set_scale_down_behavior,
        set_custom_ami_id,
        set_ebs_root_volume_size,
        set_repo_upgrade_on_boot,
        set_kerberos_attributes,
        set_cluster_arn,
        set_outpost_arn,
        set_step_concurrency_level,
    );

    let changed = full_cluster().into_builder().step_concurrency_level(11).build();
    assert_ne!(full_cluster(), changed);
}
