/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_action_on_failure::ActionOnFailure;
pub use crate::types::_adjustment_type::AdjustmentType;
pub use crate::types::_application::Application;
pub use crate::types::_auto_scaling_policy::AutoScalingPolicy;
pub use crate::types::_auto_scaling_policy_description::AutoScalingPolicyDescription;
pub use crate::types::_auto_scaling_policy_state::AutoScalingPolicyState;
pub use crate::types::_auto_scaling_policy_state_change_reason::AutoScalingPolicyStateChangeReason;
pub use crate::types::_auto_scaling_policy_state_change_reason_code::AutoScalingPolicyStateChangeReasonCode;
pub use crate::types::_auto_scaling_policy_status::AutoScalingPolicyStatus;
pub use crate::types::_block_public_access_configuration::BlockPublicAccessConfiguration;
pub use crate::types::_block_public_access_configuration_metadata::BlockPublicAccessConfigurationMetadata;
pub use crate::types::_bootstrap_action_config::BootstrapActionConfig;
pub use crate::types::_bootstrap_action_detail::BootstrapActionDetail;
pub use crate::types::_cancel_steps_info::CancelStepsInfo;
pub use crate::types::_cancel_steps_request_status::CancelStepsRequestStatus;
pub use crate::types::_cloud_watch_alarm_definition::CloudWatchAlarmDefinition;
pub use crate::types::_cluster::Cluster;
pub use crate::types::_cluster_state::ClusterState;
pub use crate::types::_cluster_state_change_reason::ClusterStateChangeReason;
pub use crate::types::_cluster_state_change_reason_code::ClusterStateChangeReasonCode;
pub use crate::types::_cluster_status::ClusterStatus;
pub use crate::types::_cluster_summary::ClusterSummary;
pub use crate::types::_cluster_timeline::ClusterTimeline;
pub use crate::types::_command::Command;
pub use crate::types::_comparison_operator::ComparisonOperator;
pub use crate::types::_compute_limits::ComputeLimits;
pub use crate::types::_compute_limits_unit_type::ComputeLimitsUnitType;
pub use crate::types::_configuration::Configuration;
pub use crate::types::_ebs_block_device::EbsBlockDevice;
pub use crate::types::_ebs_block_device_config::EbsBlockDeviceConfig;
pub use crate::types::_ebs_configuration::EbsConfiguration;
pub use crate::types::_ebs_volume::EbsVolume;
pub use crate::types::_ec2_instance_attributes::Ec2InstanceAttributes;
pub use crate::types::_failure_details::FailureDetails;
pub use crate::types::_hadoop_jar_step_config::HadoopJarStepConfig;
pub use crate::types::_hadoop_step_config::HadoopStepConfig;
pub use crate::types::_instance::Instance;
pub use crate::types::_instance_collection_type::InstanceCollectionType;
pub use crate::types::_instance_fleet::InstanceFleet;
pub use crate::types::_instance_fleet_config::InstanceFleetConfig;
pub use crate::types::_instance_fleet_modify_config::InstanceFleetModifyConfig;
pub use crate::types::_instance_fleet_provisioning_specifications::InstanceFleetProvisioningSpecifications;
pub use crate::types::_instance_fleet_state::InstanceFleetState;
pub use crate::types::_instance_fleet_state_change_reason::InstanceFleetStateChangeReason;
pub use crate::types::_instance_fleet_state_change_reason_code::InstanceFleetStateChangeReasonCode;
pub use crate::types::_instance_fleet_status::InstanceFleetStatus;
pub use crate::types::_instance_fleet_timeline::InstanceFleetTimeline;
pub use crate::types::_instance_fleet_type::InstanceFleetType;
pub use crate::types::_instance_group::InstanceGroup;
pub use crate::types::_instance_group_config::InstanceGroupConfig;
pub use crate::types::_instance_group_detail::InstanceGroupDetail;
pub use crate::types::_instance_group_modify_config::InstanceGroupModifyConfig;
pub use crate::types::_instance_group_state::InstanceGroupState;
pub use crate::types::_instance_group_state_change_reason::InstanceGroupStateChangeReason;
pub use crate::types::_instance_group_state_change_reason_code::InstanceGroupStateChangeReasonCode;
pub use crate::types::_instance_group_status::InstanceGroupStatus;
pub use crate::types::_instance_group_timeline::InstanceGroupTimeline;
pub use crate::types::_instance_group_type::InstanceGroupType;
pub use crate::types::_instance_resize_policy::InstanceResizePolicy;
pub use crate::types::_instance_role_type::InstanceRoleType;
pub use crate::types::_instance_state::InstanceState;
pub use crate::types::_instance_state_change_reason::InstanceStateChangeReason;
pub use crate::types::_instance_state_change_reason_code::InstanceStateChangeReasonCode;
pub use crate::types::_instance_status::InstanceStatus;
pub use crate::types::_instance_timeline::InstanceTimeline;
pub use crate::types::_instance_type_config::InstanceTypeConfig;
pub use crate::types::_instance_type_specification::InstanceTypeSpecification;
pub use crate::types::_job_flow_detail::JobFlowDetail;
pub use crate::types::_job_flow_execution_state::JobFlowExecutionState;
pub use crate::types::_job_flow_execution_status_detail::JobFlowExecutionStatusDetail;
pub use crate::types::_job_flow_instances_config::JobFlowInstancesConfig;
pub use crate::types::_job_flow_instances_detail::JobFlowInstancesDetail;
pub use crate::types::_kerberos_attributes::KerberosAttributes;
pub use crate::types::_key_value::KeyValue;
pub use crate::types::_managed_scaling_policy::ManagedScalingPolicy;
pub use crate::types::_market_type::MarketType;
pub use crate::types::_metric_dimension::MetricDimension;
pub use crate::types::_on_demand_provisioning_allocation_strategy::OnDemandProvisioningAllocationStrategy;
pub use crate::types::_on_demand_provisioning_specification::OnDemandProvisioningSpecification;
pub use crate::types::_placement_type::PlacementType;
pub use crate::types::_port_range::PortRange;
pub use crate::types::_repo_upgrade_on_boot::RepoUpgradeOnBoot;
pub use crate::types::_scale_down_behavior::ScaleDownBehavior;
pub use crate::types::_scaling_action::ScalingAction;
pub use crate::types::_scaling_constraints::ScalingConstraints;
pub use crate::types::_scaling_rule::ScalingRule;
pub use crate::types::_scaling_trigger::ScalingTrigger;
pub use crate::types::_script_bootstrap_action_config::ScriptBootstrapActionConfig;
pub use crate::types::_security_configuration_summary::SecurityConfigurationSummary;
pub use crate::types::_shrink_policy::ShrinkPolicy;
pub use crate::types::_simple_scaling_policy_configuration::SimpleScalingPolicyConfiguration;
pub use crate::types::_spot_provisioning_allocation_strategy::SpotProvisioningAllocationStrategy;
pub use crate::types::_spot_provisioning_specification::SpotProvisioningSpecification;
pub use crate::types::_spot_provisioning_timeout_action::SpotProvisioningTimeoutAction;
pub use crate::types::_statistic::Statistic;
pub use crate::types::_step::Step;
pub use crate::types::_step_cancellation_option::StepCancellationOption;
pub use crate::types::_step_config::StepConfig;
pub use crate::types::_step_detail::StepDetail;
pub use crate::types::_step_execution_state::StepExecutionState;
pub use crate::types::_step_execution_status_detail::StepExecutionStatusDetail;
pub use crate::types::_step_state::StepState;
pub use crate::types::_step_state_change_reason::StepStateChangeReason;
pub use crate::types::_step_state_change_reason_code::StepStateChangeReasonCode;
pub use crate::types::_step_status::StepStatus;
pub use crate::types::_step_summary::StepSummary;
pub use crate::types::_step_timeline::StepTimeline;
pub use crate::types::_supported_product_config::SupportedProductConfig;
pub use crate::types::_tag::Tag;
pub use crate::types::_unit::Unit;
pub use crate::types::_volume_specification::VolumeSpecification;

mod _action_on_failure;
mod _adjustment_type;
mod _application;
mod _auto_scaling_policy;
mod _auto_scaling_policy_description;
mod _auto_scaling_policy_state;
mod _auto_scaling_policy_state_change_reason;
mod _auto_scaling_policy_state_change_reason_code;
mod _auto_scaling_policy_status;
mod _block_public_access_configuration;
mod _block_public_access_configuration_metadata;
mod _bootstrap_action_config;
mod _bootstrap_action_detail;
mod _cancel_steps_info;
mod _cancel_steps_request_status;
mod _cloud_watch_alarm_definition;
mod _cluster;
mod _cluster_state;
mod _cluster_state_change_reason;
mod _cluster_state_change_reason_code;
mod _cluster_status;
mod _cluster_summary;
mod _cluster_timeline;
mod _command;
mod _comparison_operator;
mod _compute_limits;
mod _compute_limits_unit_type;
mod _configuration;
mod _ebs_block_device;
mod _ebs_block_device_config;
mod _ebs_configuration;
mod _ebs_volume;
mod _ec2_instance_attributes;
mod _failure_details;
mod _hadoop_jar_step_config;
mod _hadoop_step_config;
mod _instance;
mod _instance_collection_type;
mod _instance_fleet;
mod _instance_fleet_config;
mod _instance_fleet_modify_config;
mod _instance_fleet_provisioning_specifications;
mod _instance_fleet_state;
mod _instance_fleet_state_change_reason;
mod _instance_fleet_state_change_reason_code;
mod _instance_fleet_status;
mod _instance_fleet_timeline;
mod _instance_fleet_type;
mod _instance_group;
mod _instance_group_config;
mod _instance_group_detail;
mod _instance_group_modify_config;
mod _instance_group_state;
mod _instance_group_state_change_reason;
mod _instance_group_state_change_reason_code;
mod _instance_group_status;
mod _instance_group_timeline;
mod _instance_group_type;
mod _instance_resize_policy;
mod _instance_role_type;
mod _instance_state;
mod _instance_state_change_reason;
mod _instance_state_change_reason_code;
mod _instance_status;
mod _instance_timeline;
mod _instance_type_config;
mod _instance_type_specification;
mod _job_flow_detail;
mod _job_flow_execution_state;
mod _job_flow_execution_status_detail;
mod _job_flow_instances_config;
mod _job_flow_instances_detail;
mod _kerberos_attributes;
mod _key_value;
mod _managed_scaling_policy;
mod _market_type;
mod _metric_dimension;
mod _on_demand_provisioning_allocation_strategy;
mod _on_demand_provisioning_specification;
mod _placement_type;
mod _port_range;
mod _repo_upgrade_on_boot;
mod _scale_down_behavior;
mod _scaling_action;
mod _scaling_constraints;
mod _scaling_rule;
mod _scaling_trigger;
mod _script_bootstrap_action_config;
mod _security_configuration_summary;
mod _shrink_policy;
mod _simple_scaling_policy_configuration;
mod _spot_provisioning_allocation_strategy;
mod _spot_provisioning_specification;
mod _spot_provisioning_timeout_action;
mod _statistic;
mod _step;
mod _step_cancellation_option;
mod _step_config;
mod _step_detail;
mod _step_execution_state;
mod _step_execution_status_detail;
mod _step_state;
mod _step_state_change_reason;
mod _step_state_change_reason_code;
mod _step_status;
mod _step_summary;
mod _step_timeline;
mod _supported_product_config;
mod _tag;
mod _unit;
mod _volume_specification;

/// Builders
pub mod builders;

/// Error types that Amazon EMR can respond with.
pub mod error;
