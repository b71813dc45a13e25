/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::_application::ApplicationBuilder;
pub use crate::types::_auto_scaling_policy::AutoScalingPolicyBuilder;
pub use crate::types::_auto_scaling_policy_description::AutoScalingPolicyDescriptionBuilder;
pub use crate::types::_auto_scaling_policy_state_change_reason::AutoScalingPolicyStateChangeReasonBuilder;
pub use crate::types::_auto_scaling_policy_status::AutoScalingPolicyStatusBuilder;
pub use crate::types::_block_public_access_configuration::BlockPublicAccessConfigurationBuilder;
pub use crate::types::_block_public_access_configuration_metadata::BlockPublicAccessConfigurationMetadataBuilder;
pub use crate::types::_bootstrap_action_config::BootstrapActionConfigBuilder;
pub use crate::types::_bootstrap_action_detail::BootstrapActionDetailBuilder;
pub use crate::types::_cancel_steps_info::CancelStepsInfoBuilder;
pub use crate::types::_cloud_watch_alarm_definition::CloudWatchAlarmDefinitionBuilder;
pub use crate::types::_cluster::ClusterBuilder;
pub use crate::types::_cluster_state_change_reason::ClusterStateChangeReasonBuilder;
pub use crate::types::_cluster_status::ClusterStatusBuilder;
pub use crate::types::_cluster_summary::ClusterSummaryBuilder;
pub use crate::types::_cluster_timeline::ClusterTimelineBuilder;
pub use crate::types::_command::CommandBuilder;
pub use crate::types::_compute_limits::ComputeLimitsBuilder;
pub use crate::types::_configuration::ConfigurationBuilder;
pub use crate::types::_ebs_block_device::EbsBlockDeviceBuilder;
pub use crate::types::_ebs_block_device_config::EbsBlockDeviceConfigBuilder;
pub use crate::types::_ebs_configuration::EbsConfigurationBuilder;
pub use crate::types::_ebs_volume::EbsVolumeBuilder;
pub use crate::types::_ec2_instance_attributes::Ec2InstanceAttributesBuilder;
pub use crate::types::_failure_details::FailureDetailsBuilder;
pub use crate::types::_hadoop_jar_step_config::HadoopJarStepConfigBuilder;
pub use crate::types::_hadoop_step_config::HadoopStepConfigBuilder;
pub use crate::types::_instance::InstanceBuilder;
pub use crate::types::_instance_fleet::InstanceFleetBuilder;
pub use crate::types::_instance_fleet_config::InstanceFleetConfigBuilder;
pub use crate::types::_instance_fleet_modify_config::InstanceFleetModifyConfigBuilder;
pub use crate::types::_instance_fleet_provisioning_specifications::InstanceFleetProvisioningSpecificationsBuilder;
pub use crate::types::_instance_fleet_state_change_reason::InstanceFleetStateChangeReasonBuilder;
pub use crate::types::_instance_fleet_status::InstanceFleetStatusBuilder;
pub use crate::types::_instance_fleet_timeline::InstanceFleetTimelineBuilder;
pub use crate::types::_instance_group::InstanceGroupBuilder;
pub use crate::types::_instance_group_config::InstanceGroupConfigBuilder;
pub use crate::types::_instance_group_detail::InstanceGroupDetailBuilder;
pub use crate::types::_instance_group_modify_config::InstanceGroupModifyConfigBuilder;
pub use crate::types::_instance_group_state_change_reason::InstanceGroupStateChangeReasonBuilder;
pub use crate::types::_instance_group_status::InstanceGroupStatusBuilder;
pub use crate::types::_instance_group_timeline::InstanceGroupTimelineBuilder;
pub use crate::types::_instance_resize_policy::InstanceResizePolicyBuilder;
pub use crate::types::_instance_state_change_reason::InstanceStateChangeReasonBuilder;
pub use crate::types::_instance_status::InstanceStatusBuilder;
pub use crate::types::_instance_timeline::InstanceTimelineBuilder;
pub use crate::types::_instance_type_config::InstanceTypeConfigBuilder;
pub use crate::types::_instance_type_specification::InstanceTypeSpecificationBuilder;
pub use crate::types::_job_flow_detail::JobFlowDetailBuilder;
pub use crate::types::_job_flow_execution_status_detail::JobFlowExecutionStatusDetailBuilder;
pub use crate::types::_job_flow_instances_config::JobFlowInstancesConfigBuilder;
pub use crate::types::_job_flow_instances_detail::JobFlowInstancesDetailBuilder;
pub use crate::types::_kerberos_attributes::KerberosAttributesBuilder;
pub use crate::types::_key_value::KeyValueBuilder;
pub use crate::types::_managed_scaling_policy::ManagedScalingPolicyBuilder;
pub use crate::types::_metric_dimension::MetricDimensionBuilder;
pub use crate::types::_on_demand_provisioning_specification::OnDemandProvisioningSpecificationBuilder;
pub use crate::types::_placement_type::PlacementTypeBuilder;
pub use crate::types::_port_range::PortRangeBuilder;
pub use crate::types::_scaling_action::ScalingActionBuilder;
pub use crate::types::_scaling_constraints::ScalingConstraintsBuilder;
pub use crate::types::_scaling_rule::ScalingRuleBuilder;
pub use crate::types::_scaling_trigger::ScalingTriggerBuilder;
pub use crate::types::_script_bootstrap_action_config::ScriptBootstrapActionConfigBuilder;
pub use crate::types::_security_configuration_summary::SecurityConfigurationSummaryBuilder;
pub use crate::types::_shrink_policy::ShrinkPolicyBuilder;
pub use crate::types::_simple_scaling_policy_configuration::SimpleScalingPolicyConfigurationBuilder;
pub use crate::types::_spot_provisioning_specification::SpotProvisioningSpecificationBuilder;
pub use crate::types::_step::StepBuilder;
pub use crate::types::_step_config::StepConfigBuilder;
pub use crate::types::_step_detail::StepDetailBuilder;
pub use crate::types::_step_execution_status_detail::StepExecutionStatusDetailBuilder;
pub use crate::types::_step_state_change_reason::StepStateChangeReasonBuilder;
pub use crate::types::_step_status::StepStatusBuilder;
pub use crate::types::_step_summary::StepSummaryBuilder;
pub use crate::types::_step_timeline::StepTimelineBuilder;
pub use crate::types::_supported_product_config::SupportedProductConfigBuilder;
pub use crate::types::_tag::TagBuilder;
pub use crate::types::_volume_specification::VolumeSpecificationBuilder;
