/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A description of the Amazon EC2 instance on which the cluster (job flow) runs.</p>
/// <p>A valid <code>JobFlowInstancesConfig</code> must contain either <code>instance_groups</code> or <code>instance_fleets</code>, which is the recommended configuration. They cannot be used together. You may also have <code>master_instance_type</code>, <code>slave_instance_type</code>, and <code>instance_count</code> (all three must be present), but this is not recommended.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct JobFlowInstancesConfig {
    /// <p>The EC2 instance type of the master node.</p>
    pub master_instance_type: ::std::option::Option<::std::string::String>,
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub slave_instance_type: ::std::option::Option<::std::string::String>,
    /// <p>The number of EC2 instances in the cluster.</p>
    pub instance_count: ::std::option::Option<i32>,
    /// <p>Configuration for the instance groups in a cluster.</p>
    pub instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>,
    /// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
    /// <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    pub instance_fleets: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleetConfig>>,
    /// <p>The name of the EC2 key pair that can be used to connect to the master node using SSH as the user called "hadoop."</p>
    pub ec2_key_name: ::std::option::Option<::std::string::String>,
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub placement: ::std::option::Option<crate::types::PlacementType>,
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub keep_job_flow_alive_when_no_steps: ::std::option::Option<bool>,
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub termination_protected: ::std::option::Option<bool>,
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (no longer maintained), "0.20" (no longer maintained), "0.20.205" (no longer maintained), "1.0.3", "2.2.0", or "2.4.0".</p>
    pub hadoop_version: ::std::option::Option<::std::string::String>,
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch.</p>
    pub ec2_subnet_id: ::std::option::Option<::std::string::String>,
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p>
    pub ec2_subnet_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub emr_managed_master_security_group: ::std::option::Option<::std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub emr_managed_slave_security_group: ::std::option::Option<::std::string::String>,
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub service_access_security_group: ::std::option::Option<::std::string::String>,
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub additional_master_security_groups: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task node.</p>
    pub additional_slave_security_groups: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl JobFlowInstancesConfig {
    /// <p>The EC2 instance type of the master node.</p>
    pub fn master_instance_type(&self) -> ::std::option::Option<&str> {
        self.master_instance_type.as_deref()
    }
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub fn slave_instance_type(&self) -> ::std::option::Option<&str> {
        self.slave_instance_type.as_deref()
    }
    /// <p>The number of EC2 instances in the cluster.</p>
    pub fn instance_count(&self) -> ::std::option::Option<i32> {
        self.instance_count
    }
    /// <p>Configuration for the instance groups in a cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_groups.is_none()</code>.
    pub fn instance_groups(&self) -> &[crate::types::InstanceGroupConfig] {
        self.instance_groups.as_deref().unwrap_or_default()
    }
    /// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
    /// <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_fleets.is_none()</code>.
    pub fn instance_fleets(&self) -> &[crate::types::InstanceFleetConfig] {
        self.instance_fleets.as_deref().unwrap_or_default()
    }
    /// <p>The name of the EC2 key pair that can be used to connect to the master node using SSH as the user called "hadoop."</p>
    pub fn ec2_key_name(&self) -> ::std::option::Option<&str> {
        self.ec2_key_name.as_deref()
    }
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub fn placement(&self) -> ::std::option::Option<&crate::types::PlacementType> {
        self.placement.as_ref()
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn keep_job_flow_alive_when_no_steps(&self) -> ::std::option::Option<bool> {
        self.keep_job_flow_alive_when_no_steps
    }
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub fn termination_protected(&self) -> ::std::option::Option<bool> {
        self.termination_protected
    }
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (no longer maintained), "0.20" (no longer maintained), "0.20.205" (no longer maintained), "1.0.3", "2.2.0", or "2.4.0".</p>
    pub fn hadoop_version(&self) -> ::std::option::Option<&str> {
        self.hadoop_version.as_deref()
    }
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch.</p>
    pub fn ec2_subnet_id(&self) -> ::std::option::Option<&str> {
        self.ec2_subnet_id.as_deref()
    }
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.ec2_subnet_ids.is_none()</code>.
    pub fn ec2_subnet_ids(&self) -> &[::std::string::String] {
        self.ec2_subnet_ids.as_deref().unwrap_or_default()
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn emr_managed_master_security_group(&self) -> ::std::option::Option<&str> {
        self.emr_managed_master_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn emr_managed_slave_security_group(&self) -> ::std::option::Option<&str> {
        self.emr_managed_slave_security_group.as_deref()
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn service_access_security_group(&self) -> ::std::option::Option<&str> {
        self.service_access_security_group.as_deref()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.additional_master_security_groups.is_none()</code>.
    pub fn additional_master_security_groups(&self) -> &[::std::string::String] {
        self.additional_master_security_groups.as_deref().unwrap_or_default()
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task node.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.additional_slave_security_groups.is_none()</code>.
    pub fn additional_slave_security_groups(&self) -> &[::std::string::String] {
        self.additional_slave_security_groups.as_deref().unwrap_or_default()
    }
}
impl JobFlowInstancesConfig {
    /// Creates a new builder-style object to manufacture [`JobFlowInstancesConfig`](crate::types::JobFlowInstancesConfig).
    pub fn builder() -> crate::types::builders::JobFlowInstancesConfigBuilder {
        crate::types::builders::JobFlowInstancesConfigBuilder::default()
    }
    /// Converts this [`JobFlowInstancesConfig`](crate::types::JobFlowInstancesConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::JobFlowInstancesConfigBuilder {
        crate::types::builders::JobFlowInstancesConfigBuilder {
            master_instance_type: self.master_instance_type,
            slave_instance_type: self.slave_instance_type,
            instance_count: self.instance_count,
            instance_groups: self.instance_groups,
            instance_fleets: self.instance_fleets,
            ec2_key_name: self.ec2_key_name,
            placement: self.placement,
            keep_job_flow_alive_when_no_steps: self.keep_job_flow_alive_when_no_steps,
            termination_protected: self.termination_protected,
            hadoop_version: self.hadoop_version,
            ec2_subnet_id: self.ec2_subnet_id,
            ec2_subnet_ids: self.ec2_subnet_ids,
            emr_managed_master_security_group: self.emr_managed_master_security_group,
            emr_managed_slave_security_group: self.emr_managed_slave_security_group,
            service_access_security_group: self.service_access_security_group,
            additional_master_security_groups: self.additional_master_security_groups,
            additional_slave_security_groups: self.additional_slave_security_groups,
        }
    }
}

/// A builder for [`JobFlowInstancesConfig`](crate::types::JobFlowInstancesConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct JobFlowInstancesConfigBuilder {
    pub(crate) master_instance_type: ::std::option::Option<::std::string::String>,
    pub(crate) slave_instance_type: ::std::option::Option<::std::string::String>,
    pub(crate) instance_count: ::std::option::Option<i32>,
    pub(crate) instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>,
    pub(crate) instance_fleets: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleetConfig>>,
    pub(crate) ec2_key_name: ::std::option::Option<::std::string::String>,
    pub(crate) placement: ::std::option::Option<crate::types::PlacementType>,
    pub(crate) keep_job_flow_alive_when_no_steps: ::std::option::Option<bool>,
    pub(crate) termination_protected: ::std::option::Option<bool>,
    pub(crate) hadoop_version: ::std::option::Option<::std::string::String>,
    pub(crate) ec2_subnet_id: ::std::option::Option<::std::string::String>,
    pub(crate) ec2_subnet_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) emr_managed_master_security_group: ::std::option::Option<::std::string::String>,
    pub(crate) emr_managed_slave_security_group: ::std::option::Option<::std::string::String>,
    pub(crate) service_access_security_group: ::std::option::Option<::std::string::String>,
    pub(crate) additional_master_security_groups: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) additional_slave_security_groups: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl JobFlowInstancesConfigBuilder {
    /// <p>The EC2 instance type of the master node.</p>
    pub fn master_instance_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.master_instance_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The EC2 instance type of the master node.</p>
    pub fn set_master_instance_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.master_instance_type = input;
        self
    }
    /// <p>The EC2 instance type of the master node.</p>
    pub fn get_master_instance_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.master_instance_type
    }
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub fn slave_instance_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.slave_instance_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub fn set_slave_instance_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.slave_instance_type = input;
        self
    }
    /// <p>The EC2 instance type of the core and task nodes.</p>
    pub fn get_slave_instance_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.slave_instance_type
    }
    /// <p>The number of EC2 instances in the cluster.</p>
    pub fn instance_count(mut self, input: i32) -> Self {
        self.instance_count = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of EC2 instances in the cluster.</p>
    pub fn set_instance_count(mut self, input: ::std::option::Option<i32>) -> Self {
        self.instance_count = input;
        self
    }
    /// <p>The number of EC2 instances in the cluster.</p>
    pub fn get_instance_count(&self) -> &::std::option::Option<i32> {
        &self.instance_count
    }
    /// Appends an item to `instance_groups`.
    ///
    /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
    ///
    /// <p>Configuration for the instance groups in a cluster.</p>
    pub fn instance_groups(mut self, input: crate::types::InstanceGroupConfig) -> Self {
        let mut v = self.instance_groups.unwrap_or_default();
        v.push(input);
        self.instance_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>Configuration for the instance groups in a cluster.</p>
    pub fn set_instance_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>) -> Self {
        self.instance_groups = input;
        self
    }
    /// <p>Configuration for the instance groups in a cluster.</p>
    pub fn get_instance_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>> {
        &self.instance_groups
    }
    /// Appends an item to `instance_fleets`.
    ///
    /// To override the contents of this collection use [`set_instance_fleets`](Self::set_instance_fleets).
    ///
    /// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
    /// <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    pub fn instance_fleets(mut self, input: crate::types::InstanceFleetConfig) -> Self {
        let mut v = self.instance_fleets.unwrap_or_default();
        v.push(input);
        self.instance_fleets = ::std::option::Option::Some(v);
        self
    }
    /// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
    /// <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    pub fn set_instance_fleets(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleetConfig>>) -> Self {
        self.instance_fleets = input;
        self
    }
    /// <p>The instance fleet configuration is available only in Amazon EMR versions 4.8.0 and later, excluding 5.0.x versions.</p>
    /// <p>Describes the EC2 instances and instance configurations for clusters that use the instance fleet configuration.</p>
    pub fn get_instance_fleets(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceFleetConfig>> {
        &self.instance_fleets
    }
    /// <p>The name of the EC2 key pair that can be used to connect to the master node using SSH as the user called "hadoop."</p>
    pub fn ec2_key_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ec2_key_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the EC2 key pair that can be used to connect to the master node using SSH as the user called "hadoop."</p>
    pub fn set_ec2_key_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ec2_key_name = input;
        self
    }
    /// <p>The name of the EC2 key pair that can be used to connect to the master node using SSH as the user called "hadoop."</p>
    pub fn get_ec2_key_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.ec2_key_name
    }
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub fn placement(mut self, input: crate::types::PlacementType) -> Self {
        self.placement = ::std::option::Option::Some(input);
        self
    }
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub fn set_placement(mut self, input: ::std::option::Option<crate::types::PlacementType>) -> Self {
        self.placement = input;
        self
    }
    /// <p>The Availability Zone in which the cluster runs.</p>
    pub fn get_placement(&self) -> &::std::option::Option<crate::types::PlacementType> {
        &self.placement
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn keep_job_flow_alive_when_no_steps(mut self, input: bool) -> Self {
        self.keep_job_flow_alive_when_no_steps = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn set_keep_job_flow_alive_when_no_steps(mut self, input: ::std::option::Option<bool>) -> Self {
        self.keep_job_flow_alive_when_no_steps = input;
        self
    }
    /// <p>Specifies whether the cluster should remain available after completing all steps.</p>
    pub fn get_keep_job_flow_alive_when_no_steps(&self) -> &::std::option::Option<bool> {
        &self.keep_job_flow_alive_when_no_steps
    }
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub fn termination_protected(mut self, input: bool) -> Self {
        self.termination_protected = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub fn set_termination_protected(mut self, input: ::std::option::Option<bool>) -> Self {
        self.termination_protected = input;
        self
    }
    /// <p>Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being terminated by API call, user intervention, or in the event of a job-flow error.</p>
    pub fn get_termination_protected(&self) -> &::std::option::Option<bool> {
        &self.termination_protected
    }
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (no longer maintained), "0.20" (no longer maintained), "0.20.205" (no longer maintained), "1.0.3", "2.2.0", or "2.4.0".</p>
    pub fn hadoop_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.hadoop_version = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (no longer maintained), "0.20" (no longer maintained), "0.20.205" (no longer maintained), "1.0.3", "2.2.0", or "2.4.0".</p>
    pub fn set_hadoop_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.hadoop_version = input;
        self
    }
    /// <p>Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the cluster. Valid inputs are "0.18" (no longer maintained), "0.20" (no longer maintained), "0.20.205" (no longer maintained), "1.0.3", "2.2.0", or "2.4.0".</p>
    pub fn get_hadoop_version(&self) -> &::std::option::Option<::std::string::String> {
        &self.hadoop_version
    }
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch.</p>
    pub fn ec2_subnet_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ec2_subnet_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch.</p>
    pub fn set_ec2_subnet_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ec2_subnet_id = input;
        self
    }
    /// <p>Applies to clusters that use the uniform instance group configuration. To launch the cluster in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the Amazon VPC subnet where you want the cluster to launch.</p>
    pub fn get_ec2_subnet_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.ec2_subnet_id
    }
    /// Appends an item to `ec2_subnet_ids`.
    ///
    /// To override the contents of this collection use [`set_ec2_subnet_ids`](Self::set_ec2_subnet_ids).
    ///
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p>
    pub fn ec2_subnet_ids(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.ec2_subnet_ids.unwrap_or_default();
        v.push(input.into());
        self.ec2_subnet_ids = ::std::option::Option::Some(v);
        self
    }
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p>
    pub fn set_ec2_subnet_ids(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.ec2_subnet_ids = input;
        self
    }
    /// <p>Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.</p>
    pub fn get_ec2_subnet_ids(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.ec2_subnet_ids
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn emr_managed_master_security_group(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.emr_managed_master_security_group = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn set_emr_managed_master_security_group(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.emr_managed_master_security_group = input;
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the master node.</p>
    pub fn get_emr_managed_master_security_group(&self) -> &::std::option::Option<::std::string::String> {
        &self.emr_managed_master_security_group
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn emr_managed_slave_security_group(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.emr_managed_slave_security_group = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn set_emr_managed_slave_security_group(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.emr_managed_slave_security_group = input;
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the core and task nodes.</p>
    pub fn get_emr_managed_slave_security_group(&self) -> &::std::option::Option<::std::string::String> {
        &self.emr_managed_slave_security_group
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn service_access_security_group(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.service_access_security_group = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn set_service_access_security_group(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.service_access_security_group = input;
        self
    }
    /// <p>The identifier of the Amazon EC2 security group for the Amazon EMR service to access clusters in VPC private subnets.</p>
    pub fn get_service_access_security_group(&self) -> &::std::option::Option<::std::string::String> {
        &self.service_access_security_group
    }
    /// Appends an item to `additional_master_security_groups`.
    ///
    /// To override the contents of this collection use [`set_additional_master_security_groups`](Self::set_additional_master_security_groups).
    ///
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub fn additional_master_security_groups(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.additional_master_security_groups.unwrap_or_default();
        v.push(input.into());
        self.additional_master_security_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub fn set_additional_master_security_groups(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.additional_master_security_groups = input;
        self
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the master node.</p>
    pub fn get_additional_master_security_groups(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.additional_master_security_groups
    }
    /// Appends an item to `additional_slave_security_groups`.
    ///
    /// To override the contents of this collection use [`set_additional_slave_security_groups`](Self::set_additional_slave_security_groups).
    ///
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task node.</p>
    pub fn additional_slave_security_groups(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.additional_slave_security_groups.unwrap_or_default();
        v.push(input.into());
        self.additional_slave_security_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task node.</p>
    pub fn set_additional_slave_security_groups(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.additional_slave_security_groups = input;
        self
    }
    /// <p>A list of additional Amazon EC2 security group IDs for the core and task node.</p>
    pub fn get_additional_slave_security_groups(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.additional_slave_security_groups
    }
    /// Consumes the builder and constructs a [`JobFlowInstancesConfig`](crate::types::JobFlowInstancesConfig).
    pub fn build(self) -> crate::types::JobFlowInstancesConfig {
        crate::types::JobFlowInstancesConfig {
            master_instance_type: self.master_instance_type,
            slave_instance_type: self.slave_instance_type,
            instance_count: self.instance_count,
            instance_groups: self.instance_groups,
            instance_fleets: self.instance_fleets,
            ec2_key_name: self.ec2_key_name,
            placement: self.placement,
            keep_job_flow_alive_when_no_steps: self.keep_job_flow_alive_when_no_steps,
            termination_protected: self.termination_protected,
            hadoop_version: self.hadoop_version,
            ec2_subnet_id: self.ec2_subnet_id,
            ec2_subnet_ids: self.ec2_subnet_ids,
            emr_managed_master_security_group: self.emr_managed_master_security_group,
            emr_managed_slave_security_group: self.emr_managed_slave_security_group,
            service_access_security_group: self.service_access_security_group,
            additional_master_security_groups: self.additional_master_security_groups,
            additional_slave_security_groups: self.additional_slave_security_groups,
        }
    }
}
