/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>RunJobFlow</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct RunJobFlowInput {
    /// <p>The name of the job flow.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub log_uri: ::std::option::Option<::std::string::String>,
    /// <p>A JSON string for selecting additional features.</p>
    pub additional_info: ::std::option::Option<::std::string::String>,
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub ami_version: ::std::option::Option<::std::string::String>,
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>.</p>
    pub release_label: ::std::option::Option<::std::string::String>,
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub instances: ::std::option::Option<crate::types::JobFlowInstancesConfig>,
    /// <p>A list of steps to run.</p>
    pub steps: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>,
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    pub bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionConfig>>,
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use.</p>
    pub supported_products: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list.</p>
    pub new_supported_products: ::std::option::Option<::std::vec::Vec<crate::types::SupportedProductConfig>>,
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster.</p>
    pub applications: ::std::option::Option<::std::vec::Vec<crate::types::Application>>,
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    pub configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub visible_to_all_users: ::std::option::Option<bool>,
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>.</p>
    pub job_flow_role: ::std::option::Option<::std::string::String>,
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub service_role: ::std::option::Option<::std::string::String>,
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    pub tags: ::std::option::Option<::std::vec::Vec<crate::types::Tag>>,
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub security_configuration: ::std::option::Option<::std::string::String>,
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>.</p>
    pub auto_scaling_role: ::std::option::Option<::std::string::String>,
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub scale_down_behavior: ::std::option::Option<crate::types::ScaleDownBehavior>,
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI.</p>
    pub custom_ami_id: ::std::option::Option<::std::string::String>,
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub ebs_root_volume_size: ::std::option::Option<i32>,
    /// <p>Applies only when <code>custom_ami_id</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>.</p>
    pub repo_upgrade_on_boot: ::std::option::Option<crate::types::RepoUpgradeOnBoot>,
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
    pub kerberos_attributes: ::std::option::Option<crate::types::KerberosAttributes>,
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub step_concurrency_level: ::std::option::Option<i32>,
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub managed_scaling_policy: ::std::option::Option<crate::types::ManagedScalingPolicy>,
}
impl RunJobFlowInput {
    /// <p>The name of the job flow.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub fn log_uri(&self) -> ::std::option::Option<&str> {
        self.log_uri.as_deref()
    }
    /// <p>A JSON string for selecting additional features.</p>
    pub fn additional_info(&self) -> ::std::option::Option<&str> {
        self.additional_info.as_deref()
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub fn ami_version(&self) -> ::std::option::Option<&str> {
        self.ami_version.as_deref()
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>.</p>
    pub fn release_label(&self) -> ::std::option::Option<&str> {
        self.release_label.as_deref()
    }
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub fn instances(&self) -> ::std::option::Option<&crate::types::JobFlowInstancesConfig> {
        self.instances.as_ref()
    }
    /// <p>A list of steps to run.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.steps.is_none()</code>.
    pub fn steps(&self) -> &[crate::types::StepConfig] {
        self.steps.as_deref().unwrap_or_default()
    }
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.bootstrap_actions.is_none()</code>.
    pub fn bootstrap_actions(&self) -> &[crate::types::BootstrapActionConfig] {
        self.bootstrap_actions.as_deref().unwrap_or_default()
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.supported_products.is_none()</code>.
    pub fn supported_products(&self) -> &[::std::string::String] {
        self.supported_products.as_deref().unwrap_or_default()
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.new_supported_products.is_none()</code>.
    pub fn new_supported_products(&self) -> &[crate::types::SupportedProductConfig] {
        self.new_supported_products.as_deref().unwrap_or_default()
    }
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.applications.is_none()</code>.
    pub fn applications(&self) -> &[crate::types::Application] {
        self.applications.as_deref().unwrap_or_default()
    }
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.configurations.is_none()</code>.
    pub fn configurations(&self) -> &[crate::types::Configuration] {
        self.configurations.as_deref().unwrap_or_default()
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(&self) -> ::std::option::Option<bool> {
        self.visible_to_all_users
    }
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>.</p>
    pub fn job_flow_role(&self) -> ::std::option::Option<&str> {
        self.job_flow_role.as_deref()
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(&self) -> ::std::option::Option<&str> {
        self.service_role.as_deref()
    }
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.tags.is_none()</code>.
    pub fn tags(&self) -> &[crate::types::Tag] {
        self.tags.as_deref().unwrap_or_default()
    }
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub fn security_configuration(&self) -> ::std::option::Option<&str> {
        self.security_configuration.as_deref()
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>.</p>
    pub fn auto_scaling_role(&self) -> ::std::option::Option<&str> {
        self.auto_scaling_role.as_deref()
    }
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn scale_down_behavior(&self) -> ::std::option::Option<&crate::types::ScaleDownBehavior> {
        self.scale_down_behavior.as_ref()
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI.</p>
    pub fn custom_ami_id(&self) -> ::std::option::Option<&str> {
        self.custom_ami_id.as_deref()
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn ebs_root_volume_size(&self) -> ::std::option::Option<i32> {
        self.ebs_root_volume_size
    }
    /// <p>Applies only when <code>custom_ami_id</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>.</p>
    pub fn repo_upgrade_on_boot(&self) -> ::std::option::Option<&crate::types::RepoUpgradeOnBoot> {
        self.repo_upgrade_on_boot.as_ref()
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
    pub fn kerberos_attributes(&self) -> ::std::option::Option<&crate::types::KerberosAttributes> {
        self.kerberos_attributes.as_ref()
    }
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub fn step_concurrency_level(&self) -> ::std::option::Option<i32> {
        self.step_concurrency_level
    }
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(&self) -> ::std::option::Option<&crate::types::ManagedScalingPolicy> {
        self.managed_scaling_policy.as_ref()
    }
}
impl RunJobFlowInput {
    /// Creates a new builder-style object to manufacture [`RunJobFlowInput`](crate::operation::run_job_flow::RunJobFlowInput).
    pub fn builder() -> crate::operation::run_job_flow::builders::RunJobFlowInputBuilder {
        crate::operation::run_job_flow::builders::RunJobFlowInputBuilder::default()
    }
    /// Converts this [`RunJobFlowInput`](crate::operation::run_job_flow::RunJobFlowInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::run_job_flow::builders::RunJobFlowInputBuilder {
        crate::operation::run_job_flow::builders::RunJobFlowInputBuilder {
            name: self.name,
            log_uri: self.log_uri,
            additional_info: self.additional_info,
            ami_version: self.ami_version,
            release_label: self.release_label,
            instances: self.instances,
            steps: self.steps,
            bootstrap_actions: self.bootstrap_actions,
            supported_products: self.supported_products,
            new_supported_products: self.new_supported_products,
            applications: self.applications,
            configurations: self.configurations,
            visible_to_all_users: self.visible_to_all_users,
            job_flow_role: self.job_flow_role,
            service_role: self.service_role,
            tags: self.tags,
            security_configuration: self.security_configuration,
            auto_scaling_role: self.auto_scaling_role,
            scale_down_behavior: self.scale_down_behavior,
            custom_ami_id: self.custom_ami_id,
            ebs_root_volume_size: self.ebs_root_volume_size,
            repo_upgrade_on_boot: self.repo_upgrade_on_boot,
            kerberos_attributes: self.kerberos_attributes,
            step_concurrency_level: self.step_concurrency_level,
            managed_scaling_policy: self.managed_scaling_policy,
        }
    }
}

/// A builder for [`RunJobFlowInput`](crate::operation::run_job_flow::RunJobFlowInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RunJobFlowInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) log_uri: ::std::option::Option<::std::string::String>,
    pub(crate) additional_info: ::std::option::Option<::std::string::String>,
    pub(crate) ami_version: ::std::option::Option<::std::string::String>,
    pub(crate) release_label: ::std::option::Option<::std::string::String>,
    pub(crate) instances: ::std::option::Option<crate::types::JobFlowInstancesConfig>,
    pub(crate) steps: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>,
    pub(crate) bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionConfig>>,
    pub(crate) supported_products: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) new_supported_products: ::std::option::Option<::std::vec::Vec<crate::types::SupportedProductConfig>>,
    pub(crate) applications: ::std::option::Option<::std::vec::Vec<crate::types::Application>>,
    pub(crate) configurations: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>,
    pub(crate) visible_to_all_users: ::std::option::Option<bool>,
    pub(crate) job_flow_role: ::std::option::Option<::std::string::String>,
    pub(crate) service_role: ::std::option::Option<::std::string::String>,
    pub(crate) tags: ::std::option::Option<::std::vec::Vec<crate::types::Tag>>,
    pub(crate) security_configuration: ::std::option::Option<::std::string::String>,
    pub(crate) auto_scaling_role: ::std::option::Option<::std::string::String>,
    pub(crate) scale_down_behavior: ::std::option::Option<crate::types::ScaleDownBehavior>,
    pub(crate) custom_ami_id: ::std::option::Option<::std::string::String>,
    pub(crate) ebs_root_volume_size: ::std::option::Option<i32>,
    pub(crate) repo_upgrade_on_boot: ::std::option::Option<crate::types::RepoUpgradeOnBoot>,
    pub(crate) kerberos_attributes: ::std::option::Option<crate::types::KerberosAttributes>,
    pub(crate) step_concurrency_level: ::std::option::Option<i32>,
    pub(crate) managed_scaling_policy: ::std::option::Option<crate::types::ManagedScalingPolicy>,
}
impl RunJobFlowInputBuilder {
    /// <p>The name of the job flow.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the job flow.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the job flow.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub fn log_uri(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.log_uri = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub fn set_log_uri(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.log_uri = input;
        self
    }
    /// <p>The location in Amazon S3 to write the log files of the job flow. If a value is not provided, logs are not created.</p>
    pub fn get_log_uri(&self) -> &::std::option::Option<::std::string::String> {
        &self.log_uri
    }
    /// <p>A JSON string for selecting additional features.</p>
    pub fn additional_info(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.additional_info = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A JSON string for selecting additional features.</p>
    pub fn set_additional_info(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.additional_info = input;
        self
    }
    /// <p>A JSON string for selecting additional features.</p>
    pub fn get_additional_info(&self) -> &::std::option::Option<::std::string::String> {
        &self.additional_info
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub fn ami_version(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ami_version = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub fn set_ami_version(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ami_version = input;
        self
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub fn get_ami_version(&self) -> &::std::option::Option<::std::string::String> {
        &self.ami_version
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>.</p>
    pub fn release_label(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.release_label = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>.</p>
    pub fn set_release_label(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.release_label = input;
        self
    }
    /// <p>The Amazon EMR release label, which determines the version of open-source application packages installed on the cluster. Release labels are in the form <code>emr-x.x.x</code>, where x.x.x is an Amazon EMR release version such as <code>emr-5.14.0</code>.</p>
    pub fn get_release_label(&self) -> &::std::option::Option<::std::string::String> {
        &self.release_label
    }
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub fn instances(mut self, input: crate::types::JobFlowInstancesConfig) -> Self {
        self.instances = ::std::option::Option::Some(input);
        self
    }
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub fn set_instances(mut self, input: ::std::option::Option<crate::types::JobFlowInstancesConfig>) -> Self {
        self.instances = input;
        self
    }
    /// <p>A specification of the number and type of Amazon EC2 instances.</p>
    pub fn get_instances(&self) -> &::std::option::Option<crate::types::JobFlowInstancesConfig> {
        &self.instances
    }
    /// Appends an item to `steps`.
    ///
    /// To override the contents of this collection use [`set_steps`](Self::set_steps).
    ///
    /// <p>A list of steps to run.</p>
    pub fn steps(mut self, input: crate::types::StepConfig) -> Self {
        let mut v = self.steps.unwrap_or_default();
        v.push(input);
        self.steps = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of steps to run.</p>
    pub fn set_steps(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::StepConfig>>) -> Self {
        self.steps = input;
        self
    }
    /// <p>A list of steps to run.</p>
    pub fn get_steps(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::StepConfig>> {
        &self.steps
    }
    /// Appends an item to `bootstrap_actions`.
    ///
    /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
    ///
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    pub fn bootstrap_actions(mut self, input: crate::types::BootstrapActionConfig) -> Self {
        let mut v = self.bootstrap_actions.unwrap_or_default();
        v.push(input);
        self.bootstrap_actions = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    pub fn set_bootstrap_actions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionConfig>>) -> Self {
        self.bootstrap_actions = input;
        self
    }
    /// <p>A list of bootstrap actions to run before Hadoop starts on the cluster nodes.</p>
    pub fn get_bootstrap_actions(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionConfig>> {
        &self.bootstrap_actions
    }
    /// Appends an item to `supported_products`.
    ///
    /// To override the contents of this collection use [`set_supported_products`](Self::set_supported_products).
    ///
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use.</p>
    pub fn supported_products(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.supported_products.unwrap_or_default();
        v.push(input.into());
        self.supported_products = ::std::option::Option::Some(v);
        self
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use.</p>
    pub fn set_supported_products(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.supported_products = input;
        self
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use.</p>
    pub fn get_supported_products(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.supported_products
    }
    /// Appends an item to `new_supported_products`.
    ///
    /// To override the contents of this collection use [`set_new_supported_products`](Self::set_new_supported_products).
    ///
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list.</p>
    pub fn new_supported_products(mut self, input: crate::types::SupportedProductConfig) -> Self {
        let mut v = self.new_supported_products.unwrap_or_default();
        v.push(input);
        self.new_supported_products = ::std::option::Option::Some(v);
        self
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list.</p>
    pub fn set_new_supported_products(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::SupportedProductConfig>>) -> Self {
        self.new_supported_products = input;
        self
    }
    /// <p>For Amazon EMR releases 3.x and 2.x. For Amazon EMR releases 4.x and later, use <code>applications</code>.</p>
    /// <p>A list of strings that indicates third-party software to use with the job flow that accepts a user argument list.</p>
    pub fn get_new_supported_products(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::SupportedProductConfig>> {
        &self.new_supported_products
    }
    /// Appends an item to `applications`.
    ///
    /// To override the contents of this collection use [`set_applications`](Self::set_applications).
    ///
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster.</p>
    pub fn applications(mut self, input: crate::types::Application) -> Self {
        let mut v = self.applications.unwrap_or_default();
        v.push(input);
        self.applications = ::std::option::Option::Some(v);
        self
    }
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster.</p>
    pub fn set_applications(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Application>>) -> Self {
        self.applications = input;
        self
    }
    /// <p>Applies to Amazon EMR releases 4.0 and later. A case-insensitive list of applications for Amazon EMR to install and configure when launching the cluster.</p>
    pub fn get_applications(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Application>> {
        &self.applications
    }
    /// Appends an item to `configurations`.
    ///
    /// To override the contents of this collection use [`set_configurations`](Self::set_configurations).
    ///
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    pub fn configurations(mut self, input: crate::types::Configuration) -> Self {
        let mut v = self.configurations.unwrap_or_default();
        v.push(input);
        self.configurations = ::std::option::Option::Some(v);
        self
    }
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    pub fn set_configurations(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Configuration>>) -> Self {
        self.configurations = input;
        self
    }
    /// <p>For Amazon EMR releases 4.0 and later. The list of configurations supplied for the EMR cluster you are creating.</p>
    pub fn get_configurations(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Configuration>> {
        &self.configurations
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(mut self, input: bool) -> Self {
        self.visible_to_all_users = ::std::option::Option::Some(input);
        self
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn set_visible_to_all_users(mut self, input: ::std::option::Option<bool>) -> Self {
        self.visible_to_all_users = input;
        self
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. This is the default. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn get_visible_to_all_users(&self) -> &::std::option::Option<bool> {
        &self.visible_to_all_users
    }
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>.</p>
    pub fn job_flow_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>.</p>
    pub fn set_job_flow_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_role = input;
        self
    }
    /// <p>Also called instance profile and EC2 role. An IAM role for an EMR cluster. The EC2 instances of the cluster assume this role. The default role is <code>EMR_EC2_DefaultRole</code>.</p>
    pub fn get_job_flow_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_role
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.service_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn set_service_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.service_role = input;
        self
    }
    /// <p>The IAM role that will be assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn get_service_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.service_role
    }
    /// Appends an item to `tags`.
    ///
    /// To override the contents of this collection use [`set_tags`](Self::set_tags).
    ///
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    pub fn tags(mut self, input: crate::types::Tag) -> Self {
        let mut v = self.tags.unwrap_or_default();
        v.push(input);
        self.tags = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    pub fn set_tags(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Tag>>) -> Self {
        self.tags = input;
        self
    }
    /// <p>A list of tags to associate with a cluster and propagate to Amazon EC2 instances.</p>
    pub fn get_tags(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Tag>> {
        &self.tags
    }
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub fn security_configuration(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.security_configuration = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub fn set_security_configuration(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.security_configuration = input;
        self
    }
    /// <p>The name of a security configuration to apply to the cluster.</p>
    pub fn get_security_configuration(&self) -> &::std::option::Option<::std::string::String> {
        &self.security_configuration
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>.</p>
    pub fn auto_scaling_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.auto_scaling_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>.</p>
    pub fn set_auto_scaling_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.auto_scaling_role = input;
        self
    }
    /// <p>An IAM role for automatic scaling policies. The default role is <code>EMR_AutoScaling_DefaultRole</code>.</p>
    pub fn get_auto_scaling_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.auto_scaling_role
    }
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn scale_down_behavior(mut self, input: crate::types::ScaleDownBehavior) -> Self {
        self.scale_down_behavior = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn set_scale_down_behavior(mut self, input: ::std::option::Option<crate::types::ScaleDownBehavior>) -> Self {
        self.scale_down_behavior = input;
        self
    }
    /// <p>Specifies the way that individual Amazon EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn get_scale_down_behavior(&self) -> &::std::option::Option<crate::types::ScaleDownBehavior> {
        &self.scale_down_behavior
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI.</p>
    pub fn custom_ami_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.custom_ami_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI.</p>
    pub fn set_custom_ami_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.custom_ami_id = input;
        self
    }
    /// <p>Available only in Amazon EMR version 5.7.0 and later. The ID of a custom Amazon EBS-backed Linux AMI.</p>
    pub fn get_custom_ami_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.custom_ami_id
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn ebs_root_volume_size(mut self, input: i32) -> Self {
        self.ebs_root_volume_size = ::std::option::Option::Some(input);
        self
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn set_ebs_root_volume_size(mut self, input: ::std::option::Option<i32>) -> Self {
        self.ebs_root_volume_size = input;
        self
    }
    /// <p>The size, in GiB, of the EBS root device volume of the Linux AMI that is used for each EC2 instance. Available in Amazon EMR version 4.x and later.</p>
    pub fn get_ebs_root_volume_size(&self) -> &::std::option::Option<i32> {
        &self.ebs_root_volume_size
    }
    /// <p>Applies only when <code>custom_ami_id</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>.</p>
    pub fn repo_upgrade_on_boot(mut self, input: crate::types::RepoUpgradeOnBoot) -> Self {
        self.repo_upgrade_on_boot = ::std::option::Option::Some(input);
        self
    }
    /// <p>Applies only when <code>custom_ami_id</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>.</p>
    pub fn set_repo_upgrade_on_boot(mut self, input: ::std::option::Option<crate::types::RepoUpgradeOnBoot>) -> Self {
        self.repo_upgrade_on_boot = input;
        self
    }
    /// <p>Applies only when <code>custom_ami_id</code> is used. Specifies which updates from the Amazon Linux AMI package repositories to apply automatically when the instance boots using the AMI. If omitted, the default is <code>SECURITY</code>.</p>
    pub fn get_repo_upgrade_on_boot(&self) -> &::std::option::Option<crate::types::RepoUpgradeOnBoot> {
        &self.repo_upgrade_on_boot
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
    pub fn kerberos_attributes(mut self, input: crate::types::KerberosAttributes) -> Self {
        self.kerberos_attributes = ::std::option::Option::Some(input);
        self
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
    pub fn set_kerberos_attributes(mut self, input: ::std::option::Option<crate::types::KerberosAttributes>) -> Self {
        self.kerberos_attributes = input;
        self
    }
    /// <p>Attributes for Kerberos configuration when Kerberos authentication is enabled using a security configuration.</p>
    pub fn get_kerberos_attributes(&self) -> &::std::option::Option<crate::types::KerberosAttributes> {
        &self.kerberos_attributes
    }
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub fn step_concurrency_level(mut self, input: i32) -> Self {
        self.step_concurrency_level = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub fn set_step_concurrency_level(mut self, input: ::std::option::Option<i32>) -> Self {
        self.step_concurrency_level = input;
        self
    }
    /// <p>Specifies the number of steps that can be executed concurrently. The default value is <code>1</code>. The maximum value is <code>256</code>.</p>
    pub fn get_step_concurrency_level(&self) -> &::std::option::Option<i32> {
        &self.step_concurrency_level
    }
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(mut self, input: crate::types::ManagedScalingPolicy) -> Self {
        self.managed_scaling_policy = ::std::option::Option::Some(input);
        self
    }
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub fn set_managed_scaling_policy(mut self, input: ::std::option::Option<crate::types::ManagedScalingPolicy>) -> Self {
        self.managed_scaling_policy = input;
        self
    }
    /// <p>The specified managed scaling policy for an Amazon EMR cluster.</p>
    pub fn get_managed_scaling_policy(&self) -> &::std::option::Option<crate::types::ManagedScalingPolicy> {
        &self.managed_scaling_policy
    }
    /// Consumes the builder and constructs a [`RunJobFlowInput`](crate::operation::run_job_flow::RunJobFlowInput).
    pub fn build(self) -> crate::operation::run_job_flow::RunJobFlowInput {
        crate::operation::run_job_flow::RunJobFlowInput {
            name: self.name,
            log_uri: self.log_uri,
            additional_info: self.additional_info,
            ami_version: self.ami_version,
            release_label: self.release_label,
            instances: self.instances,
            steps: self.steps,
            bootstrap_actions: self.bootstrap_actions,
            supported_products: self.supported_products,
            new_supported_products: self.new_supported_products,
            applications: self.applications,
            configurations: self.configurations,
            visible_to_all_users: self.visible_to_all_users,
            job_flow_role: self.job_flow_role,
            service_role: self.service_role,
            tags: self.tags,
            security_configuration: self.security_configuration,
            auto_scaling_role: self.auto_scaling_role,
            scale_down_behavior: self.scale_down_behavior,
            custom_ami_id: self.custom_ami_id,
            ebs_root_volume_size: self.ebs_root_volume_size,
            repo_upgrade_on_boot: self.repo_upgrade_on_boot,
            kerberos_attributes: self.kerberos_attributes,
            step_concurrency_level: self.step_concurrency_level,
            managed_scaling_policy: self.managed_scaling_policy,
        }
    }
}
