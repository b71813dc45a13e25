/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A description of a cluster (job flow), as reported by the legacy <code>DescribeJobFlows</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct JobFlowDetail {
    /// <p>The job flow identifier.</p>
    pub job_flow_id: ::std::option::Option<::std::string::String>,
    /// <p>The name of the job flow.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub log_uri: ::std::option::Option<::std::string::String>,
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub ami_version: ::std::option::Option<::std::string::String>,
    /// <p>Describes the execution status of the job flow.</p>
    pub execution_status_detail: ::std::option::Option<crate::types::JobFlowExecutionStatusDetail>,
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub instances: ::std::option::Option<crate::types::JobFlowInstancesDetail>,
    /// <p>A list of steps run by the job flow.</p>
    pub steps: ::std::option::Option<::std::vec::Vec<crate::types::StepDetail>>,
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    pub bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionDetail>>,
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    pub supported_products: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
    pub visible_to_all_users: ::std::option::Option<bool>,
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub job_flow_role: ::std::option::Option<::std::string::String>,
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub service_role: ::std::option::Option<::std::string::String>,
    /// <p>An IAM role for automatic scaling policies.</p>
    pub auto_scaling_role: ::std::option::Option<::std::string::String>,
    /// <p>The way that individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub scale_down_behavior: ::std::option::Option<crate::types::ScaleDownBehavior>,
}
impl JobFlowDetail {
    /// <p>The job flow identifier.</p>
    pub fn job_flow_id(&self) -> ::std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
    /// <p>The name of the job flow.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub fn log_uri(&self) -> ::std::option::Option<&str> {
        self.log_uri.as_deref()
    }
    /// <p>Applies only to Amazon EMR AMI versions 3.x and 2.x. For Amazon EMR releases 4.0 and later, <code>release_label</code> is used. To specify a custom AMI, use <code>custom_ami_id</code>.</p>
    pub fn ami_version(&self) -> ::std::option::Option<&str> {
        self.ami_version.as_deref()
    }
    /// <p>Describes the execution status of the job flow.</p>
    pub fn execution_status_detail(&self) -> ::std::option::Option<&crate::types::JobFlowExecutionStatusDetail> {
        self.execution_status_detail.as_ref()
    }
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub fn instances(&self) -> ::std::option::Option<&crate::types::JobFlowInstancesDetail> {
        self.instances.as_ref()
    }
    /// <p>A list of steps run by the job flow.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.steps.is_none()</code>.
    pub fn steps(&self) -> &[crate::types::StepDetail] {
        self.steps.as_deref().unwrap_or_default()
    }
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.bootstrap_actions.is_none()</code>.
    pub fn bootstrap_actions(&self) -> &[crate::types::BootstrapActionDetail] {
        self.bootstrap_actions.as_deref().unwrap_or_default()
    }
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.supported_products.is_none()</code>.
    pub fn supported_products(&self) -> &[::std::string::String] {
        self.supported_products.as_deref().unwrap_or_default()
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
    pub fn visible_to_all_users(&self) -> ::std::option::Option<bool> {
        self.visible_to_all_users
    }
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub fn job_flow_role(&self) -> ::std::option::Option<&str> {
        self.job_flow_role.as_deref()
    }
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(&self) -> ::std::option::Option<&str> {
        self.service_role.as_deref()
    }
    /// <p>An IAM role for automatic scaling policies.</p>
    pub fn auto_scaling_role(&self) -> ::std::option::Option<&str> {
        self.auto_scaling_role.as_deref()
    }
    /// <p>The way that individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn scale_down_behavior(&self) -> ::std::option::Option<&crate::types::ScaleDownBehavior> {
        self.scale_down_behavior.as_ref()
    }
}
impl JobFlowDetail {
    /// Creates a new builder-style object to manufacture [`JobFlowDetail`](crate::types::JobFlowDetail).
    pub fn builder() -> crate::types::builders::JobFlowDetailBuilder {
        crate::types::builders::JobFlowDetailBuilder::default()
    }
    /// Converts this [`JobFlowDetail`](crate::types::JobFlowDetail) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::JobFlowDetailBuilder {
        crate::types::builders::JobFlowDetailBuilder {
            job_flow_id: self.job_flow_id,
            name: self.name,
            log_uri: self.log_uri,
            ami_version: self.ami_version,
            execution_status_detail: self.execution_status_detail,
            instances: self.instances,
            steps: self.steps,
            bootstrap_actions: self.bootstrap_actions,
            supported_products: self.supported_products,
            visible_to_all_users: self.visible_to_all_users,
            job_flow_role: self.job_flow_role,
            service_role: self.service_role,
            auto_scaling_role: self.auto_scaling_role,
            scale_down_behavior: self.scale_down_behavior,
        }
    }
}

/// A builder for [`JobFlowDetail`](crate::types::JobFlowDetail).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct JobFlowDetailBuilder {
    pub(crate) job_flow_id: ::std::option::Option<::std::string::String>,
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) log_uri: ::std::option::Option<::std::string::String>,
    pub(crate) ami_version: ::std::option::Option<::std::string::String>,
    pub(crate) execution_status_detail: ::std::option::Option<crate::types::JobFlowExecutionStatusDetail>,
    pub(crate) instances: ::std::option::Option<crate::types::JobFlowInstancesDetail>,
    pub(crate) steps: ::std::option::Option<::std::vec::Vec<crate::types::StepDetail>>,
    pub(crate) bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionDetail>>,
    pub(crate) supported_products: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) visible_to_all_users: ::std::option::Option<bool>,
    pub(crate) job_flow_role: ::std::option::Option<::std::string::String>,
    pub(crate) service_role: ::std::option::Option<::std::string::String>,
    pub(crate) auto_scaling_role: ::std::option::Option<::std::string::String>,
    pub(crate) scale_down_behavior: ::std::option::Option<crate::types::ScaleDownBehavior>,
}
impl JobFlowDetailBuilder {
    /// <p>The job flow identifier.</p>
    pub fn job_flow_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The job flow identifier.</p>
    pub fn set_job_flow_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_id = input;
        self
    }
    /// <p>The job flow identifier.</p>
    pub fn get_job_flow_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_id
    }
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
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub fn log_uri(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.log_uri = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub fn set_log_uri(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.log_uri = input;
        self
    }
    /// <p>The location in Amazon S3 where log files for the job are stored.</p>
    pub fn get_log_uri(&self) -> &::std::option::Option<::std::string::String> {
        &self.log_uri
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
    /// <p>Describes the execution status of the job flow.</p>
    pub fn execution_status_detail(mut self, input: crate::types::JobFlowExecutionStatusDetail) -> Self {
        self.execution_status_detail = ::std::option::Option::Some(input);
        self
    }
    /// <p>Describes the execution status of the job flow.</p>
    pub fn set_execution_status_detail(mut self, input: ::std::option::Option<crate::types::JobFlowExecutionStatusDetail>) -> Self {
        self.execution_status_detail = input;
        self
    }
    /// <p>Describes the execution status of the job flow.</p>
    pub fn get_execution_status_detail(&self) -> &::std::option::Option<crate::types::JobFlowExecutionStatusDetail> {
        &self.execution_status_detail
    }
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub fn instances(mut self, input: crate::types::JobFlowInstancesDetail) -> Self {
        self.instances = ::std::option::Option::Some(input);
        self
    }
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub fn set_instances(mut self, input: ::std::option::Option<crate::types::JobFlowInstancesDetail>) -> Self {
        self.instances = input;
        self
    }
    /// <p>Describes the Amazon EC2 instances of the job flow.</p>
    pub fn get_instances(&self) -> &::std::option::Option<crate::types::JobFlowInstancesDetail> {
        &self.instances
    }
    /// Appends an item to `steps`.
    ///
    /// To override the contents of this collection use [`set_steps`](Self::set_steps).
    ///
    /// <p>A list of steps run by the job flow.</p>
    pub fn steps(mut self, input: crate::types::StepDetail) -> Self {
        let mut v = self.steps.unwrap_or_default();
        v.push(input);
        self.steps = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of steps run by the job flow.</p>
    pub fn set_steps(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::StepDetail>>) -> Self {
        self.steps = input;
        self
    }
    /// <p>A list of steps run by the job flow.</p>
    pub fn get_steps(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::StepDetail>> {
        &self.steps
    }
    /// Appends an item to `bootstrap_actions`.
    ///
    /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
    ///
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    pub fn bootstrap_actions(mut self, input: crate::types::BootstrapActionDetail) -> Self {
        let mut v = self.bootstrap_actions.unwrap_or_default();
        v.push(input);
        self.bootstrap_actions = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    pub fn set_bootstrap_actions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionDetail>>) -> Self {
        self.bootstrap_actions = input;
        self
    }
    /// <p>A list of the bootstrap actions run by the job flow.</p>
    pub fn get_bootstrap_actions(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::BootstrapActionDetail>> {
        &self.bootstrap_actions
    }
    /// Appends an item to `supported_products`.
    ///
    /// To override the contents of this collection use [`set_supported_products`](Self::set_supported_products).
    ///
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    pub fn supported_products(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.supported_products.unwrap_or_default();
        v.push(input.into());
        self.supported_products = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    pub fn set_supported_products(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.supported_products = input;
        self
    }
    /// <p>A list of strings set by third party software when the job flow is launched. If you are not using third party software to manage the job flow this value is empty.</p>
    pub fn get_supported_products(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.supported_products
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
    pub fn visible_to_all_users(mut self, input: bool) -> Self {
        self.visible_to_all_users = ::std::option::Option::Some(input);
        self
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
    pub fn set_visible_to_all_users(mut self, input: ::std::option::Option<bool>) -> Self {
        self.visible_to_all_users = input;
        self
    }
    /// <p>Indicates whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
    pub fn get_visible_to_all_users(&self) -> &::std::option::Option<bool> {
        &self.visible_to_all_users
    }
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub fn job_flow_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub fn set_job_flow_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_role = input;
        self
    }
    /// <p>The IAM role that was specified when the job flow was launched. The EC2 instances of the job flow assume this role.</p>
    pub fn get_job_flow_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_role
    }
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn service_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.service_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn set_service_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.service_role = input;
        self
    }
    /// <p>The IAM role that is assumed by the Amazon EMR service to access AWS resources on your behalf.</p>
    pub fn get_service_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.service_role
    }
    /// <p>An IAM role for automatic scaling policies.</p>
    pub fn auto_scaling_role(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.auto_scaling_role = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An IAM role for automatic scaling policies.</p>
    pub fn set_auto_scaling_role(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.auto_scaling_role = input;
        self
    }
    /// <p>An IAM role for automatic scaling policies.</p>
    pub fn get_auto_scaling_role(&self) -> &::std::option::Option<::std::string::String> {
        &self.auto_scaling_role
    }
    /// <p>The way that individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn scale_down_behavior(mut self, input: crate::types::ScaleDownBehavior) -> Self {
        self.scale_down_behavior = ::std::option::Option::Some(input);
        self
    }
    /// <p>The way that individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn set_scale_down_behavior(mut self, input: ::std::option::Option<crate::types::ScaleDownBehavior>) -> Self {
        self.scale_down_behavior = input;
        self
    }
    /// <p>The way that individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
    pub fn get_scale_down_behavior(&self) -> &::std::option::Option<crate::types::ScaleDownBehavior> {
        &self.scale_down_behavior
    }
    /// Consumes the builder and constructs a [`JobFlowDetail`](crate::types::JobFlowDetail).
    pub fn build(self) -> crate::types::JobFlowDetail {
        crate::types::JobFlowDetail {
            job_flow_id: self.job_flow_id,
            name: self.name,
            log_uri: self.log_uri,
            ami_version: self.ami_version,
            execution_status_detail: self.execution_status_detail,
            instances: self.instances,
            steps: self.steps,
            bootstrap_actions: self.bootstrap_actions,
            supported_products: self.supported_products,
            visible_to_all_users: self.visible_to_all_users,
            job_flow_role: self.job_flow_role,
            service_role: self.service_role,
            auto_scaling_role: self.auto_scaling_role,
            scale_down_behavior: self.scale_down_behavior,
        }
    }
}
