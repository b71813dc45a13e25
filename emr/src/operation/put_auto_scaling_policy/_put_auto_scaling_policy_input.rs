/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>PutAutoScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct PutAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub instance_group_id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub auto_scaling_policy: ::std::option::Option<crate::types::AutoScalingPolicy>,
}
impl PutAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub fn instance_group_id(&self) -> ::std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub fn auto_scaling_policy(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicy> {
        self.auto_scaling_policy.as_ref()
    }
}
impl PutAutoScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`PutAutoScalingPolicyInput`](crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput).
    pub fn builder() -> crate::operation::put_auto_scaling_policy::builders::PutAutoScalingPolicyInputBuilder {
        crate::operation::put_auto_scaling_policy::builders::PutAutoScalingPolicyInputBuilder::default()
    }
    /// Converts this [`PutAutoScalingPolicyInput`](crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::put_auto_scaling_policy::builders::PutAutoScalingPolicyInputBuilder {
        crate::operation::put_auto_scaling_policy::builders::PutAutoScalingPolicyInputBuilder {
            cluster_id: self.cluster_id,
            instance_group_id: self.instance_group_id,
            auto_scaling_policy: self.auto_scaling_policy,
        }
    }
}

/// A builder for [`PutAutoScalingPolicyInput`](crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutAutoScalingPolicyInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_group_id: ::std::option::Option<::std::string::String>,
    pub(crate) auto_scaling_policy: ::std::option::Option<crate::types::AutoScalingPolicy>,
}
impl PutAutoScalingPolicyInputBuilder {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub fn instance_group_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.instance_group_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub fn set_instance_group_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.instance_group_id = input;
        self
    }
    /// <p>Specifies the ID of the instance group to which the automatic scaling policy is applied.</p>
    pub fn get_instance_group_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.instance_group_id
    }
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub fn auto_scaling_policy(mut self, input: crate::types::AutoScalingPolicy) -> Self {
        self.auto_scaling_policy = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub fn set_auto_scaling_policy(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicy>) -> Self {
        self.auto_scaling_policy = input;
        self
    }
    /// <p>Specifies the definition of the automatic scaling policy.</p>
    pub fn get_auto_scaling_policy(&self) -> &::std::option::Option<crate::types::AutoScalingPolicy> {
        &self.auto_scaling_policy
    }
    /// Consumes the builder and constructs a [`PutAutoScalingPolicyInput`](crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput).
    pub fn build(self) -> crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput {
        crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput {
            cluster_id: self.cluster_id,
            instance_group_id: self.instance_group_id,
            auto_scaling_policy: self.auto_scaling_policy,
        }
    }
}
