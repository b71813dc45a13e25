/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>RemoveAutoScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub instance_group_id: ::std::option::Option<::std::string::String>,
}
impl RemoveAutoScalingPolicyInput {
    /// <p>Specifies the ID of a cluster. The instance group to which the automatic scaling policy is applied is within this cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn instance_group_id(&self) -> ::std::option::Option<&str> {
        self.instance_group_id.as_deref()
    }
}
impl RemoveAutoScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`RemoveAutoScalingPolicyInput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput).
    pub fn builder() -> crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyInputBuilder {
        crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyInputBuilder::default()
    }
    /// Converts this [`RemoveAutoScalingPolicyInput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyInputBuilder {
        crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyInputBuilder {
            cluster_id: self.cluster_id,
            instance_group_id: self.instance_group_id,
        }
    }
}

/// A builder for [`RemoveAutoScalingPolicyInput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveAutoScalingPolicyInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_group_id: ::std::option::Option<::std::string::String>,
}
impl RemoveAutoScalingPolicyInputBuilder {
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
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn instance_group_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.instance_group_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn set_instance_group_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.instance_group_id = input;
        self
    }
    /// <p>Specifies the ID of the instance group to which the scaling policy is applied.</p>
    pub fn get_instance_group_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.instance_group_id
    }
    /// Consumes the builder and constructs a [`RemoveAutoScalingPolicyInput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput).
    pub fn build(self) -> crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput {
        crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput {
            cluster_id: self.cluster_id,
            instance_group_id: self.instance_group_id,
        }
    }
}
