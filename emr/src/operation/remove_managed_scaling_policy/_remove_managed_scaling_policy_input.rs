/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>RemoveManagedScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
}
impl RemoveManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl RemoveManagedScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`RemoveManagedScalingPolicyInput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput).
    pub fn builder() -> crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyInputBuilder {
        crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyInputBuilder::default()
    }
    /// Converts this [`RemoveManagedScalingPolicyInput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyInputBuilder {
        crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyInputBuilder {
            cluster_id: self.cluster_id,
        }
    }
}

/// A builder for [`RemoveManagedScalingPolicyInput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveManagedScalingPolicyInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
}
impl RemoveManagedScalingPolicyInputBuilder {
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>Specifies the ID of the cluster from which the managed scaling policy will be removed.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// Consumes the builder and constructs a [`RemoveManagedScalingPolicyInput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput).
    pub fn build(self) -> crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput {
        crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput {
            cluster_id: self.cluster_id,
        }
    }
}
