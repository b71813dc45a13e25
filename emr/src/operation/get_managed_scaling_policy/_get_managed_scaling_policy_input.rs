/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>GetManagedScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct GetManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
}
impl GetManagedScalingPolicyInput {
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
}
impl GetManagedScalingPolicyInput {
    /// Creates a new builder-style object to manufacture [`GetManagedScalingPolicyInput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput).
    pub fn builder() -> crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyInputBuilder {
        crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyInputBuilder::default()
    }
    /// Converts this [`GetManagedScalingPolicyInput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyInputBuilder {
        crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyInputBuilder {
            cluster_id: self.cluster_id,
        }
    }
}

/// A builder for [`GetManagedScalingPolicyInput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetManagedScalingPolicyInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
}
impl GetManagedScalingPolicyInputBuilder {
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>Specifies the ID of the cluster for which the managed scaling policy will be fetched.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// Consumes the builder and constructs a [`GetManagedScalingPolicyInput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput).
    pub fn build(self) -> crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput {
        crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput {
            cluster_id: self.cluster_id,
        }
    }
}
