/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>GetManagedScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct GetManagedScalingPolicyOutput {
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub managed_scaling_policy: ::std::option::Option<crate::types::ManagedScalingPolicy>,
}
impl GetManagedScalingPolicyOutput {
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(&self) -> ::std::option::Option<&crate::types::ManagedScalingPolicy> {
        self.managed_scaling_policy.as_ref()
    }
}
impl GetManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`GetManagedScalingPolicyOutput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput).
    pub fn builder() -> crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyOutputBuilder {
        crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyOutputBuilder::default()
    }
    /// Converts this [`GetManagedScalingPolicyOutput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyOutputBuilder {
        crate::operation::get_managed_scaling_policy::builders::GetManagedScalingPolicyOutputBuilder {
            managed_scaling_policy: self.managed_scaling_policy,
        }
    }
}

/// A builder for [`GetManagedScalingPolicyOutput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct GetManagedScalingPolicyOutputBuilder {
    pub(crate) managed_scaling_policy: ::std::option::Option<crate::types::ManagedScalingPolicy>,
}
impl GetManagedScalingPolicyOutputBuilder {
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub fn managed_scaling_policy(mut self, input: crate::types::ManagedScalingPolicy) -> Self {
        self.managed_scaling_policy = ::std::option::Option::Some(input);
        self
    }
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub fn set_managed_scaling_policy(mut self, input: ::std::option::Option<crate::types::ManagedScalingPolicy>) -> Self {
        self.managed_scaling_policy = input;
        self
    }
    /// <p>Specifies the managed scaling policy that is attached to an Amazon EMR cluster.</p>
    pub fn get_managed_scaling_policy(&self) -> &::std::option::Option<crate::types::ManagedScalingPolicy> {
        &self.managed_scaling_policy
    }
    /// Consumes the builder and constructs a [`GetManagedScalingPolicyOutput`](crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput).
    pub fn build(self) -> crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput {
        crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput {
            managed_scaling_policy: self.managed_scaling_policy,
        }
    }
}
