/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>RemoveManagedScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveManagedScalingPolicyOutput {}
impl RemoveManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`RemoveManagedScalingPolicyOutput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput).
    pub fn builder() -> crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyOutputBuilder {
        crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyOutputBuilder::default()
    }
    /// Converts this [`RemoveManagedScalingPolicyOutput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyOutputBuilder {
        crate::operation::remove_managed_scaling_policy::builders::RemoveManagedScalingPolicyOutputBuilder {}
    }
}

/// A builder for [`RemoveManagedScalingPolicyOutput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveManagedScalingPolicyOutputBuilder {}
impl RemoveManagedScalingPolicyOutputBuilder {
    /// Consumes the builder and constructs a [`RemoveManagedScalingPolicyOutput`](crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput).
    pub fn build(self) -> crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput {
        crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput {}
    }
}
