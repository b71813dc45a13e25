/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>PutManagedScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct PutManagedScalingPolicyOutput {}
impl PutManagedScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`PutManagedScalingPolicyOutput`](crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput).
    pub fn builder() -> crate::operation::put_managed_scaling_policy::builders::PutManagedScalingPolicyOutputBuilder {
        crate::operation::put_managed_scaling_policy::builders::PutManagedScalingPolicyOutputBuilder::default()
    }
    /// Converts this [`PutManagedScalingPolicyOutput`](crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::put_managed_scaling_policy::builders::PutManagedScalingPolicyOutputBuilder {
        crate::operation::put_managed_scaling_policy::builders::PutManagedScalingPolicyOutputBuilder {}
    }
}

/// A builder for [`PutManagedScalingPolicyOutput`](crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PutManagedScalingPolicyOutputBuilder {}
impl PutManagedScalingPolicyOutputBuilder {
    /// Consumes the builder and constructs a [`PutManagedScalingPolicyOutput`](crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput).
    pub fn build(self) -> crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput {
        crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput {}
    }
}
