/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>RemoveAutoScalingPolicy</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct RemoveAutoScalingPolicyOutput {}
impl RemoveAutoScalingPolicyOutput {
    /// Creates a new builder-style object to manufacture [`RemoveAutoScalingPolicyOutput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput).
    pub fn builder() -> crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyOutputBuilder {
        crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyOutputBuilder::default()
    }
    /// Converts this [`RemoveAutoScalingPolicyOutput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyOutputBuilder {
        crate::operation::remove_auto_scaling_policy::builders::RemoveAutoScalingPolicyOutputBuilder {}
    }
}

/// A builder for [`RemoveAutoScalingPolicyOutput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct RemoveAutoScalingPolicyOutputBuilder {}
impl RemoveAutoScalingPolicyOutputBuilder {
    /// Consumes the builder and constructs a [`RemoveAutoScalingPolicyOutput`](crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput).
    pub fn build(self) -> crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput {
        crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput {}
    }
}
