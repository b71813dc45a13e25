/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Removes a managed scaling policy from a specified EMR cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct RemoveManagedScalingPolicy;
impl RemoveManagedScalingPolicy {
    /// Creates a new `RemoveManagedScalingPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for RemoveManagedScalingPolicy {
    const NAME: &'static str = "RemoveManagedScalingPolicy";

    type Input = crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyInput;
    type Output = crate::operation::remove_managed_scaling_policy::RemoveManagedScalingPolicyOutput;
    type Error = crate::Error;
}

pub use crate::operation::remove_managed_scaling_policy::_remove_managed_scaling_policy_input::RemoveManagedScalingPolicyInput;

pub use crate::operation::remove_managed_scaling_policy::_remove_managed_scaling_policy_output::RemoveManagedScalingPolicyOutput;

mod _remove_managed_scaling_policy_input;

mod _remove_managed_scaling_policy_output;

/// Builders
pub mod builders {
    pub use crate::operation::remove_managed_scaling_policy::_remove_managed_scaling_policy_input::RemoveManagedScalingPolicyInputBuilder;

    pub use crate::operation::remove_managed_scaling_policy::_remove_managed_scaling_policy_output::RemoveManagedScalingPolicyOutputBuilder;
}
