/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Removes an automatic scaling policy from a specified instance group within an EMR cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct RemoveAutoScalingPolicy;
impl RemoveAutoScalingPolicy {
    /// Creates a new `RemoveAutoScalingPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for RemoveAutoScalingPolicy {
    const NAME: &'static str = "RemoveAutoScalingPolicy";

    type Input = crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyInput;
    type Output = crate::operation::remove_auto_scaling_policy::RemoveAutoScalingPolicyOutput;
    type Error = crate::Error;
}

pub use crate::operation::remove_auto_scaling_policy::_remove_auto_scaling_policy_input::RemoveAutoScalingPolicyInput;

pub use crate::operation::remove_auto_scaling_policy::_remove_auto_scaling_policy_output::RemoveAutoScalingPolicyOutput;

mod _remove_auto_scaling_policy_input;

mod _remove_auto_scaling_policy_output;

/// Builders
pub mod builders {
    pub use crate::operation::remove_auto_scaling_policy::_remove_auto_scaling_policy_input::RemoveAutoScalingPolicyInputBuilder;

    pub use crate::operation::remove_auto_scaling_policy::_remove_auto_scaling_policy_output::RemoveAutoScalingPolicyOutputBuilder;
}
