/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Fetches the attached managed scaling policy for an Amazon EMR cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetManagedScalingPolicy;
impl GetManagedScalingPolicy {
    /// Creates a new `GetManagedScalingPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for GetManagedScalingPolicy {
    const NAME: &'static str = "GetManagedScalingPolicy";

    type Input = crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyInput;
    type Output = crate::operation::get_managed_scaling_policy::GetManagedScalingPolicyOutput;
    type Error = crate::Error;
}

pub use crate::operation::get_managed_scaling_policy::_get_managed_scaling_policy_input::GetManagedScalingPolicyInput;

pub use crate::operation::get_managed_scaling_policy::_get_managed_scaling_policy_output::GetManagedScalingPolicyOutput;

mod _get_managed_scaling_policy_input;

mod _get_managed_scaling_policy_output;

/// Builders
pub mod builders {
    pub use crate::operation::get_managed_scaling_policy::_get_managed_scaling_policy_input::GetManagedScalingPolicyInputBuilder;

    pub use crate::operation::get_managed_scaling_policy::_get_managed_scaling_policy_output::GetManagedScalingPolicyOutputBuilder;
}
