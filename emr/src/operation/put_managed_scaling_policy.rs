/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Creates or updates a managed scaling policy for an Amazon EMR cluster. The managed scaling policy defines the limits for resources, such as EC2 instances that can be added or terminated from a cluster. The policy only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutManagedScalingPolicy;
impl PutManagedScalingPolicy {
    /// Creates a new `PutManagedScalingPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for PutManagedScalingPolicy {
    const NAME: &'static str = "PutManagedScalingPolicy";

    type Input = crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyInput;
    type Output = crate::operation::put_managed_scaling_policy::PutManagedScalingPolicyOutput;
    type Error = crate::Error;
}

pub use crate::operation::put_managed_scaling_policy::_put_managed_scaling_policy_input::PutManagedScalingPolicyInput;

pub use crate::operation::put_managed_scaling_policy::_put_managed_scaling_policy_output::PutManagedScalingPolicyOutput;

mod _put_managed_scaling_policy_input;

mod _put_managed_scaling_policy_output;

/// Builders
pub mod builders {
    pub use crate::operation::put_managed_scaling_policy::_put_managed_scaling_policy_input::PutManagedScalingPolicyInputBuilder;

    pub use crate::operation::put_managed_scaling_policy::_put_managed_scaling_policy_output::PutManagedScalingPolicyOutputBuilder;
}
