/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Creates or updates an automatic scaling policy for a core instance group or task instance group in an Amazon EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and terminates EC2 instances in response to the value of a CloudWatch metric.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct PutAutoScalingPolicy;
impl PutAutoScalingPolicy {
    /// Creates a new `PutAutoScalingPolicy`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for PutAutoScalingPolicy {
    const NAME: &'static str = "PutAutoScalingPolicy";

    type Input = crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyInput;
    type Output = crate::operation::put_auto_scaling_policy::PutAutoScalingPolicyOutput;
    type Error = crate::Error;
}

pub use crate::operation::put_auto_scaling_policy::_put_auto_scaling_policy_input::PutAutoScalingPolicyInput;

pub use crate::operation::put_auto_scaling_policy::_put_auto_scaling_policy_output::PutAutoScalingPolicyOutput;

mod _put_auto_scaling_policy_input;

mod _put_auto_scaling_policy_output;

/// Builders
pub mod builders {
    pub use crate::operation::put_auto_scaling_policy::_put_auto_scaling_policy_input::PutAutoScalingPolicyInputBuilder;

    pub use crate::operation::put_auto_scaling_policy::_put_auto_scaling_policy_output::PutAutoScalingPolicyOutputBuilder;
}
