/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>SetTerminationProtection locks a cluster (job flow) so the EC2 instances in the cluster cannot be terminated by user intervention, an API call, or in the event of a job-flow error. The cluster still terminates upon successful completion of the job flow.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct SetTerminationProtection;
impl SetTerminationProtection {
    /// Creates a new `SetTerminationProtection`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for SetTerminationProtection {
    const NAME: &'static str = "SetTerminationProtection";

    type Input = crate::operation::set_termination_protection::SetTerminationProtectionInput;
    type Output = crate::operation::set_termination_protection::SetTerminationProtectionOutput;
    type Error = crate::Error;
}

pub use crate::operation::set_termination_protection::_set_termination_protection_input::SetTerminationProtectionInput;

pub use crate::operation::set_termination_protection::_set_termination_protection_output::SetTerminationProtectionOutput;

mod _set_termination_protection_input;

mod _set_termination_protection_output;

/// Builders
pub mod builders {
    pub use crate::operation::set_termination_protection::_set_termination_protection_input::SetTerminationProtectionInputBuilder;

    pub use crate::operation::set_termination_protection::_set_termination_protection_output::SetTerminationProtectionOutputBuilder;
}
