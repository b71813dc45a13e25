/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>SetTerminationProtection</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SetTerminationProtectionOutput {}
impl SetTerminationProtectionOutput {
    /// Creates a new builder-style object to manufacture [`SetTerminationProtectionOutput`](crate::operation::set_termination_protection::SetTerminationProtectionOutput).
    pub fn builder() -> crate::operation::set_termination_protection::builders::SetTerminationProtectionOutputBuilder {
        crate::operation::set_termination_protection::builders::SetTerminationProtectionOutputBuilder::default()
    }
    /// Converts this [`SetTerminationProtectionOutput`](crate::operation::set_termination_protection::SetTerminationProtectionOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::set_termination_protection::builders::SetTerminationProtectionOutputBuilder {
        crate::operation::set_termination_protection::builders::SetTerminationProtectionOutputBuilder {}
    }
}

/// A builder for [`SetTerminationProtectionOutput`](crate::operation::set_termination_protection::SetTerminationProtectionOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SetTerminationProtectionOutputBuilder {}
impl SetTerminationProtectionOutputBuilder {
    /// Consumes the builder and constructs a [`SetTerminationProtectionOutput`](crate::operation::set_termination_protection::SetTerminationProtectionOutput).
    pub fn build(self) -> crate::operation::set_termination_protection::SetTerminationProtectionOutput {
        crate::operation::set_termination_protection::SetTerminationProtectionOutput {}
    }
}
