/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ModifyInstanceFleet</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ModifyInstanceFleetOutput {}
impl ModifyInstanceFleetOutput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceFleetOutput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput).
    pub fn builder() -> crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetOutputBuilder {
        crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetOutputBuilder::default()
    }
    /// Converts this [`ModifyInstanceFleetOutput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetOutputBuilder {
        crate::operation::modify_instance_fleet::builders::ModifyInstanceFleetOutputBuilder {}
    }
}

/// A builder for [`ModifyInstanceFleetOutput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ModifyInstanceFleetOutputBuilder {}
impl ModifyInstanceFleetOutputBuilder {
    /// Consumes the builder and constructs a [`ModifyInstanceFleetOutput`](crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput).
    pub fn build(self) -> crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput {
        crate::operation::modify_instance_fleet::ModifyInstanceFleetOutput {}
    }
}
