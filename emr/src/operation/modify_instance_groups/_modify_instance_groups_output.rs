/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ModifyInstanceGroups</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ModifyInstanceGroupsOutput {}
impl ModifyInstanceGroupsOutput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceGroupsOutput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput).
    pub fn builder() -> crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsOutputBuilder {
        crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsOutputBuilder::default()
    }
    /// Converts this [`ModifyInstanceGroupsOutput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsOutputBuilder {
        crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsOutputBuilder {}
    }
}

/// A builder for [`ModifyInstanceGroupsOutput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ModifyInstanceGroupsOutputBuilder {}
impl ModifyInstanceGroupsOutputBuilder {
    /// Consumes the builder and constructs a [`ModifyInstanceGroupsOutput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput).
    pub fn build(self) -> crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput {
        crate::operation::modify_instance_groups::ModifyInstanceGroupsOutput {}
    }
}
