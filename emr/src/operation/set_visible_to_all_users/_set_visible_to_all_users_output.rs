/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>SetVisibleToAllUsers</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SetVisibleToAllUsersOutput {}
impl SetVisibleToAllUsersOutput {
    /// Creates a new builder-style object to manufacture [`SetVisibleToAllUsersOutput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput).
    pub fn builder() -> crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersOutputBuilder {
        crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersOutputBuilder::default()
    }
    /// Converts this [`SetVisibleToAllUsersOutput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersOutputBuilder {
        crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersOutputBuilder {}
    }
}

/// A builder for [`SetVisibleToAllUsersOutput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SetVisibleToAllUsersOutputBuilder {}
impl SetVisibleToAllUsersOutputBuilder {
    /// Consumes the builder and constructs a [`SetVisibleToAllUsersOutput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput).
    pub fn build(self) -> crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput {
        crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput {}
    }
}
