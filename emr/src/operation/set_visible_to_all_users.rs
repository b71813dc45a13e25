/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Sets the <code>Cluster::visible_to_all_users</code> value, which determines whether the cluster is visible to all IAM users of the AWS account associated with the cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct SetVisibleToAllUsers;
impl SetVisibleToAllUsers {
    /// Creates a new `SetVisibleToAllUsers`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for SetVisibleToAllUsers {
    const NAME: &'static str = "SetVisibleToAllUsers";

    type Input = crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput;
    type Output = crate::operation::set_visible_to_all_users::SetVisibleToAllUsersOutput;
    type Error = crate::Error;
}

pub use crate::operation::set_visible_to_all_users::_set_visible_to_all_users_input::SetVisibleToAllUsersInput;

pub use crate::operation::set_visible_to_all_users::_set_visible_to_all_users_output::SetVisibleToAllUsersOutput;

mod _set_visible_to_all_users_input;

mod _set_visible_to_all_users_output;

/// Builders
pub mod builders {
    pub use crate::operation::set_visible_to_all_users::_set_visible_to_all_users_input::SetVisibleToAllUsersInputBuilder;

    pub use crate::operation::set_visible_to_all_users::_set_visible_to_all_users_output::SetVisibleToAllUsersOutputBuilder;
}
