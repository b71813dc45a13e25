/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>SetVisibleToAllUsers</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SetVisibleToAllUsersInput {
    /// <p>The unique identifier of the job flow (cluster).</p>
    pub job_flow_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub visible_to_all_users: ::std::option::Option<bool>,
}
impl SetVisibleToAllUsersInput {
    /// <p>The unique identifier of the job flow (cluster).</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.job_flow_ids.is_none()</code>.
    pub fn job_flow_ids(&self) -> &[::std::string::String] {
        self.job_flow_ids.as_deref().unwrap_or_default()
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(&self) -> ::std::option::Option<bool> {
        self.visible_to_all_users
    }
}
impl SetVisibleToAllUsersInput {
    /// Creates a new builder-style object to manufacture [`SetVisibleToAllUsersInput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput).
    pub fn builder() -> crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersInputBuilder {
        crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersInputBuilder::default()
    }
    /// Converts this [`SetVisibleToAllUsersInput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersInputBuilder {
        crate::operation::set_visible_to_all_users::builders::SetVisibleToAllUsersInputBuilder {
            job_flow_ids: self.job_flow_ids,
            visible_to_all_users: self.visible_to_all_users,
        }
    }
}

/// A builder for [`SetVisibleToAllUsersInput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SetVisibleToAllUsersInputBuilder {
    pub(crate) job_flow_ids: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) visible_to_all_users: ::std::option::Option<bool>,
}
impl SetVisibleToAllUsersInputBuilder {
    /// Appends an item to `job_flow_ids`.
    ///
    /// To override the contents of this collection use [`set_job_flow_ids`](Self::set_job_flow_ids).
    ///
    /// <p>The unique identifier of the job flow (cluster).</p>
    pub fn job_flow_ids(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.job_flow_ids.unwrap_or_default();
        v.push(input.into());
        self.job_flow_ids = ::std::option::Option::Some(v);
        self
    }
    /// <p>The unique identifier of the job flow (cluster).</p>
    pub fn set_job_flow_ids(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.job_flow_ids = input;
        self
    }
    /// <p>The unique identifier of the job flow (cluster).</p>
    pub fn get_job_flow_ids(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.job_flow_ids
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn visible_to_all_users(mut self, input: bool) -> Self {
        self.visible_to_all_users = ::std::option::Option::Some(input);
        self
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn set_visible_to_all_users(mut self, input: ::std::option::Option<bool>) -> Self {
        self.visible_to_all_users = input;
        self
    }
    /// <p>A value of <code>true</code> indicates that all IAM users in the AWS account can perform cluster actions if they have the proper IAM policy permissions. A value of <code>false</code> indicates that only the IAM user who created the cluster can perform actions.</p>
    pub fn get_visible_to_all_users(&self) -> &::std::option::Option<bool> {
        &self.visible_to_all_users
    }
    /// Consumes the builder and constructs a [`SetVisibleToAllUsersInput`](crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput).
    pub fn build(self) -> crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput {
        crate::operation::set_visible_to_all_users::SetVisibleToAllUsersInput {
            job_flow_ids: self.job_flow_ids,
            visible_to_all_users: self.visible_to_all_users,
        }
    }
}
