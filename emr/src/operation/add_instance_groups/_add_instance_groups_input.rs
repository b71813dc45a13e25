/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>AddInstanceGroups</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct AddInstanceGroupsInput {
    /// <p>Instance groups to add.</p>
    pub instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>,
    /// <p>Job flow in which to add the instance groups.</p>
    pub job_flow_id: ::std::option::Option<::std::string::String>,
}
impl AddInstanceGroupsInput {
    /// <p>Instance groups to add.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_groups.is_none()</code>.
    pub fn instance_groups(&self) -> &[crate::types::InstanceGroupConfig] {
        self.instance_groups.as_deref().unwrap_or_default()
    }
    /// <p>Job flow in which to add the instance groups.</p>
    pub fn job_flow_id(&self) -> ::std::option::Option<&str> {
        self.job_flow_id.as_deref()
    }
}
impl AddInstanceGroupsInput {
    /// Creates a new builder-style object to manufacture [`AddInstanceGroupsInput`](crate::operation::add_instance_groups::AddInstanceGroupsInput).
    pub fn builder() -> crate::operation::add_instance_groups::builders::AddInstanceGroupsInputBuilder {
        crate::operation::add_instance_groups::builders::AddInstanceGroupsInputBuilder::default()
    }
    /// Converts this [`AddInstanceGroupsInput`](crate::operation::add_instance_groups::AddInstanceGroupsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::add_instance_groups::builders::AddInstanceGroupsInputBuilder {
        crate::operation::add_instance_groups::builders::AddInstanceGroupsInputBuilder {
            instance_groups: self.instance_groups,
            job_flow_id: self.job_flow_id,
        }
    }
}

/// A builder for [`AddInstanceGroupsInput`](crate::operation::add_instance_groups::AddInstanceGroupsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AddInstanceGroupsInputBuilder {
    pub(crate) instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>,
    pub(crate) job_flow_id: ::std::option::Option<::std::string::String>,
}
impl AddInstanceGroupsInputBuilder {
    /// Appends an item to `instance_groups`.
    ///
    /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
    ///
    /// <p>Instance groups to add.</p>
    pub fn instance_groups(mut self, input: crate::types::InstanceGroupConfig) -> Self {
        let mut v = self.instance_groups.unwrap_or_default();
        v.push(input);
        self.instance_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>Instance groups to add.</p>
    pub fn set_instance_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>>) -> Self {
        self.instance_groups = input;
        self
    }
    /// <p>Instance groups to add.</p>
    pub fn get_instance_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupConfig>> {
        &self.instance_groups
    }
    /// <p>Job flow in which to add the instance groups.</p>
    pub fn job_flow_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.job_flow_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Job flow in which to add the instance groups.</p>
    pub fn set_job_flow_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.job_flow_id = input;
        self
    }
    /// <p>Job flow in which to add the instance groups.</p>
    pub fn get_job_flow_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.job_flow_id
    }
    /// Consumes the builder and constructs a [`AddInstanceGroupsInput`](crate::operation::add_instance_groups::AddInstanceGroupsInput).
    pub fn build(self) -> crate::operation::add_instance_groups::AddInstanceGroupsInput {
        crate::operation::add_instance_groups::AddInstanceGroupsInput {
            instance_groups: self.instance_groups,
            job_flow_id: self.job_flow_id,
        }
    }
}
