/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>ModifyInstanceGroups</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::fmt::Debug)]
pub struct ModifyInstanceGroupsInput {
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>Instance groups to change.</p>
    pub instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupModifyConfig>>,
}
impl ModifyInstanceGroupsInput {
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>Instance groups to change.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_groups.is_none()</code>.
    pub fn instance_groups(&self) -> &[crate::types::InstanceGroupModifyConfig] {
        self.instance_groups.as_deref().unwrap_or_default()
    }
}
impl ModifyInstanceGroupsInput {
    /// Creates a new builder-style object to manufacture [`ModifyInstanceGroupsInput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsInput).
    pub fn builder() -> crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsInputBuilder {
        crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsInputBuilder::default()
    }
    /// Converts this [`ModifyInstanceGroupsInput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsInputBuilder {
        crate::operation::modify_instance_groups::builders::ModifyInstanceGroupsInputBuilder {
            cluster_id: self.cluster_id,
            instance_groups: self.instance_groups,
        }
    }
}

/// A builder for [`ModifyInstanceGroupsInput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ModifyInstanceGroupsInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupModifyConfig>>,
}
impl ModifyInstanceGroupsInputBuilder {
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The ID of the cluster to which the instance group belongs.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
    }
    /// Appends an item to `instance_groups`.
    ///
    /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
    ///
    /// <p>Instance groups to change.</p>
    pub fn instance_groups(mut self, input: crate::types::InstanceGroupModifyConfig) -> Self {
        let mut v = self.instance_groups.unwrap_or_default();
        v.push(input);
        self.instance_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>Instance groups to change.</p>
    pub fn set_instance_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupModifyConfig>>) -> Self {
        self.instance_groups = input;
        self
    }
    /// <p>Instance groups to change.</p>
    pub fn get_instance_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceGroupModifyConfig>> {
        &self.instance_groups
    }
    /// Consumes the builder and constructs a [`ModifyInstanceGroupsInput`](crate::operation::modify_instance_groups::ModifyInstanceGroupsInput).
    pub fn build(self) -> crate::operation::modify_instance_groups::ModifyInstanceGroupsInput {
        crate::operation::modify_instance_groups::ModifyInstanceGroupsInput {
            cluster_id: self.cluster_id,
            instance_groups: self.instance_groups,
        }
    }
}
