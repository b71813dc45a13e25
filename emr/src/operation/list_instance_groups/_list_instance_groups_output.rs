/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListInstanceGroups</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListInstanceGroupsOutput {
    /// <p>The list of instance groups for the cluster and given filters.</p>
    pub instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroup>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceGroupsOutput {
    /// <p>The list of instance groups for the cluster and given filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_groups.is_none()</code>.
    pub fn instance_groups(&self) -> &[crate::types::InstanceGroup] {
        self.instance_groups.as_deref().unwrap_or_default()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListInstanceGroupsOutput {
    /// Creates a new builder-style object to manufacture [`ListInstanceGroupsOutput`](crate::operation::list_instance_groups::ListInstanceGroupsOutput).
    pub fn builder() -> crate::operation::list_instance_groups::builders::ListInstanceGroupsOutputBuilder {
        crate::operation::list_instance_groups::builders::ListInstanceGroupsOutputBuilder::default()
    }
    /// Converts this [`ListInstanceGroupsOutput`](crate::operation::list_instance_groups::ListInstanceGroupsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_instance_groups::builders::ListInstanceGroupsOutputBuilder {
        crate::operation::list_instance_groups::builders::ListInstanceGroupsOutputBuilder {
            instance_groups: self.instance_groups,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListInstanceGroupsOutput`](crate::operation::list_instance_groups::ListInstanceGroupsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListInstanceGroupsOutputBuilder {
    pub(crate) instance_groups: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroup>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceGroupsOutputBuilder {
    /// Appends an item to `instance_groups`.
    ///
    /// To override the contents of this collection use [`set_instance_groups`](Self::set_instance_groups).
    ///
    /// <p>The list of instance groups for the cluster and given filters.</p>
    pub fn instance_groups(mut self, input: crate::types::InstanceGroup) -> Self {
        let mut v = self.instance_groups.unwrap_or_default();
        v.push(input);
        self.instance_groups = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of instance groups for the cluster and given filters.</p>
    pub fn set_instance_groups(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceGroup>>) -> Self {
        self.instance_groups = input;
        self
    }
    /// <p>The list of instance groups for the cluster and given filters.</p>
    pub fn get_instance_groups(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceGroup>> {
        &self.instance_groups
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.marker = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn set_marker(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.marker = input;
        self
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn get_marker(&self) -> &::std::option::Option<::std::string::String> {
        &self.marker
    }
    /// Consumes the builder and constructs a [`ListInstanceGroupsOutput`](crate::operation::list_instance_groups::ListInstanceGroupsOutput).
    pub fn build(self) -> crate::operation::list_instance_groups::ListInstanceGroupsOutput {
        crate::operation::list_instance_groups::ListInstanceGroupsOutput {
            instance_groups: self.instance_groups,
            marker: self.marker,
        }
    }
}
