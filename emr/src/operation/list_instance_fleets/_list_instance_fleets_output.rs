/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListInstanceFleets</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListInstanceFleetsOutput {
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    pub instance_fleets: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleet>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceFleetsOutput {
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instance_fleets.is_none()</code>.
    pub fn instance_fleets(&self) -> &[crate::types::InstanceFleet] {
        self.instance_fleets.as_deref().unwrap_or_default()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListInstanceFleetsOutput {
    /// Creates a new builder-style object to manufacture [`ListInstanceFleetsOutput`](crate::operation::list_instance_fleets::ListInstanceFleetsOutput).
    pub fn builder() -> crate::operation::list_instance_fleets::builders::ListInstanceFleetsOutputBuilder {
        crate::operation::list_instance_fleets::builders::ListInstanceFleetsOutputBuilder::default()
    }
    /// Converts this [`ListInstanceFleetsOutput`](crate::operation::list_instance_fleets::ListInstanceFleetsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_instance_fleets::builders::ListInstanceFleetsOutputBuilder {
        crate::operation::list_instance_fleets::builders::ListInstanceFleetsOutputBuilder {
            instance_fleets: self.instance_fleets,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListInstanceFleetsOutput`](crate::operation::list_instance_fleets::ListInstanceFleetsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListInstanceFleetsOutputBuilder {
    pub(crate) instance_fleets: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleet>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceFleetsOutputBuilder {
    /// Appends an item to `instance_fleets`.
    ///
    /// To override the contents of this collection use [`set_instance_fleets`](Self::set_instance_fleets).
    ///
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    pub fn instance_fleets(mut self, input: crate::types::InstanceFleet) -> Self {
        let mut v = self.instance_fleets.unwrap_or_default();
        v.push(input);
        self.instance_fleets = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    pub fn set_instance_fleets(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::InstanceFleet>>) -> Self {
        self.instance_fleets = input;
        self
    }
    /// <p>The list of instance fleets for the cluster and given filters.</p>
    pub fn get_instance_fleets(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::InstanceFleet>> {
        &self.instance_fleets
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
    /// Consumes the builder and constructs a [`ListInstanceFleetsOutput`](crate::operation::list_instance_fleets::ListInstanceFleetsOutput).
    pub fn build(self) -> crate::operation::list_instance_fleets::ListInstanceFleetsOutput {
        crate::operation::list_instance_fleets::ListInstanceFleetsOutput {
            instance_fleets: self.instance_fleets,
            marker: self.marker,
        }
    }
}
