/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>ListInstanceFleets</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ListInstanceFleetsInput {
    /// <p>The unique identifier of the cluster.</p>
    pub cluster_id: ::std::option::Option<::std::string::String>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceFleetsInput {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(&self) -> ::std::option::Option<&str> {
        self.cluster_id.as_deref()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListInstanceFleetsInput {
    /// Creates a new builder-style object to manufacture [`ListInstanceFleetsInput`](crate::operation::list_instance_fleets::ListInstanceFleetsInput).
    pub fn builder() -> crate::operation::list_instance_fleets::builders::ListInstanceFleetsInputBuilder {
        crate::operation::list_instance_fleets::builders::ListInstanceFleetsInputBuilder::default()
    }
    /// Converts this [`ListInstanceFleetsInput`](crate::operation::list_instance_fleets::ListInstanceFleetsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_instance_fleets::builders::ListInstanceFleetsInputBuilder {
        crate::operation::list_instance_fleets::builders::ListInstanceFleetsInputBuilder {
            cluster_id: self.cluster_id,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListInstanceFleetsInput`](crate::operation::list_instance_fleets::ListInstanceFleetsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListInstanceFleetsInputBuilder {
    pub(crate) cluster_id: ::std::option::Option<::std::string::String>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListInstanceFleetsInputBuilder {
    /// <p>The unique identifier of the cluster.</p>
    pub fn cluster_id(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.cluster_id = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The unique identifier of the cluster.</p>
    pub fn set_cluster_id(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.cluster_id = input;
        self
    }
    /// <p>The unique identifier of the cluster.</p>
    pub fn get_cluster_id(&self) -> &::std::option::Option<::std::string::String> {
        &self.cluster_id
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
    /// Consumes the builder and constructs a [`ListInstanceFleetsInput`](crate::operation::list_instance_fleets::ListInstanceFleetsInput).
    pub fn build(self) -> crate::operation::list_instance_fleets::ListInstanceFleetsInput {
        crate::operation::list_instance_fleets::ListInstanceFleetsInput {
            cluster_id: self.cluster_id,
            marker: self.marker,
        }
    }
}
