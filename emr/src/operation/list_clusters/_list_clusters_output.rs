/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListClusters</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ListClustersOutput {
    /// <p>The list of clusters for the account based on the given filters.</p>
    pub clusters: ::std::option::Option<::std::vec::Vec<crate::types::ClusterSummary>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListClustersOutput {
    /// <p>The list of clusters for the account based on the given filters.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.clusters.is_none()</code>.
    pub fn clusters(&self) -> &[crate::types::ClusterSummary] {
        self.clusters.as_deref().unwrap_or_default()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListClustersOutput {
    /// Creates a new builder-style object to manufacture [`ListClustersOutput`](crate::operation::list_clusters::ListClustersOutput).
    pub fn builder() -> crate::operation::list_clusters::builders::ListClustersOutputBuilder {
        crate::operation::list_clusters::builders::ListClustersOutputBuilder::default()
    }
    /// Converts this [`ListClustersOutput`](crate::operation::list_clusters::ListClustersOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_clusters::builders::ListClustersOutputBuilder {
        crate::operation::list_clusters::builders::ListClustersOutputBuilder {
            clusters: self.clusters,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListClustersOutput`](crate::operation::list_clusters::ListClustersOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListClustersOutputBuilder {
    pub(crate) clusters: ::std::option::Option<::std::vec::Vec<crate::types::ClusterSummary>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListClustersOutputBuilder {
    /// Appends an item to `clusters`.
    ///
    /// To override the contents of this collection use [`set_clusters`](Self::set_clusters).
    ///
    /// <p>The list of clusters for the account based on the given filters.</p>
    pub fn clusters(mut self, input: crate::types::ClusterSummary) -> Self {
        let mut v = self.clusters.unwrap_or_default();
        v.push(input);
        self.clusters = ::std::option::Option::Some(v);
        self
    }
    /// <p>The list of clusters for the account based on the given filters.</p>
    pub fn set_clusters(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ClusterSummary>>) -> Self {
        self.clusters = input;
        self
    }
    /// <p>The list of clusters for the account based on the given filters.</p>
    pub fn get_clusters(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ClusterSummary>> {
        &self.clusters
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
    /// Consumes the builder and constructs a [`ListClustersOutput`](crate::operation::list_clusters::ListClustersOutput).
    pub fn build(self) -> crate::operation::list_clusters::ListClustersOutput {
        crate::operation::list_clusters::ListClustersOutput {
            clusters: self.clusters,
            marker: self.marker,
        }
    }
}
