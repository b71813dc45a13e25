/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides the status of all clusters visible to this AWS account. Allows you to filter the list of clusters based on certain criteria; for example, filtering by cluster creation date and time or by status. This call returns a maximum of 50 clusters per call, but returns a marker to track the paging of the cluster list across multiple <code>ListClusters</code> calls.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListClusters;
impl ListClusters {
    /// Creates a new `ListClusters`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListClusters {
    const NAME: &'static str = "ListClusters";

    type Input = crate::operation::list_clusters::ListClustersInput;
    type Output = crate::operation::list_clusters::ListClustersOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_clusters::_list_clusters_input::ListClustersInput;

pub use crate::operation::list_clusters::_list_clusters_output::ListClustersOutput;

mod _list_clusters_input;

mod _list_clusters_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_clusters::_list_clusters_input::ListClustersInputBuilder;

    pub use crate::operation::list_clusters::_list_clusters_output::ListClustersOutputBuilder;
}
