/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListBootstrapActions</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ListBootstrapActionsOutput {
    /// <p>The bootstrap actions associated with the cluster.</p>
    pub bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::Command>>,
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListBootstrapActionsOutput {
    /// <p>The bootstrap actions associated with the cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.bootstrap_actions.is_none()</code>.
    pub fn bootstrap_actions(&self) -> &[crate::types::Command] {
        self.bootstrap_actions.as_deref().unwrap_or_default()
    }
    /// <p>The pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListBootstrapActionsOutput {
    /// Creates a new builder-style object to manufacture [`ListBootstrapActionsOutput`](crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput).
    pub fn builder() -> crate::operation::list_bootstrap_actions::builders::ListBootstrapActionsOutputBuilder {
        crate::operation::list_bootstrap_actions::builders::ListBootstrapActionsOutputBuilder::default()
    }
    /// Converts this [`ListBootstrapActionsOutput`](crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_bootstrap_actions::builders::ListBootstrapActionsOutputBuilder {
        crate::operation::list_bootstrap_actions::builders::ListBootstrapActionsOutputBuilder {
            bootstrap_actions: self.bootstrap_actions,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListBootstrapActionsOutput`](crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListBootstrapActionsOutputBuilder {
    pub(crate) bootstrap_actions: ::std::option::Option<::std::vec::Vec<crate::types::Command>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListBootstrapActionsOutputBuilder {
    /// Appends an item to `bootstrap_actions`.
    ///
    /// To override the contents of this collection use [`set_bootstrap_actions`](Self::set_bootstrap_actions).
    ///
    /// <p>The bootstrap actions associated with the cluster.</p>
    pub fn bootstrap_actions(mut self, input: crate::types::Command) -> Self {
        let mut v = self.bootstrap_actions.unwrap_or_default();
        v.push(input);
        self.bootstrap_actions = ::std::option::Option::Some(v);
        self
    }
    /// <p>The bootstrap actions associated with the cluster.</p>
    pub fn set_bootstrap_actions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::Command>>) -> Self {
        self.bootstrap_actions = input;
        self
    }
    /// <p>The bootstrap actions associated with the cluster.</p>
    pub fn get_bootstrap_actions(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::Command>> {
        &self.bootstrap_actions
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
    /// Consumes the builder and constructs a [`ListBootstrapActionsOutput`](crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput).
    pub fn build(self) -> crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput {
        crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput {
            bootstrap_actions: self.bootstrap_actions,
            marker: self.marker,
        }
    }
}
