/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Provides information about the bootstrap actions associated with a cluster.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListBootstrapActions;
impl ListBootstrapActions {
    /// Creates a new `ListBootstrapActions`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListBootstrapActions {
    const NAME: &'static str = "ListBootstrapActions";

    type Input = crate::operation::list_bootstrap_actions::ListBootstrapActionsInput;
    type Output = crate::operation::list_bootstrap_actions::ListBootstrapActionsOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_bootstrap_actions::_list_bootstrap_actions_input::ListBootstrapActionsInput;

pub use crate::operation::list_bootstrap_actions::_list_bootstrap_actions_output::ListBootstrapActionsOutput;

mod _list_bootstrap_actions_input;

mod _list_bootstrap_actions_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_bootstrap_actions::_list_bootstrap_actions_input::ListBootstrapActionsInputBuilder;

    pub use crate::operation::list_bootstrap_actions::_list_bootstrap_actions_output::ListBootstrapActionsOutputBuilder;
}
