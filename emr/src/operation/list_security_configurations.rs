/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Lists all the security configurations visible to this account, providing their creation dates and times, and their names. This call returns a maximum of 50 clusters per call, but returns a marker to track the paging of the cluster list across multiple <code>ListSecurityConfigurations</code> calls.</p>
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListSecurityConfigurations;
impl ListSecurityConfigurations {
    /// Creates a new `ListSecurityConfigurations`
    pub fn new() -> Self {
        Self
    }
}
impl crate::operation::OperationShape for ListSecurityConfigurations {
    const NAME: &'static str = "ListSecurityConfigurations";

    type Input = crate::operation::list_security_configurations::ListSecurityConfigurationsInput;
    type Output = crate::operation::list_security_configurations::ListSecurityConfigurationsOutput;
    type Error = crate::Error;
}

pub use crate::operation::list_security_configurations::_list_security_configurations_input::ListSecurityConfigurationsInput;

pub use crate::operation::list_security_configurations::_list_security_configurations_output::ListSecurityConfigurationsOutput;

mod _list_security_configurations_input;

mod _list_security_configurations_output;

/// Builders
pub mod builders {
    pub use crate::operation::list_security_configurations::_list_security_configurations_input::ListSecurityConfigurationsInputBuilder;

    pub use crate::operation::list_security_configurations::_list_security_configurations_output::ListSecurityConfigurationsOutputBuilder;
}
