/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Input for the <code>ListSecurityConfigurations</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ListSecurityConfigurationsInput {
    /// <p>The pagination token that indicates the set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListSecurityConfigurationsInput {
    /// <p>The pagination token that indicates the set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListSecurityConfigurationsInput {
    /// Creates a new builder-style object to manufacture [`ListSecurityConfigurationsInput`](crate::operation::list_security_configurations::ListSecurityConfigurationsInput).
    pub fn builder() -> crate::operation::list_security_configurations::builders::ListSecurityConfigurationsInputBuilder {
        crate::operation::list_security_configurations::builders::ListSecurityConfigurationsInputBuilder::default()
    }
    /// Converts this [`ListSecurityConfigurationsInput`](crate::operation::list_security_configurations::ListSecurityConfigurationsInput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_security_configurations::builders::ListSecurityConfigurationsInputBuilder {
        crate::operation::list_security_configurations::builders::ListSecurityConfigurationsInputBuilder {
            marker: self.marker,
        }
    }
}

/// A builder for [`ListSecurityConfigurationsInput`](crate::operation::list_security_configurations::ListSecurityConfigurationsInput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListSecurityConfigurationsInputBuilder {
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListSecurityConfigurationsInputBuilder {
    /// <p>The pagination token that indicates the set of results to retrieve.</p>
    pub fn marker(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.marker = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The pagination token that indicates the set of results to retrieve.</p>
    pub fn set_marker(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.marker = input;
        self
    }
    /// <p>The pagination token that indicates the set of results to retrieve.</p>
    pub fn get_marker(&self) -> &::std::option::Option<::std::string::String> {
        &self.marker
    }
    /// Consumes the builder and constructs a [`ListSecurityConfigurationsInput`](crate::operation::list_security_configurations::ListSecurityConfigurationsInput).
    pub fn build(self) -> crate::operation::list_security_configurations::ListSecurityConfigurationsInput {
        crate::operation::list_security_configurations::ListSecurityConfigurationsInput {
            marker: self.marker,
        }
    }
}
