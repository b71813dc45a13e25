/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListSecurityConfigurations</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ListSecurityConfigurationsOutput {
    /// <p>The creation date and time, and name, of each security configuration.</p>
    pub security_configurations: ::std::option::Option<::std::vec::Vec<crate::types::SecurityConfigurationSummary>>,
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListSecurityConfigurationsOutput {
    /// <p>The creation date and time, and name, of each security configuration.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.security_configurations.is_none()</code>.
    pub fn security_configurations(&self) -> &[crate::types::SecurityConfigurationSummary] {
        self.security_configurations.as_deref().unwrap_or_default()
    }
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListSecurityConfigurationsOutput {
    /// Creates a new builder-style object to manufacture [`ListSecurityConfigurationsOutput`](crate::operation::list_security_configurations::ListSecurityConfigurationsOutput).
    pub fn builder() -> crate::operation::list_security_configurations::builders::ListSecurityConfigurationsOutputBuilder {
        crate::operation::list_security_configurations::builders::ListSecurityConfigurationsOutputBuilder::default()
    }
    /// Converts this [`ListSecurityConfigurationsOutput`](crate::operation::list_security_configurations::ListSecurityConfigurationsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_security_configurations::builders::ListSecurityConfigurationsOutputBuilder {
        crate::operation::list_security_configurations::builders::ListSecurityConfigurationsOutputBuilder {
            security_configurations: self.security_configurations,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListSecurityConfigurationsOutput`](crate::operation::list_security_configurations::ListSecurityConfigurationsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListSecurityConfigurationsOutputBuilder {
    pub(crate) security_configurations: ::std::option::Option<::std::vec::Vec<crate::types::SecurityConfigurationSummary>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListSecurityConfigurationsOutputBuilder {
    /// Appends an item to `security_configurations`.
    ///
    /// To override the contents of this collection use [`set_security_configurations`](Self::set_security_configurations).
    ///
    /// <p>The creation date and time, and name, of each security configuration.</p>
    pub fn security_configurations(mut self, input: crate::types::SecurityConfigurationSummary) -> Self {
        let mut v = self.security_configurations.unwrap_or_default();
        v.push(input);
        self.security_configurations = ::std::option::Option::Some(v);
        self
    }
    /// <p>The creation date and time, and name, of each security configuration.</p>
    pub fn set_security_configurations(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::SecurityConfigurationSummary>>) -> Self {
        self.security_configurations = input;
        self
    }
    /// <p>The creation date and time, and name, of each security configuration.</p>
    pub fn get_security_configurations(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::SecurityConfigurationSummary>> {
        &self.security_configurations
    }
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub fn marker(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.marker = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub fn set_marker(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.marker = input;
        self
    }
    /// <p>A pagination token that indicates the next set of results to retrieve. Include the marker in the next ListSecurityConfiguration call to retrieve the next page of results, if required.</p>
    pub fn get_marker(&self) -> &::std::option::Option<::std::string::String> {
        &self.marker
    }
    /// Consumes the builder and constructs a [`ListSecurityConfigurationsOutput`](crate::operation::list_security_configurations::ListSecurityConfigurationsOutput).
    pub fn build(self) -> crate::operation::list_security_configurations::ListSecurityConfigurationsOutput {
        crate::operation::list_security_configurations::ListSecurityConfigurationsOutput {
            security_configurations: self.security_configurations,
            marker: self.marker,
        }
    }
}
