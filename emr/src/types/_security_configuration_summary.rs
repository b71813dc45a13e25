/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The creation date and time, and name, of a security configuration.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SecurityConfigurationSummary {
    /// <p>The name of the security configuration.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The date and time the security configuration was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl SecurityConfigurationSummary {
    /// <p>The name of the security configuration.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
}
impl SecurityConfigurationSummary {
    /// Creates a new builder-style object to manufacture [`SecurityConfigurationSummary`](crate::types::SecurityConfigurationSummary).
    pub fn builder() -> crate::types::builders::SecurityConfigurationSummaryBuilder {
        crate::types::builders::SecurityConfigurationSummaryBuilder::default()
    }
    /// Converts this [`SecurityConfigurationSummary`](crate::types::SecurityConfigurationSummary) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::SecurityConfigurationSummaryBuilder {
        crate::types::builders::SecurityConfigurationSummaryBuilder {
            name: self.name,
            creation_date_time: self.creation_date_time,
        }
    }
}

/// A builder for [`SecurityConfigurationSummary`](crate::types::SecurityConfigurationSummary).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SecurityConfigurationSummaryBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl SecurityConfigurationSummaryBuilder {
    /// <p>The name of the security configuration.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the security configuration.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the security configuration.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time the security configuration was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// Consumes the builder and constructs a [`SecurityConfigurationSummary`](crate::types::SecurityConfigurationSummary).
    pub fn build(self) -> crate::types::SecurityConfigurationSummary {
        crate::types::SecurityConfigurationSummary {
            name: self.name,
            creation_date_time: self.creation_date_time,
        }
    }
}
