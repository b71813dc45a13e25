/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Who created the block public access configuration, and when.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct BlockPublicAccessConfigurationMetadata {
    /// <p>The date and time that the configuration was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    /// <p>The ARN of the IAM entity that created the configuration.</p>
    pub created_by_arn: ::std::option::Option<::std::string::String>,
}
impl BlockPublicAccessConfigurationMetadata {
    /// <p>The date and time that the configuration was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
    /// <p>The ARN of the IAM entity that created the configuration.</p>
    pub fn created_by_arn(&self) -> ::std::option::Option<&str> {
        self.created_by_arn.as_deref()
    }
}
impl BlockPublicAccessConfigurationMetadata {
    /// Creates a new builder-style object to manufacture [`BlockPublicAccessConfigurationMetadata`](crate::types::BlockPublicAccessConfigurationMetadata).
    pub fn builder() -> crate::types::builders::BlockPublicAccessConfigurationMetadataBuilder {
        crate::types::builders::BlockPublicAccessConfigurationMetadataBuilder::default()
    }
    /// Converts this [`BlockPublicAccessConfigurationMetadata`](crate::types::BlockPublicAccessConfigurationMetadata) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::BlockPublicAccessConfigurationMetadataBuilder {
        crate::types::builders::BlockPublicAccessConfigurationMetadataBuilder {
            creation_date_time: self.creation_date_time,
            created_by_arn: self.created_by_arn,
        }
    }
}

/// A builder for [`BlockPublicAccessConfigurationMetadata`](crate::types::BlockPublicAccessConfigurationMetadata).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct BlockPublicAccessConfigurationMetadataBuilder {
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
    pub(crate) created_by_arn: ::std::option::Option<::std::string::String>,
}
impl BlockPublicAccessConfigurationMetadataBuilder {
    /// <p>The date and time that the configuration was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time that the configuration was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time that the configuration was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// <p>The ARN of the IAM entity that created the configuration.</p>
    pub fn created_by_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.created_by_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The ARN of the IAM entity that created the configuration.</p>
    pub fn set_created_by_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.created_by_arn = input;
        self
    }
    /// <p>The ARN of the IAM entity that created the configuration.</p>
    pub fn get_created_by_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.created_by_arn
    }
    /// Consumes the builder and constructs a [`BlockPublicAccessConfigurationMetadata`](crate::types::BlockPublicAccessConfigurationMetadata).
    pub fn build(self) -> crate::types::BlockPublicAccessConfigurationMetadata {
        crate::types::BlockPublicAccessConfigurationMetadata {
            creation_date_time: self.creation_date_time,
            created_by_arn: self.created_by_arn,
        }
    }
}
