/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>This exception occurs when there is something wrong with user input.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InvalidRequestException {
    /// <p>The error code associated with the exception.</p>
    pub error_code: ::std::option::Option<::std::string::String>,
    /// <p>The message associated with the exception.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl InvalidRequestException {
    /// <p>The error code associated with the exception.</p>
    pub fn error_code(&self) -> ::std::option::Option<&str> {
        self.error_code.as_deref()
    }
    /// <p>The message associated with the exception.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl InvalidRequestException {
    /// Creates a new builder-style object to manufacture [`InvalidRequestException`](crate::types::error::InvalidRequestException).
    pub fn builder() -> crate::types::error::builders::InvalidRequestExceptionBuilder {
        crate::types::error::builders::InvalidRequestExceptionBuilder::default()
    }
    /// Converts this [`InvalidRequestException`](crate::types::error::InvalidRequestException) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::error::builders::InvalidRequestExceptionBuilder {
        crate::types::error::builders::InvalidRequestExceptionBuilder {
            error_code: self.error_code,
            message: self.message,
        }
    }
}

/// A builder for [`InvalidRequestException`](crate::types::error::InvalidRequestException).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InvalidRequestExceptionBuilder {
    pub(crate) error_code: ::std::option::Option<::std::string::String>,
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl InvalidRequestExceptionBuilder {
    /// <p>The error code associated with the exception.</p>
    pub fn error_code(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.error_code = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The error code associated with the exception.</p>
    pub fn set_error_code(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.error_code = input;
        self
    }
    /// <p>The error code associated with the exception.</p>
    pub fn get_error_code(&self) -> &::std::option::Option<::std::string::String> {
        &self.error_code
    }
    /// <p>The message associated with the exception.</p>
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The message associated with the exception.</p>
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    /// <p>The message associated with the exception.</p>
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Consumes the builder and constructs a [`InvalidRequestException`](crate::types::error::InvalidRequestException).
    pub fn build(self) -> crate::types::error::InvalidRequestException {
        crate::types::error::InvalidRequestException {
            error_code: self.error_code,
            message: self.message,
        }
    }
}
impl ::std::fmt::Display for InvalidRequestException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "InvalidRequestException")?;
        if let ::std::option::Option::Some(message) = &self.message {
            ::std::write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl ::std::error::Error for InvalidRequestException {}
