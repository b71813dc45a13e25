/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>This exception occurs when there is an internal failure in the Amazon EMR service.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InternalServerException {
    /// <p>The message associated with the exception.</p>
    pub message: ::std::option::Option<::std::string::String>,
}
impl InternalServerException {
    /// <p>The message associated with the exception.</p>
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl InternalServerException {
    /// Creates a new builder-style object to manufacture [`InternalServerException`](crate::types::error::InternalServerException).
    pub fn builder() -> crate::types::error::builders::InternalServerExceptionBuilder {
        crate::types::error::builders::InternalServerExceptionBuilder::default()
    }
    /// Converts this [`InternalServerException`](crate::types::error::InternalServerException) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::error::builders::InternalServerExceptionBuilder {
        crate::types::error::builders::InternalServerExceptionBuilder {
            message: self.message,
        }
    }
}

/// A builder for [`InternalServerException`](crate::types::error::InternalServerException).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InternalServerExceptionBuilder {
    pub(crate) message: ::std::option::Option<::std::string::String>,
}
impl InternalServerExceptionBuilder {
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
    /// Consumes the builder and constructs a [`InternalServerException`](crate::types::error::InternalServerException).
    pub fn build(self) -> crate::types::error::InternalServerException {
        crate::types::error::InternalServerException {
            message: self.message,
        }
    }
}
impl ::std::fmt::Display for InternalServerException {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "InternalServerException")?;
        if let ::std::option::Option::Some(message) = &self.message {
            ::std::write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl ::std::error::Error for InternalServerException {}

#[cfg(test)]
mod test {
    use crate::types::error::InternalServerException;

    #[test]
    fn display_includes_message_when_present() {
        let err = InternalServerException::builder().message("try again").build();
        assert_eq!("InternalServerException: try again", err.to_string());
        assert_eq!(
            "InternalServerException",
            InternalServerException::builder().build().to_string()
        );
    }
}
