/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::error::{InternalServerError, InternalServerException, InvalidRequestException};

/// All possible error types for this service.
#[non_exhaustive]
#[derive(::std::fmt::Debug)]
pub enum Error {
    /// <p>Indicates that an error occurred while processing the request and that the request was not completed.</p>
    InternalServerError(InternalServerError),
    /// <p>This exception occurs when there is an internal failure in the Amazon EMR service.</p>
    InternalServerException(InternalServerException),
    /// <p>This exception occurs when there is something wrong with user input.</p>
    InvalidRequestException(InvalidRequestException),
}

impl Error {
    /// The error message, if the service sent one.
    pub fn message(&self) -> ::std::option::Option<&str> {
        match self {
            Error::InternalServerError(_) => None,
            Error::InternalServerException(inner) => inner.message(),
            Error::InvalidRequestException(inner) => inner.message(),
        }
    }

    /// The service-specific error code, if the service sent one.
    pub fn code(&self) -> ::std::option::Option<&str> {
        match self {
            Error::InvalidRequestException(inner) => inner.error_code(),
            Error::InternalServerError(_) | Error::InternalServerException(_) => None,
        }
    }
}

impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Error::InternalServerError(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InternalServerException(inner) => ::std::fmt::Display::fmt(inner, f),
            Error::InvalidRequestException(inner) => ::std::fmt::Display::fmt(inner, f),
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::InternalServerError(inner) => Some(inner),
            Error::InternalServerException(inner) => Some(inner),
            Error::InvalidRequestException(inner) => Some(inner),
        }
    }
}

impl From<InternalServerError> for Error {
    fn from(err: InternalServerError) -> Self {
        Error::InternalServerError(err)
    }
}

impl From<InternalServerException> for Error {
    fn from(err: InternalServerException) -> Self {
        Error::InternalServerException(err)
    }
}

impl From<InvalidRequestException> for Error {
    fn from(err: InvalidRequestException) -> Self {
        Error::InvalidRequestException(err)
    }
}

#[cfg(test)]
mod test {
    use crate::types::error::{InternalServerError, InvalidRequestException};
    use crate::Error;
    use std::error::Error as _;

    #[test]
    fn wraps_modeled_exceptions() {
        let err: Error = InvalidRequestException::builder()
            .error_code("INVALID_CLUSTER_ID")
            .message("Cluster id 'j-123' is not valid.")
            .build()
            .into();
        assert_eq!(Some("INVALID_CLUSTER_ID"), err.code());
        assert_eq!(Some("Cluster id 'j-123' is not valid."), err.message());
        assert_eq!(
            "InvalidRequestException: Cluster id 'j-123' is not valid.",
            err.to_string()
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn memberless_exception_displays_its_name() {
        let err = Error::from(InternalServerError::builder().build());
        assert_eq!("InternalServerError", err.to_string());
        assert_eq!(None, err.message());
        assert_eq!(None, err.code());
    }
}
