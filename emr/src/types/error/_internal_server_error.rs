/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Indicates that an error occurred while processing the request and that the request was not completed.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InternalServerError {}
impl InternalServerError {
    /// Creates a new builder-style object to manufacture [`InternalServerError`](crate::types::error::InternalServerError).
    pub fn builder() -> crate::types::error::builders::InternalServerErrorBuilder {
        crate::types::error::builders::InternalServerErrorBuilder::default()
    }
    /// Converts this [`InternalServerError`](crate::types::error::InternalServerError) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::error::builders::InternalServerErrorBuilder {
        crate::types::error::builders::InternalServerErrorBuilder {}
    }
}

/// A builder for [`InternalServerError`](crate::types::error::InternalServerError).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InternalServerErrorBuilder {}
impl InternalServerErrorBuilder {
    /// Consumes the builder and constructs a [`InternalServerError`](crate::types::error::InternalServerError).
    pub fn build(self) -> crate::types::error::InternalServerError {
        crate::types::error::InternalServerError {}
    }
}
impl ::std::fmt::Display for InternalServerError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "InternalServerError")
    }
}
impl ::std::error::Error for InternalServerError {}
