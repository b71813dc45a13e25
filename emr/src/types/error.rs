/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use crate::types::error::_internal_server_error::InternalServerError;
pub use crate::types::error::_internal_server_exception::InternalServerException;
pub use crate::types::error::_invalid_request_exception::InvalidRequestException;

mod _internal_server_error;
mod _internal_server_exception;
mod _invalid_request_exception;

/// Builders
pub mod builders {
    pub use crate::types::error::_internal_server_error::InternalServerErrorBuilder;
    pub use crate::types::error::_internal_server_exception::InternalServerExceptionBuilder;
    pub use crate::types::error::_invalid_request_exception::InvalidRequestExceptionBuilder;
}
