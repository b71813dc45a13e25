/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors produced by the model layer itself.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum UnknownVariantErrorKind {
    /// The value was the empty string.
    Empty,
    /// The value was not empty but matched none of the enum's members.
    Unknown(String),
}

/// The error returned when a string does not name a member of one of the crate's enums.
///
/// Every enum in [`types`](crate::types) is a closed set of wire values. Parsing with
/// `try_parse`, [`FromStr`](std::str::FromStr) or [`TryFrom<&str>`] returns this error for any
/// value outside that set, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    kind: UnknownVariantErrorKind,
}

impl UnknownVariantError {
    pub(crate) fn new(enum_name: &'static str, value: &str) -> Self {
        tracing::debug!(enum_name, value, "rejected unknown enum value");
        let kind = if value.is_empty() {
            UnknownVariantErrorKind::Empty
        } else {
            UnknownVariantErrorKind::Unknown(value.to_owned())
        };
        Self { enum_name, kind }
    }

    /// The name of the enum that failed to parse, e.g. `"AdjustmentType"`.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected value. Empty when the input was the empty string.
    pub fn value(&self) -> &str {
        match &self.kind {
            UnknownVariantErrorKind::Empty => "",
            UnknownVariantErrorKind::Unknown(value) => value,
        }
    }

    /// Returns true if parsing failed because the input was the empty string.
    pub fn is_empty_value(&self) -> bool {
        matches!(self.kind, UnknownVariantErrorKind::Empty)
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UnknownVariantErrorKind::Empty => {
                write!(f, "{} value cannot be empty", self.enum_name)
            }
            UnknownVariantErrorKind::Unknown(value) => {
                write!(f, "unknown {} variant: '{}'", self.enum_name, value)
            }
        }
    }
}

impl std::error::Error for UnknownVariantError {}

#[cfg(test)]
mod test {
    use super::UnknownVariantError;
    use crate::types::{AdjustmentType, MarketType};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    #[test]
    fn empty_input_is_reported_separately() {
        let err = UnknownVariantError::new("MarketType", "");
        assert!(err.is_empty_value());
        assert_eq!("", err.value());
        assert_eq!("MarketType value cannot be empty", err.to_string());
    }

    #[test]
    fn unknown_input_keeps_the_rejected_value() {
        let err = AdjustmentType::try_parse("BOGUS").unwrap_err();
        assert!(!err.is_empty_value());
        assert_eq!("AdjustmentType", err.enum_name());
        assert_eq!("BOGUS", err.value());
        assert_eq!("unknown AdjustmentType variant: 'BOGUS'", err.to_string());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(MarketType::try_parse("SPOT").is_ok());
        assert_eq!("spot", MarketType::try_parse("spot").unwrap_err().value());
    }

    #[test]
    #[traced_test]
    fn rejected_values_are_logged() {
        let _ = MarketType::try_parse("RESERVED");
        assert!(logs_contain("rejected unknown enum value"));
        assert!(logs_contain("RESERVED"));
    }
}
