/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::fmt::Debug,
    ::std::cmp::Eq,
    ::std::hash::Hash,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
)]
pub enum CancelStepsRequestStatus {
    #[allow(missing_docs)] // documentation missing in model
    Submitted,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
}
impl CancelStepsRequestStatus {
    /// Parses a wire value into a [`CancelStepsRequestStatus`](crate::types::CancelStepsRequestStatus).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "SUBMITTED" => ::std::result::Result::Ok(CancelStepsRequestStatus::Submitted),
            "FAILED" => ::std::result::Result::Ok(CancelStepsRequestStatus::Failed),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("CancelStepsRequestStatus", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelStepsRequestStatus::Submitted => "SUBMITTED",
            CancelStepsRequestStatus::Failed => "FAILED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SUBMITTED", "FAILED"]
    }
}
impl ::std::str::FromStr for CancelStepsRequestStatus {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        CancelStepsRequestStatus::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for CancelStepsRequestStatus {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        CancelStepsRequestStatus::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for CancelStepsRequestStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for CancelStepsRequestStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
