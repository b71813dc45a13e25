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
pub enum StepCancellationOption {
    #[allow(missing_docs)] // documentation missing in model
    SendInterrupt,
    #[allow(missing_docs)] // documentation missing in model
    TerminateProcess,
}
impl StepCancellationOption {
    /// Parses a wire value into a [`StepCancellationOption`](crate::types::StepCancellationOption).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "SEND_INTERRUPT" => ::std::result::Result::Ok(StepCancellationOption::SendInterrupt),
            "TERMINATE_PROCESS" => ::std::result::Result::Ok(StepCancellationOption::TerminateProcess),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("StepCancellationOption", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepCancellationOption::SendInterrupt => "SEND_INTERRUPT",
            StepCancellationOption::TerminateProcess => "TERMINATE_PROCESS",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SEND_INTERRUPT", "TERMINATE_PROCESS"]
    }
}
impl ::std::str::FromStr for StepCancellationOption {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        StepCancellationOption::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for StepCancellationOption {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        StepCancellationOption::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for StepCancellationOption {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for StepCancellationOption {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
