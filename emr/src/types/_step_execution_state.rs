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
pub enum StepExecutionState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Continue,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Cancelled,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
    #[allow(missing_docs)] // documentation missing in model
    Interrupted,
}
impl StepExecutionState {
    /// Parses a wire value into a [`StepExecutionState`](crate::types::StepExecutionState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "PENDING" => ::std::result::Result::Ok(StepExecutionState::Pending),
            "RUNNING" => ::std::result::Result::Ok(StepExecutionState::Running),
            "CONTINUE" => ::std::result::Result::Ok(StepExecutionState::Continue),
            "COMPLETED" => ::std::result::Result::Ok(StepExecutionState::Completed),
            "CANCELLED" => ::std::result::Result::Ok(StepExecutionState::Cancelled),
            "FAILED" => ::std::result::Result::Ok(StepExecutionState::Failed),
            "INTERRUPTED" => ::std::result::Result::Ok(StepExecutionState::Interrupted),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("StepExecutionState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepExecutionState::Pending => "PENDING",
            StepExecutionState::Running => "RUNNING",
            StepExecutionState::Continue => "CONTINUE",
            StepExecutionState::Completed => "COMPLETED",
            StepExecutionState::Cancelled => "CANCELLED",
            StepExecutionState::Failed => "FAILED",
            StepExecutionState::Interrupted => "INTERRUPTED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["PENDING", "RUNNING", "CONTINUE", "COMPLETED", "CANCELLED", "FAILED", "INTERRUPTED"]
    }
}
impl ::std::str::FromStr for StepExecutionState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        StepExecutionState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for StepExecutionState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        StepExecutionState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for StepExecutionState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for StepExecutionState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
