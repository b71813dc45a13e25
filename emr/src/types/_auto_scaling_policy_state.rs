/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The state of an automatic scaling policy.</p>
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
pub enum AutoScalingPolicyState {
    #[allow(missing_docs)] // documentation missing in model
    Pending,
    #[allow(missing_docs)] // documentation missing in model
    Attaching,
    #[allow(missing_docs)] // documentation missing in model
    Attached,
    #[allow(missing_docs)] // documentation missing in model
    Detaching,
    #[allow(missing_docs)] // documentation missing in model
    Detached,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
}
impl AutoScalingPolicyState {
    /// Parses a wire value into a [`AutoScalingPolicyState`](crate::types::AutoScalingPolicyState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "PENDING" => ::std::result::Result::Ok(AutoScalingPolicyState::Pending),
            "ATTACHING" => ::std::result::Result::Ok(AutoScalingPolicyState::Attaching),
            "ATTACHED" => ::std::result::Result::Ok(AutoScalingPolicyState::Attached),
            "DETACHING" => ::std::result::Result::Ok(AutoScalingPolicyState::Detaching),
            "DETACHED" => ::std::result::Result::Ok(AutoScalingPolicyState::Detached),
            "FAILED" => ::std::result::Result::Ok(AutoScalingPolicyState::Failed),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("AutoScalingPolicyState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutoScalingPolicyState::Pending => "PENDING",
            AutoScalingPolicyState::Attaching => "ATTACHING",
            AutoScalingPolicyState::Attached => "ATTACHED",
            AutoScalingPolicyState::Detaching => "DETACHING",
            AutoScalingPolicyState::Detached => "DETACHED",
            AutoScalingPolicyState::Failed => "FAILED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["PENDING", "ATTACHING", "ATTACHED", "DETACHING", "DETACHED", "FAILED"]
    }
}
impl ::std::str::FromStr for AutoScalingPolicyState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        AutoScalingPolicyState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for AutoScalingPolicyState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        AutoScalingPolicyState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for AutoScalingPolicyState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for AutoScalingPolicyState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
