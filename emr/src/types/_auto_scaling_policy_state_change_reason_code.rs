/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The code indicating the reason for a change in automatic scaling policy status.</p>
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
pub enum AutoScalingPolicyStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    UserRequest,
    #[allow(missing_docs)] // documentation missing in model
    ProvisionFailure,
    #[allow(missing_docs)] // documentation missing in model
    CleanupFailure,
}
impl AutoScalingPolicyStateChangeReasonCode {
    /// Parses a wire value into a [`AutoScalingPolicyStateChangeReasonCode`](crate::types::AutoScalingPolicyStateChangeReasonCode).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "USER_REQUEST" => ::std::result::Result::Ok(AutoScalingPolicyStateChangeReasonCode::UserRequest),
            "PROVISION_FAILURE" => ::std::result::Result::Ok(AutoScalingPolicyStateChangeReasonCode::ProvisionFailure),
            "CLEANUP_FAILURE" => ::std::result::Result::Ok(AutoScalingPolicyStateChangeReasonCode::CleanupFailure),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("AutoScalingPolicyStateChangeReasonCode", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            AutoScalingPolicyStateChangeReasonCode::UserRequest => "USER_REQUEST",
            AutoScalingPolicyStateChangeReasonCode::ProvisionFailure => "PROVISION_FAILURE",
            AutoScalingPolicyStateChangeReasonCode::CleanupFailure => "CLEANUP_FAILURE",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["USER_REQUEST", "PROVISION_FAILURE", "CLEANUP_FAILURE"]
    }
}
impl ::std::str::FromStr for AutoScalingPolicyStateChangeReasonCode {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        AutoScalingPolicyStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for AutoScalingPolicyStateChangeReasonCode {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        AutoScalingPolicyStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for AutoScalingPolicyStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for AutoScalingPolicyStateChangeReasonCode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
