/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The programmatic code for the last state change of a cluster.</p>
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
pub enum ClusterStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFleetTimeout,
    #[allow(missing_docs)] // documentation missing in model
    BootstrapFailure,
    #[allow(missing_docs)] // documentation missing in model
    UserRequest,
    #[allow(missing_docs)] // documentation missing in model
    StepFailure,
    #[allow(missing_docs)] // documentation missing in model
    AllStepsCompleted,
}
impl ClusterStateChangeReasonCode {
    /// Parses a wire value into a [`ClusterStateChangeReasonCode`](crate::types::ClusterStateChangeReasonCode).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "INTERNAL_ERROR" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::InternalError),
            "VALIDATION_ERROR" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::ValidationError),
            "INSTANCE_FAILURE" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::InstanceFailure),
            "INSTANCE_FLEET_TIMEOUT" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::InstanceFleetTimeout),
            "BOOTSTRAP_FAILURE" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::BootstrapFailure),
            "USER_REQUEST" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::UserRequest),
            "STEP_FAILURE" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::StepFailure),
            "ALL_STEPS_COMPLETED" => ::std::result::Result::Ok(ClusterStateChangeReasonCode::AllStepsCompleted),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("ClusterStateChangeReasonCode", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            ClusterStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            ClusterStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            ClusterStateChangeReasonCode::InstanceFleetTimeout => "INSTANCE_FLEET_TIMEOUT",
            ClusterStateChangeReasonCode::BootstrapFailure => "BOOTSTRAP_FAILURE",
            ClusterStateChangeReasonCode::UserRequest => "USER_REQUEST",
            ClusterStateChangeReasonCode::StepFailure => "STEP_FAILURE",
            ClusterStateChangeReasonCode::AllStepsCompleted => "ALL_STEPS_COMPLETED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "INSTANCE_FLEET_TIMEOUT", "BOOTSTRAP_FAILURE", "USER_REQUEST", "STEP_FAILURE", "ALL_STEPS_COMPLETED"]
    }
}
impl ::std::str::FromStr for ClusterStateChangeReasonCode {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ClusterStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for ClusterStateChangeReasonCode {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        ClusterStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for ClusterStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for ClusterStateChangeReasonCode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
