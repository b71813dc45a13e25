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
pub enum InstanceFleetStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
}
impl InstanceFleetStateChangeReasonCode {
    /// Parses a wire value into a [`InstanceFleetStateChangeReasonCode`](crate::types::InstanceFleetStateChangeReasonCode).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "INTERNAL_ERROR" => ::std::result::Result::Ok(InstanceFleetStateChangeReasonCode::InternalError),
            "VALIDATION_ERROR" => ::std::result::Result::Ok(InstanceFleetStateChangeReasonCode::ValidationError),
            "INSTANCE_FAILURE" => ::std::result::Result::Ok(InstanceFleetStateChangeReasonCode::InstanceFailure),
            "CLUSTER_TERMINATED" => ::std::result::Result::Ok(InstanceFleetStateChangeReasonCode::ClusterTerminated),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceFleetStateChangeReasonCode", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceFleetStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceFleetStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceFleetStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceFleetStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "CLUSTER_TERMINATED"]
    }
}
impl ::std::str::FromStr for InstanceFleetStateChangeReasonCode {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceFleetStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceFleetStateChangeReasonCode {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceFleetStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceFleetStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceFleetStateChangeReasonCode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
