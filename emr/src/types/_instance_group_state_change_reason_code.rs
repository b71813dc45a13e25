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
pub enum InstanceGroupStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
}
impl InstanceGroupStateChangeReasonCode {
    /// Parses a wire value into a [`InstanceGroupStateChangeReasonCode`](crate::types::InstanceGroupStateChangeReasonCode).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "INTERNAL_ERROR" => ::std::result::Result::Ok(InstanceGroupStateChangeReasonCode::InternalError),
            "VALIDATION_ERROR" => ::std::result::Result::Ok(InstanceGroupStateChangeReasonCode::ValidationError),
            "INSTANCE_FAILURE" => ::std::result::Result::Ok(InstanceGroupStateChangeReasonCode::InstanceFailure),
            "CLUSTER_TERMINATED" => ::std::result::Result::Ok(InstanceGroupStateChangeReasonCode::ClusterTerminated),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceGroupStateChangeReasonCode", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceGroupStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceGroupStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceGroupStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceGroupStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "CLUSTER_TERMINATED"]
    }
}
impl ::std::str::FromStr for InstanceGroupStateChangeReasonCode {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceGroupStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceGroupStateChangeReasonCode {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceGroupStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceGroupStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceGroupStateChangeReasonCode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
