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
pub enum InstanceStateChangeReasonCode {
    #[allow(missing_docs)] // documentation missing in model
    InternalError,
    #[allow(missing_docs)] // documentation missing in model
    ValidationError,
    #[allow(missing_docs)] // documentation missing in model
    InstanceFailure,
    #[allow(missing_docs)] // documentation missing in model
    BootstrapFailure,
    #[allow(missing_docs)] // documentation missing in model
    ClusterTerminated,
}
impl InstanceStateChangeReasonCode {
    /// Parses a wire value into a [`InstanceStateChangeReasonCode`](crate::types::InstanceStateChangeReasonCode).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "INTERNAL_ERROR" => ::std::result::Result::Ok(InstanceStateChangeReasonCode::InternalError),
            "VALIDATION_ERROR" => ::std::result::Result::Ok(InstanceStateChangeReasonCode::ValidationError),
            "INSTANCE_FAILURE" => ::std::result::Result::Ok(InstanceStateChangeReasonCode::InstanceFailure),
            "BOOTSTRAP_FAILURE" => ::std::result::Result::Ok(InstanceStateChangeReasonCode::BootstrapFailure),
            "CLUSTER_TERMINATED" => ::std::result::Result::Ok(InstanceStateChangeReasonCode::ClusterTerminated),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceStateChangeReasonCode", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStateChangeReasonCode::InternalError => "INTERNAL_ERROR",
            InstanceStateChangeReasonCode::ValidationError => "VALIDATION_ERROR",
            InstanceStateChangeReasonCode::InstanceFailure => "INSTANCE_FAILURE",
            InstanceStateChangeReasonCode::BootstrapFailure => "BOOTSTRAP_FAILURE",
            InstanceStateChangeReasonCode::ClusterTerminated => "CLUSTER_TERMINATED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INTERNAL_ERROR", "VALIDATION_ERROR", "INSTANCE_FAILURE", "BOOTSTRAP_FAILURE", "CLUSTER_TERMINATED"]
    }
}
impl ::std::str::FromStr for InstanceStateChangeReasonCode {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceStateChangeReasonCode {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceStateChangeReasonCode::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceStateChangeReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceStateChangeReasonCode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
