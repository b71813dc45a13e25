/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The state of an instance fleet.</p>
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
pub enum InstanceFleetState {
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Resizing,
    #[allow(missing_docs)] // documentation missing in model
    Suspended,
    #[allow(missing_docs)] // documentation missing in model
    Terminating,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
}
impl InstanceFleetState {
    /// Parses a wire value into a [`InstanceFleetState`](crate::types::InstanceFleetState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "PROVISIONING" => ::std::result::Result::Ok(InstanceFleetState::Provisioning),
            "BOOTSTRAPPING" => ::std::result::Result::Ok(InstanceFleetState::Bootstrapping),
            "RUNNING" => ::std::result::Result::Ok(InstanceFleetState::Running),
            "RESIZING" => ::std::result::Result::Ok(InstanceFleetState::Resizing),
            "SUSPENDED" => ::std::result::Result::Ok(InstanceFleetState::Suspended),
            "TERMINATING" => ::std::result::Result::Ok(InstanceFleetState::Terminating),
            "TERMINATED" => ::std::result::Result::Ok(InstanceFleetState::Terminated),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceFleetState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceFleetState::Provisioning => "PROVISIONING",
            InstanceFleetState::Bootstrapping => "BOOTSTRAPPING",
            InstanceFleetState::Running => "RUNNING",
            InstanceFleetState::Resizing => "RESIZING",
            InstanceFleetState::Suspended => "SUSPENDED",
            InstanceFleetState::Terminating => "TERMINATING",
            InstanceFleetState::Terminated => "TERMINATED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["PROVISIONING", "BOOTSTRAPPING", "RUNNING", "RESIZING", "SUSPENDED", "TERMINATING", "TERMINATED"]
    }
}
impl ::std::str::FromStr for InstanceFleetState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceFleetState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceFleetState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceFleetState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceFleetState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceFleetState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
