/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The state of an instance group.</p>
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
pub enum InstanceGroupState {
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Reconfiguring,
    #[allow(missing_docs)] // documentation missing in model
    Resizing,
    #[allow(missing_docs)] // documentation missing in model
    Suspended,
    #[allow(missing_docs)] // documentation missing in model
    Terminating,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    Arrested,
    #[allow(missing_docs)] // documentation missing in model
    ShuttingDown,
    #[allow(missing_docs)] // documentation missing in model
    Ended,
}
impl InstanceGroupState {
    /// Parses a wire value into a [`InstanceGroupState`](crate::types::InstanceGroupState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "PROVISIONING" => ::std::result::Result::Ok(InstanceGroupState::Provisioning),
            "BOOTSTRAPPING" => ::std::result::Result::Ok(InstanceGroupState::Bootstrapping),
            "RUNNING" => ::std::result::Result::Ok(InstanceGroupState::Running),
            "RECONFIGURING" => ::std::result::Result::Ok(InstanceGroupState::Reconfiguring),
            "RESIZING" => ::std::result::Result::Ok(InstanceGroupState::Resizing),
            "SUSPENDED" => ::std::result::Result::Ok(InstanceGroupState::Suspended),
            "TERMINATING" => ::std::result::Result::Ok(InstanceGroupState::Terminating),
            "TERMINATED" => ::std::result::Result::Ok(InstanceGroupState::Terminated),
            "ARRESTED" => ::std::result::Result::Ok(InstanceGroupState::Arrested),
            "SHUTTING_DOWN" => ::std::result::Result::Ok(InstanceGroupState::ShuttingDown),
            "ENDED" => ::std::result::Result::Ok(InstanceGroupState::Ended),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceGroupState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceGroupState::Provisioning => "PROVISIONING",
            InstanceGroupState::Bootstrapping => "BOOTSTRAPPING",
            InstanceGroupState::Running => "RUNNING",
            InstanceGroupState::Reconfiguring => "RECONFIGURING",
            InstanceGroupState::Resizing => "RESIZING",
            InstanceGroupState::Suspended => "SUSPENDED",
            InstanceGroupState::Terminating => "TERMINATING",
            InstanceGroupState::Terminated => "TERMINATED",
            InstanceGroupState::Arrested => "ARRESTED",
            InstanceGroupState::ShuttingDown => "SHUTTING_DOWN",
            InstanceGroupState::Ended => "ENDED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["PROVISIONING", "BOOTSTRAPPING", "RUNNING", "RECONFIGURING", "RESIZING", "SUSPENDED", "TERMINATING", "TERMINATED", "ARRESTED", "SHUTTING_DOWN", "ENDED"]
    }
}
impl ::std::str::FromStr for InstanceGroupState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceGroupState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceGroupState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceGroupState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceGroupState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceGroupState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
