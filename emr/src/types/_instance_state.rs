/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The current state of an EC2 instance in a cluster.</p>
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
pub enum InstanceState {
    #[allow(missing_docs)] // documentation missing in model
    AwaitingFulfillment,
    #[allow(missing_docs)] // documentation missing in model
    Provisioning,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
}
impl InstanceState {
    /// Parses a wire value into a [`InstanceState`](crate::types::InstanceState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "AWAITING_FULFILLMENT" => ::std::result::Result::Ok(InstanceState::AwaitingFulfillment),
            "PROVISIONING" => ::std::result::Result::Ok(InstanceState::Provisioning),
            "BOOTSTRAPPING" => ::std::result::Result::Ok(InstanceState::Bootstrapping),
            "RUNNING" => ::std::result::Result::Ok(InstanceState::Running),
            "TERMINATED" => ::std::result::Result::Ok(InstanceState::Terminated),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceState::AwaitingFulfillment => "AWAITING_FULFILLMENT",
            InstanceState::Provisioning => "PROVISIONING",
            InstanceState::Bootstrapping => "BOOTSTRAPPING",
            InstanceState::Running => "RUNNING",
            InstanceState::Terminated => "TERMINATED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["AWAITING_FULFILLMENT", "PROVISIONING", "BOOTSTRAPPING", "RUNNING", "TERMINATED"]
    }
}
impl ::std::str::FromStr for InstanceState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
