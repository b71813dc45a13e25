/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The action to take when Spot capacity cannot be provisioned before the timeout.</p>
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
pub enum SpotProvisioningTimeoutAction {
    #[allow(missing_docs)] // documentation missing in model
    SwitchToOnDemand,
    #[allow(missing_docs)] // documentation missing in model
    TerminateCluster,
}
impl SpotProvisioningTimeoutAction {
    /// Parses a wire value into a [`SpotProvisioningTimeoutAction`](crate::types::SpotProvisioningTimeoutAction).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "SWITCH_TO_ON_DEMAND" => ::std::result::Result::Ok(SpotProvisioningTimeoutAction::SwitchToOnDemand),
            "TERMINATE_CLUSTER" => ::std::result::Result::Ok(SpotProvisioningTimeoutAction::TerminateCluster),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("SpotProvisioningTimeoutAction", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotProvisioningTimeoutAction::SwitchToOnDemand => "SWITCH_TO_ON_DEMAND",
            SpotProvisioningTimeoutAction::TerminateCluster => "TERMINATE_CLUSTER",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SWITCH_TO_ON_DEMAND", "TERMINATE_CLUSTER"]
    }
}
impl ::std::str::FromStr for SpotProvisioningTimeoutAction {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        SpotProvisioningTimeoutAction::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for SpotProvisioningTimeoutAction {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        SpotProvisioningTimeoutAction::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for SpotProvisioningTimeoutAction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for SpotProvisioningTimeoutAction {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
