/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The unit type in which the managed scaling compute limits are expressed.</p>
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
pub enum ComputeLimitsUnitType {
    /// <p>Capacity units of an instance fleet.</p>
    InstanceFleetUnits,
    /// <p>Number of EC2 instances.</p>
    Instances,
    /// <p>Number of virtual CPU cores.</p>
    Vcpu,
}
impl ComputeLimitsUnitType {
    /// Parses a wire value into a [`ComputeLimitsUnitType`](crate::types::ComputeLimitsUnitType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "InstanceFleetUnits" => ::std::result::Result::Ok(ComputeLimitsUnitType::InstanceFleetUnits),
            "Instances" => ::std::result::Result::Ok(ComputeLimitsUnitType::Instances),
            "VCPU" => ::std::result::Result::Ok(ComputeLimitsUnitType::Vcpu),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("ComputeLimitsUnitType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeLimitsUnitType::InstanceFleetUnits => "InstanceFleetUnits",
            ComputeLimitsUnitType::Instances => "Instances",
            ComputeLimitsUnitType::Vcpu => "VCPU",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["InstanceFleetUnits", "Instances", "VCPU"]
    }
}
impl ::std::str::FromStr for ComputeLimitsUnitType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ComputeLimitsUnitType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for ComputeLimitsUnitType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        ComputeLimitsUnitType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for ComputeLimitsUnitType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for ComputeLimitsUnitType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
