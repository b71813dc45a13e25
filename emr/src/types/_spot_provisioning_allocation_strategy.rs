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
pub enum SpotProvisioningAllocationStrategy {
    #[allow(missing_docs)] // documentation missing in model
    CapacityOptimized,
}
impl SpotProvisioningAllocationStrategy {
    /// Parses a wire value into a [`SpotProvisioningAllocationStrategy`](crate::types::SpotProvisioningAllocationStrategy).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "capacity-optimized" => ::std::result::Result::Ok(SpotProvisioningAllocationStrategy::CapacityOptimized),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("SpotProvisioningAllocationStrategy", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotProvisioningAllocationStrategy::CapacityOptimized => "capacity-optimized",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["capacity-optimized"]
    }
}
impl ::std::str::FromStr for SpotProvisioningAllocationStrategy {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        SpotProvisioningAllocationStrategy::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for SpotProvisioningAllocationStrategy {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        SpotProvisioningAllocationStrategy::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for SpotProvisioningAllocationStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for SpotProvisioningAllocationStrategy {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
