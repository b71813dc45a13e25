/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The purchasing option of an EC2 instance.</p>
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
pub enum MarketType {
    /// <p>On-Demand Instances.</p>
    OnDemand,
    /// <p>Spot Instances.</p>
    Spot,
}
impl MarketType {
    /// Parses a wire value into a [`MarketType`](crate::types::MarketType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "ON_DEMAND" => ::std::result::Result::Ok(MarketType::OnDemand),
            "SPOT" => ::std::result::Result::Ok(MarketType::Spot),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("MarketType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::OnDemand => "ON_DEMAND",
            MarketType::Spot => "SPOT",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ON_DEMAND", "SPOT"]
    }
}
impl ::std::str::FromStr for MarketType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        MarketType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for MarketType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        MarketType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for MarketType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
