/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The way in which an automatic scaling action adjusts the capacity of an instance group.</p>
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
pub enum AdjustmentType {
    /// <p>Add or remove the given number of instances.</p>
    ChangeInCapacity,
    /// <p>Add or remove a percentage of the current instance count.</p>
    PercentChangeInCapacity,
    /// <p>Resize to exactly the given number of instances.</p>
    ExactCapacity,
}
impl AdjustmentType {
    /// Parses a wire value into a [`AdjustmentType`](crate::types::AdjustmentType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "CHANGE_IN_CAPACITY" => ::std::result::Result::Ok(AdjustmentType::ChangeInCapacity),
            "PERCENT_CHANGE_IN_CAPACITY" => ::std::result::Result::Ok(AdjustmentType::PercentChangeInCapacity),
            "EXACT_CAPACITY" => ::std::result::Result::Ok(AdjustmentType::ExactCapacity),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("AdjustmentType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentType::ChangeInCapacity => "CHANGE_IN_CAPACITY",
            AdjustmentType::PercentChangeInCapacity => "PERCENT_CHANGE_IN_CAPACITY",
            AdjustmentType::ExactCapacity => "EXACT_CAPACITY",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["CHANGE_IN_CAPACITY", "PERCENT_CHANGE_IN_CAPACITY", "EXACT_CAPACITY"]
    }
}
impl ::std::str::FromStr for AdjustmentType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        AdjustmentType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for AdjustmentType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        AdjustmentType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for AdjustmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
