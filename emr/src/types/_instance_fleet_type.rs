/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The node type of an instance fleet.</p>
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
pub enum InstanceFleetType {
    #[allow(missing_docs)] // documentation missing in model
    Master,
    #[allow(missing_docs)] // documentation missing in model
    Core,
    #[allow(missing_docs)] // documentation missing in model
    Task,
}
impl InstanceFleetType {
    /// Parses a wire value into a [`InstanceFleetType`](crate::types::InstanceFleetType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "MASTER" => ::std::result::Result::Ok(InstanceFleetType::Master),
            "CORE" => ::std::result::Result::Ok(InstanceFleetType::Core),
            "TASK" => ::std::result::Result::Ok(InstanceFleetType::Task),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceFleetType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceFleetType::Master => "MASTER",
            InstanceFleetType::Core => "CORE",
            InstanceFleetType::Task => "TASK",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["MASTER", "CORE", "TASK"]
    }
}
impl ::std::str::FromStr for InstanceFleetType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceFleetType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceFleetType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceFleetType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceFleetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceFleetType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
