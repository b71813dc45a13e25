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
pub enum InstanceGroupType {
    #[allow(missing_docs)] // documentation missing in model
    Master,
    #[allow(missing_docs)] // documentation missing in model
    Core,
    #[allow(missing_docs)] // documentation missing in model
    Task,
}
impl InstanceGroupType {
    /// Parses a wire value into a [`InstanceGroupType`](crate::types::InstanceGroupType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "MASTER" => ::std::result::Result::Ok(InstanceGroupType::Master),
            "CORE" => ::std::result::Result::Ok(InstanceGroupType::Core),
            "TASK" => ::std::result::Result::Ok(InstanceGroupType::Task),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceGroupType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceGroupType::Master => "MASTER",
            InstanceGroupType::Core => "CORE",
            InstanceGroupType::Task => "TASK",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["MASTER", "CORE", "TASK"]
    }
}
impl ::std::str::FromStr for InstanceGroupType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceGroupType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceGroupType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceGroupType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceGroupType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceGroupType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
