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
pub enum InstanceCollectionType {
    #[allow(missing_docs)] // documentation missing in model
    InstanceFleet,
    #[allow(missing_docs)] // documentation missing in model
    InstanceGroup,
}
impl InstanceCollectionType {
    /// Parses a wire value into a [`InstanceCollectionType`](crate::types::InstanceCollectionType).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "INSTANCE_FLEET" => ::std::result::Result::Ok(InstanceCollectionType::InstanceFleet),
            "INSTANCE_GROUP" => ::std::result::Result::Ok(InstanceCollectionType::InstanceGroup),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("InstanceCollectionType", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceCollectionType::InstanceFleet => "INSTANCE_FLEET",
            InstanceCollectionType::InstanceGroup => "INSTANCE_GROUP",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["INSTANCE_FLEET", "INSTANCE_GROUP"]
    }
}
impl ::std::str::FromStr for InstanceCollectionType {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        InstanceCollectionType::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for InstanceCollectionType {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        InstanceCollectionType::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for InstanceCollectionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for InstanceCollectionType {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
