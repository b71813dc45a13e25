/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Which package repository updates to apply when an instance boots using the default Amazon Linux AMI.</p>
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
pub enum RepoUpgradeOnBoot {
    #[allow(missing_docs)] // documentation missing in model
    Security,
    #[allow(missing_docs)] // documentation missing in model
    None,
}
impl RepoUpgradeOnBoot {
    /// Parses a wire value into a [`RepoUpgradeOnBoot`](crate::types::RepoUpgradeOnBoot).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "SECURITY" => ::std::result::Result::Ok(RepoUpgradeOnBoot::Security),
            "NONE" => ::std::result::Result::Ok(RepoUpgradeOnBoot::None),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("RepoUpgradeOnBoot", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoUpgradeOnBoot::Security => "SECURITY",
            RepoUpgradeOnBoot::None => "NONE",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["SECURITY", "NONE"]
    }
}
impl ::std::str::FromStr for RepoUpgradeOnBoot {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        RepoUpgradeOnBoot::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for RepoUpgradeOnBoot {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        RepoUpgradeOnBoot::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for RepoUpgradeOnBoot {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for RepoUpgradeOnBoot {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
