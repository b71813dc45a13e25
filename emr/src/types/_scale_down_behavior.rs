/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>How individual EC2 instances terminate when an automatic scale-in activity occurs or an instance group is resized.</p>
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
pub enum ScaleDownBehavior {
    /// <p>Terminate nodes at the instance-hour boundary, regardless of when the request was submitted.</p>
    TerminateAtInstanceHour,
    /// <p>Deny-list and drain tasks from nodes before terminating them.</p>
    TerminateAtTaskCompletion,
}
impl ScaleDownBehavior {
    /// Parses a wire value into a [`ScaleDownBehavior`](crate::types::ScaleDownBehavior).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "TERMINATE_AT_INSTANCE_HOUR" => ::std::result::Result::Ok(ScaleDownBehavior::TerminateAtInstanceHour),
            "TERMINATE_AT_TASK_COMPLETION" => ::std::result::Result::Ok(ScaleDownBehavior::TerminateAtTaskCompletion),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("ScaleDownBehavior", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleDownBehavior::TerminateAtInstanceHour => "TERMINATE_AT_INSTANCE_HOUR",
            ScaleDownBehavior::TerminateAtTaskCompletion => "TERMINATE_AT_TASK_COMPLETION",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["TERMINATE_AT_INSTANCE_HOUR", "TERMINATE_AT_TASK_COMPLETION"]
    }
}
impl ::std::str::FromStr for ScaleDownBehavior {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ScaleDownBehavior::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for ScaleDownBehavior {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        ScaleDownBehavior::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for ScaleDownBehavior {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for ScaleDownBehavior {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
