/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The action to take when a step fails.</p>
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
pub enum ActionOnFailure {
    /// <p>Terminate the cluster. Retained for backwards compatibility; prefer <code>TERMINATE_CLUSTER</code>.</p>
    TerminateJobFlow,
    /// <p>Terminate the cluster.</p>
    TerminateCluster,
    /// <p>Cancel the remaining steps and wait for new ones.</p>
    CancelAndWait,
    /// <p>Continue with the next step.</p>
    Continue,
}
impl ActionOnFailure {
    /// Parses a wire value into a [`ActionOnFailure`](crate::types::ActionOnFailure).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "TERMINATE_JOB_FLOW" => ::std::result::Result::Ok(ActionOnFailure::TerminateJobFlow),
            "TERMINATE_CLUSTER" => ::std::result::Result::Ok(ActionOnFailure::TerminateCluster),
            "CANCEL_AND_WAIT" => ::std::result::Result::Ok(ActionOnFailure::CancelAndWait),
            "CONTINUE" => ::std::result::Result::Ok(ActionOnFailure::Continue),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("ActionOnFailure", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionOnFailure::TerminateJobFlow => "TERMINATE_JOB_FLOW",
            ActionOnFailure::TerminateCluster => "TERMINATE_CLUSTER",
            ActionOnFailure::CancelAndWait => "CANCEL_AND_WAIT",
            ActionOnFailure::Continue => "CONTINUE",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["TERMINATE_JOB_FLOW", "TERMINATE_CLUSTER", "CANCEL_AND_WAIT", "CONTINUE"]
    }
}
impl ::std::str::FromStr for ActionOnFailure {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ActionOnFailure::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for ActionOnFailure {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        ActionOnFailure::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for ActionOnFailure {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for ActionOnFailure {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
