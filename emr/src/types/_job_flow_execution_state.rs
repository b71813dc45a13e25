/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The type of instance.</p>
/// <p>This state is reported by the legacy <code>DescribeJobFlows</code> operation.</p>
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
pub enum JobFlowExecutionState {
    #[allow(missing_docs)] // documentation missing in model
    Starting,
    #[allow(missing_docs)] // documentation missing in model
    Bootstrapping,
    #[allow(missing_docs)] // documentation missing in model
    Running,
    #[allow(missing_docs)] // documentation missing in model
    Waiting,
    #[allow(missing_docs)] // documentation missing in model
    ShuttingDown,
    #[allow(missing_docs)] // documentation missing in model
    Terminated,
    #[allow(missing_docs)] // documentation missing in model
    Completed,
    #[allow(missing_docs)] // documentation missing in model
    Failed,
}
impl JobFlowExecutionState {
    /// Parses a wire value into a [`JobFlowExecutionState`](crate::types::JobFlowExecutionState).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "STARTING" => ::std::result::Result::Ok(JobFlowExecutionState::Starting),
            "BOOTSTRAPPING" => ::std::result::Result::Ok(JobFlowExecutionState::Bootstrapping),
            "RUNNING" => ::std::result::Result::Ok(JobFlowExecutionState::Running),
            "WAITING" => ::std::result::Result::Ok(JobFlowExecutionState::Waiting),
            "SHUTTING_DOWN" => ::std::result::Result::Ok(JobFlowExecutionState::ShuttingDown),
            "TERMINATED" => ::std::result::Result::Ok(JobFlowExecutionState::Terminated),
            "COMPLETED" => ::std::result::Result::Ok(JobFlowExecutionState::Completed),
            "FAILED" => ::std::result::Result::Ok(JobFlowExecutionState::Failed),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("JobFlowExecutionState", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobFlowExecutionState::Starting => "STARTING",
            JobFlowExecutionState::Bootstrapping => "BOOTSTRAPPING",
            JobFlowExecutionState::Running => "RUNNING",
            JobFlowExecutionState::Waiting => "WAITING",
            JobFlowExecutionState::ShuttingDown => "SHUTTING_DOWN",
            JobFlowExecutionState::Terminated => "TERMINATED",
            JobFlowExecutionState::Completed => "COMPLETED",
            JobFlowExecutionState::Failed => "FAILED",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["STARTING", "BOOTSTRAPPING", "RUNNING", "WAITING", "SHUTTING_DOWN", "TERMINATED", "COMPLETED", "FAILED"]
    }
}
impl ::std::str::FromStr for JobFlowExecutionState {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        JobFlowExecutionState::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for JobFlowExecutionState {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        JobFlowExecutionState::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for JobFlowExecutionState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for JobFlowExecutionState {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
