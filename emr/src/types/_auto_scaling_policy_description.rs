/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>An automatic scaling policy as returned by <code>ListInstanceGroups</code> and <code>PutAutoScalingPolicy</code>.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct AutoScalingPolicyDescription {
    /// <p>The status of the policy.</p>
    pub status: ::std::option::Option<crate::types::AutoScalingPolicyStatus>,
    /// <p>The upper and lower EC2 instance limits for the policy.</p>
    pub constraints: ::std::option::Option<crate::types::ScalingConstraints>,
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    pub rules: ::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>>,
}
impl AutoScalingPolicyDescription {
    /// <p>The status of the policy.</p>
    pub fn status(&self) -> ::std::option::Option<&crate::types::AutoScalingPolicyStatus> {
        self.status.as_ref()
    }
    /// <p>The upper and lower EC2 instance limits for the policy.</p>
    pub fn constraints(&self) -> ::std::option::Option<&crate::types::ScalingConstraints> {
        self.constraints.as_ref()
    }
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.rules.is_none()</code>.
    pub fn rules(&self) -> &[crate::types::ScalingRule] {
        self.rules.as_deref().unwrap_or_default()
    }
}
impl AutoScalingPolicyDescription {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicyDescription`](crate::types::AutoScalingPolicyDescription).
    pub fn builder() -> crate::types::builders::AutoScalingPolicyDescriptionBuilder {
        crate::types::builders::AutoScalingPolicyDescriptionBuilder::default()
    }
    /// Converts this [`AutoScalingPolicyDescription`](crate::types::AutoScalingPolicyDescription) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::AutoScalingPolicyDescriptionBuilder {
        crate::types::builders::AutoScalingPolicyDescriptionBuilder {
            status: self.status,
            constraints: self.constraints,
            rules: self.rules,
        }
    }
}

/// A builder for [`AutoScalingPolicyDescription`](crate::types::AutoScalingPolicyDescription).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AutoScalingPolicyDescriptionBuilder {
    pub(crate) status: ::std::option::Option<crate::types::AutoScalingPolicyStatus>,
    pub(crate) constraints: ::std::option::Option<crate::types::ScalingConstraints>,
    pub(crate) rules: ::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>>,
}
impl AutoScalingPolicyDescriptionBuilder {
    /// <p>The status of the policy.</p>
    pub fn status(mut self, input: crate::types::AutoScalingPolicyStatus) -> Self {
        self.status = ::std::option::Option::Some(input);
        self
    }
    /// <p>The status of the policy.</p>
    pub fn set_status(mut self, input: ::std::option::Option<crate::types::AutoScalingPolicyStatus>) -> Self {
        self.status = input;
        self
    }
    /// <p>The status of the policy.</p>
    pub fn get_status(&self) -> &::std::option::Option<crate::types::AutoScalingPolicyStatus> {
        &self.status
    }
    /// <p>The upper and lower EC2 instance limits for the policy.</p>
    pub fn constraints(mut self, input: crate::types::ScalingConstraints) -> Self {
        self.constraints = ::std::option::Option::Some(input);
        self
    }
    /// <p>The upper and lower EC2 instance limits for the policy.</p>
    pub fn set_constraints(mut self, input: ::std::option::Option<crate::types::ScalingConstraints>) -> Self {
        self.constraints = input;
        self
    }
    /// <p>The upper and lower EC2 instance limits for the policy.</p>
    pub fn get_constraints(&self) -> &::std::option::Option<crate::types::ScalingConstraints> {
        &self.constraints
    }
    /// Appends an item to `rules`.
    ///
    /// To override the contents of this collection use [`set_rules`](Self::set_rules).
    ///
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    pub fn rules(mut self, input: crate::types::ScalingRule) -> Self {
        let mut v = self.rules.unwrap_or_default();
        v.push(input);
        self.rules = ::std::option::Option::Some(v);
        self
    }
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    pub fn set_rules(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>>) -> Self {
        self.rules = input;
        self
    }
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    pub fn get_rules(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>> {
        &self.rules
    }
    /// Consumes the builder and constructs a [`AutoScalingPolicyDescription`](crate::types::AutoScalingPolicyDescription).
    pub fn build(self) -> crate::types::AutoScalingPolicyDescription {
        crate::types::AutoScalingPolicyDescription {
            status: self.status,
            constraints: self.constraints,
            rules: self.rules,
        }
    }
}
