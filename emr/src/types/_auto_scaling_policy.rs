/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>An automatic scaling policy for a core or task instance group.</p>
/// <p>The policy defines how the instance group scales in and out in response to CloudWatch metrics.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct AutoScalingPolicy {
    /// <p>The upper and lower EC2 instance limits for the policy. Scale-out activities never exceed the maximum and scale-in activities never go below the minimum.</p>
    pub constraints: ::std::option::Option<crate::types::ScalingConstraints>,
    /// <p>The scale-in and scale-out rules that make up the policy.</p>
    pub rules: ::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>>,
}
impl AutoScalingPolicy {
    /// <p>The upper and lower EC2 instance limits for the policy. Scale-out activities never exceed the maximum and scale-in activities never go below the minimum.</p>
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
impl AutoScalingPolicy {
    /// Creates a new builder-style object to manufacture [`AutoScalingPolicy`](crate::types::AutoScalingPolicy).
    pub fn builder() -> crate::types::builders::AutoScalingPolicyBuilder {
        crate::types::builders::AutoScalingPolicyBuilder::default()
    }
    /// Converts this [`AutoScalingPolicy`](crate::types::AutoScalingPolicy) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::AutoScalingPolicyBuilder {
        crate::types::builders::AutoScalingPolicyBuilder {
            constraints: self.constraints,
            rules: self.rules,
        }
    }
}

/// A builder for [`AutoScalingPolicy`](crate::types::AutoScalingPolicy).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct AutoScalingPolicyBuilder {
    pub(crate) constraints: ::std::option::Option<crate::types::ScalingConstraints>,
    pub(crate) rules: ::std::option::Option<::std::vec::Vec<crate::types::ScalingRule>>,
}
impl AutoScalingPolicyBuilder {
    /// <p>The upper and lower EC2 instance limits for the policy. Scale-out activities never exceed the maximum and scale-in activities never go below the minimum.</p>
    pub fn constraints(mut self, input: crate::types::ScalingConstraints) -> Self {
        self.constraints = ::std::option::Option::Some(input);
        self
    }
    /// <p>The upper and lower EC2 instance limits for the policy. Scale-out activities never exceed the maximum and scale-in activities never go below the minimum.</p>
    pub fn set_constraints(mut self, input: ::std::option::Option<crate::types::ScalingConstraints>) -> Self {
        self.constraints = input;
        self
    }
    /// <p>The upper and lower EC2 instance limits for the policy. Scale-out activities never exceed the maximum and scale-in activities never go below the minimum.</p>
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
    /// Consumes the builder and constructs a [`AutoScalingPolicy`](crate::types::AutoScalingPolicy).
    pub fn build(self) -> crate::types::AutoScalingPolicy {
        crate::types::AutoScalingPolicy {
            constraints: self.constraints,
            rules: self.rules,
        }
    }
}
