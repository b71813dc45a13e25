/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Managed scaling policy for an Amazon EMR cluster. The policy specifies the limits for resources that can be added or terminated from a cluster. The policy only applies to the core and task nodes. The master node cannot be scaled after initial configuration.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ManagedScalingPolicy {
    /// <p>The EC2 unit limits for a managed scaling policy.</p>
    pub compute_limits: ::std::option::Option<crate::types::ComputeLimits>,
}
impl ManagedScalingPolicy {
    /// <p>The EC2 unit limits for a managed scaling policy.</p>
    pub fn compute_limits(&self) -> ::std::option::Option<&crate::types::ComputeLimits> {
        self.compute_limits.as_ref()
    }
}
impl ManagedScalingPolicy {
    /// Creates a new builder-style object to manufacture [`ManagedScalingPolicy`](crate::types::ManagedScalingPolicy).
    pub fn builder() -> crate::types::builders::ManagedScalingPolicyBuilder {
        crate::types::builders::ManagedScalingPolicyBuilder::default()
    }
    /// Converts this [`ManagedScalingPolicy`](crate::types::ManagedScalingPolicy) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ManagedScalingPolicyBuilder {
        crate::types::builders::ManagedScalingPolicyBuilder {
            compute_limits: self.compute_limits,
        }
    }
}

/// A builder for [`ManagedScalingPolicy`](crate::types::ManagedScalingPolicy).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ManagedScalingPolicyBuilder {
    pub(crate) compute_limits: ::std::option::Option<crate::types::ComputeLimits>,
}
impl ManagedScalingPolicyBuilder {
    /// <p>The EC2 unit limits for a managed scaling policy.</p>
    pub fn compute_limits(mut self, input: crate::types::ComputeLimits) -> Self {
        self.compute_limits = ::std::option::Option::Some(input);
        self
    }
    /// <p>The EC2 unit limits for a managed scaling policy.</p>
    pub fn set_compute_limits(mut self, input: ::std::option::Option<crate::types::ComputeLimits>) -> Self {
        self.compute_limits = input;
        self
    }
    /// <p>The EC2 unit limits for a managed scaling policy.</p>
    pub fn get_compute_limits(&self) -> &::std::option::Option<crate::types::ComputeLimits> {
        &self.compute_limits
    }
    /// Consumes the builder and constructs a [`ManagedScalingPolicy`](crate::types::ManagedScalingPolicy).
    pub fn build(self) -> crate::types::ManagedScalingPolicy {
        crate::types::ManagedScalingPolicy {
            compute_limits: self.compute_limits,
        }
    }
}
