/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The upper and lower EC2 instance limits for an automatic scaling policy.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct ScalingConstraints {
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink.</p>
    pub min_capacity: ::std::option::Option<i32>,
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow.</p>
    pub max_capacity: ::std::option::Option<i32>,
}
impl ScalingConstraints {
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink.</p>
    pub fn min_capacity(&self) -> ::std::option::Option<i32> {
        self.min_capacity
    }
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow.</p>
    pub fn max_capacity(&self) -> ::std::option::Option<i32> {
        self.max_capacity
    }
}
impl ScalingConstraints {
    /// Creates a new builder-style object to manufacture [`ScalingConstraints`](crate::types::ScalingConstraints).
    pub fn builder() -> crate::types::builders::ScalingConstraintsBuilder {
        crate::types::builders::ScalingConstraintsBuilder::default()
    }
    /// Converts this [`ScalingConstraints`](crate::types::ScalingConstraints) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::ScalingConstraintsBuilder {
        crate::types::builders::ScalingConstraintsBuilder {
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
        }
    }
}

/// A builder for [`ScalingConstraints`](crate::types::ScalingConstraints).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ScalingConstraintsBuilder {
    pub(crate) min_capacity: ::std::option::Option<i32>,
    pub(crate) max_capacity: ::std::option::Option<i32>,
}
impl ScalingConstraintsBuilder {
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink.</p>
    pub fn min_capacity(mut self, input: i32) -> Self {
        self.min_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink.</p>
    pub fn set_min_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.min_capacity = input;
        self
    }
    /// <p>The lower boundary of EC2 instances in an instance group below which scaling activities are not allowed to shrink.</p>
    pub fn get_min_capacity(&self) -> &::std::option::Option<i32> {
        &self.min_capacity
    }
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow.</p>
    pub fn max_capacity(mut self, input: i32) -> Self {
        self.max_capacity = ::std::option::Option::Some(input);
        self
    }
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow.</p>
    pub fn set_max_capacity(mut self, input: ::std::option::Option<i32>) -> Self {
        self.max_capacity = input;
        self
    }
    /// <p>The upper boundary of EC2 instances in an instance group beyond which scaling activities are not allowed to grow.</p>
    pub fn get_max_capacity(&self) -> &::std::option::Option<i32> {
        &self.max_capacity
    }
    /// Consumes the builder and constructs a [`ScalingConstraints`](crate::types::ScalingConstraints).
    pub fn build(self) -> crate::types::ScalingConstraints {
        crate::types::ScalingConstraints {
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
        }
    }
}
