/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>An automatic scaling configuration, which describes how the policy adds or removes instances, the cooldown period, and the number of EC2 instances that will be added each time the CloudWatch metric alarm condition is satisfied.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct SimpleScalingPolicyConfiguration {
    /// <p>The way in which EC2 instances are added (if <code>scaling_adjustment</code> is a positive number) or terminated (if <code>scaling_adjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default.</p>
    pub adjustment_type: ::std::option::Option<crate::types::AdjustmentType>,
    /// <p>The amount by which to scale in or scale out, based on the specified <code>adjustment_type</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances.</p>
    pub scaling_adjustment: ::std::option::Option<i32>,
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub cool_down: ::std::option::Option<i32>,
}
impl SimpleScalingPolicyConfiguration {
    /// <p>The way in which EC2 instances are added (if <code>scaling_adjustment</code> is a positive number) or terminated (if <code>scaling_adjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default.</p>
    pub fn adjustment_type(&self) -> ::std::option::Option<&crate::types::AdjustmentType> {
        self.adjustment_type.as_ref()
    }
    /// <p>The amount by which to scale in or scale out, based on the specified <code>adjustment_type</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances.</p>
    pub fn scaling_adjustment(&self) -> ::std::option::Option<i32> {
        self.scaling_adjustment
    }
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub fn cool_down(&self) -> ::std::option::Option<i32> {
        self.cool_down
    }
}
impl SimpleScalingPolicyConfiguration {
    /// Creates a new builder-style object to manufacture [`SimpleScalingPolicyConfiguration`](crate::types::SimpleScalingPolicyConfiguration).
    pub fn builder() -> crate::types::builders::SimpleScalingPolicyConfigurationBuilder {
        crate::types::builders::SimpleScalingPolicyConfigurationBuilder::default()
    }
    /// Converts this [`SimpleScalingPolicyConfiguration`](crate::types::SimpleScalingPolicyConfiguration) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::SimpleScalingPolicyConfigurationBuilder {
        crate::types::builders::SimpleScalingPolicyConfigurationBuilder {
            adjustment_type: self.adjustment_type,
            scaling_adjustment: self.scaling_adjustment,
            cool_down: self.cool_down,
        }
    }
}

/// A builder for [`SimpleScalingPolicyConfiguration`](crate::types::SimpleScalingPolicyConfiguration).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct SimpleScalingPolicyConfigurationBuilder {
    pub(crate) adjustment_type: ::std::option::Option<crate::types::AdjustmentType>,
    pub(crate) scaling_adjustment: ::std::option::Option<i32>,
    pub(crate) cool_down: ::std::option::Option<i32>,
}
impl SimpleScalingPolicyConfigurationBuilder {
    /// <p>The way in which EC2 instances are added (if <code>scaling_adjustment</code> is a positive number) or terminated (if <code>scaling_adjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default.</p>
    pub fn adjustment_type(mut self, input: crate::types::AdjustmentType) -> Self {
        self.adjustment_type = ::std::option::Option::Some(input);
        self
    }
    /// <p>The way in which EC2 instances are added (if <code>scaling_adjustment</code> is a positive number) or terminated (if <code>scaling_adjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default.</p>
    pub fn set_adjustment_type(mut self, input: ::std::option::Option<crate::types::AdjustmentType>) -> Self {
        self.adjustment_type = input;
        self
    }
    /// <p>The way in which EC2 instances are added (if <code>scaling_adjustment</code> is a positive number) or terminated (if <code>scaling_adjustment</code> is a negative number) each time the scaling activity is triggered. <code>CHANGE_IN_CAPACITY</code> is the default.</p>
    pub fn get_adjustment_type(&self) -> &::std::option::Option<crate::types::AdjustmentType> {
        &self.adjustment_type
    }
    /// <p>The amount by which to scale in or scale out, based on the specified <code>adjustment_type</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances.</p>
    pub fn scaling_adjustment(mut self, input: i32) -> Self {
        self.scaling_adjustment = ::std::option::Option::Some(input);
        self
    }
    /// <p>The amount by which to scale in or scale out, based on the specified <code>adjustment_type</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances.</p>
    pub fn set_scaling_adjustment(mut self, input: ::std::option::Option<i32>) -> Self {
        self.scaling_adjustment = input;
        self
    }
    /// <p>The amount by which to scale in or scale out, based on the specified <code>adjustment_type</code>. A positive value adds to the instance group's EC2 instance count while a negative number removes instances.</p>
    pub fn get_scaling_adjustment(&self) -> &::std::option::Option<i32> {
        &self.scaling_adjustment
    }
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub fn cool_down(mut self, input: i32) -> Self {
        self.cool_down = ::std::option::Option::Some(input);
        self
    }
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub fn set_cool_down(mut self, input: ::std::option::Option<i32>) -> Self {
        self.cool_down = input;
        self
    }
    /// <p>The amount of time, in seconds, after a scaling activity completes before any further trigger-related scaling activities can start. The default value is 0.</p>
    pub fn get_cool_down(&self) -> &::std::option::Option<i32> {
        &self.cool_down
    }
    /// Consumes the builder and constructs a [`SimpleScalingPolicyConfiguration`](crate::types::SimpleScalingPolicyConfiguration).
    pub fn build(self) -> crate::types::SimpleScalingPolicyConfiguration {
        crate::types::SimpleScalingPolicyConfiguration {
            adjustment_type: self.adjustment_type,
            scaling_adjustment: self.scaling_adjustment,
            cool_down: self.cool_down,
        }
    }
}
