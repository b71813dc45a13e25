/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A list of port ranges that are permitted to allow inbound traffic from all public IP addresses.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct PortRange {
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub min_range: ::std::option::Option<i32>,
    /// <p>The largest port number in a specified range of port numbers.</p>
    pub max_range: ::std::option::Option<i32>,
}
impl PortRange {
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn min_range(&self) -> ::std::option::Option<i32> {
        self.min_range
    }
    /// <p>The largest port number in a specified range of port numbers.</p>
    pub fn max_range(&self) -> ::std::option::Option<i32> {
        self.max_range
    }
}
impl PortRange {
    /// Creates a new builder-style object to manufacture [`PortRange`](crate::types::PortRange).
    pub fn builder() -> crate::types::builders::PortRangeBuilder {
        crate::types::builders::PortRangeBuilder::default()
    }
    /// Converts this [`PortRange`](crate::types::PortRange) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::PortRangeBuilder {
        crate::types::builders::PortRangeBuilder {
            min_range: self.min_range,
            max_range: self.max_range,
        }
    }
}

/// A builder for [`PortRange`](crate::types::PortRange).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PortRangeBuilder {
    pub(crate) min_range: ::std::option::Option<i32>,
    pub(crate) max_range: ::std::option::Option<i32>,
}
impl PortRangeBuilder {
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn min_range(mut self, input: i32) -> Self {
        self.min_range = ::std::option::Option::Some(input);
        self
    }
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn set_min_range(mut self, input: ::std::option::Option<i32>) -> Self {
        self.min_range = input;
        self
    }
    /// <p>The smallest port number in a specified range of port numbers.</p>
    pub fn get_min_range(&self) -> &::std::option::Option<i32> {
        &self.min_range
    }
    /// <p>The largest port number in a specified range of port numbers.</p>
    pub fn max_range(mut self, input: i32) -> Self {
        self.max_range = ::std::option::Option::Some(input);
        self
    }
    /// <p>The largest port number in a specified range of port numbers.</p>
    pub fn set_max_range(mut self, input: ::std::option::Option<i32>) -> Self {
        self.max_range = input;
        self
    }
    /// <p>The largest port number in a specified range of port numbers.</p>
    pub fn get_max_range(&self) -> &::std::option::Option<i32> {
        &self.max_range
    }
    /// Consumes the builder and constructs a [`PortRange`](crate::types::PortRange).
    pub fn build(self) -> crate::types::PortRange {
        crate::types::PortRange {
            min_range: self.min_range,
            max_range: self.max_range,
        }
    }
}
