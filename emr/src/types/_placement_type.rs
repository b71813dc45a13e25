/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The Amazon EC2 Availability Zone configuration of the cluster (job flow).</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct PlacementType {
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>availability_zone</code> is used for uniform instance groups, while <code>availability_zones</code> is used for instance fleets.</p>
    pub availability_zone: ::std::option::Option<::std::string::String>,
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>availability_zones</code> is used for instance fleets, while <code>availability_zone</code> is used for uniform instance groups.</p>
    pub availability_zones: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl PlacementType {
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>availability_zone</code> is used for uniform instance groups, while <code>availability_zones</code> is used for instance fleets.</p>
    pub fn availability_zone(&self) -> ::std::option::Option<&str> {
        self.availability_zone.as_deref()
    }
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>availability_zones</code> is used for instance fleets, while <code>availability_zone</code> is used for uniform instance groups.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.availability_zones.is_none()</code>.
    pub fn availability_zones(&self) -> &[::std::string::String] {
        self.availability_zones.as_deref().unwrap_or_default()
    }
}
impl PlacementType {
    /// Creates a new builder-style object to manufacture [`PlacementType`](crate::types::PlacementType).
    pub fn builder() -> crate::types::builders::PlacementTypeBuilder {
        crate::types::builders::PlacementTypeBuilder::default()
    }
    /// Converts this [`PlacementType`](crate::types::PlacementType) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::PlacementTypeBuilder {
        crate::types::builders::PlacementTypeBuilder {
            availability_zone: self.availability_zone,
            availability_zones: self.availability_zones,
        }
    }
}

/// A builder for [`PlacementType`](crate::types::PlacementType).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct PlacementTypeBuilder {
    pub(crate) availability_zone: ::std::option::Option<::std::string::String>,
    pub(crate) availability_zones: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}
impl PlacementTypeBuilder {
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>availability_zone</code> is used for uniform instance groups, while <code>availability_zones</code> is used for instance fleets.</p>
    pub fn availability_zone(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.availability_zone = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>availability_zone</code> is used for uniform instance groups, while <code>availability_zones</code> is used for instance fleets.</p>
    pub fn set_availability_zone(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.availability_zone = input;
        self
    }
    /// <p>The Amazon EC2 Availability Zone for the cluster. <code>availability_zone</code> is used for uniform instance groups, while <code>availability_zones</code> is used for instance fleets.</p>
    pub fn get_availability_zone(&self) -> &::std::option::Option<::std::string::String> {
        &self.availability_zone
    }
    /// Appends an item to `availability_zones`.
    ///
    /// To override the contents of this collection use [`set_availability_zones`](Self::set_availability_zones).
    ///
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>availability_zones</code> is used for instance fleets, while <code>availability_zone</code> is used for uniform instance groups.</p>
    pub fn availability_zones(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.availability_zones.unwrap_or_default();
        v.push(input.into());
        self.availability_zones = ::std::option::Option::Some(v);
        self
    }
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>availability_zones</code> is used for instance fleets, while <code>availability_zone</code> is used for uniform instance groups.</p>
    pub fn set_availability_zones(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.availability_zones = input;
        self
    }
    /// <p>When multiple Availability Zones are specified, Amazon EMR evaluates them and launches instances in the optimal Availability Zone. <code>availability_zones</code> is used for instance fleets, while <code>availability_zone</code> is used for uniform instance groups.</p>
    pub fn get_availability_zones(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.availability_zones
    }
    /// Consumes the builder and constructs a [`PlacementType`](crate::types::PlacementType).
    pub fn build(self) -> crate::types::PlacementType {
        crate::types::PlacementType {
            availability_zone: self.availability_zone,
            availability_zones: self.availability_zones,
        }
    }
}
