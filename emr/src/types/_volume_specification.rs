/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct VolumeSpecification {
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub volume_type: ::std::option::Option<::std::string::String>,
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub iops: ::std::option::Option<i32>,
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub size_in_gb: ::std::option::Option<i32>,
}
impl VolumeSpecification {
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub fn volume_type(&self) -> ::std::option::Option<&str> {
        self.volume_type.as_deref()
    }
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn iops(&self) -> ::std::option::Option<i32> {
        self.iops
    }
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub fn size_in_gb(&self) -> ::std::option::Option<i32> {
        self.size_in_gb
    }
}
impl VolumeSpecification {
    /// Creates a new builder-style object to manufacture [`VolumeSpecification`](crate::types::VolumeSpecification).
    pub fn builder() -> crate::types::builders::VolumeSpecificationBuilder {
        crate::types::builders::VolumeSpecificationBuilder::default()
    }
    /// Converts this [`VolumeSpecification`](crate::types::VolumeSpecification) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::VolumeSpecificationBuilder {
        crate::types::builders::VolumeSpecificationBuilder {
            volume_type: self.volume_type,
            iops: self.iops,
            size_in_gb: self.size_in_gb,
        }
    }
}

/// A builder for [`VolumeSpecification`](crate::types::VolumeSpecification).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct VolumeSpecificationBuilder {
    pub(crate) volume_type: ::std::option::Option<::std::string::String>,
    pub(crate) iops: ::std::option::Option<i32>,
    pub(crate) size_in_gb: ::std::option::Option<i32>,
}
impl VolumeSpecificationBuilder {
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub fn volume_type(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.volume_type = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub fn set_volume_type(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.volume_type = input;
        self
    }
    /// <p>The volume type. Volume types supported are gp2, io1, standard.</p>
    pub fn get_volume_type(&self) -> &::std::option::Option<::std::string::String> {
        &self.volume_type
    }
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn set_iops(mut self, input: ::std::option::Option<i32>) -> Self {
        self.iops = input;
        self
    }
    /// <p>The number of I/O operations per second (IOPS) that the volume supports.</p>
    pub fn get_iops(&self) -> &::std::option::Option<i32> {
        &self.iops
    }
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub fn size_in_gb(mut self, input: i32) -> Self {
        self.size_in_gb = ::std::option::Option::Some(input);
        self
    }
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub fn set_size_in_gb(mut self, input: ::std::option::Option<i32>) -> Self {
        self.size_in_gb = input;
        self
    }
    /// <p>The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type is EBS-optimized, the minimum value is 10.</p>
    pub fn get_size_in_gb(&self) -> &::std::option::Option<i32> {
        &self.size_in_gb
    }
    /// Consumes the builder and constructs a [`VolumeSpecification`](crate::types::VolumeSpecification).
    pub fn build(self) -> crate::types::VolumeSpecification {
        crate::types::VolumeSpecification {
            volume_type: self.volume_type,
            iops: self.iops,
            size_in_gb: self.size_in_gb,
        }
    }
}
