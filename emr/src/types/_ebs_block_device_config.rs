/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Configuration of requested EBS block device associated with the instance group with count of volumes that will be associated to every instance.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct EbsBlockDeviceConfig {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub volume_specification: ::std::option::Option<crate::types::VolumeSpecification>,
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group.</p>
    pub volumes_per_instance: ::std::option::Option<i32>,
}
impl EbsBlockDeviceConfig {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn volume_specification(&self) -> ::std::option::Option<&crate::types::VolumeSpecification> {
        self.volume_specification.as_ref()
    }
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group.</p>
    pub fn volumes_per_instance(&self) -> ::std::option::Option<i32> {
        self.volumes_per_instance
    }
}
impl EbsBlockDeviceConfig {
    /// Creates a new builder-style object to manufacture [`EbsBlockDeviceConfig`](crate::types::EbsBlockDeviceConfig).
    pub fn builder() -> crate::types::builders::EbsBlockDeviceConfigBuilder {
        crate::types::builders::EbsBlockDeviceConfigBuilder::default()
    }
    /// Converts this [`EbsBlockDeviceConfig`](crate::types::EbsBlockDeviceConfig) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::EbsBlockDeviceConfigBuilder {
        crate::types::builders::EbsBlockDeviceConfigBuilder {
            volume_specification: self.volume_specification,
            volumes_per_instance: self.volumes_per_instance,
        }
    }
}

/// A builder for [`EbsBlockDeviceConfig`](crate::types::EbsBlockDeviceConfig).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct EbsBlockDeviceConfigBuilder {
    pub(crate) volume_specification: ::std::option::Option<crate::types::VolumeSpecification>,
    pub(crate) volumes_per_instance: ::std::option::Option<i32>,
}
impl EbsBlockDeviceConfigBuilder {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn volume_specification(mut self, input: crate::types::VolumeSpecification) -> Self {
        self.volume_specification = ::std::option::Option::Some(input);
        self
    }
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn set_volume_specification(mut self, input: ::std::option::Option<crate::types::VolumeSpecification>) -> Self {
        self.volume_specification = input;
        self
    }
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn get_volume_specification(&self) -> &::std::option::Option<crate::types::VolumeSpecification> {
        &self.volume_specification
    }
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group.</p>
    pub fn volumes_per_instance(mut self, input: i32) -> Self {
        self.volumes_per_instance = ::std::option::Option::Some(input);
        self
    }
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group.</p>
    pub fn set_volumes_per_instance(mut self, input: ::std::option::Option<i32>) -> Self {
        self.volumes_per_instance = input;
        self
    }
    /// <p>Number of EBS volumes with a specific volume configuration that will be associated with every instance in the instance group.</p>
    pub fn get_volumes_per_instance(&self) -> &::std::option::Option<i32> {
        &self.volumes_per_instance
    }
    /// Consumes the builder and constructs a [`EbsBlockDeviceConfig`](crate::types::EbsBlockDeviceConfig).
    pub fn build(self) -> crate::types::EbsBlockDeviceConfig {
        crate::types::EbsBlockDeviceConfig {
            volume_specification: self.volume_specification,
            volumes_per_instance: self.volumes_per_instance,
        }
    }
}
