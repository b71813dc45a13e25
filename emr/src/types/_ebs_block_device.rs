/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Configuration of requested EBS block device associated with the instance group.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct EbsBlockDevice {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub volume_specification: ::std::option::Option<crate::types::VolumeSpecification>,
    /// <p>The device name that is exposed to the instance, such as <code>/dev/sdh</code>.</p>
    pub device: ::std::option::Option<::std::string::String>,
}
impl EbsBlockDevice {
    /// <p>EBS volume specifications such as volume type, IOPS, and size (GiB) that will be requested for the EBS volume attached to an EC2 instance in the cluster.</p>
    pub fn volume_specification(&self) -> ::std::option::Option<&crate::types::VolumeSpecification> {
        self.volume_specification.as_ref()
    }
    /// <p>The device name that is exposed to the instance, such as <code>/dev/sdh</code>.</p>
    pub fn device(&self) -> ::std::option::Option<&str> {
        self.device.as_deref()
    }
}
impl EbsBlockDevice {
    /// Creates a new builder-style object to manufacture [`EbsBlockDevice`](crate::types::EbsBlockDevice).
    pub fn builder() -> crate::types::builders::EbsBlockDeviceBuilder {
        crate::types::builders::EbsBlockDeviceBuilder::default()
    }
    /// Converts this [`EbsBlockDevice`](crate::types::EbsBlockDevice) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::EbsBlockDeviceBuilder {
        crate::types::builders::EbsBlockDeviceBuilder {
            volume_specification: self.volume_specification,
            device: self.device,
        }
    }
}

/// A builder for [`EbsBlockDevice`](crate::types::EbsBlockDevice).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct EbsBlockDeviceBuilder {
    pub(crate) volume_specification: ::std::option::Option<crate::types::VolumeSpecification>,
    pub(crate) device: ::std::option::Option<::std::string::String>,
}
impl EbsBlockDeviceBuilder {
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
    /// <p>The device name that is exposed to the instance, such as <code>/dev/sdh</code>.</p>
    pub fn device(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.device = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The device name that is exposed to the instance, such as <code>/dev/sdh</code>.</p>
    pub fn set_device(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.device = input;
        self
    }
    /// <p>The device name that is exposed to the instance, such as <code>/dev/sdh</code>.</p>
    pub fn get_device(&self) -> &::std::option::Option<::std::string::String> {
        &self.device
    }
    /// Consumes the builder and constructs a [`EbsBlockDevice`](crate::types::EbsBlockDevice).
    pub fn build(self) -> crate::types::EbsBlockDevice {
        crate::types::EbsBlockDevice {
            volume_specification: self.volume_specification,
            device: self.device,
        }
    }
}
