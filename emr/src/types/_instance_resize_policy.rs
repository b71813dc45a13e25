/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Custom policy for requesting termination protection or termination of specific instances when shrinking an instance group.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct InstanceResizePolicy {
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    pub instances_to_terminate: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    pub instances_to_protect: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub instance_termination_timeout: ::std::option::Option<i32>,
}
impl InstanceResizePolicy {
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instances_to_terminate.is_none()</code>.
    pub fn instances_to_terminate(&self) -> &[::std::string::String] {
        self.instances_to_terminate.as_deref().unwrap_or_default()
    }
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.instances_to_protect.is_none()</code>.
    pub fn instances_to_protect(&self) -> &[::std::string::String] {
        self.instances_to_protect.as_deref().unwrap_or_default()
    }
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub fn instance_termination_timeout(&self) -> ::std::option::Option<i32> {
        self.instance_termination_timeout
    }
}
impl InstanceResizePolicy {
    /// Creates a new builder-style object to manufacture [`InstanceResizePolicy`](crate::types::InstanceResizePolicy).
    pub fn builder() -> crate::types::builders::InstanceResizePolicyBuilder {
        crate::types::builders::InstanceResizePolicyBuilder::default()
    }
    /// Converts this [`InstanceResizePolicy`](crate::types::InstanceResizePolicy) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::InstanceResizePolicyBuilder {
        crate::types::builders::InstanceResizePolicyBuilder {
            instances_to_terminate: self.instances_to_terminate,
            instances_to_protect: self.instances_to_protect,
            instance_termination_timeout: self.instance_termination_timeout,
        }
    }
}

/// A builder for [`InstanceResizePolicy`](crate::types::InstanceResizePolicy).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct InstanceResizePolicyBuilder {
    pub(crate) instances_to_terminate: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) instances_to_protect: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
    pub(crate) instance_termination_timeout: ::std::option::Option<i32>,
}
impl InstanceResizePolicyBuilder {
    /// Appends an item to `instances_to_terminate`.
    ///
    /// To override the contents of this collection use [`set_instances_to_terminate`](Self::set_instances_to_terminate).
    ///
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    pub fn instances_to_terminate(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.instances_to_terminate.unwrap_or_default();
        v.push(input.into());
        self.instances_to_terminate = ::std::option::Option::Some(v);
        self
    }
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    pub fn set_instances_to_terminate(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.instances_to_terminate = input;
        self
    }
    /// <p>Specific list of instances to be terminated when shrinking an instance group.</p>
    pub fn get_instances_to_terminate(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.instances_to_terminate
    }
    /// Appends an item to `instances_to_protect`.
    ///
    /// To override the contents of this collection use [`set_instances_to_protect`](Self::set_instances_to_protect).
    ///
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    pub fn instances_to_protect(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        let mut v = self.instances_to_protect.unwrap_or_default();
        v.push(input.into());
        self.instances_to_protect = ::std::option::Option::Some(v);
        self
    }
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    pub fn set_instances_to_protect(mut self, input: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.instances_to_protect = input;
        self
    }
    /// <p>Specific list of instances to be protected when shrinking an instance group.</p>
    pub fn get_instances_to_protect(&self) -> &::std::option::Option<::std::vec::Vec<::std::string::String>> {
        &self.instances_to_protect
    }
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub fn instance_termination_timeout(mut self, input: i32) -> Self {
        self.instance_termination_timeout = ::std::option::Option::Some(input);
        self
    }
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub fn set_instance_termination_timeout(mut self, input: ::std::option::Option<i32>) -> Self {
        self.instance_termination_timeout = input;
        self
    }
    /// <p>Decommissioning timeout override for the specific list of instances to be terminated.</p>
    pub fn get_instance_termination_timeout(&self) -> &::std::option::Option<i32> {
        &self.instance_termination_timeout
    }
    /// Consumes the builder and constructs a [`InstanceResizePolicy`](crate::types::InstanceResizePolicy).
    pub fn build(self) -> crate::types::InstanceResizePolicy {
        crate::types::InstanceResizePolicy {
            instances_to_terminate: self.instances_to_terminate,
            instances_to_protect: self.instances_to_protect,
            instance_termination_timeout: self.instance_termination_timeout,
        }
    }
}
