/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>CancelSteps</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash, ::std::fmt::Debug)]
pub struct CancelStepsOutput {
    /// <p>A list of <code>CancelStepsInfo</code>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    pub cancel_steps_info_list: ::std::option::Option<::std::vec::Vec<crate::types::CancelStepsInfo>>,
}
impl CancelStepsOutput {
    /// <p>A list of <code>CancelStepsInfo</code>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.cancel_steps_info_list.is_none()</code>.
    pub fn cancel_steps_info_list(&self) -> &[crate::types::CancelStepsInfo] {
        self.cancel_steps_info_list.as_deref().unwrap_or_default()
    }
}
impl CancelStepsOutput {
    /// Creates a new builder-style object to manufacture [`CancelStepsOutput`](crate::operation::cancel_steps::CancelStepsOutput).
    pub fn builder() -> crate::operation::cancel_steps::builders::CancelStepsOutputBuilder {
        crate::operation::cancel_steps::builders::CancelStepsOutputBuilder::default()
    }
    /// Converts this [`CancelStepsOutput`](crate::operation::cancel_steps::CancelStepsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::cancel_steps::builders::CancelStepsOutputBuilder {
        crate::operation::cancel_steps::builders::CancelStepsOutputBuilder {
            cancel_steps_info_list: self.cancel_steps_info_list,
        }
    }
}

/// A builder for [`CancelStepsOutput`](crate::operation::cancel_steps::CancelStepsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CancelStepsOutputBuilder {
    pub(crate) cancel_steps_info_list: ::std::option::Option<::std::vec::Vec<crate::types::CancelStepsInfo>>,
}
impl CancelStepsOutputBuilder {
    /// Appends an item to `cancel_steps_info_list`.
    ///
    /// To override the contents of this collection use [`set_cancel_steps_info_list`](Self::set_cancel_steps_info_list).
    ///
    /// <p>A list of <code>CancelStepsInfo</code>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    pub fn cancel_steps_info_list(mut self, input: crate::types::CancelStepsInfo) -> Self {
        let mut v = self.cancel_steps_info_list.unwrap_or_default();
        v.push(input);
        self.cancel_steps_info_list = ::std::option::Option::Some(v);
        self
    }
    /// <p>A list of <code>CancelStepsInfo</code>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    pub fn set_cancel_steps_info_list(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::CancelStepsInfo>>) -> Self {
        self.cancel_steps_info_list = input;
        self
    }
    /// <p>A list of <code>CancelStepsInfo</code>, which shows the status of specified cancel requests for each <code>StepID</code> specified.</p>
    pub fn get_cancel_steps_info_list(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::CancelStepsInfo>> {
        &self.cancel_steps_info_list
    }
    /// Consumes the builder and constructs a [`CancelStepsOutput`](crate::operation::cancel_steps::CancelStepsOutput).
    pub fn build(self) -> crate::operation::cancel_steps::CancelStepsOutput {
        crate::operation::cancel_steps::CancelStepsOutput {
            cancel_steps_info_list: self.cancel_steps_info_list,
        }
    }
}
