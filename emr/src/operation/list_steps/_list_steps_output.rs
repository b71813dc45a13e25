/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Output of the <code>ListSteps</code> operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::fmt::Debug)]
pub struct ListStepsOutput {
    /// <p>The filtered list of steps for the cluster.</p>
    pub steps: ::std::option::Option<::std::vec::Vec<crate::types::StepSummary>>,
    /// <p>The maximum number of steps that a single <code>ListSteps</code> action returns is 50. To return a longer list of steps, use multiple <code>ListSteps</code> actions along with the <code>marker</code> parameter, which is a pagination token that indicates the next set of results to retrieve.</p>
    pub marker: ::std::option::Option<::std::string::String>,
}
impl ListStepsOutput {
    /// <p>The filtered list of steps for the cluster.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.steps.is_none()</code>.
    pub fn steps(&self) -> &[crate::types::StepSummary] {
        self.steps.as_deref().unwrap_or_default()
    }
    /// <p>The maximum number of steps that a single <code>ListSteps</code> action returns is 50. To return a longer list of steps, use multiple <code>ListSteps</code> actions along with the <code>marker</code> parameter, which is a pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(&self) -> ::std::option::Option<&str> {
        self.marker.as_deref()
    }
}
impl ListStepsOutput {
    /// Creates a new builder-style object to manufacture [`ListStepsOutput`](crate::operation::list_steps::ListStepsOutput).
    pub fn builder() -> crate::operation::list_steps::builders::ListStepsOutputBuilder {
        crate::operation::list_steps::builders::ListStepsOutputBuilder::default()
    }
    /// Converts this [`ListStepsOutput`](crate::operation::list_steps::ListStepsOutput) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::operation::list_steps::builders::ListStepsOutputBuilder {
        crate::operation::list_steps::builders::ListStepsOutputBuilder {
            steps: self.steps,
            marker: self.marker,
        }
    }
}

/// A builder for [`ListStepsOutput`](crate::operation::list_steps::ListStepsOutput).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::default::Default, ::std::fmt::Debug)]
pub struct ListStepsOutputBuilder {
    pub(crate) steps: ::std::option::Option<::std::vec::Vec<crate::types::StepSummary>>,
    pub(crate) marker: ::std::option::Option<::std::string::String>,
}
impl ListStepsOutputBuilder {
    /// Appends an item to `steps`.
    ///
    /// To override the contents of this collection use [`set_steps`](Self::set_steps).
    ///
    /// <p>The filtered list of steps for the cluster.</p>
    pub fn steps(mut self, input: crate::types::StepSummary) -> Self {
        let mut v = self.steps.unwrap_or_default();
        v.push(input);
        self.steps = ::std::option::Option::Some(v);
        self
    }
    /// <p>The filtered list of steps for the cluster.</p>
    pub fn set_steps(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::StepSummary>>) -> Self {
        self.steps = input;
        self
    }
    /// <p>The filtered list of steps for the cluster.</p>
    pub fn get_steps(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::StepSummary>> {
        &self.steps
    }
    /// <p>The maximum number of steps that a single <code>ListSteps</code> action returns is 50. To return a longer list of steps, use multiple <code>ListSteps</code> actions along with the <code>marker</code> parameter, which is a pagination token that indicates the next set of results to retrieve.</p>
    pub fn marker(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.marker = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The maximum number of steps that a single <code>ListSteps</code> action returns is 50. To return a longer list of steps, use multiple <code>ListSteps</code> actions along with the <code>marker</code> parameter, which is a pagination token that indicates the next set of results to retrieve.</p>
    pub fn set_marker(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.marker = input;
        self
    }
    /// <p>The maximum number of steps that a single <code>ListSteps</code> action returns is 50. To return a longer list of steps, use multiple <code>ListSteps</code> actions along with the <code>marker</code> parameter, which is a pagination token that indicates the next set of results to retrieve.</p>
    pub fn get_marker(&self) -> &::std::option::Option<::std::string::String> {
        &self.marker
    }
    /// Consumes the builder and constructs a [`ListStepsOutput`](crate::operation::list_steps::ListStepsOutput).
    pub fn build(self) -> crate::operation::list_steps::ListStepsOutput {
        crate::operation::list_steps::ListStepsOutput {
            steps: self.steps,
            marker: self.marker,
        }
    }
}
