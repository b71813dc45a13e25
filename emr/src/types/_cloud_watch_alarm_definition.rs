/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The definition of a CloudWatch metric alarm that triggers a scaling activity when the metric crosses the threshold for the configured number of evaluation periods.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct CloudWatchAlarmDefinition {
    /// <p>Determines how the metric is compared to the threshold.</p>
    pub comparison_operator: ::std::option::Option<crate::types::ComparisonOperator>,
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers. The default is <code>1</code>.</p>
    pub evaluation_periods: ::std::option::Option<i32>,
    /// <p>The name of the CloudWatch metric that is watched.</p>
    pub metric_name: ::std::option::Option<::std::string::String>,
    /// <p>The namespace of the metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub namespace: ::std::option::Option<::std::string::String>,
    /// <p>The period, in seconds, over which the statistic is applied. EMR metrics are emitted every five minutes, so the recommended value is <code>300</code>.</p>
    pub period: ::std::option::Option<i32>,
    /// <p>The statistic to apply to the metric. The default is <code>AVERAGE</code>.</p>
    pub statistic: ::std::option::Option<crate::types::Statistic>,
    /// <p>The value against which the metric is compared.</p>
    pub threshold: ::std::option::Option<f64>,
    /// <p>The unit of measure of the metric.</p>
    pub unit: ::std::option::Option<crate::types::Unit>,
    /// <p>A CloudWatch metric dimension.</p>
    pub dimensions: ::std::option::Option<::std::vec::Vec<crate::types::MetricDimension>>,
}
impl CloudWatchAlarmDefinition {
    /// <p>Determines how the metric is compared to the threshold.</p>
    pub fn comparison_operator(&self) -> ::std::option::Option<&crate::types::ComparisonOperator> {
        self.comparison_operator.as_ref()
    }
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers. The default is <code>1</code>.</p>
    pub fn evaluation_periods(&self) -> ::std::option::Option<i32> {
        self.evaluation_periods
    }
    /// <p>The name of the CloudWatch metric that is watched.</p>
    pub fn metric_name(&self) -> ::std::option::Option<&str> {
        self.metric_name.as_deref()
    }
    /// <p>The namespace of the metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub fn namespace(&self) -> ::std::option::Option<&str> {
        self.namespace.as_deref()
    }
    /// <p>The period, in seconds, over which the statistic is applied. EMR metrics are emitted every five minutes, so the recommended value is <code>300</code>.</p>
    pub fn period(&self) -> ::std::option::Option<i32> {
        self.period
    }
    /// <p>The statistic to apply to the metric. The default is <code>AVERAGE</code>.</p>
    pub fn statistic(&self) -> ::std::option::Option<&crate::types::Statistic> {
        self.statistic.as_ref()
    }
    /// <p>The value against which the metric is compared.</p>
    pub fn threshold(&self) -> ::std::option::Option<f64> {
        self.threshold
    }
    /// <p>The unit of measure of the metric.</p>
    pub fn unit(&self) -> ::std::option::Option<&crate::types::Unit> {
        self.unit.as_ref()
    }
    /// <p>A CloudWatch metric dimension.</p>
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was sent, use <code>.dimensions.is_none()</code>.
    pub fn dimensions(&self) -> &[crate::types::MetricDimension] {
        self.dimensions.as_deref().unwrap_or_default()
    }
}
impl CloudWatchAlarmDefinition {
    /// Creates a new builder-style object to manufacture [`CloudWatchAlarmDefinition`](crate::types::CloudWatchAlarmDefinition).
    pub fn builder() -> crate::types::builders::CloudWatchAlarmDefinitionBuilder {
        crate::types::builders::CloudWatchAlarmDefinitionBuilder::default()
    }
    /// Converts this [`CloudWatchAlarmDefinition`](crate::types::CloudWatchAlarmDefinition) back into a builder, keeping every member that is set.
    pub fn into_builder(self) -> crate::types::builders::CloudWatchAlarmDefinitionBuilder {
        crate::types::builders::CloudWatchAlarmDefinitionBuilder {
            comparison_operator: self.comparison_operator,
            evaluation_periods: self.evaluation_periods,
            metric_name: self.metric_name,
            namespace: self.namespace,
            period: self.period,
            statistic: self.statistic,
            threshold: self.threshold,
            unit: self.unit,
            dimensions: self.dimensions,
        }
    }
}

/// A builder for [`CloudWatchAlarmDefinition`](crate::types::CloudWatchAlarmDefinition).
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
pub struct CloudWatchAlarmDefinitionBuilder {
    pub(crate) comparison_operator: ::std::option::Option<crate::types::ComparisonOperator>,
    pub(crate) evaluation_periods: ::std::option::Option<i32>,
    pub(crate) metric_name: ::std::option::Option<::std::string::String>,
    pub(crate) namespace: ::std::option::Option<::std::string::String>,
    pub(crate) period: ::std::option::Option<i32>,
    pub(crate) statistic: ::std::option::Option<crate::types::Statistic>,
    pub(crate) threshold: ::std::option::Option<f64>,
    pub(crate) unit: ::std::option::Option<crate::types::Unit>,
    pub(crate) dimensions: ::std::option::Option<::std::vec::Vec<crate::types::MetricDimension>>,
}
impl CloudWatchAlarmDefinitionBuilder {
    /// <p>Determines how the metric is compared to the threshold.</p>
    pub fn comparison_operator(mut self, input: crate::types::ComparisonOperator) -> Self {
        self.comparison_operator = ::std::option::Option::Some(input);
        self
    }
    /// <p>Determines how the metric is compared to the threshold.</p>
    pub fn set_comparison_operator(mut self, input: ::std::option::Option<crate::types::ComparisonOperator>) -> Self {
        self.comparison_operator = input;
        self
    }
    /// <p>Determines how the metric is compared to the threshold.</p>
    pub fn get_comparison_operator(&self) -> &::std::option::Option<crate::types::ComparisonOperator> {
        &self.comparison_operator
    }
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers. The default is <code>1</code>.</p>
    pub fn evaluation_periods(mut self, input: i32) -> Self {
        self.evaluation_periods = ::std::option::Option::Some(input);
        self
    }
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers. The default is <code>1</code>.</p>
    pub fn set_evaluation_periods(mut self, input: ::std::option::Option<i32>) -> Self {
        self.evaluation_periods = input;
        self
    }
    /// <p>The number of periods, in five-minute increments, during which the alarm condition must exist before the alarm triggers. The default is <code>1</code>.</p>
    pub fn get_evaluation_periods(&self) -> &::std::option::Option<i32> {
        &self.evaluation_periods
    }
    /// <p>The name of the CloudWatch metric that is watched.</p>
    pub fn metric_name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.metric_name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the CloudWatch metric that is watched.</p>
    pub fn set_metric_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.metric_name = input;
        self
    }
    /// <p>The name of the CloudWatch metric that is watched.</p>
    pub fn get_metric_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.metric_name
    }
    /// <p>The namespace of the metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub fn namespace(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.namespace = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The namespace of the metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub fn set_namespace(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.namespace = input;
        self
    }
    /// <p>The namespace of the metric. The default is <code>AWS/ElasticMapReduce</code>.</p>
    pub fn get_namespace(&self) -> &::std::option::Option<::std::string::String> {
        &self.namespace
    }
    /// <p>The period, in seconds, over which the statistic is applied. EMR metrics are emitted every five minutes, so the recommended value is <code>300</code>.</p>
    pub fn period(mut self, input: i32) -> Self {
        self.period = ::std::option::Option::Some(input);
        self
    }
    /// <p>The period, in seconds, over which the statistic is applied. EMR metrics are emitted every five minutes, so the recommended value is <code>300</code>.</p>
    pub fn set_period(mut self, input: ::std::option::Option<i32>) -> Self {
        self.period = input;
        self
    }
    /// <p>The period, in seconds, over which the statistic is applied. EMR metrics are emitted every five minutes, so the recommended value is <code>300</code>.</p>
    pub fn get_period(&self) -> &::std::option::Option<i32> {
        &self.period
    }
    /// <p>The statistic to apply to the metric. The default is <code>AVERAGE</code>.</p>
    pub fn statistic(mut self, input: crate::types::Statistic) -> Self {
        self.statistic = ::std::option::Option::Some(input);
        self
    }
    /// <p>The statistic to apply to the metric. The default is <code>AVERAGE</code>.</p>
    pub fn set_statistic(mut self, input: ::std::option::Option<crate::types::Statistic>) -> Self {
        self.statistic = input;
        self
    }
    /// <p>The statistic to apply to the metric. The default is <code>AVERAGE</code>.</p>
    pub fn get_statistic(&self) -> &::std::option::Option<crate::types::Statistic> {
        &self.statistic
    }
    /// <p>The value against which the metric is compared.</p>
    pub fn threshold(mut self, input: f64) -> Self {
        self.threshold = ::std::option::Option::Some(input);
        self
    }
    /// <p>The value against which the metric is compared.</p>
    pub fn set_threshold(mut self, input: ::std::option::Option<f64>) -> Self {
        self.threshold = input;
        self
    }
    /// <p>The value against which the metric is compared.</p>
    pub fn get_threshold(&self) -> &::std::option::Option<f64> {
        &self.threshold
    }
    /// <p>The unit of measure of the metric.</p>
    pub fn unit(mut self, input: crate::types::Unit) -> Self {
        self.unit = ::std::option::Option::Some(input);
        self
    }
    /// <p>The unit of measure of the metric.</p>
    pub fn set_unit(mut self, input: ::std::option::Option<crate::types::Unit>) -> Self {
        self.unit = input;
        self
    }
    /// <p>The unit of measure of the metric.</p>
    pub fn get_unit(&self) -> &::std::option::Option<crate::types::Unit> {
        &self.unit
    }
    /// Appends an item to `dimensions`.
    ///
    /// To override the contents of this collection use [`set_dimensions`](Self::set_dimensions).
    ///
    /// <p>A CloudWatch metric dimension.</p>
    pub fn dimensions(mut self, input: crate::types::MetricDimension) -> Self {
        let mut v = self.dimensions.unwrap_or_default();
        v.push(input);
        self.dimensions = ::std::option::Option::Some(v);
        self
    }
    /// <p>A CloudWatch metric dimension.</p>
    pub fn set_dimensions(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::MetricDimension>>) -> Self {
        self.dimensions = input;
        self
    }
    /// <p>A CloudWatch metric dimension.</p>
    pub fn get_dimensions(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::MetricDimension>> {
        &self.dimensions
    }
    /// Consumes the builder and constructs a [`CloudWatchAlarmDefinition`](crate::types::CloudWatchAlarmDefinition).
    pub fn build(self) -> crate::types::CloudWatchAlarmDefinition {
        crate::types::CloudWatchAlarmDefinition {
            comparison_operator: self.comparison_operator,
            evaluation_periods: self.evaluation_periods,
            metric_name: self.metric_name,
            namespace: self.namespace,
            period: self.period,
            statistic: self.statistic,
            threshold: self.threshold,
            unit: self.unit,
            dimensions: self.dimensions,
        }
    }
}
