/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use ::aws_smithy_types::date_time::Format as DateTimeFormat;
pub use ::aws_smithy_types::DateTime;
