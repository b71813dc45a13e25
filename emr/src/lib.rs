/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request and response shapes for **Amazon Elastic MapReduce** (Amazon EMR).
//!
//! Amazon EMR is a web service that makes it easier to process large amounts of data
//! efficiently. It uses Hadoop processing combined with several AWS services to do tasks such as
//! web indexing, data mining, log file analysis, machine learning, scientific simulation, and
//! data warehouse management.
//!
//! This crate contains the data layer only: every operation's input and output structure, the
//! structures they nest, and the service's string enums. Values are assembled with builders:
//!
//! ```
//! use emr::types::{Command, MarketType};
//!
//! let command = Command::builder()
//!     .name("my-cmd")
//!     .script_path("s3://bucket/script.sh")
//!     .args("a")
//!     .args("b")
//!     .build();
//! assert_eq!(Some("my-cmd"), command.name());
//! assert_eq!(&["a", "b"], command.args());
//!
//! assert_eq!(MarketType::Spot, "SPOT".parse().unwrap());
//! assert!(MarketType::try_parse("RESERVED").is_err());
//! ```

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error_meta::Error;

pub mod error;
mod error_meta;

pub mod operation;

/// Primitives such as `DateTime` used by other types.
pub mod primitives;

/// Data structures used by operation inputs/outputs.
pub mod types;
