/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client data model for AWS Identity and Access Management (IAM).
//!
//! IAM lets you manage users, groups, roles, access keys, MFA devices, and
//! the policies that grant them permissions. This crate models the *data*
//! side of that API: every operation's request and result as a
//! builder-constructed value shape, the marker/`IsTruncated` pagination
//! convention with a lazy client-side paginator, and the service's modeled
//! error taxonomy.
//!
//! Shapes are plain values. They are built field by field, compared
//! structurally, and render their present fields only:
//!
//! ```
//! use iam::input::CreateUserInput;
//!
//! let input = CreateUserInput::builder().user_name("alice").build();
//! assert_eq!(input.user_name(), Some("alice"));
//! assert_eq!(format!("{input:?}"), "{UserName: alice}");
//! ```
//!
//! Nothing here talks to the network. A transport layer serializes request
//! shapes onto the wire, deserializes responses into result shapes, and maps
//! error responses into [`Error`] behind an [`SdkError`]. Field constraints
//! noted in the documentation (lengths, ARN and path patterns, allowed
//! values) are enforced by the service, not by this model.

pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod paginate;

pub use error::Error;
pub use shape_http::result::{SdkError, SdkSuccess};
pub use shape_types::{Blob, DateTime};
