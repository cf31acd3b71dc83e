/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Transport boundary types.
//!
//! Data shapes never fail; operation outcomes do. This crate defines the
//! result types a transport layer hands back when it dispatches a populated
//! request shape: the parsed output paired with the raw response on success,
//! and a four-way error split on failure. Shape accessors stay infallible and
//! everything that can go wrong travels through [`result::SdkError`].

pub mod result;
