// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how topics get their numbers, and how numbers become an order.
//!
//! Scores are plain integers so two runs can never disagree over a float
//! rounding. Ties are broken by `(category name, key)`, which is unique, so the
//! final order is total and identical on every call.

mod core;
pub mod ranking;

pub use core::*;
