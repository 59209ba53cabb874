// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window implementations for different lookup strategies.
//!
//! - `flatvec`: flat vector with linear scans (small, simple, reference behavior).
//! - `btree`: centers ordered by y in a balanced tree; queries walk outward from the
//!   query's y in both directions and stop once the y-gap exceeds the radius.
//!
//! Both report the same coverage answer for the same contents; they may disagree on
//! *which* covering slot is returned when several qualify.

pub mod btree;
pub mod flatvec;

pub use btree::BTreeWindow;
pub use flatvec::FlatWindow;
