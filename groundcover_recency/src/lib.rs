// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundcover_recency --heading-base-level=0

//! Groundcover Recency: a fixed-capacity, `no_std` recency list.
//!
//! ## Overview
//!
//! This crate keeps a bounded set of key→value entries ordered by
//! most-recent touch, with O(1) lookup, upsert, and eviction.
//! A lookup promotes its entry to the front; an upsert that pushes the list
//! over capacity evicts exactly the entry that has gone untouched the
//! longest and hands it back to the caller.
//!
//! ## Chain representation
//!
//! Entries live in an arena of slots addressed by stable indices, with the
//! recency chain expressed as index links rather than references, so there
//! is no unsafe pointer juggling and removal from the middle stays O(1).
//! A `hashbrown` map provides key→slot access.
//!
//! ## Capacity
//!
//! Capacity is fixed at construction and floors silently to one; the list
//! never rejects a capacity. With the default capacity of one, every upsert
//! of a new key evicts the previous entry — callers meaning to hold more
//! must say so.
//!
//! ## Absence is quiet
//!
//! Looking up or plucking a missing key returns `None`; nothing here
//! panics or errors on absent state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod list;

pub use list::{Iter, RecencyList};
