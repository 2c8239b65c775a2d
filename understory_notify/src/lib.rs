// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Notify: single-threaded change notification.
//!
//! This crate provides [`Event`], the publish/subscribe primitive that property
//! nodes (see `understory_property`) use to announce that their definition
//! changed. An event carries no payload; listeners re-query whatever they
//! observe.
//!
//! - [`Event`]: shared handle to an ordered listener list.
//! - [`ListenerKey`]: returned by [`Event::subscribe`], consumed by
//!   [`Event::unsubscribe`].
//! - [`WeakEvent`]: non-owning handle, used to forward one event into another
//!   without creating reference cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_notify::Event;
//!
//! let upstream = Event::new();
//! let downstream = Event::new();
//!
//! // Forward upstream changes into downstream.
//! let target = downstream.downgrade();
//! let forward = upstream.subscribe(move || {
//!     target.raise();
//! });
//!
//! let seen = Rc::new(Cell::new(0));
//! let counter = seen.clone();
//! downstream.subscribe(move || counter.set(counter.get() + 1));
//!
//! upstream.raise();
//! assert_eq!(seen.get(), 1);
//!
//! upstream.unsubscribe(forward);
//! upstream.raise();
//! assert_eq!(seen.get(), 1);
//! ```
//!
//! ## Re-entrancy
//!
//! Listeners may subscribe, unsubscribe, or raise (the same or another event)
//! while a raise is in progress. A raise always delivers to the set of
//! listeners present when it started, minus any that were unsubscribed before
//! their turn.
//!
//! ## Threading
//!
//! Events are `!Send` and `!Sync`. Property graphs are driven from one control
//! thread.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;

pub use event::{Event, ListenerKey, WeakEvent};
