// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for chaining events the way composite properties do.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use understory_notify::{Event, ListenerKey};

fn forward(from: &Event, to: &Event) -> ListenerKey {
    let target = to.downgrade();
    from.subscribe(move || {
        target.raise();
    })
}

fn count(event: &Event) -> Rc<Cell<u32>> {
    let hits = Rc::new(Cell::new(0));
    let inner = hits.clone();
    event.subscribe(move || inner.set(inner.get() + 1));
    hits
}

#[test]
fn chain_propagates_once_per_raise() {
    let leaf = Event::new();
    let middle = Event::new();
    let root = Event::new();
    forward(&leaf, &middle);
    forward(&middle, &root);
    let hits = count(&root);

    leaf.raise();
    leaf.raise();
    assert_eq!(hits.get(), 2);
}

#[test]
fn shared_source_feeds_each_owner_independently() {
    let shared = Event::new();
    let a = Event::new();
    let b = Event::new();
    let key_a = forward(&shared, &a);
    forward(&shared, &b);
    let (hits_a, hits_b) = (count(&a), count(&b));

    shared.raise();
    assert_eq!((hits_a.get(), hits_b.get()), (1, 1));

    assert!(shared.unsubscribe(key_a));
    shared.raise();
    assert_eq!((hits_a.get(), hits_b.get()), (1, 2));
}

#[test]
fn forwarding_to_dropped_event_is_silent() {
    let source = Event::new();
    let target = Event::new();
    forward(&source, &target);
    drop(target);

    // The forwarder stays subscribed but has nowhere to go.
    source.raise();
    assert_eq!(source.listener_count(), 1);
}

#[test]
fn listener_observes_state_written_before_raise() {
    let event = Event::new();
    let state = Rc::new(RefCell::new(0));
    let observed = Rc::new(Cell::new(0));

    let (s, o) = (state.clone(), observed.clone());
    event.subscribe(move || o.set(*s.borrow()));

    *state.borrow_mut() = 42;
    event.raise();
    assert_eq!(observed.get(), 42);
}
