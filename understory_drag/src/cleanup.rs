// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite teardown guard.
//!
//! A [`Cleanup`] owns a list of teardown callbacks and runs all of them
//! together, either explicitly via [`Cleanup::run`] or when dropped.
//! [`combine`] merges several guards into one so that behaviours attached
//! together are also detached together.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_drag::cleanup::{Cleanup, combine};
//!
//! let hits = Rc::new(Cell::new(0));
//! let a = { let h = hits.clone(); Cleanup::new(move || h.set(h.get() + 1)) };
//! let b = { let h = hits.clone(); Cleanup::new(move || h.set(h.get() + 10)) };
//! let both = combine([a, b]);
//! assert_eq!(hits.get(), 0);
//! drop(both);
//! assert_eq!(hits.get(), 11);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

type Teardown = Box<dyn FnOnce()>;

/// Runs its teardown callbacks exactly once, in registration order.
#[must_use = "dropping a Cleanup immediately runs its teardown"]
pub struct Cleanup {
    callbacks: Vec<Teardown>,
}

impl fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleanup")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Cleanup {
    /// A guard with a single teardown callback.
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self {
            callbacks: alloc::vec![Box::new(f) as Teardown],
        }
    }

    /// A guard that does nothing.
    pub fn empty() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Number of pending teardown callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// True if there is nothing left to tear down.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Append another guard's callbacks to this one.
    pub fn push(&mut self, mut other: Self) {
        self.callbacks.append(&mut other.callbacks);
    }

    /// Run all teardown callbacks now.
    pub fn run(mut self) {
        self.run_pending();
    }

    /// Drop the callbacks without running them; the attached behaviour stays live.
    pub fn forget(mut self) {
        self.callbacks.clear();
    }

    fn run_pending(&mut self) {
        for f in self.callbacks.drain(..) {
            f();
        }
    }
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        self.run_pending();
    }
}

/// Merge guards into one that tears everything down together.
pub fn combine(guards: impl IntoIterator<Item = Cleanup>) -> Cleanup {
    let mut out = Cleanup::empty();
    for g in guards {
        out.push(g);
    }
    out
}
