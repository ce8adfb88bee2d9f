// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag: a `no_std` drag source/drop target state machine with a pointer-following preview.
//!
//! ## Overview
//!
//! A [`DraggableBinding`](crate::binding::DraggableBinding) attaches two behaviours to one element:
//! it can be dragged, and it accepts drops. It tracks the element's
//! [`DragState`](crate::types::DragState) (idle, dragging, or over) and keeps a caller-owned
//! preview element positioned under the pointer for the duration of a drag.
//!
//! This crate does not detect drags. Feed it events from your toolkit's input
//! layer or drag-and-drop library; it measures elements and writes styles
//! through the [`DragHost`](crate::host::DragHost) trait you implement.
//!
//! ## State
//!
//! - Drag start → dragging, capturing the grab offset (pointer minus element origin).
//! - Drag move → dragging, recording the pointer.
//! - Drop → idle, clearing the pointer, offset, preview descriptor, and preview element.
//! - Drop-target enter → over; leave → idle (see [`LeavePolicy`](crate::types::LeavePolicy)); drop → idle.
//!
//! ## Preview
//!
//! Once the preview descriptor, pointer, offset, and preview element are all
//! present, the binding sizes the preview to the element's drag-start bounds
//! and queues a translation of `pointer − offset` for the next animation frame.
//! See [`preview`](crate::preview) for the recompute rules.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_drag::binding::{DraggableBinding, DraggableOptions};
//! use understory_drag::host::DragHost;
//! use understory_drag::style::StyleProperty;
//! use understory_drag::types::{DragState, Input};
//!
//! #[derive(Default)]
//! struct Host {
//!     last_translate: Option<Vec2>,
//! }
//!
//! impl DragHost<u32> for Host {
//!     fn bounding_rect(&self, _element: &u32) -> Option<Rect> {
//!         Some(Rect::new(100.0, 100.0, 200.0, 140.0))
//!     }
//!     fn set_style(&mut self, _element: &u32, property: StyleProperty) {
//!         if let StyleProperty::Translate(v) = property {
//!             self.last_translate = Some(v);
//!         }
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut item: DraggableBinding<u32> = DraggableBinding::new(DraggableOptions::new());
//! let _guard = item.mount(Some(1));
//!
//! item.drag_start(&mut host, Input::at(Point::new(110.0, 105.0)));
//! item.generate_preview(&mut host);
//! assert_eq!(item.state(), DragState::Dragging);
//!
//! // The caller renders a preview node once dragging and hands it over.
//! item.set_preview_element(&mut host, Some(2));
//! item.drag(&mut host, Input::at(Point::new(300.0, 205.0)));
//! item.animation_frame(&mut host);
//! assert_eq!(host.last_translate, Some(Vec2::new(290.0, 200.0)));
//!
//! item.drop(&mut host);
//! assert_eq!(item.state(), DragState::Idle);
//! assert!(item.preview().is_none());
//! ```
//!
//! ## Logging
//!
//! State transitions and mount/teardown are reported through the [`log`] facade
//! at `debug`; pointer moves and queued translations at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod binding;
pub mod cleanup;
pub mod host;
pub mod preview;
pub mod style;
pub mod types;

pub use binding::{DraggableBinding, DraggableOptions};
pub use types::{DragState, Input};
