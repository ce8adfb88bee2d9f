// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for drag interactions: states, pointer samples, payloads, and callback arguments.
//!
//! ## Overview
//!
//! These types describe what flows between the host's input layer and a
//! [`DraggableBinding`](crate::binding::DraggableBinding). Element handles are
//! generic (`E`) so any toolkit node identifier can be used, and payloads are
//! generic (`D`) so callers choose how drag data is represented.

use kurbo::{Point, Rect, Vec2};

/// Interaction state of a bound element.
///
/// Exactly one value is current at a time. Transitions are driven by the
/// drag-source and drop-target handlers on
/// [`DraggableBinding`](crate::binding::DraggableBinding); both write the same
/// field, so the last handler to run wins.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DragState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// The element is the source of an active drag.
    Dragging,
    /// A drag is hovering over the element as a drop target.
    Over,
}

impl DragState {
    /// Returns `true` for [`DragState::Idle`].
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A state transition reported by the binding's handlers.
///
/// Only produced when the state actually changed; re-entering the current
/// state yields `None` instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StateChange {
    /// State before the handler ran.
    pub from: DragState,
    /// State after the handler ran.
    pub to: DragState,
}

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer sample was taken.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super key.
        const META  = 0b0000_1000;
    }
}

/// A pointer sample delivered by the host's input layer.
///
/// All geometry in this crate uses [`Input::client`], the viewport-space
/// position. The remaining fields are carried through to callbacks untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Input {
    /// Pointer position in viewport coordinates.
    pub client: Point,
    /// Pointer position in document coordinates.
    pub page: Point,
    /// Button that changed state for this sample (`0` is primary, `-1` is none).
    pub button: i16,
    /// Bitmask of buttons currently held.
    pub buttons: u16,
    /// Keyboard modifiers currently held.
    pub modifiers: Modifiers,
}

impl Input {
    /// Build an input at a viewport position with no buttons or modifiers.
    ///
    /// The page position is set equal to the client position.
    pub fn at(client: Point) -> Self {
        Self {
            client,
            page: client,
            button: 0,
            buttons: 0,
            modifiers: Modifiers::empty(),
        }
    }

    /// Return a copy with the given modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Fixed offset between the pointer and the dragged element's origin.
///
/// Captured once at drag start so the preview stays anchored under the
/// cursor at the same spot the user grabbed.
pub type Offset = Vec2;

/// Descriptor of the floating preview for the current drag.
///
/// `bounds` is the element's bounding rectangle at the moment the preview was
/// generated; the preview keeps this size for the whole drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPreview<E> {
    /// The element being dragged.
    pub element: E,
    /// Viewport-space bounds captured when the preview was generated.
    pub bounds: Rect,
}

/// Payload describing the source of an active drag.
///
/// Returned by [`DraggableBinding::drag_start`](crate::binding::DraggableBinding::drag_start)
/// and handed to drop targets as they are entered, left, or dropped on.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSource<E, D> {
    /// The draggable element.
    pub element: E,
    /// Optional handle element that initiated the drag.
    pub drag_handle: Option<E>,
    /// Data attached at drag start.
    pub data: D,
}

/// What a drop target offers while a drag is over it.
#[derive(Clone, Debug, PartialEq)]
pub struct DropTargetRecord<E, D> {
    /// The drop target element.
    pub element: E,
    /// Data produced by the target for this drag.
    pub data: D,
}

/// Arguments for drag-source callbacks (`can_drag`, `get_initial_data`).
#[derive(Debug)]
pub struct DragArgs<'a, E> {
    /// The input as the drag is trying to start.
    pub input: &'a Input,
    /// The draggable element.
    pub element: &'a E,
    /// The drag handle, if one was configured.
    pub drag_handle: Option<&'a E>,
}

/// Arguments for drop-target callbacks (`can_drop`, `get_data`, `on_drag_leave`).
#[derive(Debug)]
pub struct DropArgs<'a, E, D> {
    /// The latest input.
    pub input: &'a Input,
    /// The drop target element.
    pub element: &'a E,
    /// The drag being considered.
    pub source: &'a DragSource<E, D>,
}

/// How the drop target's leave handler updates the shared state.
///
/// The element is both a drag source and a drop target, so leaving itself
/// while its own drag is still active is ambiguous.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LeavePolicy {
    /// Leaving always returns to [`DragState::Idle`], even mid-drag.
    /// The next move event restores [`DragState::Dragging`].
    #[default]
    Idle,
    /// Leaving returns to [`DragState::Dragging`] while this element's own
    /// drag is active, and to [`DragState::Idle`] otherwise.
    ResumeDragging,
}
