// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a binding and the embedding toolkit.

use kurbo::Rect;

use crate::style::StyleProperty;

/// Geometry reads and style writes the binding needs from its host.
///
/// The host owns every element. The binding only measures elements it was
/// given and writes style properties to the preview element the caller
/// assigned; it never creates or destroys nodes.
pub trait DragHost<E> {
    /// Viewport-space bounding rectangle of `element`.
    ///
    /// Return `None` when the element cannot be measured (for example, it is
    /// detached). The binding skips whatever depended on the measurement.
    fn bounding_rect(&self, element: &E) -> Option<Rect>;

    /// Apply one style property to `element`.
    fn set_style(&mut self, element: &E, property: StyleProperty);

    /// Suppress the platform's default drag image for a drag from `element`.
    fn suppress_native_preview(&mut self, _element: &E) {}

    /// Ask the host to call
    /// [`DraggableBinding::animation_frame`](crate::binding::DraggableBinding::animation_frame)
    /// before the next paint.
    ///
    /// Hosts without a frame clock can ignore this and flush after each event.
    fn request_animation_frame(&mut self) {}
}
