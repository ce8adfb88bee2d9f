// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview positioning: keep a caller-owned element under the pointer during a drag.
//!
//! ## Model
//!
//! [`PreviewTracker`] holds the four inputs of the positioning effect: the
//! preview element slot, the latest pointer sample, the grab offset, and the
//! preview descriptor. Every setter marks a [`Dirty`] bit. [`PreviewTracker::run`]
//! recomputes only when something is dirty, and writes only when all four
//! inputs are present.
//!
//! Size and fixed styling are written immediately. The translation is held as
//! a pending write and applied by [`PreviewTracker::flush`], which the host
//! calls on its next animation frame. Pending writes coalesce; the latest wins.

use kurbo::Vec2;

use crate::host::DragHost;
use crate::style::{PreviewStyle, StyleProperty};
use crate::types::{DragPreview, Input, Offset};

bitflags::bitflags! {
    /// Inputs of the positioning effect that changed since the last run.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        /// The preview element slot was assigned.
        const ELEMENT = 0b0000_0001;
        /// A new pointer sample arrived.
        const POINTER = 0b0000_0010;
        /// The grab offset was captured.
        const OFFSET  = 0b0000_0100;
        /// The preview descriptor was captured.
        const PREVIEW = 0b0000_1000;
    }
}

/// Dependency-tracked positioning state for a floating drag preview.
#[derive(Clone, Debug)]
pub struct PreviewTracker<E> {
    style: PreviewStyle,
    element: Option<E>,
    pointer: Option<Input>,
    offset: Option<Offset>,
    preview: Option<DragPreview<E>>,
    dirty: Dirty,
    pending: Option<Vec2>,
}

impl<E> Default for PreviewTracker<E> {
    fn default() -> Self {
        Self::new(PreviewStyle::default())
    }
}

impl<E> PreviewTracker<E> {
    /// Create an empty tracker that applies `style` to the preview.
    pub fn new(style: PreviewStyle) -> Self {
        Self {
            style,
            element: None,
            pointer: None,
            offset: None,
            preview: None,
            dirty: Dirty::empty(),
            pending: None,
        }
    }

    /// The caller-assigned preview element, if any.
    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// The latest pointer sample of the active drag.
    pub fn pointer(&self) -> Option<&Input> {
        self.pointer.as_ref()
    }

    /// The grab offset captured at drag start.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// The preview descriptor captured for the active drag.
    pub fn preview(&self) -> Option<&DragPreview<E>> {
        self.preview.as_ref()
    }

    /// Inputs changed since the last [`run`](Self::run).
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    /// Translation waiting for the next [`flush`](Self::flush).
    pub fn pending_translation(&self) -> Option<Vec2> {
        self.pending
    }

    /// Assign or clear the preview element slot.
    pub fn set_element(&mut self, element: Option<E>) {
        self.element = element;
        self.dirty |= Dirty::ELEMENT;
    }

    /// Record a pointer sample.
    pub fn set_pointer(&mut self, input: Input) {
        self.pointer = Some(input);
        self.dirty |= Dirty::POINTER;
    }

    /// Record the grab offset.
    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = Some(offset);
        self.dirty |= Dirty::OFFSET;
    }

    /// Record the preview descriptor.
    pub fn set_preview(&mut self, preview: DragPreview<E>) {
        self.preview = Some(preview);
        self.dirty |= Dirty::PREVIEW;
    }

    /// Clear every input and drop any pending translation.
    pub fn reset(&mut self) {
        self.element = None;
        self.pointer = None;
        self.offset = None;
        self.preview = None;
        self.pending = None;
        self.dirty = Dirty::all();
    }

    /// Target translation for the current inputs: pointer position minus grab offset.
    pub fn translation(&self) -> Option<Vec2> {
        let pointer = self.pointer.as_ref()?;
        let offset = self.offset?;
        Some(pointer.client.to_vec2() - offset)
    }

    /// Recompute the preview if any input changed.
    ///
    /// Returns `true` if styles were written. Nothing is written unless the
    /// element slot, pointer, offset, and preview descriptor are all present.
    pub fn run<H: DragHost<E>>(&mut self, host: &mut H) -> bool {
        if self.dirty.is_empty() {
            return false;
        }
        self.dirty = Dirty::empty();

        let (Some(element), Some(preview), Some(translation)) =
            (self.element.as_ref(), self.preview.as_ref(), self.translation())
        else {
            return false;
        };

        for property in self.style.properties() {
            host.set_style(element, property);
        }
        host.set_style(element, StyleProperty::Width(preview.bounds.width()));
        host.set_style(element, StyleProperty::Height(preview.bounds.height()));

        log::trace!(
            "preview translation queued: ({}, {})",
            translation.x,
            translation.y
        );
        self.pending = Some(translation);
        host.request_animation_frame();
        true
    }

    /// Apply the pending translation to the current element slot.
    ///
    /// Returns `true` if a write happened. The write is skipped when the slot
    /// was cleared after the translation was queued.
    pub fn flush<H: DragHost<E>>(&mut self, host: &mut H) -> bool {
        let Some(translation) = self.pending.take() else {
            return false;
        };
        match self.element.as_ref() {
            Some(element) => {
                host.set_style(element, StyleProperty::Translate(translation));
                true
            }
            None => false,
        }
    }
}
