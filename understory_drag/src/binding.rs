// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draggable binding: one element acting as both drag source and drop target.
//!
//! ## Usage
//!
//! 1) Build [`DraggableOptions`] with whichever callbacks you need.
//! 2) Create a [`DraggableBinding`] and [`mount`](DraggableBinding::mount) it on an element.
//!    Keep the returned [`Cleanup`] alive for as long as the behaviour should stay attached.
//! 3) Forward drag-source events (`drag_start`, `generate_preview`, `drag`, `drop`)
//!    and drop-target events (`drag_enter`, `drag_leave`, `target_drop`) from your
//!    drag-and-drop layer.
//! 4) When [`state`](DraggableBinding::state) leaves idle, render a preview node and
//!    hand it over with [`set_preview_element`](DraggableBinding::set_preview_element).
//!    Call [`animation_frame`](DraggableBinding::animation_frame) when the host asks.
//!
//! Handlers run to completion one at a time, in the order the host dispatches
//! them. Source and target handlers write the same state; the last one wins.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use kurbo::Vec2;

use crate::cleanup::{Cleanup, combine};
use crate::host::DragHost;
use crate::preview::PreviewTracker;
use crate::style::PreviewStyle;
use crate::types::{
    DragArgs, DragPreview, DragSource, DragState, DropArgs, DropTargetRecord, Input, LeavePolicy,
    Offset, StateChange,
};

type DragPredicate<E> = Box<dyn Fn(&DragArgs<'_, E>) -> bool>;
type DragData<E, D> = Box<dyn Fn(&DragArgs<'_, E>) -> D>;
type DropPredicate<E, D> = Box<dyn Fn(&DropArgs<'_, E, D>) -> bool>;
type DropData<E, D> = Box<dyn Fn(&DropArgs<'_, E, D>) -> D>;
type DropNotify<E, D> = Box<dyn Fn(&DropArgs<'_, E, D>)>;

/// Callbacks and settings for a [`DraggableBinding`].
///
/// Every callback is optional. A missing predicate permits the interaction;
/// a missing data producer yields `D::default()`.
pub struct DraggableOptions<E, D = ()> {
    can_drag: Option<DragPredicate<E>>,
    get_initial_data: Option<DragData<E, D>>,
    can_drop: Option<DropPredicate<E, D>>,
    get_data: Option<DropData<E, D>>,
    on_drag_leave: Option<DropNotify<E, D>>,
    drag_handle: Option<E>,
    preview_style: PreviewStyle,
    leave_policy: LeavePolicy,
}

impl<E: fmt::Debug, D> fmt::Debug for DraggableOptions<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableOptions")
            .field("can_drag", &self.can_drag.is_some())
            .field("get_initial_data", &self.get_initial_data.is_some())
            .field("can_drop", &self.can_drop.is_some())
            .field("get_data", &self.get_data.is_some())
            .field("on_drag_leave", &self.on_drag_leave.is_some())
            .field("drag_handle", &self.drag_handle)
            .field("preview_style", &self.preview_style)
            .field("leave_policy", &self.leave_policy)
            .finish()
    }
}

impl<E, D> Default for DraggableOptions<E, D> {
    fn default() -> Self {
        Self {
            can_drag: None,
            get_initial_data: None,
            can_drop: None,
            get_data: None,
            on_drag_leave: None,
            drag_handle: None,
            preview_style: PreviewStyle::default(),
            leave_policy: LeavePolicy::default(),
        }
    }
}

impl<E: 'static, D: 'static> DraggableOptions<E, D> {
    /// Options with no callbacks and default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate whether a drag may start.
    #[must_use]
    pub fn can_drag(mut self, f: impl Fn(&DragArgs<'_, E>) -> bool + 'static) -> Self {
        self.can_drag = Some(Box::new(f));
        self
    }

    /// Produce the payload attached to a drag when it starts.
    #[must_use]
    pub fn get_initial_data(mut self, f: impl Fn(&DragArgs<'_, E>) -> D + 'static) -> Self {
        self.get_initial_data = Some(Box::new(f));
        self
    }

    /// Gate whether a drag may be dropped on this element.
    #[must_use]
    pub fn can_drop(mut self, f: impl Fn(&DropArgs<'_, E, D>) -> bool + 'static) -> Self {
        self.can_drop = Some(Box::new(f));
        self
    }

    /// Produce the data this element offers as a drop target.
    #[must_use]
    pub fn get_data(mut self, f: impl Fn(&DropArgs<'_, E, D>) -> D + 'static) -> Self {
        self.get_data = Some(Box::new(f));
        self
    }

    /// Called whenever a drag leaves this element as a drop target.
    #[must_use]
    pub fn on_drag_leave(mut self, f: impl Fn(&DropArgs<'_, E, D>) + 'static) -> Self {
        self.on_drag_leave = Some(Box::new(f));
        self
    }

    /// Element that initiates drags on behalf of the draggable element.
    #[must_use]
    pub fn drag_handle(mut self, handle: E) -> Self {
        self.drag_handle = Some(handle);
        self
    }

    /// Fixed styling for the floating preview.
    #[must_use]
    pub fn preview_style(mut self, style: PreviewStyle) -> Self {
        self.preview_style = style;
        self
    }

    /// How leaving this element as a drop target updates the state.
    #[must_use]
    pub fn leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.leave_policy = policy;
        self
    }
}

/// Drag-source and drop-target behaviour for a single element, plus the
/// positioning of its floating preview.
#[derive(Debug)]
pub struct DraggableBinding<E, D = ()> {
    options: DraggableOptions<E, D>,
    element: Option<E>,
    source_attached: Rc<Cell<bool>>,
    target_attached: Rc<Cell<bool>>,
    state: DragState,
    tracker: PreviewTracker<E>,
}

impl<E: Clone + fmt::Debug, D: Default> DraggableBinding<E, D> {
    /// Create an unmounted binding.
    pub fn new(options: DraggableOptions<E, D>) -> Self {
        let tracker = PreviewTracker::new(options.preview_style);
        Self {
            options,
            element: None,
            source_attached: Rc::new(Cell::new(false)),
            target_attached: Rc::new(Cell::new(false)),
            state: DragState::Idle,
            tracker,
        }
    }

    /// Attach drag-source and drop-target behaviour to `element`.
    ///
    /// Returns `None` and attaches nothing when `element` is absent.
    /// Otherwise returns a single guard that detaches both behaviours
    /// together. Mounting again replaces the element; guards from earlier
    /// mounts no longer affect the binding.
    pub fn mount(&mut self, element: Option<E>) -> Option<Cleanup> {
        let Some(element) = element else {
            log::debug!("draggable mount skipped: no element");
            return None;
        };
        log::debug!("draggable mounted on {element:?}");
        self.element = Some(element);
        self.source_attached = Rc::new(Cell::new(true));
        self.target_attached = Rc::new(Cell::new(true));

        let source = self.source_attached.clone();
        let target = self.target_attached.clone();
        Some(combine([
            Cleanup::new(move || {
                log::debug!("drag source detached");
                source.set(false);
            }),
            Cleanup::new(move || {
                log::debug!("drop target detached");
                target.set(false);
            }),
        ]))
    }

    /// True while both behaviours are attached.
    pub fn is_attached(&self) -> bool {
        self.source_attached.get() && self.target_attached.get()
    }

    /// The mounted element, if any.
    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// Current interaction state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Preview descriptor for the active drag.
    pub fn preview(&self) -> Option<&DragPreview<E>> {
        self.tracker.preview()
    }

    /// The caller-assigned preview element.
    pub fn preview_element(&self) -> Option<&E> {
        self.tracker.element()
    }

    /// Latest pointer sample of the active drag.
    pub fn pointer(&self) -> Option<&Input> {
        self.tracker.pointer()
    }

    /// Grab offset captured at drag start.
    pub fn offset(&self) -> Option<Offset> {
        self.tracker.offset()
    }

    /// Translation waiting for the next [`animation_frame`](Self::animation_frame).
    pub fn pending_translation(&self) -> Option<Vec2> {
        self.tracker.pending_translation()
    }

    /// Assign or clear the rendered preview element and reposition it.
    pub fn set_preview_element<H: DragHost<E>>(&mut self, host: &mut H, element: Option<E>) {
        self.tracker.set_element(element);
        self.tracker.run(host);
    }

    /// Apply the translation queued for this frame.
    ///
    /// Returns `true` if a style write happened. Moves that arrive between
    /// two frames coalesce: only the latest translation is written.
    pub fn animation_frame<H: DragHost<E>>(&mut self, host: &mut H) -> bool {
        self.tracker.flush(host)
    }

    // -- drag source --

    /// Whether a drag from this element may start with `input`.
    pub fn can_start_drag(&self, input: &Input) -> bool {
        let Some(element) = self.source_element() else {
            return false;
        };
        self.options.can_drag.as_ref().is_none_or(|f| {
            f(&DragArgs {
                input,
                element,
                drag_handle: self.options.drag_handle.as_ref(),
            })
        })
    }

    /// Begin a drag from this element.
    ///
    /// Returns `None` when the source is detached or `can_drag` refuses; the
    /// state is left untouched in that case. Otherwise the state becomes
    /// dragging, the grab offset is measured against the element's bounds,
    /// and the drag payload is returned.
    pub fn drag_start<H: DragHost<E>>(
        &mut self,
        host: &mut H,
        input: Input,
    ) -> Option<DragSource<E, D>> {
        if !self.can_start_drag(&input) {
            log::debug!("drag start refused");
            return None;
        }
        let element = self.element.clone()?;
        let drag_handle = self.options.drag_handle.clone();
        let data = self.options.get_initial_data.as_ref().map_or_else(D::default, |f| {
            f(&DragArgs {
                input: &input,
                element: &element,
                drag_handle: drag_handle.as_ref(),
            })
        });

        self.set_state(DragState::Dragging);
        match host.bounding_rect(&element) {
            Some(bounds) => self.tracker.set_offset(input.client - bounds.origin()),
            None => log::debug!("drag start: {element:?} has no bounds, preview will not follow"),
        }
        self.tracker.set_pointer(input);
        self.tracker.run(host);

        Some(DragSource {
            element,
            drag_handle,
            data,
        })
    }

    /// Capture the preview descriptor for the active drag.
    ///
    /// Suppresses the platform drag image and records the element's current
    /// bounds. Returns `false`, capturing nothing, when no drag from this
    /// element is active, the source is detached, or the element cannot be
    /// measured.
    pub fn generate_preview<H: DragHost<E>>(&mut self, host: &mut H) -> bool {
        if !self.own_drag_active() {
            return false;
        }
        let Some(element) = self.source_element().cloned() else {
            return false;
        };
        host.suppress_native_preview(&element);
        let Some(bounds) = host.bounding_rect(&element) else {
            log::debug!("preview skipped: {element:?} has no bounds");
            return false;
        };
        self.tracker.set_preview(DragPreview { element, bounds });
        self.tracker.run(host);
        true
    }

    /// Pointer moved during the drag.
    ///
    /// Ignored unless a drag from this element is active.
    pub fn drag<H: DragHost<E>>(&mut self, host: &mut H, input: Input) -> Option<StateChange> {
        self.source_element()?;
        if !self.own_drag_active() {
            return None;
        }
        log::trace!("drag move to ({}, {})", input.client.x, input.client.y);
        let change = self.set_state(DragState::Dragging);
        self.tracker.set_pointer(input);
        self.tracker.run(host);
        change
    }

    /// The drag from this element ended.
    ///
    /// Returns to idle and clears the pointer, offset, preview descriptor,
    /// and preview element slot.
    pub fn drop<H: DragHost<E>>(&mut self, host: &mut H) -> Option<StateChange> {
        self.source_element()?;
        let change = self.set_state(DragState::Idle);
        self.tracker.reset();
        self.tracker.run(host);
        change
    }

    // -- drop target --

    /// Whether `source` may be dropped on this element.
    pub fn can_accept(&self, source: &DragSource<E, D>, input: &Input) -> bool {
        let Some(element) = self.target_element() else {
            return false;
        };
        self.options.can_drop.as_ref().is_none_or(|f| {
            f(&DropArgs {
                input,
                element,
                source,
            })
        })
    }

    /// A drag entered this element.
    ///
    /// Returns `None` when the target is detached or `can_drop` refuses.
    /// Otherwise the state becomes over and the target's data is returned.
    pub fn drag_enter(
        &mut self,
        source: &DragSource<E, D>,
        input: &Input,
    ) -> Option<DropTargetRecord<E, D>> {
        if !self.can_accept(source, input) {
            return None;
        }
        let element = self.element.clone()?;
        let data = self.options.get_data.as_ref().map_or_else(D::default, |f| {
            f(&DropArgs {
                input,
                element: &element,
                source,
            })
        });
        self.set_state(DragState::Over);
        Some(DropTargetRecord { element, data })
    }

    /// A drag left this element.
    pub fn drag_leave(&mut self, source: &DragSource<E, D>, input: &Input) -> Option<StateChange> {
        let element = self.target_element()?;
        if let Some(f) = self.options.on_drag_leave.as_ref() {
            f(&DropArgs {
                input,
                element,
                source,
            });
        }
        let next = match self.options.leave_policy {
            LeavePolicy::ResumeDragging if self.own_drag_active() => DragState::Dragging,
            LeavePolicy::Idle | LeavePolicy::ResumeDragging => DragState::Idle,
        };
        self.set_state(next)
    }

    /// A drag was dropped on this element.
    pub fn target_drop(
        &mut self,
        _source: &DragSource<E, D>,
        _input: &Input,
    ) -> Option<StateChange> {
        self.target_element()?;
        self.set_state(DragState::Idle)
    }

    // A pointer sample exists from drag start until drop.
    fn own_drag_active(&self) -> bool {
        self.tracker.pointer().is_some()
    }

    fn source_element(&self) -> Option<&E> {
        self.source_attached
            .get()
            .then_some(self.element.as_ref())
            .flatten()
    }

    fn target_element(&self) -> Option<&E> {
        self.target_attached
            .get()
            .then_some(self.element.as_ref())
            .flatten()
    }

    fn set_state(&mut self, to: DragState) -> Option<StateChange> {
        let from = self.state;
        if from == to {
            return None;
        }
        log::debug!("draggable state {from:?} -> {to:?}");
        self.state = to;
        Some(StateChange { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperty;
    use crate::test_util::RecordingHost;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Point, Rect};

    const ITEM: u32 = 1;
    const GHOST: u32 = 2;

    fn host() -> RecordingHost {
        let mut h = RecordingHost::default();
        h.bounds.push((ITEM, Rect::new(100.0, 50.0, 180.0, 80.0)));
        h
    }

    fn mounted(options: DraggableOptions<u32>) -> (DraggableBinding<u32>, Cleanup) {
        let mut b = DraggableBinding::new(options);
        let guard = b.mount(Some(ITEM)).expect("element present");
        (b, guard)
    }

    fn at(x: f64, y: f64) -> Input {
        Input::at(Point::new(x, y))
    }

    fn translations(h: &RecordingHost) -> Vec<Vec2> {
        h.writes
            .iter()
            .filter_map(|(_, p)| match p {
                StyleProperty::Translate(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn mount_without_element_is_silent() {
        let mut b: DraggableBinding<u32> = DraggableBinding::new(DraggableOptions::new());
        assert!(b.mount(None).is_none());
        assert!(!b.is_attached());
        let mut h = host();
        assert!(b.drag_start(&mut h, at(110.0, 60.0)).is_none());
        assert_eq!(b.state(), DragState::Idle);
    }

    #[test]
    fn full_drag_ends_idle_and_clean() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        let src = b.drag_start(&mut h, at(110.0, 60.0)).expect("drag starts");
        assert_eq!(src.element, ITEM);
        assert_eq!(b.state(), DragState::Dragging);
        assert!(b.generate_preview(&mut h));
        b.set_preview_element(&mut h, Some(GHOST));
        for i in 0..5_i32 {
            b.drag(&mut h, at(120.0 + f64::from(i), 70.0));
            b.animation_frame(&mut h);
        }
        assert_eq!(
            b.drop(&mut h),
            Some(StateChange {
                from: DragState::Dragging,
                to: DragState::Idle
            })
        );
        assert_eq!(b.state(), DragState::Idle);
        assert!(b.pointer().is_none());
        assert!(b.offset().is_none());
        assert!(b.preview().is_none());
        assert!(b.preview_element().is_none());
        assert_eq!(b.pending_translation(), None);
    }

    #[test]
    fn offset_fixed_for_whole_drag() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        b.drag_start(&mut h, at(110.0, 65.0));
        assert_eq!(b.offset(), Some(Vec2::new(10.0, 15.0)));
        // The element moving under the drag does not change the grab offset.
        h.bounds[0].1 = Rect::new(0.0, 0.0, 80.0, 30.0);
        b.drag(&mut h, at(300.0, 300.0));
        b.drag(&mut h, at(10.0, 20.0));
        assert_eq!(b.offset(), Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn preview_size_comes_from_drag_start_bounds() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        b.drag_start(&mut h, at(110.0, 60.0));
        b.generate_preview(&mut h);
        h.bounds[0].1 = Rect::new(0.0, 0.0, 10.0, 10.0);
        b.set_preview_element(&mut h, Some(GHOST));
        b.drag(&mut h, at(200.0, 200.0));
        assert!(h.writes.contains(&(GHOST, StyleProperty::Width(80.0))));
        assert!(h.writes.contains(&(GHOST, StyleProperty::Height(30.0))));
        assert!(!h.writes.contains(&(GHOST, StyleProperty::Width(10.0))));
        assert_eq!(h.suppressed, alloc::vec![ITEM]);
    }

    #[test]
    fn translation_tracks_every_move() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        b.drag_start(&mut h, at(110.0, 60.0));
        b.generate_preview(&mut h);
        b.set_preview_element(&mut h, Some(GHOST));
        b.animation_frame(&mut h);
        let moves = [(150.0, 90.0), (151.5, 92.0), (40.0, 10.0)];
        for (x, y) in moves {
            b.drag(&mut h, at(x, y));
            assert!(b.animation_frame(&mut h));
        }
        assert_eq!(
            translations(&h),
            alloc::vec![
                Vec2::new(100.0, 50.0),
                Vec2::new(140.0, 80.0),
                Vec2::new(141.5, 82.0),
                Vec2::new(30.0, 0.0),
            ]
        );
        assert!(h.writes.iter().all(|(el, _)| *el == GHOST));
    }

    #[test]
    fn no_writes_without_preview_element() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        b.drag_start(&mut h, at(110.0, 60.0));
        b.generate_preview(&mut h);
        b.drag(&mut h, at(120.0, 70.0));
        assert!(!b.animation_frame(&mut h));
        assert!(h.writes.is_empty());
    }

    #[test]
    fn unmeasurable_preview_is_skipped() {
        let mut h = RecordingHost::default();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        assert!(b.drag_start(&mut h, at(5.0, 5.0)).is_some());
        assert_eq!(b.state(), DragState::Dragging);
        assert!(b.offset().is_none());
        assert!(!b.generate_preview(&mut h));
        assert!(b.preview().is_none());
        b.set_preview_element(&mut h, Some(GHOST));
        b.drag(&mut h, at(6.0, 6.0));
        assert!(h.writes.is_empty());
    }

    #[test]
    fn can_drag_false_keeps_idle() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::<u32>::new().can_drag(|_| false));
        assert!(!b.can_start_drag(&at(110.0, 60.0)));
        assert!(b.drag_start(&mut h, at(110.0, 60.0)).is_none());
        assert_eq!(b.state(), DragState::Idle);
        assert!(b.pointer().is_none());
        assert!(b.offset().is_none());
        // Moves forwarded after the refusal do not start a drag.
        for (x, y) in [(120.0, 70.0), (130.0, 80.0), (140.0, 90.0)] {
            assert_eq!(b.drag(&mut h, at(x, y)), None);
        }
        assert_eq!(b.state(), DragState::Idle);
        assert!(b.pointer().is_none());
        assert!(b.offset().is_none());
    }

    #[test]
    fn preview_needs_active_drag() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        assert!(!b.generate_preview(&mut h));
        assert!(b.preview().is_none());
        assert!(h.suppressed.is_empty());

        // After a completed drag the preview cannot be regenerated either.
        b.drag_start(&mut h, at(110.0, 60.0));
        b.drop(&mut h);
        assert!(!b.generate_preview(&mut h));
        assert!(b.preview().is_none());
        assert!(b.offset().is_none());
        assert!(b.pointer().is_none());
    }

    #[test]
    fn can_drag_sees_handle_and_input() {
        let (b, _guard) = mounted(
            DraggableOptions::<u32>::new()
                .drag_handle(7)
                .can_drag(|args| args.drag_handle == Some(&7) && args.input.client.x > 0.0),
        );
        assert!(b.can_start_drag(&at(1.0, 1.0)));
        assert!(!b.can_start_drag(&at(-1.0, 1.0)));
    }

    #[test]
    fn initial_data_travels_with_source() {
        let mut h = host();
        let mut b: DraggableBinding<u32, u64> = DraggableBinding::new(
            DraggableOptions::<u32, u64>::new().get_initial_data(|args| u64::from(*args.element) * 100),
        );
        let _guard = b.mount(Some(ITEM));
        let src = b.drag_start(&mut h, at(110.0, 60.0)).expect("drag starts");
        assert_eq!(src.data, 100);
    }

    #[test]
    fn enter_leave_drop_as_target() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        let src = DragSource {
            element: 42,
            drag_handle: None,
            data: (),
        };
        let rec = b.drag_enter(&src, &at(0.0, 0.0)).expect("accepted");
        assert_eq!(rec.element, ITEM);
        assert_eq!(b.state(), DragState::Over);
        assert_eq!(
            b.drag_leave(&src, &at(0.0, 0.0)),
            Some(StateChange {
                from: DragState::Over,
                to: DragState::Idle
            })
        );
        b.drag_enter(&src, &at(0.0, 0.0));
        b.target_drop(&src, &at(0.0, 0.0));
        assert_eq!(b.state(), DragState::Idle);
        // Target drops do not touch the source-side preview state.
        b.drag_start(&mut h, at(110.0, 60.0));
        b.target_drop(&src, &at(0.0, 0.0));
        assert!(b.pointer().is_some());
    }

    #[test]
    fn can_drop_false_blocks_enter() {
        let (mut b, _guard) = mounted(DraggableOptions::<u32>::new().can_drop(|args| args.source.element != 42));
        let src = DragSource {
            element: 42,
            drag_handle: None,
            data: (),
        };
        assert!(b.drag_enter(&src, &at(0.0, 0.0)).is_none());
        assert_eq!(b.state(), DragState::Idle);
    }

    #[test]
    fn self_drag_leave_goes_idle_by_default() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        let src = b.drag_start(&mut h, at(110.0, 60.0)).expect("drag starts");
        b.drag_enter(&src, &at(110.0, 60.0));
        assert_eq!(b.state(), DragState::Over);
        b.drag_leave(&src, &at(400.0, 60.0));
        assert_eq!(b.state(), DragState::Idle);
        // The next move restores dragging (last write wins).
        b.drag(&mut h, at(401.0, 60.0));
        assert_eq!(b.state(), DragState::Dragging);
    }

    #[test]
    fn resume_dragging_policy_on_self_leave() {
        let mut h = host();
        let (mut b, _guard) =
            mounted(DraggableOptions::new().leave_policy(LeavePolicy::ResumeDragging));
        let src = b.drag_start(&mut h, at(110.0, 60.0)).expect("drag starts");
        b.drag_enter(&src, &at(110.0, 60.0));
        b.drag_leave(&src, &at(400.0, 60.0));
        assert_eq!(b.state(), DragState::Dragging);

        // Without an own drag in progress the policy still falls back to idle.
        b.drop(&mut h);
        let other = DragSource {
            element: 9,
            drag_handle: None,
            data: (),
        };
        b.drag_enter(&other, &at(0.0, 0.0));
        b.drag_leave(&other, &at(0.0, 0.0));
        assert_eq!(b.state(), DragState::Idle);
    }

    #[test]
    fn on_drag_leave_passthrough() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let (mut b, _guard) = mounted(
            DraggableOptions::<u32>::new()
                .on_drag_leave(move |args| sink.borrow_mut().push(args.source.element)),
        );
        let src = DragSource {
            element: 3,
            drag_handle: None,
            data: (),
        };
        b.drag_enter(&src, &at(0.0, 0.0));
        b.drag_leave(&src, &at(0.0, 0.0));
        assert_eq!(*seen.borrow(), alloc::vec![3]);
    }

    #[test]
    fn cleanup_detaches_both_behaviours() {
        let mut h = host();
        let (mut b, guard) = mounted(DraggableOptions::new());
        assert!(b.is_attached());
        guard.run();
        assert!(!b.is_attached());
        assert!(b.drag_start(&mut h, at(110.0, 60.0)).is_none());
        let src = DragSource {
            element: 3,
            drag_handle: None,
            data: (),
        };
        assert!(b.drag_enter(&src, &at(0.0, 0.0)).is_none());
        assert_eq!(b.state(), DragState::Idle);
    }

    #[test]
    fn remount_ignores_stale_guard() {
        let (mut b, old) = mounted(DraggableOptions::new());
        let _new = b.mount(Some(5)).expect("element present");
        drop(old);
        assert!(b.is_attached());
        assert_eq!(b.element(), Some(&5));
    }

    #[test]
    fn repeated_moves_report_no_change() {
        let mut h = host();
        let (mut b, _guard) = mounted(DraggableOptions::new());
        b.drag_start(&mut h, at(110.0, 60.0));
        assert_eq!(b.drag(&mut h, at(111.0, 60.0)), None);
        assert_eq!(b.state(), DragState::Dragging);
    }
}
