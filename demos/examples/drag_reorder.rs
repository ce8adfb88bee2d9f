// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two list rows, each both draggable and a drop target.
//!
//! Dragging row A over row B and back shows how the shared state moves
//! between dragging, over, and idle, and how [`LeavePolicy`] changes what a
//! row reports when a drag leaves itself.
//!
//! Run:
//! - `cargo run -p understory_drag_demos --example drag_reorder`

use kurbo::{Point, Rect};
use understory_drag::binding::{DraggableBinding, DraggableOptions};
use understory_drag::host::DragHost;
use understory_drag::style::StyleProperty;
use understory_drag::types::{DragState, Input, LeavePolicy};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Row {
    A,
    B,
}

struct List;

impl DragHost<Row> for List {
    fn bounding_rect(&self, element: &Row) -> Option<Rect> {
        Some(match element {
            Row::A => Rect::new(0.0, 0.0, 300.0, 40.0),
            Row::B => Rect::new(0.0, 40.0, 300.0, 80.0),
        })
    }

    fn set_style(&mut self, _element: &Row, _property: StyleProperty) {}
}

fn row(element: Row, policy: LeavePolicy) -> DraggableBinding<Row, Option<Row>> {
    let options = DraggableOptions::<Row, Option<Row>>::new()
        .leave_policy(policy)
        .get_initial_data(|args| Some(*args.element))
        .get_data(|args| Some(*args.element))
        .on_drag_leave(move |args| println!("  {element:?}: {:?} left", args.source.element));
    let mut binding = DraggableBinding::new(options);
    // Rows live for the whole program; keep them attached.
    if let Some(guard) = binding.mount(Some(element)) {
        guard.forget();
    }
    binding
}

fn run(policy: LeavePolicy) {
    println!("== {policy:?} ==");
    let mut list = List;
    let mut a = row(Row::A, policy);
    let mut b = row(Row::B, policy);
    let at = |y| Input::at(Point::new(150.0, y));

    let source = a.drag_start(&mut list, at(20.0)).expect("drag allowed");
    a.drag_enter(&source, &at(20.0));
    println!("  A over itself: {:?}", a.state());

    a.drag_leave(&source, &at(50.0));
    let offered = b.drag_enter(&source, &at(50.0)).expect("drop allowed");
    println!(
        "  A after leaving itself: {:?}, B: {:?} offering {:?}",
        a.state(),
        b.state(),
        offered.data
    );

    a.drag(&mut list, at(55.0));
    println!("  A after the next move: {:?}", a.state());

    b.target_drop(&source, &at(55.0));
    a.drop(&mut list);
    assert_eq!(a.state(), DragState::Idle);
    assert_eq!(b.state(), DragState::Idle);
    println!("  dropped {:?} on {:?}", source.data, offered.element);
}

fn main() {
    run(LeavePolicy::Idle);
    run(LeavePolicy::ResumeDragging);
}
