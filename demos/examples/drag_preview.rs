// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a card and watch the floating preview follow the pointer.
//!
//! The host here is a tiny in-memory "DOM": a table of element bounds plus a
//! printed style log. Animation frames are flushed after every event.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_drag_demos --example drag_preview`

use kurbo::{Point, Rect};
use understory_drag::binding::{DraggableBinding, DraggableOptions};
use understory_drag::host::DragHost;
use understory_drag::style::StyleProperty;
use understory_drag::types::{DragState, Input};

const CARD: &str = "card";
const GHOST: &str = "card-preview";

struct Dom {
    bounds: Vec<(&'static str, Rect)>,
    frame_requested: bool,
}

impl DragHost<&'static str> for Dom {
    fn bounding_rect(&self, element: &&'static str) -> Option<Rect> {
        self.bounds
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, r)| *r)
    }

    fn set_style(&mut self, element: &&'static str, property: StyleProperty) {
        println!("  #{element} {{ {property} }}");
    }

    fn suppress_native_preview(&mut self, element: &&'static str) {
        println!("  native drag image suppressed for #{element}");
    }

    fn request_animation_frame(&mut self) {
        self.frame_requested = true;
    }
}

fn frame(dom: &mut Dom, card: &mut DraggableBinding<&'static str, String>) {
    if std::mem::take(&mut dom.frame_requested) {
        card.animation_frame(dom);
    }
}

fn main() {
    env_logger::init();

    let mut dom = Dom {
        bounds: vec![(CARD, Rect::new(40.0, 120.0, 240.0, 180.0))],
        frame_requested: false,
    };

    let options = DraggableOptions::<&'static str, String>::new()
        .can_drag(|args| args.input.buttons & 1 == 1)
        .get_initial_data(|args| format!("payload from #{}", args.element));
    let mut card = DraggableBinding::new(options);
    let _guard = card.mount(Some(CARD));

    let press = |x, y| Input {
        buttons: 1,
        ..Input::at(Point::new(x, y))
    };

    println!("== hover without a button ==");
    let refused = card.drag_start(&mut dom, Input::at(Point::new(60.0, 130.0)));
    assert!(refused.is_none());
    assert_eq!(card.state(), DragState::Idle);

    println!("== drag start ==");
    let source = card
        .drag_start(&mut dom, press(60.0, 130.0))
        .expect("primary button pressed");
    println!("  {}", source.data);
    card.generate_preview(&mut dom);
    println!("  offset {:?}", card.offset());

    println!("== preview mounted ==");
    card.set_preview_element(&mut dom, Some(GHOST));
    frame(&mut dom, &mut card);

    for (x, y) in [(90.0, 150.0), (140.0, 210.0), (220.0, 260.0)] {
        println!("== move to ({x}, {y}) ==");
        card.drag(&mut dom, press(x, y));
        frame(&mut dom, &mut card);
    }

    println!("== drop ==");
    card.drop(&mut dom);
    assert_eq!(card.state(), DragState::Idle);
    assert!(card.preview_element().is_none());
    println!("  state {:?}", card.state());
}
