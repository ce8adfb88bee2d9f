// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style properties written to the floating preview element.
//!
//! The binding never touches the host's style system directly. It emits
//! [`StyleProperty`] values through [`DragHost::set_style`](crate::host::DragHost::set_style),
//! and each property can render itself as a CSS declaration for hosts backed
//! by a DOM.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_drag::style::StyleProperty;
//!
//! let p = StyleProperty::Translate(Vec2::new(12.0, -4.5));
//! assert_eq!(format!("{p}"), "transform: translate(12px, -4.5px)");
//! ```

use core::fmt;

use kurbo::Vec2;

/// A single style property with its value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleProperty {
    /// `position: fixed`; the preview is laid out against the viewport.
    PositionFixed,
    /// `pointer-events: none`; the preview never intercepts input.
    PointerEventsNone,
    /// `will-change: transform`.
    WillChangeTransform,
    /// Stacking order.
    ZIndex(i32),
    /// Top inset, in pixels.
    Top(f64),
    /// Left inset, in pixels.
    Left(f64),
    /// Width, in pixels.
    Width(f64),
    /// Height, in pixels.
    Height(f64),
    /// 2D translation, in pixels.
    Translate(Vec2),
}

impl StyleProperty {
    /// CSS property name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PositionFixed => "position",
            Self::PointerEventsNone => "pointer-events",
            Self::WillChangeTransform => "will-change",
            Self::ZIndex(_) => "z-index",
            Self::Top(_) => "top",
            Self::Left(_) => "left",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::Translate(_) => "transform",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name())?;
        match self {
            Self::PositionFixed => f.write_str("fixed"),
            Self::PointerEventsNone => f.write_str("none"),
            Self::WillChangeTransform => f.write_str("transform"),
            Self::ZIndex(z) => write!(f, "{z}"),
            Self::Top(v) | Self::Left(v) | Self::Width(v) | Self::Height(v) => write!(f, "{v}px"),
            Self::Translate(t) => write!(f, "translate({}px, {}px)", t.x, t.y),
        }
    }
}

/// Fixed styling applied to the preview on every recomputation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PreviewStyle {
    /// Stacking order; the preview should render above other content.
    pub z_index: i32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self { z_index: 1000 }
    }
}

impl PreviewStyle {
    /// Properties that anchor the preview to the viewport's top-left corner
    /// and keep it out of hit testing.
    pub fn properties(&self) -> [StyleProperty; 6] {
        [
            StyleProperty::PositionFixed,
            StyleProperty::PointerEventsNone,
            StyleProperty::WillChangeTransform,
            StyleProperty::ZIndex(self.z_index),
            StyleProperty::Top(0.0),
            StyleProperty::Left(0.0),
        ]
    }
}
