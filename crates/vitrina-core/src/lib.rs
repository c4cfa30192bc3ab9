//! Core types and traits for the Vitrina widget catalog.
//!
//! This crate provides the foundational types every widget builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] lifecycle trait and [`Canvas`] paint abstraction
//! - [`RecordingCanvas`] for asserting on paint output in tests

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_constrain_is_idempotent(
            min_w in 0.0f32..100.0,
            max_w in 100.0f32..500.0,
            min_h in 0.0f32..100.0,
            max_h in 100.0f32..500.0,
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
        ) {
            let constraints = Constraints::new(min_w, max_w, min_h, max_h);
            let once = constraints.constrain(Size::new(w, h));
            let twice = constraints.constrain(once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_constrained_size_within_bounds(
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
        ) {
            let constraints = Constraints::new(10.0, 200.0, 20.0, 300.0);
            let size = constraints.constrain(Size::new(w, h));
            prop_assert!(size.width >= 10.0 && size.width <= 200.0);
            prop_assert!(size.height >= 20.0 && size.height <= 300.0);
        }

        #[test]
        fn prop_contrast_ratio_in_wcag_range(
            r1 in 0.0f32..1.0, g1 in 0.0f32..1.0, b1 in 0.0f32..1.0,
            r2 in 0.0f32..1.0, g2 in 0.0f32..1.0, b2 in 0.0f32..1.0,
        ) {
            let a = Color::rgb(r1, g1, b1);
            let b = Color::rgb(r2, g2, b2);
            let ratio = a.contrast_ratio(&b);
            prop_assert!((1.0..=21.01).contains(&ratio));
        }

        #[test]
        fn prop_hex_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let color = Color::from_hex(&hex).unwrap();
            prop_assert_eq!(color.to_hex(), hex);
        }
    }
}
