// SPDX-License-Identifier: MPL-2.0
//! Default appearance tokens for the loading indicators.
//!
//! Every constructor parameter has a documented default drawn from here, so
//! a bare `Default` construction always yields a renderable indicator.

use iced::{Color, Size};

pub mod palette {
    use super::Color;

    /// Default indicator color.
    pub const GREEN: Color = Color::from_rgb(0.2, 0.78, 0.35);

    /// Default track color behind an animated indicator.
    pub const TRACK_GRAY: Color = Color::from_rgb(0.9, 0.9, 0.92);
}

pub mod sizing {
    use super::Size;

    /// Default size of the circular indicators.
    pub const CIRCLE: Size = Size::new(30.0, 30.0);

    /// Default size of the bar indicator.
    pub const BAR: Size = Size::new(200.0, 30.0);
}

pub mod stroke {
    /// Default stroke width of the plain circular indicator.
    pub const CIRCLE: f32 = 3.0;

    /// Default stroke width of the outlined circular indicator's track.
    ///
    /// The animated arc is stroked at half this width.
    pub const CIRCLE_OUTLINE: f32 = 8.0;

    /// Default stroke width of the bar indicator.
    pub const BAR: f32 = 3.0;
}

pub mod trim {
    /// Default portion of the circle rendered as the visible arc.
    pub const END_FRACTION: f32 = 0.8;
}

const _: () = {
    assert!(sizing::CIRCLE.width > 0.0 && sizing::CIRCLE.height > 0.0);
    assert!(sizing::BAR.width > 0.0 && sizing::BAR.height > 0.0);
    assert!(stroke::CIRCLE >= 0.0);
    assert!(stroke::CIRCLE_OUTLINE >= 0.0);
    assert!(stroke::BAR >= 0.0);
    assert!(trim::END_FRACTION >= 0.0 && trim::END_FRACTION <= 1.0);
};
