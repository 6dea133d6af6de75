// SPDX-License-Identifier: MPL-2.0
//! Spinning trimmed-arc circle indicator.

use crate::animation::{self, Message, ROTATION_STEP_DEGREES, ROTATION_TICK};
use crate::design_tokens::{palette, sizing, stroke, trim};
use crate::indicator::LoadingAnimatable;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt;

/// Circular loading indicator.
///
/// Renders an arc covering a configurable fraction of a full circle and
/// rotates it by a fixed step on every tick while animating. Stopping the
/// animation freezes the arc at its current angle; ticks keep arriving but
/// leave the state untouched.
pub struct CircleLoading {
    is_animating: bool,
    color: Color,
    size: Size,
    trim_end_fraction: f32,
    stroke_line_width: f32,
    /// Current rotation. Unbounded; the renderer interprets it modulo 360°.
    rotation_degrees: f32,
    cache: Cache,
}

impl Default for CircleLoading {
    fn default() -> Self {
        Self {
            is_animating: true,
            color: palette::GREEN,
            size: sizing::CIRCLE,
            trim_end_fraction: trim::END_FRACTION,
            stroke_line_width: stroke::CIRCLE,
            rotation_degrees: 0.0,
            cache: Cache::default(),
        }
    }
}

impl fmt::Debug for CircleLoading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleLoading")
            .field("is_animating", &self.is_animating)
            .field("rotation_degrees", &self.rotation_degrees)
            .finish()
    }
}

impl CircleLoading {
    /// Creates an indicator with the default configuration: animating,
    /// green, 30×30, trim fraction 0.8, stroke width 3.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the indicator starts out animating.
    #[must_use]
    pub fn with_animating(mut self, is_animating: bool) -> Self {
        self.is_animating = is_animating;
        self
    }

    /// Sets the arc color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.cache.clear();
        self
    }

    /// Sets the rendered size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self.cache.clear();
        self
    }

    /// Sets the portion of the circle covered by the arc.
    ///
    /// Expected in `[0, 1]`; out-of-range values are passed to the renderer
    /// as-is and produce a degenerate but harmless arc.
    #[must_use]
    pub fn with_trim_end_fraction(mut self, fraction: f32) -> Self {
        self.trim_end_fraction = fraction;
        self.cache.clear();
        self
    }

    /// Sets the stroke width of the arc.
    #[must_use]
    pub fn with_stroke_line_width(mut self, width: f32) -> Self {
        self.stroke_line_width = width;
        self.cache.clear();
        self
    }

    /// Starts or stops the animation; takes effect on the next tick.
    pub fn set_animating(&mut self, is_animating: bool) {
        self.is_animating = is_animating;
    }

    /// Current rotation in degrees (unbounded).
    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Handles an animation driver event.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                if self.is_animating {
                    self.rotation_degrees += ROTATION_STEP_DEGREES;
                    self.cache.clear();
                }
            }
            Message::Frame => {}
        }
    }

    /// The rotation tick, firing every 100 ms for the indicator's whole
    /// mounted lifetime. Ticks keep arriving while frozen; `update` ignores
    /// them.
    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(ROTATION_TICK).map(|_| Message::Tick)
    }

    /// Renders the indicator as a fixed-size canvas.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fixed(self.size.width))
            .height(Length::Fixed(self.size.height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for CircleLoading {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius =
                    frame.width().min(frame.height()) / 2.0 - self.stroke_line_width / 2.0;

                let start_angle = self.rotation_degrees.to_radians() - FRAC_PI_2;
                let arc = arc_path(
                    center,
                    radius,
                    start_angle,
                    self.trim_end_fraction * TAU,
                );

                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(self.stroke_line_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

impl LoadingAnimatable for CircleLoading {
    fn is_animating(&self) -> bool {
        self.is_animating
    }

    fn color(&self) -> Color {
        self.color
    }

    fn size(&self) -> Size {
        self.size
    }

    fn stroke_line_width(&self) -> f32 {
        self.stroke_line_width
    }

    fn view(&self) -> Element<'_, animation::Message> {
        CircleLoading::view(self)
    }

    fn subscription(&self) -> Subscription<animation::Message> {
        CircleLoading::subscription(self)
    }
}

/// Builds an arc of `sweep` radians starting at `start_angle`, approximated
/// with short line segments for a smooth stroked appearance.
pub(crate) fn arc_path(center: Point, radius: f32, start_angle: f32, sweep: f32) -> Path {
    let mut builder = canvas::path::Builder::new();

    builder.move_to(Point::new(
        center.x + radius * start_angle.cos(),
        center.y + radius * start_angle.sin(),
    ));

    let segments = 48;
    #[allow(clippy::cast_precision_loss)]
    for i in 1..=segments {
        let angle = start_angle + sweep * (i as f32 / segments as f32);
        builder.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let circle = CircleLoading::new();
        assert!(circle.is_animating);
        assert_eq!(circle.color, palette::GREEN);
        assert_eq!(circle.size, Size::new(30.0, 30.0));
        assert_eq!(circle.trim_end_fraction, 0.8);
        assert_eq!(circle.stroke_line_width, 3.0);
        assert_eq!(circle.rotation_degrees(), 0.0);
    }

    #[test]
    fn tick_advances_rotation_by_fixed_step() {
        let mut circle = CircleLoading::new();
        circle.update(Message::Tick);
        assert_eq!(circle.rotation_degrees(), 36.0);
    }

    #[test]
    fn ten_ticks_complete_one_revolution() {
        let mut circle = CircleLoading::new();
        for _ in 0..10 {
            circle.update(Message::Tick);
        }
        assert_eq!(circle.rotation_degrees(), 360.0);
        assert_eq!(circle.rotation_degrees() % 360.0, 0.0);
    }

    #[test]
    fn ticks_are_ignored_while_idle() {
        let mut circle = CircleLoading::new().with_animating(false);
        for _ in 0..25 {
            circle.update(Message::Tick);
        }
        assert_eq!(circle.rotation_degrees(), 0.0);
    }

    #[test]
    fn stopping_freezes_at_current_angle() {
        let mut circle = CircleLoading::new();
        circle.update(Message::Tick);
        circle.update(Message::Tick);
        circle.set_animating(false);

        for _ in 0..10 {
            circle.update(Message::Tick);
        }
        assert_eq!(circle.rotation_degrees(), 72.0);
    }

    #[test]
    fn frame_events_do_not_touch_rotation() {
        let mut circle = CircleLoading::new();
        circle.update(Message::Frame);
        assert_eq!(circle.rotation_degrees(), 0.0);
    }
}
