// SPDX-License-Identifier: MPL-2.0
//! Spinning arc indicator layered over a static full-circle track.

use crate::animation::{self, Message, ROTATION_STEP_DEGREES, ROTATION_TICK};
use crate::circle::arc_path;
use crate::design_tokens::{palette, sizing, stroke, trim};
use crate::indicator::LoadingAnimatable;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Size, Subscription, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt;

/// Circular loading indicator with an outline track.
///
/// Same animation mechanism as [`CircleLoading`](crate::CircleLoading),
/// composited over a static full circle stroked in the track color. The
/// animated arc uses half the configured stroke width so the moving
/// indicator reads as thinner than its track.
pub struct CircleOutlineLoading {
    is_animating: bool,
    color: Color,
    size: Size,
    trim_end_fraction: f32,
    stroke_line_width: f32,
    outline_bar_color: Color,
    /// Current rotation. Unbounded; the renderer interprets it modulo 360°.
    rotation_degrees: f32,
    cache: Cache,
}

impl Default for CircleOutlineLoading {
    fn default() -> Self {
        Self {
            is_animating: true,
            color: palette::GREEN,
            size: sizing::CIRCLE,
            trim_end_fraction: trim::END_FRACTION,
            stroke_line_width: stroke::CIRCLE_OUTLINE,
            outline_bar_color: palette::TRACK_GRAY,
            rotation_degrees: 0.0,
            cache: Cache::default(),
        }
    }
}

impl fmt::Debug for CircleOutlineLoading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleOutlineLoading")
            .field("is_animating", &self.is_animating)
            .field("rotation_degrees", &self.rotation_degrees)
            .finish()
    }
}

impl CircleOutlineLoading {
    /// Creates an indicator with the default configuration: animating,
    /// green on a gray track, 30×30, trim fraction 0.8, stroke width 8.
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
    #[must_use]
    pub fn with_trim_end_fraction(mut self, fraction: f32) -> Self {
        self.trim_end_fraction = fraction;
        self.cache.clear();
        self
    }

    /// Sets the stroke width of the track; the arc uses half of it.
    #[must_use]
    pub fn with_stroke_line_width(mut self, width: f32) -> Self {
        self.stroke_line_width = width;
        self.cache.clear();
        self
    }

    /// Sets the track color.
    #[must_use]
    pub fn with_outline_bar_color(mut self, color: Color) -> Self {
        self.outline_bar_color = color;
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

    /// Track color behind the animated arc.
    #[must_use]
    pub fn track_color(&self) -> Color {
        self.outline_bar_color
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
    /// mounted lifetime.
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

impl<Message> canvas::Program<Message> for CircleOutlineLoading {
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

                // Static track beneath the animated arc.
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default()
                        .with_width(self.stroke_line_width)
                        .with_color(self.outline_bar_color),
                );

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
                        .with_width(self.stroke_line_width / 2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

impl LoadingAnimatable for CircleOutlineLoading {
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
        CircleOutlineLoading::view(self)
    }

    fn subscription(&self) -> Subscription<animation::Message> {
        CircleOutlineLoading::subscription(self)
    }
}
