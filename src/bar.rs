// SPDX-License-Identifier: MPL-2.0
//! Horizontal bar indicator with a back-and-forth sweeping segment.

use crate::animation::{
    self, Message, Sweep, BAR_RETRIGGER_TICK, FRAME_TICK, INDICATOR_WIDTH_RATIO,
};
use crate::design_tokens::{palette, sizing, stroke};
use crate::indicator::LoadingAnimatable;
use iced::border::Radius;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Theme};
use std::fmt;

/// Horizontal loading bar.
///
/// A rounded-rectangle track the full configured width, with an indicator
/// segment 30% of that width sweeping back and forth. The coarse tick only
/// re-triggers the sweep and pins its target offset to the far end of the
/// track; the on-screen motion is a continuous eased transition that
/// reverses itself each time a leg completes. Stopping the animation lets
/// the in-flight leg finish, then the segment rests at whichever end it
/// reached.
pub struct BarLoading {
    is_animating: bool,
    color: Color,
    size: Size,
    stroke_line_width: f32,
    outline_bar_color: Color,
    /// Far end of the travel range; 0 until the first animating tick.
    target_offset: f32,
    sweep: Sweep,
    cache: Cache,
}

impl Default for BarLoading {
    fn default() -> Self {
        Self {
            is_animating: true,
            color: palette::GREEN,
            size: sizing::BAR,
            stroke_line_width: stroke::BAR,
            outline_bar_color: palette::TRACK_GRAY,
            target_offset: 0.0,
            sweep: Sweep::default(),
            cache: Cache::default(),
        }
    }
}

impl fmt::Debug for BarLoading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarLoading")
            .field("is_animating", &self.is_animating)
            .field("target_offset", &self.target_offset)
            .field("sweep", &self.sweep)
            .finish()
    }
}

impl BarLoading {
    /// Creates a bar with the default configuration: animating, green on a
    /// gray track, 200×30, stroke width 3.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the bar starts out animating.
    #[must_use]
    pub fn with_animating(mut self, is_animating: bool) -> Self {
        self.is_animating = is_animating;
        self
    }

    /// Sets the indicator segment color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.cache.clear();
        self
    }

    /// Sets the rendered size. The track spans the full width.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self.cache.clear();
        self
    }

    /// Sets the stroke width of track and indicator.
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

    /// Width of the sweeping segment: always 30% of the track width.
    #[must_use]
    pub fn indicator_width(&self) -> f32 {
        self.size.width * INDICATOR_WIDTH_RATIO
    }

    /// Far end of the travel range, set by the first animating tick to
    /// `size.width − indicator_width()`.
    #[must_use]
    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    /// Current on-screen horizontal offset of the segment.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.sweep.fraction() * self.target_offset
    }

    /// Whether a sweep is currently in flight.
    #[must_use]
    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_running()
    }

    /// Handles an animation driver event.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                if self.is_animating {
                    self.target_offset = self.size.width - self.indicator_width();
                    self.sweep.run();
                }
            }
            Message::Frame => {
                self.sweep.advance(FRAME_TICK, self.is_animating);
                self.cache.clear();
            }
        }
    }

    /// The bar's tick sources: the coarse 1 s re-trigger for the whole
    /// mounted lifetime, plus a ~60 FPS redraw tick while a sweep is in
    /// flight.
    pub fn subscription(&self) -> Subscription<Message> {
        let retrigger = iced::time::every(BAR_RETRIGGER_TICK).map(|_| Message::Tick);

        let frames = if self.sweep.is_running() {
            iced::time::every(FRAME_TICK).map(|_| Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([retrigger, frames])
    }

    /// Renders the bar as a fixed-size canvas.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fixed(self.size.width))
            .height(Length::Fixed(self.size.height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for BarLoading {
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
                // Track and indicator are stroke-height pills centered
                // vertically in the canvas.
                let stroke_width = self.stroke_line_width;
                let top = (frame.height() - stroke_width) / 2.0;

                let track = Path::rounded_rectangle(
                    Point::new(0.0, top),
                    Size::new(frame.width(), stroke_width),
                    Radius::from(stroke_width),
                );
                frame.stroke(
                    &track,
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.outline_bar_color),
                );

                let indicator = Path::rounded_rectangle(
                    Point::new(self.offset(), top),
                    Size::new(self.indicator_width(), stroke_width),
                    Radius::from(stroke_width),
                );
                frame.stroke(
                    &indicator,
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color),
                );
            });

        vec![geometry]
    }
}

impl LoadingAnimatable for BarLoading {
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
        BarLoading::view(self)
    }

    fn subscription(&self) -> Subscription<animation::Message> {
        BarLoading::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SWEEP_DURATION;

    /// Feeds enough frame events to cover `duration` of sweep time.
    fn run_frames(bar: &mut BarLoading, duration: std::time::Duration) {
        let frames = duration.as_millis().div_ceil(FRAME_TICK.as_millis());
        for _ in 0..frames {
            bar.update(Message::Frame);
        }
    }

    #[test]
    fn defaults_match_documentation() {
        let bar = BarLoading::new();
        assert!(bar.is_animating);
        assert_eq!(bar.color, palette::GREEN);
        assert_eq!(bar.size, Size::new(200.0, 30.0));
        assert_eq!(bar.stroke_line_width, 3.0);
        assert_eq!(bar.outline_bar_color, palette::TRACK_GRAY);
        assert_eq!(bar.target_offset(), 0.0);
        assert_eq!(bar.offset(), 0.0);
    }

    #[test]
    fn indicator_is_thirty_percent_of_track() {
        for width in [1.0, 30.0, 200.0, 512.0] {
            let bar = BarLoading::new().with_size(Size::new(width, 30.0));
            assert!((bar.indicator_width() - 0.3 * width).abs() < 1e-4);
        }
    }

    #[test]
    fn first_tick_pins_target_to_far_end() {
        let mut bar = BarLoading::new();
        bar.update(Message::Tick);
        assert_eq!(bar.target_offset(), 200.0 - bar.indicator_width());
        assert!((bar.target_offset() - 140.0).abs() < 1e-3);
        assert!(bar.is_sweeping());
    }

    #[test]
    fn idle_bar_ignores_ticks() {
        let mut bar = BarLoading::new().with_animating(false);
        for _ in 0..5 {
            bar.update(Message::Tick);
        }
        assert_eq!(bar.target_offset(), 0.0);
        assert_eq!(bar.offset(), 0.0);
        assert!(!bar.is_sweeping());
    }

    #[test]
    fn sweep_reaches_far_end_and_reverses() {
        let mut bar = BarLoading::new();
        bar.update(Message::Tick);

        // Half a leg in: the segment is mid-track.
        run_frames(&mut bar, SWEEP_DURATION / 2);
        let midway = bar.offset();
        assert!(midway > 0.0 && midway < bar.target_offset());

        // A full leg later the segment is on its way back.
        run_frames(&mut bar, SWEEP_DURATION);
        assert!(bar.is_sweeping());
        assert!(bar.offset() < bar.target_offset());
    }

    #[test]
    fn stopping_lets_current_leg_finish_then_halts() {
        let mut bar = BarLoading::new();
        bar.update(Message::Tick);
        run_frames(&mut bar, SWEEP_DURATION / 4);

        bar.set_animating(false);
        // Subsequent ticks no longer re-trigger anything.
        bar.update(Message::Tick);

        run_frames(&mut bar, SWEEP_DURATION);
        assert!(!bar.is_sweeping());
        // Resting exactly at an end of the travel range.
        let at_origin = bar.offset() == 0.0;
        let at_far_end = (bar.offset() - bar.target_offset()).abs() < 1e-4;
        assert!(at_origin || at_far_end);

        let resting = bar.offset();
        run_frames(&mut bar, SWEEP_DURATION);
        assert_eq!(bar.offset(), resting);
    }
}
