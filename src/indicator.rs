// SPDX-License-Identifier: MPL-2.0
//! Shared contract implemented by every loading indicator.

use crate::animation::Message;
use iced::{Color, Element, Size, Subscription};

/// Common surface of the three loading indicators.
///
/// Besides the shared configuration accessors, the trait carries the two
/// capabilities a host application needs to mount an indicator: a render
/// pass ([`view`](Self::view)) and the periodic animation driver
/// ([`subscription`](Self::subscription)). This allows heterogeneous
/// collections of indicators behind `&dyn LoadingAnimatable`.
pub trait LoadingAnimatable {
    /// Whether the indicator is currently animating.
    fn is_animating(&self) -> bool;

    /// Indicator color.
    fn color(&self) -> Color;

    /// Rendered size.
    fn size(&self) -> Size;

    /// Stroke width of the indicator shape.
    fn stroke_line_width(&self) -> f32;

    /// Renders the indicator.
    fn view(&self) -> Element<'_, Message>;

    /// The periodic tick source driving the animation.
    ///
    /// Active for the indicator's whole mounted lifetime; the Iced runtime
    /// releases it when the owning view stops returning it.
    fn subscription(&self) -> Subscription<Message>;
}
