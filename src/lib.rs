// SPDX-License-Identifier: MPL-2.0
//! `iced_loading` provides small, declarative loading indicators for the
//! Iced GUI toolkit: a spinning circle, a spinning circle over an outline
//! track, and a horizontal bar with a sweeping segment.
//!
//! Each indicator owns its configuration and a single scalar of animation
//! state, advanced by the periodic tick its [`subscription`] delivers and
//! rendered with the `canvas` widget. Mount one like any other Iced
//! component:
//!
//! ```no_run
//! use iced_loading::{CircleLoading, Message};
//!
//! struct App {
//!     spinner: CircleLoading,
//! }
//!
//! impl App {
//!     fn update(&mut self, message: Message) {
//!         self.spinner.update(message);
//!     }
//!
//!     fn view(&self) -> iced::Element<'_, Message> {
//!         self.spinner.view()
//!     }
//!
//!     fn subscription(&self) -> iced::Subscription<Message> {
//!         self.spinner.subscription()
//!     }
//! }
//! ```
//!
//! [`subscription`]: LoadingAnimatable::subscription

pub mod animation;
pub mod bar;
pub mod circle;
pub mod circle_outline;
pub mod design_tokens;
pub mod indicator;

pub use animation::Message;
pub use bar::BarLoading;
pub use circle::CircleLoading;
pub use circle_outline::CircleOutlineLoading;
pub use indicator::LoadingAnimatable;
