// SPDX-License-Identifier: MPL-2.0
//! Gallery of all three loading indicators with an animation toggle.
//!
//! Run with `cargo run --example gallery`.

use iced::widget::{checkbox, column, container};
use iced::{Color, Element, Length, Subscription, Task};
use iced_loading::{BarLoading, CircleLoading, CircleOutlineLoading};

struct Gallery {
    circle: CircleLoading,
    outline: CircleOutlineLoading,
    bar: BarLoading,
    animating: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Circle(iced_loading::Message),
    Outline(iced_loading::Message),
    Bar(iced_loading::Message),
    ToggleAnimating(bool),
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            circle: CircleLoading::new(),
            outline: CircleOutlineLoading::new().with_color(Color::from_rgb(0.95, 0.6, 0.1)),
            bar: BarLoading::new().with_color(Color::from_rgb(0.9, 0.2, 0.2)),
            animating: true,
        }
    }
}

impl Gallery {
    fn boot() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Circle(message) => self.circle.update(message),
            Message::Outline(message) => self.outline.update(message),
            Message::Bar(message) => self.bar.update(message),
            Message::ToggleAnimating(animating) => {
                self.animating = animating;
                self.circle.set_animating(animating);
                self.outline.set_animating(animating);
                self.bar.set_animating(animating);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.circle.view().map(Message::Circle),
            self.outline.view().map(Message::Outline),
            self.bar.view().map(Message::Bar),
            checkbox(self.animating)
                .label("Animating")
                .on_toggle(Message::ToggleAnimating),
        ]
        .spacing(50)
        .align_x(iced::Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.circle.subscription().map(Message::Circle),
            self.outline.subscription().map(Message::Outline),
            self.bar.subscription().map(Message::Bar),
        ])
    }
}

fn main() -> iced::Result {
    iced::application(Gallery::boot, Gallery::update, Gallery::view)
        .title("iced_loading gallery")
        .subscription(Gallery::subscription)
        .run()
}
