// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the public indicator surface.

#[cfg(test)]
mod tests {
    use iced::Size;
    use iced_loading::{
        BarLoading, CircleLoading, CircleOutlineLoading, LoadingAnimatable, Message,
    };

    #[test]
    fn all_defaults_match_documented_table() {
        let circle = CircleLoading::new();
        assert!(circle.is_animating());
        assert_eq!(circle.size(), Size::new(30.0, 30.0));
        assert_eq!(circle.stroke_line_width(), 3.0);

        let outline = CircleOutlineLoading::new();
        assert!(outline.is_animating());
        assert_eq!(outline.size(), Size::new(30.0, 30.0));
        assert_eq!(outline.stroke_line_width(), 8.0);

        let bar = BarLoading::new();
        assert!(bar.is_animating());
        assert_eq!(bar.size(), Size::new(200.0, 30.0));
        assert_eq!(bar.stroke_line_width(), 3.0);
    }

    #[test]
    fn circle_variants_share_default_color() {
        let circle = CircleLoading::new();
        let outline = CircleOutlineLoading::new();
        let bar = BarLoading::new();
        assert_eq!(circle.color(), outline.color());
        assert_eq!(circle.color(), bar.color());
    }

    #[test]
    fn one_revolution_takes_ten_ticks() {
        let mut circle = CircleLoading::new();
        let mut outline = CircleOutlineLoading::new();

        for _ in 0..10 {
            circle.update(Message::Tick);
            outline.update(Message::Tick);
        }

        assert_eq!(circle.rotation_degrees() % 360.0, 0.0);
        assert_eq!(outline.rotation_degrees() % 360.0, 0.0);
        assert_eq!(circle.rotation_degrees(), 360.0);
        assert_eq!(outline.rotation_degrees(), 360.0);
    }

    #[test]
    fn idle_indicators_keep_initial_state() {
        let mut circle = CircleLoading::new().with_animating(false);
        let mut bar = BarLoading::new().with_animating(false);

        for _ in 0..100 {
            circle.update(Message::Tick);
            bar.update(Message::Tick);
            bar.update(Message::Frame);
        }

        assert_eq!(circle.rotation_degrees(), 0.0);
        assert_eq!(bar.target_offset(), 0.0);
        assert_eq!(bar.offset(), 0.0);
    }

    #[test]
    fn bar_target_offset_is_seventy_percent_of_width() {
        for width in [50.0, 200.0, 333.0] {
            let mut bar = BarLoading::new().with_size(Size::new(width, 30.0));
            bar.update(Message::Tick);
            assert!((bar.target_offset() - 0.7 * width).abs() < 1e-3);
            assert!((bar.indicator_width() - 0.3 * width).abs() < 1e-3);
        }
    }

    #[test]
    fn mid_sequence_stop_freezes_rotation() {
        let mut circle = CircleLoading::new();
        for _ in 0..3 {
            circle.update(Message::Tick);
        }
        let frozen_at = circle.rotation_degrees();

        circle.set_animating(false);
        for _ in 0..20 {
            circle.update(Message::Tick);
        }
        assert_eq!(circle.rotation_degrees(), frozen_at);

        // Restarting picks up from the frozen angle.
        circle.set_animating(true);
        circle.update(Message::Tick);
        assert_eq!(circle.rotation_degrees(), frozen_at + 36.0);
    }

    #[test]
    fn every_indicator_renders_from_a_shared_reference() {
        let circle = CircleLoading::new();
        let outline = CircleOutlineLoading::new();
        let bar = BarLoading::new();

        let _: iced::Element<'_, Message> = circle.view();
        let _: iced::Element<'_, Message> = outline.view();
        let _: iced::Element<'_, Message> = bar.view();
    }

    #[test]
    fn indicators_compose_behind_the_trait() {
        let circle = CircleLoading::new().with_animating(false);
        let outline = CircleOutlineLoading::new().with_animating(false);
        let bar = BarLoading::new().with_animating(false);

        let indicators: Vec<&dyn LoadingAnimatable> = vec![&circle, &outline, &bar];
        for indicator in &indicators {
            assert!(!indicator.is_animating());
            assert!(indicator.size().width > 0.0);
            assert!(indicator.stroke_line_width() >= 0.0);
            let _ = indicator.view();
            let _ = indicator.subscription();
        }
    }
}
