//! Theme colors

use control_center_sdk::ColorTag;
use ratatui::style::{Color, Modifier, Style};

use crate::app::Theme;

/// Colors shared by every component for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(8, 11, 19),
                surface: Color::Rgb(11, 16, 27),
                border: Color::Rgb(40, 46, 60),
                text: Color::Rgb(241, 245, 249),
                muted: Color::Rgb(120, 128, 145),
                accent: Color::Rgb(37, 99, 235),
                positive: Color::Rgb(74, 222, 128),
                negative: Color::Rgb(248, 113, 113),
            },
            Theme::Light => Self {
                background: Color::Rgb(248, 250, 252),
                surface: Color::Rgb(255, 255, 255),
                border: Color::Rgb(203, 213, 225),
                text: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(37, 99, 235),
                positive: Color::Rgb(22, 163, 74),
                negative: Color::Rgb(220, 38, 38),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

/// Terminal color for a catalog color tag
pub fn tag_color(tag: ColorTag) -> Color {
    let (r, g, b) = tag.rgb();
    Color::Rgb(r, g, b)
}

/// Dim a style while its element is still fading in
pub fn faded(style: Style, opacity: f32) -> Style {
    if opacity < 0.6 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Dark).background,
            Palette::for_theme(Theme::Light).background
        );
    }

    #[test]
    fn test_tag_color_uses_rgb() {
        assert_eq!(tag_color(ColorTag::Emerald), {
            let (r, g, b) = ColorTag::Emerald.rgb();
            Color::Rgb(r, g, b)
        });
    }

    #[test]
    fn test_faded_dims_early_frames() {
        let style = Style::default();
        assert!(faded(style, 0.2).add_modifier.contains(Modifier::DIM));
        assert!(!faded(style, 1.0).add_modifier.contains(Modifier::DIM));
    }
}
