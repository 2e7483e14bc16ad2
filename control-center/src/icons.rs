//! Icon sets
//!
//! Components only ever ask an [`IconRenderer`] for a tag at a size and
//! color; the concrete glyphs live here.

use control_center_sdk::IconTag;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// How much room an icon gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Inline with text
    Small,
    /// Padded, as on a card header
    Medium,
    /// Boxed, as on the landing page
    Large,
}

pub trait IconRenderer {
    /// Raw glyph for a tag
    fn glyph(&self, tag: IconTag) -> &'static str;

    fn render_icon(&self, tag: IconTag, size: IconSize, color: Color) -> Span<'static> {
        let glyph = self.glyph(tag);
        let style = Style::default().fg(color);
        match size {
            IconSize::Small => Span::styled(glyph, style),
            IconSize::Medium => Span::styled(format!(" {} ", glyph), style.add_modifier(Modifier::BOLD)),
            IconSize::Large => Span::styled(format!("[ {} ]", glyph), style.add_modifier(Modifier::BOLD)),
        }
    }
}

/// Unicode glyphs for terminals with good font coverage
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIcons;

impl IconRenderer for GlyphIcons {
    fn glyph(&self, tag: IconTag) -> &'static str {
        match tag {
            IconTag::Zap => "ϟ",
            IconTag::Video => "▶",
            IconTag::Share => "⇪",
            IconTag::Brain => "◉",
            IconTag::Palette => "◐",
            IconTag::Target => "◎",
            IconTag::Eye => "◈",
            IconTag::Image => "▣",
            IconTag::FileText => "≡",
            IconTag::Instagram => "◘",
            IconTag::Twitter => "✕",
            IconTag::Cpu => "▦",
            IconTag::Branch => "⑂",
            IconTag::Globe => "◍",
            IconTag::Shield => "⛉",
            IconTag::TrendingUp => "↗",
            IconTag::Home => "⌂",
            IconTag::Dashboard => "▤",
            IconTag::User => "☺",
            IconTag::Settings => "⚙",
            IconTag::Sparkles => "✦",
            IconTag::Chart => "▁▃▅",
        }
    }
}

/// Plain ASCII for limited terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconRenderer for AsciiIcons {
    fn glyph(&self, tag: IconTag) -> &'static str {
        match tag {
            IconTag::Zap => "!",
            IconTag::Video => ">",
            IconTag::Share => "^",
            IconTag::Brain => "@",
            IconTag::Palette => "%",
            IconTag::Target => "o",
            IconTag::Eye => "e",
            IconTag::Image => "#",
            IconTag::FileText => "=",
            IconTag::Instagram => "ig",
            IconTag::Twitter => "x",
            IconTag::Cpu => "cpu",
            IconTag::Branch => "y",
            IconTag::Globe => "O",
            IconTag::Shield => "U",
            IconTag::TrendingUp => "/",
            IconTag::Home => "H",
            IconTag::Dashboard => "D",
            IconTag::User => "u",
            IconTag::Settings => "*",
            IconTag::Sparkles => "+",
            IconTag::Chart => "_-^",
        }
    }
}
