//! The style descriptor and its fluent builder surface.
//!
//! A [`Styled`] value carries text plus an orthogonal set of
//! attributes. Every setter consumes and returns the value, so two
//! call sites can never alias one mutable descriptor.

use bitflags::bitflags;

use crate::error::StyleError;
use crate::palette::{Palette, Rgb};

bitflags! {
    /// Independent formatting attributes.
    ///
    /// `UPPER_CASE` and `LOWER_CASE` are mutually exclusive; trying
    /// to hold both fails at the point of addition. `CLEAR` appends a
    /// reset sequence after the styled text and is set by default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Format: u16 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINED = 1 << 3;
        const BLINK = 1 << 4;
        const INVERTED = 1 << 5;
        const STRIKE_THROUGH = 1 << 6;
        const OVERLINED = 1 << 7;
        const UPPER_CASE = 1 << 8;
        const LOWER_CASE = 1 << 9;
        const CLEAR = 1 << 10;
    }
}

const CASE_CONFLICT: Format = Format::UPPER_CASE.union(Format::LOWER_CASE);

/// One slot's color: a palette entry or a true color, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpec {
    Palette(Palette),
    Rgb(Rgb),
}

/// A piece of text plus the formatting to apply to it.
///
/// Descriptors have no identity beyond their attributes: two with
/// equal fields render identically. Consume one with
/// [`render`](Styled::render) or via its `Display` impl.
#[derive(Debug, Clone, PartialEq)]
pub struct Styled {
    pub(crate) text: String,
    pub(crate) format: Format,
    pub(crate) foreground: Option<ColorSpec>,
    pub(crate) background: Option<ColorSpec>,
    pub(crate) opacity: Option<f32>,
    pub(crate) hyperlink: Option<String>,
}

impl Styled {
    /// Wrap plain text with the default flag set (auto-reset on).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: Format::CLEAR,
            foreground: None,
            background: None,
            opacity: None,
            hyperlink: None,
        }
    }

    /// Add formatting flags.
    ///
    /// Fails with [`StyleError::InvalidStyleCombination`] if the
    /// result would hold both case transforms, regardless of which
    /// one was added first.
    pub fn with(mut self, add: Format) -> Result<Self, StyleError> {
        let merged = self.format | add;
        if merged.contains(CASE_CONFLICT) {
            return Err(StyleError::InvalidStyleCombination);
        }
        self.format = merged;
        Ok(self)
    }

    /// Remove formatting flags.
    pub fn without(mut self, remove: Format) -> Self {
        self.format &= !remove;
        self
    }

    // Single-flag additions outside the case pair can never conflict.
    fn put(mut self, add: Format) -> Self {
        self.format |= add;
        self
    }

    pub fn bold(self) -> Self {
        self.put(Format::BOLD)
    }

    pub fn faint(self) -> Self {
        self.put(Format::FAINT)
    }

    pub fn italic(self) -> Self {
        self.put(Format::ITALIC)
    }

    pub fn underlined(self) -> Self {
        self.put(Format::UNDERLINED)
    }

    pub fn blink(self) -> Self {
        self.put(Format::BLINK)
    }

    pub fn inverted(self) -> Self {
        self.put(Format::INVERTED)
    }

    pub fn strike_through(self) -> Self {
        self.put(Format::STRIKE_THROUGH)
    }

    pub fn overlined(self) -> Self {
        self.put(Format::OVERLINED)
    }

    /// Drop the trailing reset that is on by default.
    pub fn no_reset(self) -> Self {
        self.without(Format::CLEAR)
    }

    /// Upper-case the text body before any escape wrapping.
    pub fn upper_case(self) -> Result<Self, StyleError> {
        self.with(Format::UPPER_CASE)
    }

    /// Lower-case the text body before any escape wrapping.
    pub fn lower_case(self) -> Result<Self, StyleError> {
        self.with(Format::LOWER_CASE)
    }

    /// Set a palette foreground, replacing any true-color foreground.
    pub fn fg(mut self, color: Palette) -> Self {
        self.foreground = Some(ColorSpec::Palette(color));
        self
    }

    /// Set a palette background, replacing any true-color background.
    pub fn bg(mut self, color: Palette) -> Self {
        self.background = Some(ColorSpec::Palette(color));
        self
    }

    /// Set a true-color foreground, replacing any palette foreground.
    pub fn fg_rgb(mut self, color: Rgb) -> Self {
        self.foreground = Some(ColorSpec::Rgb(color));
        self
    }

    /// Set a true-color background, replacing any palette background.
    pub fn bg_rgb(mut self, color: Rgb) -> Self {
        self.background = Some(ColorSpec::Rgb(color));
        self
    }

    /// Blend factor applied when both true-color slots are set.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Wrap the rendered text in an OSC-8 hyperlink.
    pub fn link(mut self, uri: impl Into<String>) -> Self {
        self.hyperlink = Some(uri.into());
        self
    }

    /// The unstyled text body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current flag set.
    pub fn format(&self) -> Format {
        self.format
    }
}

/// Entry point for starting a style chain from plain text.
pub trait ToStyled {
    /// Wrap this text in a descriptor with the default flag set.
    fn styled(&self) -> Styled;

    fn bold(&self) -> Styled {
        self.styled().bold()
    }

    fn fg(&self, color: Palette) -> Styled {
        self.styled().fg(color)
    }

    fn bg(&self, color: Palette) -> Styled {
        self.styled().bg(color)
    }

    fn link(&self, uri: &str) -> Styled {
        self.styled().link(uri)
    }
}

impl ToStyled for str {
    fn styled(&self) -> Styled {
        Styled::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flag_set_is_clear() {
        assert_eq!(Styled::new("x").format(), Format::CLEAR);
    }

    #[test]
    fn test_case_conflict_fails_in_both_orders() {
        let upper_first = Styled::new("x").upper_case().unwrap().lower_case();
        assert_eq!(upper_first.unwrap_err(), StyleError::InvalidStyleCombination);

        let lower_first = Styled::new("x").lower_case().unwrap().upper_case();
        assert_eq!(lower_first.unwrap_err(), StyleError::InvalidStyleCombination);
    }

    #[test]
    fn test_with_rejects_combined_case_flags() {
        let err = Styled::new("x")
            .with(Format::UPPER_CASE | Format::LOWER_CASE)
            .unwrap_err();
        assert_eq!(err, StyleError::InvalidStyleCombination);
    }

    #[test]
    fn test_without_removes_flags() {
        let styled = Styled::new("x").bold().no_reset();
        assert_eq!(styled.format(), Format::BOLD);
        assert_eq!(styled.without(Format::BOLD).format(), Format::empty());
    }

    #[test]
    fn test_color_slot_holds_palette_or_rgb_never_both() {
        let styled = Styled::new("x").fg_rgb(Rgb(1, 2, 3)).fg(Palette::Red);
        assert_eq!(styled.foreground, Some(ColorSpec::Palette(Palette::Red)));

        let styled = Styled::new("x").bg(Palette::Blue).bg_rgb(Rgb(9, 9, 9));
        assert_eq!(styled.background, Some(ColorSpec::Rgb(Rgb(9, 9, 9))));
    }

    #[test]
    fn test_equal_attributes_compare_equal() {
        let a = Styled::new("x").bold().fg(Palette::Cyan);
        let b = Styled::new("x").bold().fg(Palette::Cyan);
        assert_eq!(a, b);
    }

    #[test]
    fn test_str_extension_builds_descriptor() {
        let styled = "hello".bold().fg(Palette::Green);
        assert_eq!(styled.text(), "hello");
        assert!(styled.format().contains(Format::BOLD | Format::CLEAR));
    }
}
