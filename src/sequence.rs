//! SGR and OSC escape-sequence builders.
//!
//! Pure string builders; nothing in this module touches the terminal
//! or the enable flag.

use crate::palette::{Palette, Rgb};

/// The ASCII escape character (decimal 27).
pub const ESC: &str = "\u{1b}";

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\u{1b}[";

/// SGR parameter code: reset all attributes.
pub const CLEAR: u8 = 0;
/// SGR parameter code: bold weight.
pub const BOLD: u8 = 1;
/// SGR parameter code: faint weight.
pub const FAINT: u8 = 2;
/// SGR parameter code: italic.
pub const ITALIC: u8 = 3;
/// SGR parameter code: underline.
pub const UNDERLINED: u8 = 4;
/// SGR parameter code: slow blink.
pub const BLINK: u8 = 5;
/// SGR parameter code: swap foreground and background.
pub const INVERTED: u8 = 7;
/// SGR parameter code: strike-through.
pub const STRIKE_THROUGH: u8 = 9;
/// SGR parameter code: overline.
pub const OVERLINED: u8 = 53;

/// Build a Select Graphic Rendition sequence from raw parameters.
///
/// An empty parameter list yields `ESC [ m`, which terminals treat as
/// a bare reset; that mirrors raw SGR semantics and is intentional.
pub fn sgr(params: &[u8]) -> String {
    let body = params
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("{CSI}{body}m")
}

/// The plain reset sequence, `ESC [ 0 m`.
pub fn reset() -> String {
    sgr(&[CLEAR])
}

/// Wrap `text` in an OSC-8 hyperlink pointing at `uri`.
///
/// Both the opening and closing sequences are BEL-terminated:
/// `ESC ] 8 ; ; uri BEL text ESC ] 8 ; ; BEL`.
pub fn hyperlink(text: &str, uri: &str) -> String {
    format!("{ESC}]8;;{uri}\u{7}{text}{ESC}]8;;\u{7}")
}

/// True-color foreground escape, `38;2;R;G;B`.
pub fn foreground_rgb(color: Rgb) -> String {
    sgr(&[38, 2, color.0, color.1, color.2])
}

/// True-color background escape, `48;2;R;G;B`.
pub fn background_rgb(color: Rgb) -> String {
    sgr(&[48, 2, color.0, color.1, color.2])
}

/// 4-bit color sequence for any combination of set slots; unset
/// slots contribute no parameter.
pub fn color_4bit(fg: Option<Palette>, bg: Option<Palette>) -> String {
    let mut params = Vec::with_capacity(2);
    if let Some(color) = fg {
        params.push(color.code());
    }
    if let Some(color) = bg {
        params.push(color.background_code());
    }
    sgr(&params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_joins_parameters_with_semicolons() {
        assert_eq!(sgr(&[1, 91]), "\u{1b}[1;91m");
        assert_eq!(sgr(&[0]), "\u{1b}[0m");
    }

    #[test]
    fn test_sgr_empty_parameter_list_is_legal() {
        assert_eq!(sgr(&[]), "\u{1b}[m");
    }

    #[test]
    fn test_reset_is_sgr_zero() {
        assert_eq!(reset(), "\u{1b}[0m");
    }

    #[test]
    fn test_hyperlink_wire_shape() {
        assert_eq!(
            hyperlink("T", "U"),
            "\u{1b}]8;;U\u{7}T\u{1b}]8;;\u{7}"
        );
    }

    #[test]
    fn test_true_color_escapes() {
        assert_eq!(foreground_rgb(Rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(background_rgb(Rgb(255, 0, 128)), "\u{1b}[48;2;255;0;128m");
    }

    #[test]
    fn test_color_4bit_skips_unset_slots() {
        assert_eq!(
            color_4bit(Some(Palette::Red), Some(Palette::Black)),
            "\u{1b}[91;40m"
        );
        assert_eq!(color_4bit(None, Some(Palette::Blue)), "\u{1b}[104m");
        assert_eq!(color_4bit(Some(Palette::Green), None), "\u{1b}[92m");
    }
}
