//! Turning a style descriptor into its final escaped string.

use std::fmt;

use crate::enabled;
use crate::sequence;
use crate::style::{ColorSpec, Format, Styled};

/// SGR emission order for the flag attributes. The order is a fixed
/// data table, never bitflags iteration order, so output bytes are
/// reproducible.
const FLAG_CODES: [(Format, u8); 8] = [
    (Format::BOLD, sequence::BOLD),
    (Format::FAINT, sequence::FAINT),
    (Format::ITALIC, sequence::ITALIC),
    (Format::UNDERLINED, sequence::UNDERLINED),
    (Format::OVERLINED, sequence::OVERLINED),
    (Format::BLINK, sequence::BLINK),
    (Format::INVERTED, sequence::INVERTED),
    (Format::STRIKE_THROUGH, sequence::STRIKE_THROUGH),
];

impl Styled {
    /// Render to the final decorated string.
    ///
    /// Reads the engine-wide enable flag once per call; when it is
    /// off, or the descriptor sets nothing at all, the text comes
    /// back untouched with zero escape bytes.
    pub fn render(&self) -> String {
        render_with(self, enabled::enabled())
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub(crate) fn render_with(styled: &Styled, enabled: bool) -> String {
    if !enabled || is_plain(styled) {
        return styled.text.clone();
    }

    let mut result = if styled.format.contains(Format::UPPER_CASE) {
        styled.text.to_uppercase()
    } else if styled.format.contains(Format::LOWER_CASE) {
        styled.text.to_lowercase()
    } else {
        styled.text.clone()
    };

    let mut params: Vec<u8> = Vec::new();
    for (flag, code) in FLAG_CODES {
        if styled.format.contains(flag) {
            params.push(code);
        }
    }
    if let Some(ColorSpec::Palette(color)) = styled.foreground {
        params.push(color.code());
    }
    if let Some(ColorSpec::Palette(color)) = styled.background {
        params.push(color.background_code());
    }
    if !params.is_empty() {
        result = format!("{}{result}", sequence::sgr(&params));
    }

    let fg = match styled.foreground {
        Some(ColorSpec::Rgb(color)) => Some(color),
        _ => None,
    };
    let bg = match styled.background {
        Some(ColorSpec::Rgb(color)) => Some(color),
        _ => None,
    };
    match (fg, bg, styled.opacity) {
        // With opacity set, the background is consumed as the blend
        // source and the result lands in the foreground slot; no
        // separate background escape is emitted on this path.
        (Some(fg), Some(bg), Some(opacity)) => {
            result = format!("{}{result}", sequence::foreground_rgb(bg.blend(fg, opacity)));
        }
        (Some(fg), _, _) => {
            result = format!("{}{result}", sequence::foreground_rgb(fg));
        }
        (None, Some(bg), _) => {
            result = format!("{}{result}", sequence::background_rgb(bg));
        }
        (None, None, _) => {}
    }

    if let Some(uri) = &styled.hyperlink {
        result = sequence::hyperlink(&result, uri);
    }

    if styled.format.contains(Format::CLEAR) {
        result.push_str(&sequence::reset());
    }

    result
}

fn is_plain(styled: &Styled) -> bool {
    styled.format.is_empty()
        && styled.foreground.is_none()
        && styled.background.is_none()
        && styled.hyperlink.is_none()
}
