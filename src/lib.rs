//! Declarative ANSI styled text.
//!
//! Composes SGR escape sequences from an orthogonal set of style
//! attributes — weight, decoration, case transform, 16-color palette
//! or true color, opacity blending, OSC-8 hyperlinks — and
//! recognizes the same subset back out of captured sequences.
//!
//! ```
//! use ansitint::{Palette, ToStyled};
//!
//! ansitint::set_enabled(true);
//! let line = "Hello".bold().fg(Palette::Red);
//! assert_eq!(line.render(), "\u{1b}[1;91mHello\u{1b}[0m");
//! ```
//!
//! Output is suppressed process-wide when the `NO_COLOR` environment
//! variable is set, or after an explicit [`set_enabled(false)`]
//! call; either way every render returns the plain text unchanged.
//!
//! [`set_enabled(false)`]: set_enabled

pub mod console;
pub mod enabled;
pub mod error;
pub mod palette;
pub mod recognize;
pub mod sequence;
pub mod style;

mod render;

pub use console::ConsoleMode;
pub use enabled::{enabled, set_enabled};
pub use error::StyleError;
pub use palette::{Palette, Rgb};
pub use recognize::{recognize, CsiToken};
pub use style::{ColorSpec, Format, Styled, ToStyled};
