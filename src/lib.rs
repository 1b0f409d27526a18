//! Parsing of `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` hex color strings.
//!
//! ```
//! use hexcolor::{ColorModel, parse_rgb, parse_rgba};
//!
//! let c = parse_rgb("#abc").unwrap();
//! assert_eq!(c.premultiplied(), (0xaaaa, 0xbbbb, 0xcccc, 0xffff));
//!
//! let c = parse_rgba("#12345678").unwrap();
//! assert_eq!((c.r, c.g, c.b, c.a), (0x12, 0x34, 0x56, 0x78));
//! ```

mod color;
mod hex;
mod parse;

pub use color::{Color, ColorModel, Rgba16, widen};
pub use hex::Shape;
pub use parse::{ParseError, parse_rgb, parse_rgba};
