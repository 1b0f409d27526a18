use std::str::FromStr;

use crate::color::Color;
use crate::hex::{Shape, channel};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error(
        "{shape} hex string must match {} or {}, not '{input}'",
        .shape.long_pattern(),
        .shape.short_pattern()
    )]
    InvalidFormat { input: String, shape: Shape },
}

impl ParseError {
    fn invalid(input: &str, shape: Shape) -> Self {
        log::debug!("Rejected {} hex color {:?}", shape, input);
        ParseError::InvalidFormat {
            input: input.to_owned(),
            shape,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidFormat { input, .. } => input,
        }
    }

    /// The short and long notations the failing parser accepts.
    pub fn accepted(&self) -> (&'static str, &'static str) {
        match self {
            ParseError::InvalidFormat { shape, .. } => shape.patterns(),
        }
    }
}

/// Parse `#RGB` or `#RRGGBB` into an opaque color. Either letter case is accepted.
pub fn parse_rgb(input: &str) -> Result<Color, ParseError> {
    if !Shape::Rgb.matches(input) {
        return Err(ParseError::invalid(input, Shape::Rgb));
    }

    // Pad with a fully opaque alpha of the same width
    let opaque = if input.len() == 4 { "F" } else { "FF" };
    parse_rgba(&format!("{input}{opaque}"))
}

/// Parse `#RGBA` or `#RRGGBBAA`, where the last digit(s) are the alpha channel.
pub fn parse_rgba(input: &str) -> Result<Color, ParseError> {
    if !Shape::Rgba.matches(input) {
        return Err(ParseError::invalid(input, Shape::Rgba));
    }

    let d = input.as_bytes();
    let color = if d.len() == 5 {
        // #RGBA, each digit duplicated
        Color::rgba(
            channel(d[1], d[1]),
            channel(d[2], d[2]),
            channel(d[3], d[3]),
            channel(d[4], d[4]),
        )
    } else {
        // #RRGGBBAA
        Color::rgba(
            channel(d[1], d[2]),
            channel(d[3], d[4]),
            channel(d[5], d[6]),
            channel(d[7], d[8]),
        )
    };

    log::trace!("Parsed {:?} as {:?}", input, color);
    Ok(color)
}

impl Color {
    /// Parse any of `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        hex.parse()
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Shape::Rgb.matches(s) {
            parse_rgb(s)
        } else {
            parse_rgba(s)
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_short_duplicates_digits() {
        assert_eq!(parse_rgb("#abc"), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_rgb("#F0a"), Ok(Color::rgb(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn rgb_full_form() {
        assert_eq!(parse_rgb("#fedcba"), Ok(Color::rgb(0xfe, 0xdc, 0xba)));
        assert_eq!(parse_rgb("#000000"), Ok(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn rgba_short_and_full_form() {
        assert_eq!(parse_rgba("#fFfF"), Ok(Color::rgba(0xff, 0xff, 0xff, 0xff)));
        assert_eq!(parse_rgba("#1234"), Ok(Color::rgba(0x11, 0x22, 0x33, 0x44)));
        assert_eq!(
            parse_rgba("#12345678"),
            Ok(Color::rgba(0x12, 0x34, 0x56, 0x78))
        );
    }

    #[test]
    fn rgb_error_names_rgb_shapes() {
        let err = parse_rgb("#abcd").unwrap_err();
        assert_eq!(err.input(), "#abcd");
        assert_eq!(err.accepted(), ("#RGB", "#RRGGBB"));
        assert_eq!(
            err.to_string(),
            "RGB hex string must match #RRGGBB or #RGB, not '#abcd'"
        );
    }

    #[test]
    fn rgba_error_names_rgba_shapes() {
        let err = parse_rgba("#abc").unwrap_err();
        assert_eq!(err.input(), "#abc");
        assert_eq!(err.accepted(), ("#RGBA", "#RRGGBBAA"));
        assert_eq!(
            err.to_string(),
            "RGBA hex string must match #RRGGBBAA or #RGBA, not '#abc'"
        );
    }

    #[test]
    fn from_str_accepts_every_shape() {
        assert_eq!("#abc".parse(), Ok(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!("#abcd".parse(), Ok(Color::rgba(0xaa, 0xbb, 0xcc, 0xdd)));
        assert_eq!(Color::from_hex("#a1b2c3"), Ok(Color::rgb(0xa1, 0xb2, 0xc3)));
        assert_eq!(
            Color::try_from("#a1b2c3d4"),
            Ok(Color::rgba(0xa1, 0xb2, 0xc3, 0xd4))
        );
    }

    #[test]
    fn from_str_reports_rgba_shapes_on_failure() {
        let err = "#12345".parse::<Color>().unwrap_err();
        assert_eq!(err.accepted(), ("#RGBA", "#RRGGBBAA"));
    }
}
