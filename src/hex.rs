use std::fmt;

const NIBBLES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Value of a single hex digit, either case.
///
/// Bytes outside `[0-9a-fA-F]` decode to 0; callers validate first.
pub(crate) fn nibble(c: u8) -> u8 {
    NIBBLES[c as usize]
}

/// Channel byte from a pair of hex digits.
pub(crate) fn channel(high: u8, low: u8) -> u8 {
    nibble(high) * 16 + nibble(low)
}

/// The family of hex notations a parser accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `#RGB` or `#RRGGBB`
    Rgb,
    /// `#RGBA` or `#RRGGBBAA`
    Rgba,
}

impl Shape {
    /// Digit counts after the `#`, short form first.
    pub fn digit_counts(self) -> (usize, usize) {
        match self {
            Shape::Rgb => (3, 6),
            Shape::Rgba => (4, 8),
        }
    }

    /// The accepted notations, short form first.
    pub fn patterns(self) -> (&'static str, &'static str) {
        match self {
            Shape::Rgb => ("#RGB", "#RRGGBB"),
            Shape::Rgba => ("#RGBA", "#RRGGBBAA"),
        }
    }

    pub fn short_pattern(self) -> &'static str {
        self.patterns().0
    }

    pub fn long_pattern(self) -> &'static str {
        self.patterns().1
    }

    /// Whether `input` is exactly `#` followed by the short or long number of
    /// hex digits for this shape.
    pub fn matches(self, input: &str) -> bool {
        let Some(digits) = input.as_bytes().strip_prefix(b"#") else {
            return false;
        };
        let (short, long) = self.digit_counts();

        (digits.len() == short || digits.len() == long)
            && digits.iter().all(u8::is_ascii_hexdigit)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Rgb => "RGB",
            Shape::Rgba => "RGBA",
        })
    }
}
