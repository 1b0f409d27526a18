/// Replicate an 8-bit channel into both halves of a 16-bit word (0xff -> 0xffff).
pub const fn widen(v: u8) -> u16 {
    v as u16 * 257
}

/// A color that can report its channels in the 16-bit, alpha-premultiplied
/// form used by standard image color models.
pub trait ColorModel {
    /// Returns red, green, blue and alpha in `[0, 0xffff]`.
    ///
    /// Red, green and blue are premultiplied by alpha, so for an opaque color
    /// each value is simply the widened channel.
    fn premultiplied(&self) -> (u32, u32, u32, u32);
}

/// Non-premultiplied 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }

    /// Every channel widened to 16 bits, alpha left unapplied.
    pub fn to_rgba16(self) -> [u16; 4] {
        [widen(self.r), widen(self.g), widen(self.b), widen(self.a)]
    }
}

impl ColorModel for Color {
    fn premultiplied(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        let premultiply = |c: u8| widen(c) as u32 * a / 0xff;

        (
            premultiply(self.r),
            premultiply(self.g),
            premultiply(self.b),
            widen(self.a) as u32,
        )
    }
}

/// Non-premultiplied 16-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl ColorModel for Rgba16 {
    fn premultiplied(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        let premultiply = |c: u16| c as u32 * a / 0xffff;

        (
            premultiply(self.r),
            premultiply(self.g),
            premultiply(self.b),
            a,
        )
    }
}

impl From<Color> for Rgba16 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba16();
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for (u8, u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b, color.a)
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.into())
    }
}

#[cfg(feature = "image")]
impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        pixel.0.into()
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u16> {
    fn from(color: Color) -> Self {
        image::Rgba(color.to_rgba16())
    }
}
