use bytemuck::{Pod, Zeroable};

/// An RGBA fill colour.
///
/// Channels are `f32`s in the range `[0.0, 1.0]` and are not premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Fill used for every shadow patch: black at 20% opacity.
pub const SHADOW_FILL: Color = Color::new(0.0, 0.0, 0.0, 0.2);

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from red, green, blue and alpha channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque `Color`.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a `Color` from 8-bit channels.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Quantizes the colour to 8-bit channels, clamping out-of-range values.
    #[inline]
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let quantize = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Returns the same colour with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Composites `self` over `dst` with the source-over operator.
    pub fn over(self, dst: Color) -> Color {
        let out_a = self.a + dst.a * (1.0 - self.a);
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let mix = |src: f32, dst_channel: f32| {
            (src * self.a + dst_channel * dst.a * (1.0 - self.a)) / out_a
        };
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: out_a,
        }
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_rgba_u8()
    }
}
