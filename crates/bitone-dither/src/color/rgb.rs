//! 8-bit RGB pixel type
//!
//! Every pixel the dithering engine reads or writes is an [`Rgb`] triple.
//! Signed error arithmetic happens on `[i32; 3]` and is folded back into
//! a pixel with a saturating clamp.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A pixel with three 8-bit channels.
///
/// There is no alpha channel: images are forced to RGB before they reach
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel from channel values.
    ///
    /// # Example
    /// ```
    /// use bitone_dither::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Widen to signed channels for error arithmetic.
    #[inline]
    pub const fn to_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Build a pixel from signed channels, clamping each to 0..=255.
    ///
    /// # Example
    /// ```
    /// use bitone_dither::Rgb;
    /// assert_eq!(Rgb::clamped([-40, 128, 300]), Rgb::new(0, 128, 255));
    /// ```
    #[inline]
    pub fn clamped(channels: [i32; 3]) -> Self {
        Self::new(
            channels[0].clamp(0, 255) as u8,
            channels[1].clamp(0, 255) as u8,
            channels[2].clamp(0, 255) as u8,
        )
    }

    /// Add a signed error to each channel with saturation at 0 and 255.
    #[inline]
    pub fn saturating_add_error(self, error: [i32; 3]) -> Self {
        let [r, g, b] = self.to_i32();
        Self::clamped([r + error[0], g + error[1], b + error[2]])
    }

    /// Signed per-channel difference `self - other`.
    ///
    /// With `self` the clamped input and `other` its quantized color, this
    /// is the quantization error that gets diffused.
    #[inline]
    pub fn error_from(self, other: Rgb) -> [i32; 3] {
        let [r, g, b] = self.to_i32();
        let [or, og, ob] = other.to_i32();
        [r - or, g - og, b - ob]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// The maximum value is `3 * 255²`, which fits comfortably in `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let [dr, dg, db] = self.error_from(other);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is ignored.
    ///
    /// ```
    /// use bitone_dither::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::WHITE);
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(c));
        }

        let d: Vec<u8> = s.bytes().map(hex_value).collect();
        match d.len() {
            // 0xF -> 0xFF
            3 => Ok(Self::new(d[0] * 17, d[1] * 17, d[2] * 17)),
            6 => Ok(Self::new(
                d[0] * 16 + d[1],
                d[2] * 16 + d[3],
                d[4] * 16 + d[5],
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Value of an ASCII hex digit. Callers check `is_ascii_hexdigit` first.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}
