use crate::error::{Error, Result};

/// Complete description of a bitmap font, as consumed by the `.fnt` encoder.
///
/// This mirrors the layout of the JSON documents emitted by common BMFont
/// generators. Only [`Glyph::chnl`] has a default; every other field is
/// required when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
pub struct FontDescription {
    /// How the font was rendered.
    pub info: Info,
    /// Metrics and texture properties shared by all glyphs.
    pub common: Common,
    /// File names of the texture pages, in page index order.
    pub pages: Vec<String>,
    /// Glyph records, written out in this order.
    pub chars: Vec<Glyph>,
    /// Kerning pairs. No kerning block is written when this is empty.
    #[cfg_attr(feature = "serde-deserialize", serde(default))]
    pub kernings: Vec<Kerning>,
}

/// Rendering parameters of the source face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(any(feature = "serde-serialize", feature = "serde-deserialize"), serde(rename_all = "camelCase"))]
pub struct Info {
    /// Name of the true type font. Must not contain NUL bytes.
    pub face: String,
    /// Point size; negative values denote character-height matching.
    pub size: i16,
    /// Whether smoothing was turned on.
    #[cfg_attr(feature = "serde-deserialize", serde(deserialize_with = "flag::deserialize"))]
    pub smooth: bool,
    /// Whether the charset is unicode.
    #[cfg_attr(feature = "serde-deserialize", serde(deserialize_with = "flag::deserialize"))]
    pub unicode: bool,
    /// Font height stretch in percent; 100 means no stretch.
    pub stretch_h: u16,
    /// Supersampling level, 1 means none.
    pub aa: u8,
    /// Padding around each glyph: up, right, down, left.
    pub padding: [u8; 4],
    /// Spacing between glyphs: horizontal, vertical.
    pub spacing: [u8; 2],
    /// Outline thickness.
    pub outline: u8,
}

/// Properties common to every glyph in the font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
#[cfg_attr(any(feature = "serde-serialize", feature = "serde-deserialize"), serde(rename_all = "camelCase"))]
pub struct Common {
    /// Distance in pixels between consecutive lines of text.
    pub line_height: u16,
    /// Distance from the top of a line to the glyph baseline.
    pub base: u16,
    /// Width of the texture pages.
    pub scale_w: u16,
    /// Height of the texture pages.
    pub scale_h: u16,
    /// Whether monochrome glyphs are packed into each channel.
    #[cfg_attr(feature = "serde-deserialize", serde(deserialize_with = "flag::deserialize"))]
    pub packed: bool,
    /// Alpha channel content: 0 glyph, 1 outline, 2 both, 3 zero, 4 one.
    pub alpha_chnl: u8,
    /// Red channel content, encoded as for `alpha_chnl`.
    pub red_chnl: u8,
    /// Green channel content, encoded as for `alpha_chnl`.
    pub green_chnl: u8,
    /// Blue channel content, encoded as for `alpha_chnl`.
    pub blue_chnl: u8,
}

/// Location and layout metrics of one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
pub struct Glyph {
    /// Character id, usually a unicode codepoint.
    pub id: u32,
    /// Left edge of the glyph in its texture page.
    pub x: u16,
    /// Top edge of the glyph in its texture page.
    pub y: u16,
    /// Width of the glyph image.
    pub width: u16,
    /// Height of the glyph image.
    pub height: u16,
    /// Horizontal offset applied when copying the image to the screen.
    pub xoffset: i16,
    /// Vertical offset applied when copying the image to the screen.
    pub yoffset: i16,
    /// How far to advance the pen after drawing this glyph.
    pub xadvance: i16,
    /// Index of the texture page holding the glyph image.
    pub page: u8,
    /// Channel mask (1 blue, 2 green, 4 red, 8 alpha, 15 all).
    #[cfg_attr(feature = "serde-deserialize", serde(default))]
    #[cfg_attr(feature = "serde-serialize", serde(skip_serializing_if = "Option::is_none"))]
    pub chnl: Option<u8>,
}

impl Glyph {
    /// Channel mask as written to the file; unspecified masks mean blue only.
    #[must_use]
    pub fn channel(&self) -> u8 {
        self.chnl.unwrap_or(1)
    }
}

/// Horizontal adjustment applied between two specific characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-deserialize", derive(serde::Deserialize))]
pub struct Kerning {
    /// Id of the left character.
    pub first: u32,
    /// Id of the right character.
    pub second: u32,
    /// Adjustment to the advance of `first` when followed by `second`.
    pub amount: i16,
}

impl FontDescription {
    /// Checks everything the binary format cannot represent that the types
    /// alone do not rule out.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_cstr("info.face", &self.info.face)?;

        if u16::try_from(self.pages.len()).is_err() {
            return Err(Error::validation(
                "pages",
                format!("{} pages exceed the limit of {}", self.pages.len(), u16::MAX),
            ));
        }

        for (index, page) in self.pages.iter().enumerate() {
            check_cstr(&format!("pages[{index}]"), page)?;
        }

        Ok(())
    }
}

fn check_cstr(field: &str, value: &str) -> Result<()> {
    match value.bytes().position(|b| b == 0) {
        Some(pos) => Err(Error::validation(field, format!("embedded NUL byte at {pos}"))),
        None => Ok(()),
    }
}

/// Flags are `true`/`false` in hand-written descriptions but `0`/`1` in
/// most generated ones.
#[cfg(feature = "serde-deserialize")]
mod flag {
    use core::fmt;

    use serde::de::{self, Deserializer, Visitor};

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean or the integer 0 or 1")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }
}
