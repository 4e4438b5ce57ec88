//! Encoder for the BMFont binary (`.fnt`) format.
//!
//! Build a [`FontDescription`] in memory, or deserialize one from the JSON
//! emitted by BMFont generators, and turn it into the block-structured
//! binary layout consumed by game engines.
//!
//! # Usage
//! ```
//! use bmfont_binary::{fnt, FontDescription, Glyph};
//!
//! let mut font = FontDescription::default();
//! font.info.face = "Test".to_string();
//! font.pages.push("atlas.tga".to_string());
//! font.chars.push(Glyph { id: 'A' as u32, width: 8, height: 12, xadvance: 9, ..Glyph::default() });
//!
//! let bytes = fnt::encode(&font)?;
//! assert_eq!(&bytes[..4], b"BMF\x03");
//! assert_eq!(bytes.len(), fnt::encoded_len(&font)?);
//! # Ok::<(), bmfont_binary::Error>(())
//! ```
//!
//! ## JSON
//! ```
//! # #[cfg(feature = "serde-deserialize")]
//! # fn test() -> Result<(), Box<dyn std::error::Error>> {
//! // Requires Cargo feature `serde-deserialize` and the `serde_json` crate:
//! let font: bmfont_binary::FontDescription = serde_json::from_str(r#"{
//!     "info": {"face": "Mono", "size": 32, "smooth": 1, "unicode": 1, "stretchH": 100,
//!              "aa": 1, "padding": [0, 0, 0, 0], "spacing": [0, 0], "outline": 0},
//!     "common": {"lineHeight": 32, "base": 26, "scaleW": 512, "scaleH": 512, "packed": 0,
//!                "alphaChnl": 0, "redChnl": 0, "greenChnl": 0, "blueChnl": 0},
//!     "pages": ["mono_0.png"],
//!     "chars": []
//! }"#)?;
//! let bytes = bmfont_binary::fnt::encode(&font)?;
//! # assert_eq!(bytes[4], 1);
//! # Ok(())
//! # }
//! # #[cfg(feature = "serde-deserialize")]
//! # test().unwrap();
//! ```

#![cfg_attr(docs_rs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod error;
pub mod fnt;
mod meta;

pub use error::{Error, Result};
pub use meta::{Common, FontDescription, Glyph, Info, Kerning};

#[cfg(feature = "bin")]
mod cli;

#[cfg(feature = "bin")]
pub use cli::{convert, parse_description, Args, Format};
