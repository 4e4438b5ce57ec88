//! Field-by-field layout of each block.
//!
//! Each block's payload is described exactly once, in [`Block::write_payload`].
//! The encoder runs it through a [`SizeCounter`](super::writer::SizeCounter)
//! to fill in the length field and through an
//! [`Emitter`](super::writer::Emitter) to produce the bytes, so the two
//! passes cannot disagree.

use super::writer::FieldSink;
use crate::error::Result;
use crate::meta::FontDescription;

/// The tagged sections of a `.fnt` file, in the order they are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Block {
    /// How the font was rendered, plus the face name.
    Info = 1,
    /// Shared metrics and page count.
    Common = 2,
    /// NUL-terminated texture page file names.
    Pages = 3,
    /// One 20-byte record per glyph.
    Chars = 4,
    /// One 10-byte record per kerning pair. Omitted when there are none.
    Kerning = 5,
}

impl Block {
    /// Tag byte preceding the block's length field.
    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Lower-case block name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Block::Info => "info",
            Block::Common => "common",
            Block::Pages => "pages",
            Block::Chars => "chars",
            Block::Kerning => "kerning",
        }
    }

    /// Blocks present in the encoding of `font`, in file order.
    pub fn present_in(font: &FontDescription) -> impl Iterator<Item = Block> {
        let kerning = (!font.kernings.is_empty()).then_some(Block::Kerning);
        [Block::Info, Block::Common, Block::Pages, Block::Chars]
            .into_iter()
            .chain(kerning)
    }

    /// Feeds every payload field of this block to `sink`, in wire order.
    ///
    /// The tag and length field are not part of the payload.
    ///
    /// # Errors
    /// Propagates whatever `sink` reports.
    pub fn write_payload<S: FieldSink + ?Sized>(self, font: &FontDescription, sink: &mut S) -> Result<()> {
        match self {
            Block::Info => {
                let info = &font.info;
                sink.i16(info.size)?;
                sink.u8(info.smooth.into())?;
                sink.u8(info.unicode.into())?;
                sink.u16(info.stretch_h)?;
                sink.u8(info.aa)?;
                for &pad in &info.padding {
                    sink.u8(pad)?;
                }
                for &space in &info.spacing {
                    sink.u8(space)?;
                }
                sink.u8(info.outline)?;
                sink.cstr(&info.face)?;
            }
            Block::Common => {
                let common = &font.common;
                // Checked by FontDescription::validate.
                let pages = u16::try_from(font.pages.len()).unwrap_or(u16::MAX);

                sink.u16(common.line_height)?;
                sink.u16(common.base)?;
                sink.u16(common.scale_w)?;
                sink.u16(common.scale_h)?;
                sink.u16(pages)?;
                sink.u8(common.packed.into())?;
                sink.u8(common.alpha_chnl)?;
                sink.u8(common.red_chnl)?;
                sink.u8(common.green_chnl)?;
                sink.u8(common.blue_chnl)?;
            }
            Block::Pages => {
                for page in &font.pages {
                    sink.cstr(page)?;
                }
            }
            Block::Chars => {
                for glyph in &font.chars {
                    sink.u32(glyph.id)?;
                    sink.u16(glyph.x)?;
                    sink.u16(glyph.y)?;
                    sink.u16(glyph.width)?;
                    sink.u16(glyph.height)?;
                    sink.i16(glyph.xoffset)?;
                    sink.i16(glyph.yoffset)?;
                    sink.i16(glyph.xadvance)?;
                    sink.u8(glyph.page)?;
                    sink.u8(glyph.channel())?;
                }
            }
            Block::Kerning => {
                for pair in &font.kernings {
                    sink.u32(pair.first)?;
                    sink.u32(pair.second)?;
                    sink.i16(pair.amount)?;
                }
            }
        }

        Ok(())
    }
}
