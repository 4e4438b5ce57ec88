//! Encoder for the BMFont binary (`.fnt`) format, version 3.
//!
//! A file is the 4-byte header `BMF\x03` followed by tagged blocks, each
//! made of a tag byte, a little-endian `i32` payload length and the payload.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::meta::FontDescription;

mod schema;
mod writer;

#[cfg(test)]
mod reader;

pub use schema::Block;
pub use writer::{put_bytes, put_cstr, put_i16, put_i32, put_u16, put_u32, put_u8, Emitter, FieldSink, SizeCounter};

/// File signature: `BMF` followed by the format version.
pub const HEADER: [u8; 4] = [b'B', b'M', b'F', 3];

/// Tag byte plus length field.
const BLOCK_HEADER_LEN: usize = 5;

/// Payload sizes of each block, computed before anything is written.
#[derive(Debug)]
struct Layout {
    blocks: Vec<(Block, usize)>,
    total: usize,
}

impl Layout {
    fn of(font: &FontDescription) -> Result<Self> {
        let mut blocks = Vec::with_capacity(5);
        let mut total = HEADER.len();

        for block in Block::present_in(font) {
            let mut counter = SizeCounter::default();
            block.write_payload(font, &mut counter)?;
            let len = counter.len();

            if i32::try_from(len).is_err() {
                return Err(Error::validation(
                    block.name(),
                    format!("{len}-byte block exceeds the format's size limit"),
                ));
            }

            total += BLOCK_HEADER_LEN + len;
            blocks.push((block, len));
        }

        Ok(Layout { blocks, total })
    }
}

/// Number of bytes [`encode`] will produce for `font`.
///
/// # Errors
/// Returns [`Error::Validation`] if `font` cannot be encoded.
pub fn encoded_len(font: &FontDescription) -> Result<usize> {
    font.validate()?;
    Ok(Layout::of(font)?.total)
}

/// Encodes `font` into a freshly allocated buffer of exactly the right size.
///
/// # Errors
/// Returns [`Error::Validation`] for descriptions the format cannot hold.
/// [`Error::BlockLength`], [`Error::SizeMismatch`] and [`Error::Overrun`]
/// indicate that the sizing and writing passes disagreed; no partial output
/// is returned in that case.
pub fn encode(font: &FontDescription) -> Result<Vec<u8>> {
    font.validate()?;
    let layout = Layout::of(font)?;
    debug!("Total buffer size needed: {}", layout.total);

    let mut buf = vec![0u8; layout.total];
    let mut offset = put_bytes(&mut buf, &HEADER, 0)?;

    for &(block, len) in &layout.blocks {
        trace!("{} block (tag {}) at offset {offset}: {len} bytes", block.name(), block.tag());

        // Layout::of rejects lengths beyond i32::MAX.
        let declared = i32::try_from(len).unwrap_or(i32::MAX);
        offset = put_u8(&mut buf, block.tag(), offset)?;
        offset = put_i32(&mut buf, declared, offset)?;

        let mut emitter = Emitter::new(&mut buf, offset);
        block.write_payload(font, &mut emitter)?;
        let written = emitter.offset() - offset;
        if written != len {
            return Err(Error::BlockLength {
                block: block.name(),
                declared: len,
                written,
            });
        }

        offset += written;
    }

    debug!("Final offset: {offset}");
    if offset != buf.len() {
        return Err(Error::SizeMismatch {
            expected: buf.len(),
            written: offset,
        });
    }

    Ok(buf)
}

/// Encodes `font` and stores it at `path`, returning the file size.
///
/// The bytes go to a temporary file next to `path` which is then renamed
/// over it, so `path` either keeps its old contents or holds the complete
/// new file.
///
/// # Errors
/// Any encoding error from [`encode`], or [`Error::Io`] if writing fails.
pub fn write_to_path(font: &FontDescription, path: &Path) -> Result<usize> {
    let bytes = encode(font)?;
    let tmp_path = temporary_sibling(path);

    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if let Err(err) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(bytes.len())
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
