//! [name table](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6name.html)

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

/// Name identifier of the PostScript name
pub const POSTSCRIPT_NAME_ID: u16 = 6;

/// Characters with a meaning in PostScript or PDF name syntax, never kept
/// in a font name.
const DELIMITERS: &[u8] = b" []{}()<>/%";

/// Finds the PostScript name of the font.
///
/// Only the first record with name id 6 is looked at, whatever its platform.
/// Its bytes are stored as UTF-16BE on Windows and as a single byte encoding
/// on Macintosh; dropping every NUL byte turns both into the same ASCII text
/// for the names that matter here.
///
/// # Errors
///
/// `PostScriptNameNotFound` if there is no such record, or if nothing is
/// left of it once NULs and delimiters are removed.
pub(crate) fn postscript_name<B: Read + Seek>(
    reader: &mut FontReader<B>,
    directory: &TableDirectory,
) -> Result<String, FontParseError> {
    directory.seek(reader, Tag::NAME)?;
    let table_start = reader.position()?;

    // format
    reader.skip(2)?;
    let count = reader.read_u16()?;
    let string_offset = reader.read_u16()?;

    for _ in 0..count {
        // platformID, encodingID, languageID
        reader.skip(3 * 2)?;
        let name_id = reader.read_u16()?;
        let length = reader.read_u16()?;
        let offset = reader.read_u16()?;

        if name_id != POSTSCRIPT_NAME_ID {
            continue;
        }

        reader.seek_to(table_start + u64::from(string_offset) + u64::from(offset))?;
        let raw = reader.read_bytes(usize::from(length))?;
        let name = sanitize(&raw);

        if name.is_empty() {
            log::warn!("PostScript name record of {length} bytes has no usable characters");
            break;
        }

        log::debug!("name: PostScript name {name:?}");
        return Ok(name);
    }

    Err(FontParseError::PostScriptNameNotFound)
}

/// Drops NUL bytes and PostScript delimiters
fn sanitize(raw: &[u8]) -> String {
    let kept = raw
        .iter()
        .copied()
        .filter(|byte| *byte != 0 && !DELIMITERS.contains(byte))
        .collect::<Vec<u8>>();

    String::from_utf8_lossy(&kept).into_owned()
}
