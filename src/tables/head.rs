use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader, metadata::BoundingBox};

use super::{TableDirectory, Tag};

/// Magic number, obsolete, always set to 0x5F0F3CF5
pub const MAGIC_NUMBER: u32 = 0x5F0F_3CF5;

/// The fields of the [head table](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6head.html)
/// needed for embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    /// Units per em (ranges from 64 to 16384)
    pub units_per_em: u16,

    /// The union of all glyph bounding boxes
    pub bbox: BoundingBox,
}

impl Head {
    /// Reads the `head` table.
    ///
    /// The layout is fixed, so everything that isn't needed is skipped:
    /// version, fontRevision and checkSumAdjustment before the magic number,
    /// flags before unitsPerEm, and the two 8-byte timestamps before the
    /// bounding box.
    ///
    /// # Errors
    ///
    /// * `TableNotFound` if the font has no `head` table
    /// * `IncorrectMagicNumber` if the magic number isn't 0x5F0F3CF5
    pub(crate) fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        directory: &TableDirectory,
    ) -> Result<Self, FontParseError> {
        directory.seek(reader, Tag::HEAD)?;
        reader.skip(3 * 4)?;

        let magic_number = reader.read_u32()?;
        if magic_number != MAGIC_NUMBER {
            return Err(FontParseError::IncorrectMagicNumber(magic_number));
        }

        reader.skip(2)?;
        let units_per_em = reader.read_u16()?;
        reader.skip(2 * 8)?;

        let bbox = BoundingBox {
            x_min: reader.read_i16()?,
            y_min: reader.read_i16()?,
            x_max: reader.read_i16()?,
            y_max: reader.read_i16()?,
        };

        log::debug!("head: {units_per_em} units per em, bbox {bbox:?}");
        Ok(Self { units_per_em, bbox })
    }
}
