//! [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2) table

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

/// fsType value that forbids embedding outright
const RESTRICTED_LICENSE_EMBEDDING: u16 = 0x0002;

/// fsType bit that allows embedding only as bitmaps
const BITMAP_EMBEDDING_ONLY: u16 = 0x0200;

/// fsSelection bit 5
const BOLD: u16 = 0x0020;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Os2 {
    /// Whether the outlines may be embedded in a document
    pub embeddable: bool,
    pub bold: bool,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    /// Only present from version 2 on, 0 for older tables
    pub cap_height: i16,
}

impl Os2 {
    pub(crate) fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        directory: &TableDirectory,
    ) -> Result<Self, FontParseError> {
        directory.seek(reader, Tag::OS2)?;

        let version = reader.read_u16()?;
        // xAvgCharWidth, usWeightClass, usWidthClass
        reader.skip(3 * 2)?;

        let fs_type = reader.read_u16()?;
        let embeddable =
            fs_type != RESTRICTED_LICENSE_EMBEDDING && fs_type & BITMAP_EMBEDDING_ONLY == 0;

        // sub/superscript and strikeout metrics, sFamilyClass, panose,
        // ulUnicodeRange1-4, achVendID
        reader.skip(11 * 2 + 10 + 4 * 4 + 4)?;
        let fs_selection = reader.read_u16()?;
        let bold = fs_selection & BOLD != 0;

        // usFirstCharIndex, usLastCharIndex
        reader.skip(2 * 2)?;
        let typo_ascender = reader.read_i16()?;
        let typo_descender = reader.read_i16()?;

        let cap_height = if version >= 2 {
            // sTypoLineGap, usWinAscent, usWinDescent, ulCodePageRange1-2, sxHeight
            reader.skip(3 * 2 + 2 * 4 + 2)?;
            reader.read_i16()?
        } else {
            0
        };

        log::debug!(
            "OS/2 version {version}: fsType {fs_type:#06x}, fsSelection {fs_selection:#06x}"
        );
        Ok(Self {
            embeddable,
            bold,
            typo_ascender,
            typo_descender,
            cap_height,
        })
    }
}
