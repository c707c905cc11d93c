//! [Maximum Profile](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6maxp.html) table

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maxp {
    pub num_glyphs: u16,
}

impl Maxp {
    pub(crate) fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        directory: &TableDirectory,
    ) -> Result<Self, FontParseError> {
        directory.seek(reader, Tag::MAXP)?;
        // version, both 0.5 and 1.0 tables start the same way
        reader.skip(4)?;
        let num_glyphs = reader.read_u16()?;

        log::debug!("maxp: {num_glyphs} glyphs");
        Ok(Self { num_glyphs })
    }
}
