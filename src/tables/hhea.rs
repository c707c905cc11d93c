//! [Horizontal Header](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6hhea.html) table

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hhea {
    /// Number of long metrics at the start of `hmtx`
    pub number_of_h_metrics: u16,
}

impl Hhea {
    pub(crate) fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        directory: &TableDirectory,
    ) -> Result<Self, FontParseError> {
        directory.seek(reader, Tag::HHEA)?;
        // version, then ascent through metricDataFormat
        reader.skip(4 + 15 * 2)?;
        let number_of_h_metrics = reader.read_u16()?;

        log::debug!("hhea: {number_of_h_metrics} long metrics");
        Ok(Self {
            number_of_h_metrics,
        })
    }
}
