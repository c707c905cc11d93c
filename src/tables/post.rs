//! [PostScript](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6post.html) table

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    /// Integer part of the 16.16 italic angle, in degrees
    pub italic_angle: i16,
    pub underline_position: i16,
    pub underline_thickness: i16,
    pub is_fixed_pitch: bool,
}

impl Post {
    pub(crate) fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        directory: &TableDirectory,
    ) -> Result<Self, FontParseError> {
        directory.seek(reader, Tag::POST)?;
        // version
        reader.skip(4)?;

        let italic_angle = reader.read_i16()?;
        // fractional part of the angle
        reader.skip(2)?;
        let underline_position = reader.read_i16()?;
        let underline_thickness = reader.read_i16()?;
        let is_fixed_pitch = reader.read_u32()? != 0;

        log::debug!("post: italic angle {italic_angle}, fixed pitch {is_fixed_pitch}");
        Ok(Self {
            italic_angle,
            underline_position,
            underline_thickness,
            is_fixed_pitch,
        })
    }
}
