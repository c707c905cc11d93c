use std::{
    collections::BTreeMap,
    io::{Read, Seek},
};

use crate::{
    FontParseError, ParseOptions,
    buffer::FontReader,
    tables::{
        TableDirectory, cmap, head::Head, hhea::Hhea, hmtx, maxp::Maxp, name, os2::Os2,
        post::Post,
    },
};

/// The union of all glyph bounding boxes, in font design units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

/// Everything a document generator needs to embed a TrueType font:
/// metrics, character coverage and naming/style flags.
///
/// All lengths are in font design units, see `units_per_em`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetadata {
    pub units_per_em: u16,
    pub bbox: BoundingBox,
    pub number_of_h_metrics: u16,
    pub num_glyphs: u16,

    /// Advance width of every glyph, indexed by glyph id
    pub widths: Vec<u16>,

    /// Unicode code point to glyph id. Glyph 0 never appears.
    pub char_to_glyph: BTreeMap<u32, u32>,

    /// Free of NULs, spaces and the delimiters `[](){}<>/%`, never empty
    pub postscript_name: String,

    pub embeddable: bool,
    pub bold: bool,
    pub is_fixed_pitch: bool,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub cap_height: i16,
    /// Integer part of the italic angle, in degrees
    pub italic_angle: i16,
    pub underline_position: i16,
    pub underline_thickness: i16,
}

impl FontMetadata {
    /// Parses every table the metadata is built from.
    ///
    /// The order matters: `hmtx` can only be read once `hhea` and `maxp`
    /// told how many metrics and glyphs there are. Any error aborts the
    /// whole parse, tables after the failing one are never read.
    pub fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
        options: &ParseOptions,
    ) -> Result<Self, FontParseError> {
        let directory = TableDirectory::from_reader(reader)?;

        let head = Head::from_reader(reader, &directory)?;
        let hhea = Hhea::from_reader(reader, &directory)?;
        let maxp = Maxp::from_reader(reader, &directory)?;
        let widths =
            hmtx::advance_widths(reader, &directory, hhea.number_of_h_metrics, maxp.num_glyphs)?;
        let char_to_glyph = cmap::char_to_glyph(reader, &directory, options.glyph_id_arithmetic)?;
        let postscript_name = name::postscript_name(reader, &directory)?;
        let os2 = Os2::from_reader(reader, &directory)?;
        let post = Post::from_reader(reader, &directory)?;

        Ok(Self {
            units_per_em: head.units_per_em,
            bbox: head.bbox,
            number_of_h_metrics: hhea.number_of_h_metrics,
            num_glyphs: maxp.num_glyphs,
            widths,
            char_to_glyph,
            postscript_name,
            embeddable: os2.embeddable,
            bold: os2.bold,
            is_fixed_pitch: post.is_fixed_pitch,
            typo_ascender: os2.typo_ascender,
            typo_descender: os2.typo_descender,
            cap_height: os2.cap_height,
            italic_angle: post.italic_angle,
            underline_position: post.underline_position,
            underline_thickness: post.underline_thickness,
        })
    }

    /// Returns the glyph a character is drawn with, if the font covers it
    pub fn glyph_id(&self, c: char) -> Option<u32> {
        self.char_to_glyph.get(&u32::from(c)).copied()
    }

    /// Returns the advance width of a glyph
    pub fn advance_width(&self, glyph_id: u32) -> Option<u16> {
        let index = usize::try_from(glyph_id).ok()?;
        self.widths.get(index).copied()
    }

    /// Returns the advance width a character takes up when laid out.
    ///
    /// Characters the font doesn't cover are drawn with `.notdef`, so they
    /// get its width.
    pub fn char_width(&self, c: char) -> Option<u16> {
        self.advance_width(self.glyph_id(c).unwrap_or(0))
    }

    /// Converts a value in design units to thousandths of an em, the unit
    /// of PDF glyph widths and font descriptors.
    pub fn scale_to_thousand(&self, value: i32) -> i32 {
        if self.units_per_em == 0 {
            return value;
        }

        let units_per_em = i64::from(self.units_per_em);
        // round half away from zero
        let scaled = i64::from(value) * 1000;
        let rounded = if scaled >= 0 {
            (scaled + units_per_em / 2) / units_per_em
        } else {
            (scaled - units_per_em / 2) / units_per_em
        };

        rounded.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}
