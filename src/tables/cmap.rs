//! [cmap table](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6cmap.html)
//! decoding, limited to the Windows Unicode BMP subtable in format 4.

use std::{
    collections::BTreeMap,
    io::{Read, Seek},
};

use crate::{
    FontParseError, GlyphIdArithmetic,
    buffer::{FontReader, FontReaderError},
};

use super::{TableDirectory, Tag};

/// Code point that terminates a format 4 mapping
const SENTINEL: u32 = 0xFFFF;

/// Represents the platform identifier of an encoding record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformId {
    Unicode,
    Macintosh,
    Reserved,
    Microsoft(WindowsEncodingId),
    Unknown(u16),
}

/// Encodings of the Microsoft platform.
///
/// Only `UnicodeBmp` is decoded, the others are named so encoding records
/// read well in trace logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowsEncodingId {
    Symbol,
    UnicodeBmp,
    ShiftJis,
    Prc,
    Big5,
    Wansung,
    Johab,
    UnicodeFull,
    Unknown(u16),
}

impl From<(u16, u16)> for PlatformId {
    fn from((platform_id, encoding_id): (u16, u16)) -> Self {
        match platform_id {
            0 => Self::Unicode,
            1 => Self::Macintosh,
            2 => Self::Reserved,
            3 => Self::Microsoft(encoding_id.into()),
            other => Self::Unknown(other),
        }
    }
}

impl From<u16> for WindowsEncodingId {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::Symbol,
            1 => Self::UnicodeBmp,
            2 => Self::ShiftJis,
            3 => Self::Prc,
            4 => Self::Big5,
            5 => Self::Wansung,
            6 => Self::Johab,
            10 => Self::UnicodeFull,
            other => Self::Unknown(other),
        }
    }
}

/// One entry of the cmap header, pointing at a subtable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingRecord {
    pub platform: PlatformId,
    /// Offset of the subtable from the start of the cmap table.
    /// Stored as a signed value, although no sane font makes it negative.
    pub offset: i32,
}

impl EncodingRecord {
    fn from_reader<B: Read + Seek>(reader: &mut FontReader<B>) -> Result<Self, FontParseError> {
        let platform_id = reader.read_u16()?;
        let encoding_id = reader.read_u16()?;
        let offset = reader.read_i32()?;

        Ok(Self {
            platform: (platform_id, encoding_id).into(),
            offset,
        })
    }
}

/// A contiguous code point range of a format 4 subtable sharing one
/// delta and range offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start_code: u16,
    end_code: u16,
    id_delta: i16,
    id_range_offset: u16,
}

/// Decodes the (3, 1) subtable into a map from code point to glyph id.
///
/// Glyph 0 (`.notdef`) is never part of the map.
///
/// # Errors
///
/// * `NoUnicodeEncoding` if no encoding record is (3, 1)
/// * `UnexpectedSubtableFormat` if that subtable isn't format 4
pub(crate) fn char_to_glyph<B: Read + Seek>(
    reader: &mut FontReader<B>,
    directory: &TableDirectory,
    arithmetic: GlyphIdArithmetic,
) -> Result<BTreeMap<u32, u32>, FontParseError> {
    directory.seek(reader, Tag::CMAP)?;
    let table_start = reader.position()?;

    // version
    reader.skip(2)?;
    let num_tables = reader.read_u16()?;

    let mut unicode_bmp: Option<i32> = None;
    for _ in 0..num_tables {
        let record = EncodingRecord::from_reader(reader)?;
        log::trace!("cmap encoding record {record:?}");

        if record.platform == PlatformId::Microsoft(WindowsEncodingId::UnicodeBmp) {
            if let Some(previous) = unicode_bmp {
                log::warn!(
                    "several (3, 1) cmap subtables, using offset {} over {previous}",
                    record.offset
                );
            }
            unicode_bmp = Some(record.offset);
        }
    }

    let offset = unicode_bmp.ok_or(FontParseError::NoUnicodeEncoding)?;
    let subtable_start = table_start as i64 + i64::from(offset);
    let subtable_start = u64::try_from(subtable_start)
        .map_err(|_| FontParseError::InvalidSubtableOffset(subtable_start))?;
    reader.seek_to(subtable_start)?;

    let format = reader.read_u16()?;
    if format != 4 {
        return Err(FontParseError::UnexpectedSubtableFormat(format));
    }

    decode_format4(reader, arithmetic)
}

/// Decodes a format 4 subtable. The reader must be positioned just past
/// the format field.
fn decode_format4<B: Read + Seek>(
    reader: &mut FontReader<B>,
    arithmetic: GlyphIdArithmetic,
) -> Result<BTreeMap<u32, u32>, FontParseError> {
    // length, language
    reader.skip(2 * 2)?;
    let seg_count = usize::from(reader.read_u16()? / 2);
    // searchRange, entrySelector, rangeShift
    reader.skip(3 * 2)?;

    let end_codes = read_array(reader, seg_count, FontReader::read_u16)?;
    // reservedPad
    reader.skip(2)?;
    let start_codes = read_array(reader, seg_count, FontReader::read_u16)?;
    let id_deltas = read_array(reader, seg_count, FontReader::read_i16)?;
    let range_offsets_start = reader.position()?;
    let id_range_offsets = read_array(reader, seg_count, FontReader::read_u16)?;

    let segments = (0..seg_count).map(|i| Segment {
        start_code: start_codes[i],
        end_code: end_codes[i],
        id_delta: id_deltas[i],
        id_range_offset: id_range_offsets[i],
    });

    let mut mapping = BTreeMap::new();
    for (i, segment) in segments.enumerate() {
        log::trace!("cmap segment {i}: {segment:?}");

        if segment.id_range_offset > 0 {
            // the range offset is relative to its own slot in idRangeOffset
            let glyph_ids_start =
                range_offsets_start + 2 * i as u64 + u64::from(segment.id_range_offset);
            reader.seek_to(glyph_ids_start)?;
        }

        for code_point in u32::from(segment.start_code)..=u32::from(segment.end_code) {
            if code_point == SENTINEL {
                break;
            }

            let glyph_id = if segment.id_range_offset > 0 {
                indirect_glyph_id(reader, segment.id_delta, arithmetic)?
            } else {
                direct_glyph_id(code_point, segment.id_delta, arithmetic)
            };

            if let Some(glyph_id) = glyph_id {
                mapping.insert(code_point, glyph_id);
            }
        }
    }

    log::debug!("cmap: {seg_count} segments, {} mapped code points", mapping.len());
    Ok(mapping)
}

fn read_array<B, T, F>(
    reader: &mut FontReader<B>,
    len: usize,
    read: F,
) -> Result<Vec<T>, FontParseError>
where
    B: Read + Seek,
    F: Fn(&mut FontReader<B>) -> Result<T, FontReaderError>,
{
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(read(reader)?);
    }

    Ok(values)
}

/// Glyph id for `code_point + delta`, `None` for `.notdef` or below
fn direct_glyph_id(code_point: u32, delta: i16, arithmetic: GlyphIdArithmetic) -> Option<u32> {
    let glyph_id = match arithmetic {
        GlyphIdArithmetic::Unmasked => i64::from(code_point) + i64::from(delta),
        GlyphIdArithmetic::Wrapping => {
            i64::from((code_point as u16).wrapping_add(delta as u16))
        }
    };

    positive(glyph_id)
}

/// Reads the next entry of the glyph id array and applies the delta to it
fn indirect_glyph_id<B: Read + Seek>(
    reader: &mut FontReader<B>,
    delta: i16,
    arithmetic: GlyphIdArithmetic,
) -> Result<Option<u32>, FontParseError> {
    let glyph_id = match arithmetic {
        GlyphIdArithmetic::Unmasked => {
            let raw = reader.read_i16()?;
            if raw > 0 {
                i64::from(raw) + i64::from(delta)
            } else {
                i64::from(raw)
            }
        }
        GlyphIdArithmetic::Wrapping => {
            let raw = reader.read_u16()?;
            if raw != 0 {
                i64::from(raw.wrapping_add(delta as u16))
            } else {
                0
            }
        }
    };

    Ok(positive(glyph_id))
}

fn positive(glyph_id: i64) -> Option<u32> {
    u32::try_from(glyph_id).ok().filter(|glyph_id| *glyph_id > 0)
}
