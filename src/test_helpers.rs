//! small utilities used in tests

use crate::tables::{TRUETYPE_VERSION, Tag, head::MAGIC_NUMBER};

/// A value that can be written to a [`BeBuffer`].
pub trait Scalar {
    fn write_be(&self, out: &mut Vec<u8>);
}

macro_rules! impl_scalar {
    ($($typ:ty),*) => {
        $(impl Scalar for $typ {
            fn write_be(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }
        })*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32, i64);

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        item.write_be(&mut self.data);
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            item.write_be(&mut self.data);
        }
        self
    }

    pub fn push_tag(mut self, tag: &[u8; 4]) -> Self {
        self.data.extend_from_slice(tag);
        self
    }

    pub fn push_bytes(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Lays out a complete sfnt file from a list of table blobs.
#[derive(Debug)]
pub struct FontBuilder {
    version: u32,
    tables: Vec<(Tag, Vec<u8>)>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self {
            version: TRUETYPE_VERSION,
            tables: Vec::new(),
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Adds a table, replacing any table already added with the same tag
    pub fn table(mut self, tag: Tag, data: impl Into<Vec<u8>>) -> Self {
        self.tables.retain(|(existing, _)| *existing != tag);
        self.tables.push((tag, data.into()));
        self
    }

    pub fn without(mut self, tag: Tag) -> Self {
        self.tables.retain(|(existing, _)| *existing != tag);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let header_len = 12 + 16 * self.tables.len();
        let mut directory = BeBuffer::new()
            .push(self.version)
            .push(self.tables.len() as u16)
            .extend([0u16; 3]);
        let mut body = Vec::new();

        for (tag, data) in &self.tables {
            let offset = (header_len + body.len()) as u32;
            directory = directory
                .push_tag(&tag.to_be_bytes())
                .push(0u32)
                .push(offset)
                .push(data.len() as u32);

            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        let mut font = directory.into_vec();
        font.extend(body);
        font
    }
}

pub fn head_table(magic: u32, units_per_em: u16, bbox: [i16; 4]) -> Vec<u8> {
    BeBuffer::new()
        // version, fontRevision, checkSumAdjustment
        .push(0x0001_0000u32)
        .push(0x0001_0000u32)
        .push(0u32)
        .push(magic)
        .push(0u16)
        .push(units_per_em)
        // created, modified
        .push(0i64)
        .push(0i64)
        .extend(bbox)
        // macStyle .. glyphDataFormat
        .extend([0u16; 5])
        .into_vec()
}

pub fn hhea_table(number_of_h_metrics: u16) -> Vec<u8> {
    BeBuffer::new()
        .push(0x0001_0000u32)
        .extend([0u16; 15])
        .push(number_of_h_metrics)
        .into_vec()
}

pub fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    BeBuffer::new()
        .push(0x0000_5000u32)
        .push(num_glyphs)
        .into_vec()
}

pub fn hmtx_table(advances: &[u16]) -> Vec<u8> {
    advances
        .iter()
        .fold(BeBuffer::new(), |buf, advance| buf.push(*advance).push(0i16))
        .into_vec()
}

/// One segment of a format 4 subtable. Segments with `glyph_ids` are
/// written with an indirect range offset into the glyph id array.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: u16,
    pub end: u16,
    pub delta: i16,
    pub glyph_ids: Option<Vec<i16>>,
}

impl Segment {
    pub fn direct(start: u16, end: u16, delta: i16) -> Self {
        Self {
            start,
            end,
            delta,
            glyph_ids: None,
        }
    }

    pub fn indirect(start: u16, end: u16, delta: i16, glyph_ids: Vec<i16>) -> Self {
        Self {
            start,
            end,
            delta,
            glyph_ids: Some(glyph_ids),
        }
    }
}

pub fn cmap_format4(segments: &[Segment]) -> Vec<u8> {
    let seg_count = segments.len() as u16;
    let mut range_offsets = Vec::with_capacity(segments.len());
    let mut glyph_ids: Vec<i16> = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        match &segment.glyph_ids {
            Some(ids) => {
                let words_ahead = (segments.len() - i + glyph_ids.len()) as u16;
                range_offsets.push(words_ahead * 2);
                glyph_ids.extend(ids);
            }
            None => range_offsets.push(0u16),
        }
    }

    let length = 16 + 8 * segments.len() + 2 * glyph_ids.len();
    BeBuffer::new()
        .push(4u16)
        .push(length as u16)
        .push(0u16)
        .push(seg_count * 2)
        .extend([0u16; 3])
        .extend(segments.iter().map(|segment| segment.end))
        .push(0u16)
        .extend(segments.iter().map(|segment| segment.start))
        .extend(segments.iter().map(|segment| segment.delta))
        .extend(range_offsets)
        .extend(glyph_ids)
        .into_vec()
}

/// Builds a cmap table with one encoding record per entry, each pointing
/// at its own subtable blob.
pub fn cmap_table(records: &[(u16, u16, Vec<u8>)]) -> Vec<u8> {
    let mut buf = BeBuffer::new().push(0u16).push(records.len() as u16);
    let mut offset = 4 + 8 * records.len();
    for (platform_id, encoding_id, subtable) in records {
        buf = buf.push(*platform_id).push(*encoding_id).push(offset as i32);
        offset += subtable.len();
    }
    for (_, _, subtable) in records {
        buf = buf.push_bytes(subtable);
    }
    buf.into_vec()
}

pub fn name_table(records: &[(u16, &[u8])]) -> Vec<u8> {
    let count = records.len() as u16;
    let mut buf = BeBuffer::new()
        .push(0u16)
        .push(count)
        .push(6 + 12 * count);
    let mut offset = 0u16;
    for (name_id, string) in records {
        buf = buf
            .push(3u16)
            .push(1u16)
            .push(0x0409u16)
            .push(*name_id)
            .push(string.len() as u16)
            .push(offset);
        offset += string.len() as u16;
    }
    for (_, string) in records {
        buf = buf.push_bytes(string);
    }
    buf.into_vec()
}

#[derive(Debug, Clone, Copy)]
pub struct Os2Fields {
    pub version: u16,
    pub fs_type: u16,
    pub fs_selection: u16,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub cap_height: i16,
}

impl Default for Os2Fields {
    fn default() -> Self {
        Self {
            version: 4,
            fs_type: 0,
            fs_selection: 0x40,
            typo_ascender: 800,
            typo_descender: -200,
            cap_height: 700,
        }
    }
}

pub fn os2_table(fields: Os2Fields) -> Vec<u8> {
    let buf = BeBuffer::new()
        .push(fields.version)
        // xAvgCharWidth, usWeightClass, usWidthClass
        .extend([500i16, 400, 5])
        .push(fields.fs_type)
        // ySubscriptXSize .. sFamilyClass
        .extend([0i16; 11])
        // panose
        .extend([0u8; 10])
        // ulUnicodeRange1..4
        .extend([0u32; 4])
        .push_tag(b"NONE")
        .push(fields.fs_selection)
        // usFirstCharIndex, usLastCharIndex
        .extend([0x20u16, 0xFFFD])
        .push(fields.typo_ascender)
        .push(fields.typo_descender);

    if fields.version < 2 {
        // sTypoLineGap, usWinAscent, usWinDescent
        return buf.extend([0u16; 3]).into_vec();
    }

    buf
        // sTypoLineGap, usWinAscent, usWinDescent
        .extend([0u16; 3])
        // ulCodePageRange1, ulCodePageRange2
        .extend([0u32; 2])
        .push(500i16)
        .push(fields.cap_height)
        // usDefaultChar, usBreakChar, usMaxContext
        .extend([0u16; 3])
        .into_vec()
}

pub fn post_table(
    italic_angle: i16,
    underline_position: i16,
    underline_thickness: i16,
    is_fixed_pitch: u32,
) -> Vec<u8> {
    BeBuffer::new()
        .push(0x0003_0000u32)
        .push(italic_angle)
        .push(0x8000u16)
        .push(underline_position)
        .push(underline_thickness)
        .push(is_fixed_pitch)
        .extend([0u32; 4])
        .into_vec()
}

/// A small but complete font: 5 glyphs, 3 long metrics, `A..=C` mapped to
/// glyphs 1 to 3 and `0x20` to glyph 4.
pub fn simple_font() -> FontBuilder {
    let cmap = cmap_table(&[(
        3,
        1,
        cmap_format4(&[
            Segment::direct(0x20, 0x20, -0x1C),
            Segment::direct(0x41, 0x43, -0x40),
            Segment::direct(0xFFFF, 0xFFFF, 1),
        ]),
    )]);

    FontBuilder::new()
        .table(Tag::HEAD, head_table(MAGIC_NUMBER, 1000, [-50, -200, 950, 800]))
        .table(Tag::HHEA, hhea_table(3))
        .table(Tag::MAXP, maxp_table(5))
        .table(Tag::HMTX, hmtx_table(&[500, 600, 650]))
        .table(Tag::CMAP, cmap)
        .table(
            Tag::NAME,
            name_table(&[(1, &b"Simple Sans"[..]), (6, &b"Simple-Sans"[..])]),
        )
        .table(Tag::OS2, os2_table(Os2Fields::default()))
        .table(Tag::POST, post_table(-12, -100, 50, 0))
}
