use std::{
    collections::{BTreeMap, btree_map::Keys},
    fmt,
    io::{Read, Seek},
};

use crate::{FontParseError, buffer::FontReader};

pub mod cmap;
pub mod head;
pub mod hhea;
pub mod hmtx;
pub mod maxp;
pub mod name;
pub mod os2;
pub mod post;

/// sfnt version of fonts with TrueType outlines
pub const TRUETYPE_VERSION: u32 = 0x0001_0000;

/// sfnt version of fonts with CFF outlines, "OTTO"
pub const OPENTYPE_CFF_VERSION: u32 = 0x4F54_544F;

/// A 4-byte table identifier such as `cmap` or `OS/2`.
///
/// Tags are compared byte for byte, so `OS/2` and `os/2` are different tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag([u8; 4]);

impl Tag {
    pub const CMAP: Self = Self(*b"cmap");
    pub const HEAD: Self = Self(*b"head");
    pub const HHEA: Self = Self(*b"hhea");
    pub const HMTX: Self = Self(*b"hmtx");
    pub const MAXP: Self = Self(*b"maxp");
    pub const NAME: Self = Self(*b"name");
    pub const OS2: Self = Self(*b"OS/2");
    pub const POST: Self = Self(*b"post");

    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // tags are supposed to be printable ASCII, but nothing stops a broken font
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// The sfnt table directory, mapping every table tag in the font
/// to the absolute offset of its data.
///
/// Checksums and lengths are read past but not kept.
#[derive(Debug, Default)]
pub struct TableDirectory {
    inner: BTreeMap<Tag, u32>,
}

impl TableDirectory {
    /// Parses the offset subtable and the table records that follow it.
    ///
    /// The reader must be positioned at the start of the font. The sfnt
    /// version is checked before anything else is read, so CFF fonts are
    /// rejected without touching a single table.
    ///
    /// # Errors
    ///
    /// * `UnsupportedOutlineFormat` for `OTTO` fonts
    /// * `UnrecognizedFormat` for any other version that isn't `0x00010000`
    /// * a reader error if the directory is truncated
    pub fn from_reader<B: Read + Seek>(
        reader: &mut FontReader<B>,
    ) -> Result<Self, FontParseError> {
        let version = reader.read_u32()?;
        match version {
            TRUETYPE_VERSION => {}
            OPENTYPE_CFF_VERSION => return Err(FontParseError::UnsupportedOutlineFormat),
            other => return Err(FontParseError::UnrecognizedFormat(other)),
        }

        let num_tables = reader.read_u16()?;
        // searchRange, entrySelector, rangeShift
        reader.skip(6)?;

        let mut inner = BTreeMap::new();
        for _ in 0..num_tables {
            let mut tag = [0u8; 4];
            reader.read_exact(&mut tag)?;
            let tag = Tag(tag);

            // checksum
            reader.skip(4)?;
            let offset = reader.read_u32()?;
            // length
            reader.skip(4)?;

            log::trace!("table {tag} at offset {offset}");
            if let Some(previous) = inner.insert(tag, offset) {
                log::warn!("table {tag} listed twice, using offset {offset} over {previous}");
            }
        }

        log::debug!("table directory with {} distinct tables", inner.len());
        Ok(Self { inner })
    }

    /// Moves the reader to the first byte of the table identified by `tag`
    pub fn seek<B: Read + Seek>(
        &self,
        reader: &mut FontReader<B>,
        tag: Tag,
    ) -> Result<(), FontParseError> {
        let offset = self.offset(tag).ok_or(FontParseError::TableNotFound(tag))?;
        reader.seek_to(offset.into())?;

        Ok(())
    }

    /// Returns the absolute offset of a table, if the font has it
    pub fn offset(&self, tag: Tag) -> Option<u32> {
        self.inner.get(&tag).copied()
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.inner.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the table tags in byte order
    pub fn tags(&self) -> Keys<'_, Tag, u32> {
        self.inner.keys()
    }
}
