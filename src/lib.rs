//! Extracts the metadata a document generator needs to embed a TrueType
//! font: advance widths, bounding box, the Unicode to glyph mapping, the
//! PostScript name and a handful of style and licensing flags.
//!
//! Glyph outlines are never looked at. Fonts with CFF outlines (`OTTO`)
//! are rejected.

use std::{
    fs::File,
    io::{self, Cursor, Read, Seek},
    path::{Path, PathBuf},
};

use buffer::{FontReader, FontReaderError};
use tables::Tag;
use thiserror::Error;

pub mod buffer;
mod metadata;
mod options;
pub mod tables;

#[cfg(test)]
mod test_helpers;

pub use metadata::{BoundingBox, FontMetadata};
pub use options::{GlyphIdArithmetic, ParseOptions};

/// Everything that can go wrong while extracting font metadata.
///
/// None of these are recoverable, a parse that fails returns no metadata
/// at all.
#[derive(Debug, Error)]
pub enum FontParseError {
    #[error("can't open file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Reader(#[from] FontReaderError),

    #[error("unsupported outline format: OpenType fonts based on PostScript outlines are not supported")]
    UnsupportedOutlineFormat,

    #[error("unrecognized file format: {0:#010X}")]
    UnrecognizedFormat(u32),

    #[error("incorrect magic number: {0:#010X}")]
    IncorrectMagicNumber(u32),

    #[error("table not found: {0}")]
    TableNotFound(Tag),

    #[error("unexpected subtable format: {0}")]
    UnexpectedSubtableFormat(u16),

    #[error("no Unicode encoding found")]
    NoUnicodeEncoding,

    #[error("PostScript name not found")]
    PostScriptNameNotFound,

    #[error("hmtx has no metrics to pad {num_glyphs} glyphs from")]
    MissingHorizontalMetrics { num_glyphs: u16 },

    #[error("cmap subtable offset resolves before the start of the file: {0}")]
    InvalidSubtableOffset(i64),
}

pub type Result<T> = std::result::Result<T, FontParseError>;

/// Parses a font from any seekable source with the default options.
///
/// The source is consumed and dropped before this returns, whether parsing
/// succeeded or not.
///
/// ```no_run
/// use std::{fs::File, io::BufReader};
///
/// let file = BufReader::new(File::open("DejaVuSans.ttf").unwrap());
/// let metadata = vero_metrics::parse(file).unwrap();
/// println!("{} units per em", metadata.units_per_em);
/// ```
pub fn parse<B: Read + Seek>(source: B) -> Result<FontMetadata> {
    parse_with_options(source, &ParseOptions::default())
}

/// Same as [`parse`], with control over how the cmap is decoded
///
/// ```no_run
/// use std::fs::File;
/// use vero_metrics::{GlyphIdArithmetic, ParseOptions};
///
/// let file = File::open("DejaVuSans.ttf").unwrap();
/// let options = ParseOptions::default().with_glyph_id_arithmetic(GlyphIdArithmetic::Wrapping);
/// let metadata = vero_metrics::parse_with_options(file, &options).unwrap();
/// assert!(!metadata.char_to_glyph.values().any(|glyph_id| *glyph_id > 0xFFFF));
/// ```
pub fn parse_with_options<B: Read + Seek>(
    source: B,
    options: &ParseOptions,
) -> Result<FontMetadata> {
    let mut reader = FontReader::from_buffer(source);
    FontMetadata::from_reader(&mut reader, options)
}

/// Opens and parses the font at `path`. The file is closed again on every
/// path out of this function.
///
/// ```no_run
/// let metadata = vero_metrics::parse_file("DejaVuSans.ttf").unwrap();
/// println!(
///     "{} covers {} characters",
///     metadata.postscript_name,
///     metadata.char_to_glyph.len()
/// );
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<FontMetadata> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FontParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("parsing font file {}", path.display());
    parse(file)
}

/// Parses a font that is already in memory
///
/// ```
/// use vero_metrics::FontParseError;
///
/// // a CFF font is turned down before any table is read
/// let otto = [0x4F, 0x54, 0x54, 0x4F, 0, 0];
/// assert!(matches!(
///     vero_metrics::parse_bytes(&otto),
///     Err(FontParseError::UnsupportedOutlineFormat)
/// ));
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<FontMetadata> {
    parse(Cursor::new(data))
}
