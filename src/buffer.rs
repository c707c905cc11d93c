use std::io::{self, BufReader, Read, Seek, SeekFrom};

use thiserror::Error;

macro_rules! impl_read {
    ($fn_name:ident, $typ:ty) => {
        pub fn $fn_name(&mut self) -> Result<$typ, FontReaderError> {
            let mut buf = [0u8; size_of::<$typ>()];

            self.inner.read_exact(&mut buf)?;

            Ok(<$typ>::from_be_bytes(buf))
        }
    };
}

/// Represents the possible errors that can occur when using `FontReader`.
#[derive(Error, Debug)]
pub enum FontReaderError {
    /// An error occurred during a read operation on the underlying source,
    /// most commonly a read past its end.
    #[error(transparent)]
    Read(#[from] io::Error),

    /// An error occurred during a seek operation on the underlying source.
    #[error("failed to seek, error context: {0}")]
    FailedToSeek(io::Error),
}

/// A big-endian cursor over one exclusively owned random access source.
///
/// Every multi-byte value in an sfnt file is stored in network byte order,
/// so there is no way to read little-endian values through this type.
pub struct FontReader<B: Read + Seek> {
    inner: BufReader<B>,
}

impl<B> FontReader<B>
where
    B: Read + Seek,
{
    /// Takes ownership of `source`; it is dropped together with the reader.
    ///
    /// The most obvious source is a `File`, but anything seekable works,
    /// e.g. a `Cursor` over a font that was downloaded into memory.
    pub fn from_buffer(source: B) -> Self {
        Self {
            inner: BufReader::new(source),
        }
    }

    /// Seeks to an absolute position from the start of the source
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use vero_metrics::buffer::FontReader;
    ///
    /// let data = vec![0, 0, 0, 10, 0, 0, 0, 20];
    /// let mut reader = FontReader::from_buffer(Cursor::new(data));
    ///
    /// reader.seek_to(4).unwrap();
    /// assert_eq!(reader.read_u32().unwrap(), 20);
    /// ```
    pub fn seek_to(&mut self, pos: u64) -> Result<(), FontReaderError> {
        self.inner
            .seek(SeekFrom::Start(pos))
            .map_err(FontReaderError::FailedToSeek)?;

        Ok(())
    }

    /// Skips n bytes from the CURRENT cursor position
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use vero_metrics::buffer::FontReader;
    ///
    /// let data = vec![0, 0, 0, 10, 0, 0, 0, 20];
    /// let mut reader = FontReader::from_buffer(Cursor::new(data));
    ///
    /// assert_eq!(reader.read_u32().unwrap(), 10);
    /// reader.skip(4).unwrap();
    ///
    /// // nothing left
    /// assert!(reader.read_u32().is_err());
    /// ```
    pub fn skip(&mut self, n: i64) -> Result<(), FontReaderError> {
        // keeps the internal buffer when the target is still inside it
        self.inner
            .seek_relative(n)
            .map_err(FontReaderError::FailedToSeek)?;

        Ok(())
    }

    /// Returns the absolute position of the cursor
    pub fn position(&mut self) -> Result<u64, FontReaderError> {
        self.inner
            .stream_position()
            .map_err(FontReaderError::FailedToSeek)
    }

    /// Reads exactly `buf.len()` bytes
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), FontReaderError> {
        self.inner.read_exact(buf)?;

        Ok(())
    }

    /// Reads a raw span of `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, FontReaderError> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;

        Ok(buf)
    }

    impl_read!(read_i32, i32);
    impl_read!(read_u32, u32);
    impl_read!(read_i16, i16);
    impl_read!(read_u16, u16);
    impl_read!(read_i8, i8);
    impl_read!(read_u8, u8);
}
