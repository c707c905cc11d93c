/// How the glyph id of a format 4 cmap segment is computed from its
/// `idDelta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphIdArithmetic {
    /// Plain integer addition. A sum of zero or less maps the code point to
    /// nothing, and sums above 65535 are kept as they are. Glyph ids read
    /// from the glyph id array are signed, so values above 0x7FFF are
    /// treated as missing.
    #[default]
    Unmasked,

    /// Addition modulo 65536 with unsigned glyph ids, as the OpenType
    /// specification describes the format.
    Wrapping,
}

/// Knobs for [`parse_with_options`](crate::parse_with_options).
///
/// ```
/// use vero_metrics::{GlyphIdArithmetic, ParseOptions};
///
/// let options = ParseOptions::default().with_glyph_id_arithmetic(GlyphIdArithmetic::Wrapping);
/// assert_eq!(options.glyph_id_arithmetic, GlyphIdArithmetic::Wrapping);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub glyph_id_arithmetic: GlyphIdArithmetic,
}

impl ParseOptions {
    pub fn with_glyph_id_arithmetic(mut self, arithmetic: GlyphIdArithmetic) -> Self {
        self.glyph_id_arithmetic = arithmetic;
        self
    }
}
