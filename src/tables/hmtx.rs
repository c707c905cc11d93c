//! [Horizontal Metrics](https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6hmtx.html) table

use std::io::{Read, Seek};

use crate::{FontParseError, buffer::FontReader};

use super::{TableDirectory, Tag};

/// Reads the advance width of every glyph, indexed by glyph id.
///
/// Only the first `number_of_h_metrics` glyphs carry their own advance.
/// The remaining glyphs of a font share the last advance (the tail of a
/// monospaced font), so the widths are padded up to `num_glyphs` with it.
/// Left side bearings are skipped.
pub(crate) fn advance_widths<B: Read + Seek>(
    reader: &mut FontReader<B>,
    directory: &TableDirectory,
    number_of_h_metrics: u16,
    num_glyphs: u16,
) -> Result<Vec<u16>, FontParseError> {
    directory.seek(reader, Tag::HMTX)?;

    let mut widths = Vec::with_capacity(usize::from(number_of_h_metrics.max(num_glyphs)));
    for _ in 0..number_of_h_metrics {
        widths.push(reader.read_u16()?);
        // lsb
        reader.skip(2)?;
    }

    if number_of_h_metrics < num_glyphs {
        let last = *widths
            .last()
            .ok_or(FontParseError::MissingHorizontalMetrics { num_glyphs })?;
        widths.resize(usize::from(num_glyphs), last);
    } else if number_of_h_metrics > num_glyphs {
        log::warn!("hmtx has {number_of_h_metrics} metrics for only {num_glyphs} glyphs");
    }

    log::debug!("hmtx: {} advance widths", widths.len());
    Ok(widths)
}
