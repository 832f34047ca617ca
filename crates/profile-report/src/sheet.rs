//! Delimited rendering of flat mappings.

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use profile_model::{MAPPING_HEADER, MappingSheet};

/// UTF-8 byte-order mark written before every mapping file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render `sheet` with its header row: every cell quoted, quotes doubled,
/// `\n` line endings, BOM first.
pub fn render_mapping_csv(sheet: &MappingSheet) -> Result<Vec<u8>> {
    let mut out = UTF8_BOM.to_vec();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);
        writer
            .write_record(MAPPING_HEADER)
            .context("write mapping header")?;
        for (index, row) in sheet.rows.iter().enumerate() {
            writer
                .write_record(row.to_record())
                .with_context(|| format!("write mapping row {}", index + 1))?;
        }
        writer.flush().context("flush mapping rows")?;
    }
    Ok(out)
}
