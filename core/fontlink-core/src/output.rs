//! Output helpers for rendered tags

use std::io::Write;

use anyhow::Result;

use crate::link::LinkTag;

/// Write the rendered markup followed by a newline.
pub fn write_html(tag: &LinkTag, mut w: impl Write) -> Result<()> {
    writeln!(w, "{}", tag.html())?;
    Ok(())
}

/// Write the attribute map as prettified JSON.
pub fn write_json_pretty(tag: &LinkTag, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(tag)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
