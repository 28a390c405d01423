//! JSON encoding of the catalog and change list documents

use crate::error::Result;
use crate::types::{Catalog, ChangeList};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Decode a catalog document
pub fn decode_catalog(bytes: &[u8]) -> Result<Catalog> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a change list document
pub fn decode_changes(bytes: &[u8]) -> Result<ChangeList> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a catalog compactly
///
/// `<`, `>`, `&`, U+2028 and U+2029 inside strings are written as `\u` escapes.
pub fn encode_catalog(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, ReferenceFormatter);
    catalog.serialize(&mut serializer)?;
    Ok(out)
}

/// Compact formatter with HTML-safe string escaping
struct ReferenceFormatter;

impl Formatter for ReferenceFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(&fragment.as_bytes()[start..i])?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
