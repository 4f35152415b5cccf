//! Quote- and escape-aware field splitting for a single row

use alloc::{string::String, vec::Vec};

use crate::format::constants::ESCAPE;

/// Split one row into its fields
///
/// The delimiter outside quotes ends a field. The quote byte toggles quoting
/// and is dropped. A backslash directly before the quote or the delimiter
/// turns it into a literal; before anything else the backslash is kept.
/// An empty row yields a single empty field.
pub fn split_fields(row: &[u8], delimiter: u8, quote: Option<u8>) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = Vec::with_capacity(row.len());
    let mut quoted = false;
    let mut escaped = false;

    for &b in row {
        if escaped {
            escaped = false;
            if b != delimiter && Some(b) != quote {
                field.push(ESCAPE);
            }
            field.push(b);
        } else if b == ESCAPE {
            escaped = true;
        } else if Some(b) == quote {
            quoted = !quoted;
        } else if b == delimiter && !quoted {
            fields.push(decode(&field));
            field.clear();
        } else {
            field.push(b);
        }
    }

    if escaped {
        field.push(ESCAPE);
    }
    fields.push(decode(&field));
    fields
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
