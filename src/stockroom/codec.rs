//! # Record Codec
//!
//! Converts between field sequences and comma-separated rows using
//! RFC-4180 style quoting:
//!
//! - A field containing `,`, `"`, `\n` or `\r` is wrapped in `"` and every
//!   inner `"` is doubled.
//! - While decoding, only a `"` at the very start of a field opens a quoted
//!   region. Inside it a `,` is data, `""` is a literal `"`, and a lone `"`
//!   closes the region. A `"` anywhere else is ordinary data.
//!
//! Because quoted fields may contain newlines, file text is first cut into
//! records with [`split_records`] (quote-aware), then each record is split
//! into fields with [`decode_row`].

const DELIMITER: char = ',';
const QUOTE: char = '"';

fn needs_quoting(value: &str) -> bool {
    value.contains([DELIMITER, QUOTE, '\n', '\r'])
}

/// Escapes a single field for inclusion in a row.
pub fn escape_field(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            escaped.push(QUOTE);
        }
        escaped.push(c);
    }
    escaped.push(QUOTE);
    escaped
}

/// Escapes each field and joins them into one row (no line terminator).
pub fn encode_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits one record into its fields.
///
/// Never fails: an unterminated quote simply runs to the end of the record.
pub fn decode_row(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    current.push(QUOTE);
                    chars.next();
                }
                QUOTE => in_quotes = false,
                _ => current.push(c),
            }
            continue;
        }
        match c {
            QUOTE if field_start => in_quotes = true,
            DELIMITER => {
                fields.push(std::mem::take(&mut current));
                field_start = true;
                continue;
            }
            _ => current.push(c),
        }
        field_start = false;
    }
    fields.push(current);
    fields
}

fn strip_cr(mut record: String) -> String {
    if record.ends_with('\r') {
        record.pop();
    }
    record
}

/// Cuts file text into records, keeping newlines that sit inside quotes.
///
/// A `\r` directly before a record-ending `\n` is dropped. Blank records are
/// returned as empty strings so callers can keep record numbering stable.
///
/// A quote still open at end of text cannot be a real multi-line field, so
/// everything from the start of that record is split at plain newlines
/// instead. One malformed row then costs only itself.
pub fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut record_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if in_quotes {
            current.push(c);
            if c == QUOTE {
                if matches!(chars.peek(), Some((_, QUOTE))) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        match c {
            '\n' => {
                records.push(strip_cr(std::mem::take(&mut current)));
                record_start = i + 1;
                field_start = true;
                continue;
            }
            QUOTE if field_start => in_quotes = true,
            DELIMITER => {
                current.push(c);
                field_start = true;
                continue;
            }
            _ => {}
        }
        current.push(c);
        field_start = false;
    }

    if in_quotes {
        let rest = &text[record_start..];
        let rest = rest.strip_suffix('\n').unwrap_or(rest);
        records.extend(rest.split('\n').map(|line| strip_cr(line.to_string())));
    } else if !current.is_empty() {
        records.push(strip_cr(current));
    }
    records
}

/// Renders a header line plus one encoded row per field set, each ending in `\n`.
pub fn encode_table<I>(header: &str, rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(&encode_row(&row));
        out.push('\n');
    }
    out
}
