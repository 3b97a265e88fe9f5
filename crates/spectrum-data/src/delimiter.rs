use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error::TableError;

/// Field separators recognised by the loader, in trial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::EnumIter, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
    Space,
}

impl Delimiter {
    pub const fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Space => b' ',
        }
    }
}

/// Pick the first delimiter that splits every sampled record into the same
/// number of fields (at least two).
///
/// `sample` is expected to hold only complete lines; see
/// [`complete_lines`]. Comment lines (`#`) and blank lines are ignored, and
/// with `skip_header` the first record does not take part in the trial.
pub fn detect_delimiter(sample: &[u8], skip_header: bool) -> Result<Delimiter, TableError> {
    Delimiter::iter()
        .find(|&delimiter| consistent_field_count(sample, delimiter, skip_header).is_some())
        .ok_or(TableError::DelimiterDetection)
}

/// Field count shared by every record of `sample`, if there is one and it
/// is at least two.
fn consistent_field_count(
    sample: &[u8],
    delimiter: Delimiter,
    skip_header: bool,
) -> Option<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(skip_header)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(sample);

    let mut count = None;
    for record in reader.byte_records() {
        let len = record.ok()?.len();
        match count {
            None => count = Some(len),
            Some(expected) if expected != len => return None,
            Some(_) => {}
        }
    }

    count.filter(|&n| n >= 2)
}

/// Truncate `bytes` to at most `limit` bytes, dropping a trailing partial
/// line when the cut lands mid-line.
pub fn complete_lines(bytes: &[u8], limit: usize) -> &[u8] {
    if bytes.len() <= limit {
        return bytes;
    }
    let sample = &bytes[..limit];
    match sample.iter().rposition(|&b| b == b'\n') {
        Some(end) => &sample[..=end],
        // A single line longer than the sample: judge it on what we have.
        None => sample,
    }
}
