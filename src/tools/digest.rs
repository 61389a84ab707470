//! Provider list rendering.

use crate::models::ContactRecord;

/// One numbered line: `"{index}. Website: {url} - Contacts: {pairs}"`.
///
/// The contacts suffix is left off entirely when the record has none.
pub fn format_provider_line(index: usize, record: &ContactRecord) -> String {
    let pairs = record.contact_pairs();

    if pairs.is_empty() {
        format!("{}. Website: {}", index, record.url)
    } else {
        format!(
            "{}. Website: {} - Contacts: {}",
            index,
            record.url,
            pairs.join(", ")
        )
    }
}

/// All records as newline-joined lines, numbered from 1.
pub fn format_provider_list(records: &[ContactRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| format_provider_line(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}
