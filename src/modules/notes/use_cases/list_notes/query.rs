use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::sort_order::SortOrder;

/// Case-insensitive substring filter over title and body, then ordering.
/// Titles compare case-folded first, with byte order breaking ties.
/// The sort is stable, so notes with equal keys keep their collection order.
pub fn list_notes(notes: &[Note], filter: &str, sort: SortOrder) -> Vec<Note> {
    let needle = filter.to_lowercase();
    let mut matching: Vec<Note> = notes
        .iter()
        .filter(|note| note.matches(&needle))
        .cloned()
        .collect();

    match sort {
        SortOrder::Newest => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => matching.sort_by_key(|note| note.created_at),
        SortOrder::Alphabetical => matching.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        }),
    }
    matching
}
