//! Venue-name recovery from event image filenames.
//!
//! Event CDN images follow an undocumented naming convention:
//!
//! ```text
//! {event-slug-with-date-or-date-range}_{venue-slug}_{eventId}-{suffix}.{ext}
//! ```
//!
//! e.g. `wicked_the_musical_in_bahrain_2026_jan_13_2026_jan_17_bahrain_national_theatre_103422-full-en1764321001.jpg`.
//! The venue tokens sit between the last embedded date span and the
//! numeric event ID. Recovery is positional and best-effort; any parse
//! anomaly degrades to `None`.

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// The event-ID token must leave room for at least an event slug and one
/// date span before it.
const MIN_ID_INDEX: usize = 5;

/// Recovers the venue name embedded in an event image URL, if any.
///
/// Steps: take the last path segment, truncate at the first `-` (the
/// rendition suffix), split on `_`, find the last token equal to the
/// decimal event ID, find the rightmost `{year}_{mon}_{day}` date span
/// before it, and title-case the tokens between span and ID.
///
/// Returns `None` whenever the convention does not hold — a frequent,
/// normal outcome for images named by other schemes.
#[must_use]
pub fn extract_venue_name(image_url: Option<&str>, event_id: u64) -> Option<String> {
    let url = image_url?;
    let filename = url.rsplit('/').next().unwrap_or(url);
    let stem = filename.split('-').next().unwrap_or(filename);
    let tokens: Vec<&str> = stem.split('_').collect();

    let id_string = event_id.to_string();
    let id_index = tokens.iter().rposition(|t| *t == id_string)?;
    if id_index < MIN_ID_INDEX {
        return None;
    }

    let venue_start = end_of_last_date_span(&tokens[..id_index])?;
    if venue_start >= id_index {
        // The date range runs right up to the ID; no venue tokens left.
        return None;
    }

    let name = title_case(&tokens[venue_start..id_index].join(" "));
    if name.is_empty() {
        None
    } else {
        tracing::debug!(venue = %name, event_id, "recovered venue name from image URL");
        Some(name)
    }
}

/// Index just past the rightmost `{20NN}_{mon}_{D[D]}` span, or `None`
/// if the tokens contain no date span at all.
fn end_of_last_date_span(tokens: &[&str]) -> Option<usize> {
    let mut end = None;
    for i in 0..tokens.len().saturating_sub(2) {
        if is_year(tokens[i]) && is_month(tokens[i + 1]) && is_day(tokens[i + 2]) {
            end = Some(i + 3);
        }
    }
    end
}

/// Years 2000-2099, the only range the naming scheme has ever used.
fn is_year(token: &str) -> bool {
    token.len() == 4 && token.starts_with("20") && token.chars().all(|c| c.is_ascii_digit())
}

fn is_month(token: &str) -> bool {
    MONTHS.iter().any(|m| token.eq_ignore_ascii_case(m))
}

fn is_day(token: &str) -> bool {
    (1..=2).contains(&token.len()) && token.chars().all(|c| c.is_ascii_digit())
}

/// First character uppercased, rest lowercased, per whitespace-separated
/// word; repeated whitespace collapses to single spaces. Idempotent.
fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
