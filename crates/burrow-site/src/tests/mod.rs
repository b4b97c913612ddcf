//! Behavioral tests for the rendered page
//!
//! BDD-style tests using given-when-then naming. Components are rendered to
//! HTML natively and assertions are made on the markup.


/// Number of non-overlapping occurrences of `needle` in `html`
pub fn occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Byte offset of `needle`, panicking with a readable message when absent
#[allow(clippy::panic)]
pub fn position(html: &str, needle: &str) -> usize {
    match html.find(needle) {
        Some(index) => index,
        None => panic!("expected markup to contain {needle:?}"),
    }
}

/// Markup from `start` up to the next `end`, or an empty string when absent
pub fn fragment<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    html.find(start)
        .and_then(|from| html.get(from..))
        .and_then(|rest| rest.find(end).and_then(|to| rest.get(..to)))
        .unwrap_or_default()
}

/// Whether each needle occurs, and in the given order
pub fn in_order<'a>(html: &str, needles: impl IntoIterator<Item = &'a str>) -> bool {
    let positions: Vec<_> = needles.into_iter().map(|needle| position(html, needle)).collect();
    positions.windows(2).all(|w| w.first() < w.get(1))
}
