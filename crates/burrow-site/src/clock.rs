//! Wall-clock year for the copyright line

use chrono::{Datelike, Local};

use crate::models::content::BRAND;

/// Calendar year at the moment of the call, in local time
///
/// Under WASM the clock is the browser's `Date`.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Footer copyright text for `year`
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_contains_year() {
        assert_eq!(copyright_line(2031), "© 2031 Bit Burrow Co. All rights reserved.");
    }

    #[test]
    fn test_current_year_matches_clock() {
        let before = Local::now().year();
        let year = current_year();
        let after = Local::now().year();
        assert!(year == before || year == after);
    }
}
