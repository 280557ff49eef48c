//! Banner prefixed to generated `.strings` files.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Width of the banner's opening and closing lines.
pub const BANNER_WIDTH: usize = 79;

pub const GENERATOR_LINE: &str = "Generated by lprojgen from the translation source.";
pub const DO_NOT_EDIT_LINE: &str =
    "Do not edit manually: changes will be overwritten on the next export.";

/// Builds the banner lines, stamped with the current time when `print_date` is set.
pub fn build(print_date: bool) -> Vec<String> {
    let now = print_date.then(OffsetDateTime::now_utc);
    build_at(now)
}

/// Builds the banner lines, with a `Generated on` line when `date` is given.
pub fn build_at(date: Option<OffsetDateTime>) -> Vec<String> {
    let mut lines = vec![
        format!("/{}", "*".repeat(BANNER_WIDTH - 1)),
        format!(" * {GENERATOR_LINE}"),
        format!(" * {DO_NOT_EDIT_LINE}"),
    ];
    if let Some(stamp) = date.and_then(timestamp) {
        lines.push(format!(" * Generated on {stamp}"));
    }
    lines.push(format!(" {}/", "*".repeat(BANNER_WIDTH - 2)));
    lines.push(String::new());
    lines
}

/// RFC 3339 rendering of `date`, or `None` for dates it cannot represent.
pub fn timestamp(date: OffsetDateTime) -> Option<String> {
    date.format(&Rfc3339).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_without_date() {
        let lines = build(false);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].len(), BANNER_WIDTH);
        assert_eq!(lines[3].len(), BANNER_WIDTH);
        assert!(lines[0].starts_with("/*"));
        assert!(lines[3].ends_with("*/"));
        assert!(lines[4].is_empty());
        assert!(lines.iter().all(|line| !line.contains("Generated on")));
    }

    #[test]
    fn test_banner_with_date() {
        let date = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let lines = build_at(Some(date));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], " * Generated on 2023-11-14T22:13:20Z");
        assert!(lines[4].ends_with("*/"));
    }

    #[test]
    fn test_banner_is_stable_without_date() {
        assert_eq!(build(false), build(false));
        assert!(build(true).iter().any(|line| line.contains("Generated on")));
    }
}
