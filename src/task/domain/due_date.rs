//! Due-date parsing for user-supplied text.

use chrono::NaiveDate;

/// Parses a user-supplied due date in `YYYY-MM-DD` form.
///
/// The input is accepted only when it is non-blank and splits into exactly
/// three dash-separated numeric components that name a real calendar date.
/// Every other shape — blank text, too few or too many components,
/// non-numeric components, out-of-range month or day — yields `None` rather
/// than an error: an unparsable due date downgrades silently to "no due
/// date".
#[must_use]
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut components = trimmed.split('-');
    let year: i32 = components.next()?.parse().ok()?;
    let month: u32 = components.next()?.parse().ok()?;
    let day: u32 = components.next()?.parse().ok()?;
    if components.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
