//! Field shapes and the calendar rule for birth dates.
//!
//! Pure predicates with no side effects; the [`crate::Contact`] setters and
//! the flat-file codec both route through these.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::phone::Phone;

// ─── Compiled shapes ─────────────────────────────────────────────────────────

/// One leading alphabetic character, then zero or more alphanumeric / space /
/// hyphen characters, ending alphanumeric. Single-character names are fine;
/// leading or trailing spaces and hyphens are not.
static PERSONAL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\p{Alphabetic}(?:[\p{Alphabetic}\p{N} -]*[\p{Alphabetic}\p{N}])?$")
    .expect("personal-name regex must compile")
});

/// `local(.local)*@domain(.domain)+` with alphanumeric segments. The domain
/// needs at least one dot, so a bare `user@host` is rejected.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)*@[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)+$")
    .expect("email regex must compile")
});

/// Russian-style numbers: `+7` or `8`, then ten digits, or a `(...)` 3-digit
/// area code followed by seven digits or the `XXX-XX-XX` dash grouping.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(?:\+7|8)(?:\d{10}|\(\d{3}\)\d{7}|\(\d{3}\)\d{3}-\d{2}-\d{2})$")
    .expect("phone regex must compile")
});

// ─── Shape predicates ────────────────────────────────────────────────────────

pub fn is_valid_personal_name(name: &str) -> bool {
  PERSONAL_NAME_RE.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool { EMAIL_RE.is_match(email) }

/// Trims the candidate first; the empty string always fails.
pub fn is_valid_phone_number(raw: &str) -> bool {
  let number = raw.trim();
  !number.is_empty() && PHONE_RE.is_match(number)
}

/// A usable phone list: non-empty, every number well-formed.
pub fn is_valid_phones(phones: &[Phone]) -> bool {
  !phones.is_empty()
    && phones.iter().all(|p| is_valid_phone_number(&p.number))
}

// ─── Calendar rule ───────────────────────────────────────────────────────────

/// Build a calendar date from day/month/year parts.
///
/// `None` when the parts do not name a real Gregorian date: month outside
/// [1, 12], day outside [1, days-in-month] with February 29 only in leap
/// years (divisible by 4, not by 100 unless also by 400).
pub fn date_from_parts(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(year, month, day)
}

/// Strictly earlier than `today`; the same calendar day is rejected.
pub fn is_past_date(date: NaiveDate, today: NaiveDate) -> bool { date < today }

/// A plausible birth date: a real calendar date strictly before today.
pub fn is_valid_birth_date(date: NaiveDate) -> bool {
  is_past_date(date, Local::now().date_naive())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
