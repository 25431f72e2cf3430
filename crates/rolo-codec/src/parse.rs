//! Best-effort record parser for the flat-file format.
//!
//! Corruption is recovered at the smallest granularity that keeps the
//! surviving data valid: an unusable phone segment drops just that segment,
//! anything worse drops the line. Every drop is counted in the returned
//! [`Snapshot`] and logged; content problems never abort the decode.

use rolo_core::{Contact, Phone, PhoneType, validate};
use tracing::{debug, warn};

use crate::{SkipReason, SkippedLine, Snapshot};

#[derive(Debug)]
pub(crate) struct ParsedRecord {
  pub contact:        Contact,
  pub dropped_phones: usize,
}

/// Decode every line of `input`. Blank lines are ignored; rejected lines are
/// reported with their 1-based line number and never affect later lines.
pub(crate) fn decode_all(input: &str) -> Snapshot {
  let mut snapshot = Snapshot::default();

  for (idx, line) in input.lines().enumerate() {
    let line_no = idx + 1;
    if line.trim().is_empty() {
      continue;
    }
    match decode_record(line) {
      Ok(parsed) => {
        snapshot.dropped_phones += parsed.dropped_phones;
        snapshot.contacts.push(parsed.contact);
      }
      Err(reason) => {
        warn!(line = line_no, %reason, "skipping malformed record");
        snapshot.skipped.push(SkippedLine {
          line: line_no,
          reason,
        });
      }
    }
  }

  snapshot
}

/// Decode one record line, or say why it cannot be admitted.
pub(crate) fn decode_record(line: &str) -> Result<ParsedRecord, SkipReason> {
  // splitn folds any extra `|` into the final (phone) field, so a stray
  // delimiter inside the phone list corrupts segments, not the whole line.
  let fields: Vec<&str> = line.splitn(7, '|').collect();
  let [name, surname, patronymic, address, date_str, email, phones_str] =
    fields[..]
  else {
    return Err(SkipReason::FieldCount);
  };

  let birth_date = parse_date_field(date_str)?;

  let mut phones = Vec::new();
  let mut dropped_phones = 0usize;
  for segment in phones_str.split(',') {
    if segment.is_empty() {
      continue;
    }
    match parse_phone_segment(segment) {
      Some(p) => phones.push(p),
      None => {
        debug!(segment, "dropping unusable phone entry");
        dropped_phones += 1;
      }
    }
  }
  if phones.is_empty() {
    return Err(SkipReason::NoPhones);
  }

  let mut contact = Contact::new(name, surname, email, phones)
    .map_err(|_| SkipReason::BadContact)?;

  // Optional fields fail independently; the record is still admitted with
  // that field left absent.
  if !patronymic.is_empty() && contact.set_patronymic(Some(patronymic)).is_err()
  {
    debug!(line, "dropping invalid patronymic");
  }
  if !address.is_empty() && contact.set_address(Some(address)).is_err() {
    debug!(line, "dropping invalid address");
  }
  if birth_date.is_some() && contact.set_birth_date(birth_date).is_err() {
    debug!(line, "dropping invalid birth date");
  }

  Ok(ParsedRecord {
    contact,
    dropped_phones,
  })
}

/// Parse the `D.M.Y` date field.
///
/// An empty field means "no birth date"; so does the all-zero form the
/// legacy writer emitted (`00.00.0000`). Anything else must be a real
/// calendar date strictly before today, or the whole line is rejected.
fn parse_date_field(text: &str) -> Result<Option<chrono::NaiveDate>, SkipReason>
{
  let text = text.trim();
  if text.is_empty() {
    return Ok(None);
  }

  let mut parts = text.splitn(3, '.');
  let (Some(d), Some(m), Some(y)) = (parts.next(), parts.next(), parts.next())
  else {
    return Err(SkipReason::BadDate);
  };
  // Bare digits only; integer parsing alone would admit `+`/`-` signs the
  // wire format never writes.
  if [d, m, y]
    .iter()
    .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
  {
    return Err(SkipReason::BadDate);
  }
  let (Ok(day), Ok(month), Ok(year)) =
    (d.parse::<u32>(), m.parse::<u32>(), y.parse::<i32>())
  else {
    return Err(SkipReason::BadDate);
  };

  if day == 0 && month == 0 && year == 0 {
    return Ok(None);
  }

  let date =
    validate::date_from_parts(day, month, year).ok_or(SkipReason::BadDate)?;
  if !validate::is_valid_birth_date(date) {
    return Err(SkipReason::BadDate);
  }
  Ok(Some(date))
}

/// Parse one `TypeName:number` segment. `None` when the segment has no
/// colon, names a type outside {Work, Home, Service}, or carries a
/// malformed number.
fn parse_phone_segment(segment: &str) -> Option<Phone> {
  let (type_str, number) = segment.split_once(':')?;
  let phone_type = type_str.parse::<PhoneType>().ok()?;
  let number = number.trim();
  if !validate::is_valid_phone_number(number) {
    return None;
  }
  Some(Phone::new(phone_type, number))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
