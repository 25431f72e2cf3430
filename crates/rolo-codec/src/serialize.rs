//! Record serializer for the flat-file format.
//!
//! One `\n`-terminated line per contact, seven `|`-separated fields:
//!
//! ```text
//! name|surname|patronymic|address|DD.MM.YYYY|email|Type1:num1,Type2:num2
//! ```
//!
//! Absent patronymic, address, and birth date are empty fields, never
//! omitted. Output is deterministic in collection order.

use chrono::NaiveDate;
use rolo_core::Contact;

/// `DD.MM.YYYY` with zero-padded day and month; empty when absent.
fn format_date(date: Option<NaiveDate>) -> String {
  match date {
    Some(d) => d.format("%d.%m.%Y").to_string(),
    None => String::new(),
  }
}

fn format_phones(contact: &Contact) -> String {
  contact
    .phones()
    .iter()
    .map(|p| format!("{}:{}", p.phone_type, p.number))
    .collect::<Vec<_>>()
    .join(",")
}

pub(crate) fn encode_record(contact: &Contact) -> String {
  format!(
    "{}|{}|{}|{}|{}|{}|{}",
    contact.name(),
    contact.surname(),
    contact.patronymic().unwrap_or(""),
    contact.address().unwrap_or(""),
    format_date(contact.birth_date()),
    contact.email(),
    format_phones(contact),
  )
}

/// Serialize `contacts` in order, one record per line.
pub(crate) fn encode_all(contacts: &[Contact]) -> String {
  let mut out = String::new();
  for contact in contacts {
    out.push_str(&encode_record(contact));
    out.push('\n');
  }
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
