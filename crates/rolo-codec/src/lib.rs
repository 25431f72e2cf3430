//! Line-oriented flat-file codec for Rolo contacts.
//!
//! Serializes a caller-owned collection of [`Contact`]s into a deterministic
//! `|`-delimited text form and parses it back, tolerating corruption by
//! skipping lines (or single phone entries) rather than failing the load.
//! Pure synchronous; the codec neither owns nor caches contacts.
//!
//! # Quick start
//!
//! ```no_run
//! use rolo_codec::{load, save};
//!
//! let snapshot = load("contacts.txt").unwrap();
//! println!(
//!   "{} contacts, {} lines skipped",
//!   snapshot.contacts.len(),
//!   snapshot.skipped.len()
//! );
//! save("contacts.txt", &snapshot.contacts).unwrap();
//! ```

use std::{fs, io, path::Path};

use rolo_core::Contact;

pub mod error;
mod parse;
mod serialize;

pub use error::{Error, Result, SkipReason};

// ─── Public types ────────────────────────────────────────────────────────────

/// The outcome of a decode: everything that was admitted, plus what was
/// dropped and why. Content corruption lands here, never in an `Err`.
#[derive(Debug, Default)]
pub struct Snapshot {
  /// Admitted contacts, in file order.
  pub contacts:       Vec<Contact>,
  /// Lines rejected outright, with their 1-based numbers.
  pub skipped:        Vec<SkippedLine>,
  /// Phone segments dropped from lines that were still admitted.
  pub dropped_phones: usize,
}

/// One rejected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
  pub line:   usize,
  pub reason: SkipReason,
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Serialize `contacts` in collection order, one record per `\n`-terminated
/// line. Deterministic: equal inputs produce byte-identical output.
pub fn encode(contacts: &[Contact]) -> String {
  serialize::encode_all(contacts)
}

/// Decode records from `input`. See [`Snapshot`] for how corruption is
/// reported; this function itself cannot fail.
pub fn decode(input: &str) -> Snapshot { parse::decode_all(input) }

/// Write `contacts` to `path`, creating or truncating the file.
///
/// Fails only when the destination cannot be opened or written; there is no
/// partial-write detection beyond what the OS reports.
pub fn save(path: impl AsRef<Path>, contacts: &[Contact]) -> Result<()> {
  fs::write(path, encode(contacts))?;
  Ok(())
}

/// Read and decode `path`. A missing or unopenable source means "no data
/// yet": an empty [`Snapshot`] and `Ok`, never an error. Failures other
/// than a missing file are still logged.
pub fn load(path: impl AsRef<Path>) -> Result<Snapshot> {
  let path = path.as_ref();
  let input = match fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      if e.kind() != io::ErrorKind::NotFound {
        tracing::warn!(path = %path.display(), error = %e, "treating unreadable source as empty");
      }
      return Ok(Snapshot::default());
    }
  };
  Ok(decode(&input))
}

// ─── Round-trip tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod roundtrip_tests {
  use rolo_core::{Phone, PhoneType};

  use super::*;

  fn sample() -> Vec<Contact> {
    let mut a = Contact::new(
      "Ivan",
      "Petrov",
      "ivan@example.com",
      vec![
        Phone::new(PhoneType::Work, "+79991234567"),
        Phone::new(PhoneType::Home, "8(495)123-45-67"),
      ],
    )
    .unwrap();
    a.set_patronymic(Some("Ivanovich")).unwrap();
    a.set_address(Some("Moscow, Tverskaya 1")).unwrap();
    a.set_birth_date(chrono::NaiveDate::from_ymd_opt(1990, 3, 15))
      .unwrap();

    let b = Contact::new(
      "Anna",
      "Smirnova",
      "anna@mail.ru",
      vec![Phone::new(PhoneType::Service, "89991112233")],
    )
    .unwrap();

    vec![a, b]
  }

  #[test]
  fn encode_then_decode_restores_every_field() {
    let contacts = sample();
    let snap = decode(&encode(&contacts));
    assert!(snap.skipped.is_empty());
    assert_eq!(snap.dropped_phones, 0);
    assert_eq!(snap.contacts, contacts);
  }

  #[test]
  fn absent_birth_date_round_trips() {
    let contacts = sample();
    assert!(contacts[1].birth_date().is_none());
    let snap = decode(&encode(&contacts));
    assert!(snap.contacts[1].birth_date().is_none());
  }

  #[test]
  fn padded_phone_number_round_trips() {
    let c = Contact::new(
      "Ivan",
      "Petrov",
      "ivan@example.com",
      vec![Phone::new(PhoneType::Work, " +79991234567 ")],
    )
    .unwrap();
    let snap = decode(&encode(std::slice::from_ref(&c)));
    assert_eq!(snap.contacts, vec![c]);
  }

  #[test]
  fn collection_order_is_preserved() {
    let contacts = sample();
    let snap = decode(&encode(&contacts));
    assert_eq!(snap.contacts[0].name(), "Ivan");
    assert_eq!(snap.contacts[1].name(), "Anna");
  }

  #[test]
  fn encoding_is_deterministic() {
    let contacts = sample();
    assert_eq!(encode(&contacts), encode(&contacts));
  }
}

// ─── File-backed tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod file_tests {
  use rolo_core::{Phone, PhoneType};

  use super::*;

  fn one_contact() -> Vec<Contact> {
    vec![
      Contact::new(
        "Ivan",
        "Petrov",
        "ivan@example.com",
        vec![Phone::new(PhoneType::Work, "+79991234567")],
      )
      .unwrap(),
    ]
  }

  #[test]
  fn save_then_load_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");

    let contacts = one_contact();
    save(&path, &contacts).unwrap();
    let snap = load(&path).unwrap();

    assert_eq!(snap.contacts, contacts);
    assert!(snap.skipped.is_empty());
  }

  #[test]
  fn loading_a_missing_path_yields_an_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snap = load(dir.path().join("does-not-exist.txt")).unwrap();
    assert!(snap.contacts.is_empty());
    assert!(snap.skipped.is_empty());
  }

  #[test]
  fn loading_an_unopenable_source_yields_an_empty_snapshot() {
    // A directory cannot be read as a contacts file; that is "no data
    // yet", not an error.
    let dir = tempfile::tempdir().unwrap();
    let snap = load(dir.path()).unwrap();
    assert!(snap.contacts.is_empty());
    assert!(snap.skipped.is_empty());
  }

  #[test]
  fn save_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("contacts.txt");
    assert!(matches!(save(&path, &one_contact()), Err(Error::Io(_))));
  }

  #[test]
  fn save_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");

    save(&path, &one_contact()).unwrap();
    save(&path, &[]).unwrap();

    let snap = load(&path).unwrap();
    assert!(snap.contacts.is_empty());
  }

  #[test]
  fn corrupted_file_loads_the_surviving_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");

    let mut text = encode(&one_contact());
    text.push_str("corrupted line without delimiters\n");
    text.push_str("Anna|Smirnova||||anna@mail.ru|Home:89991112233\n");
    std::fs::write(&path, text).unwrap();

    let snap = load(&path).unwrap();
    assert_eq!(snap.contacts.len(), 2);
    assert_eq!(snap.skipped.len(), 1);
    assert_eq!(snap.skipped[0].line, 2);
    assert_eq!(snap.skipped[0].reason, SkipReason::FieldCount);
  }
}
