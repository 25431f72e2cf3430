//! The `Contact` aggregate and its fallible setters.
//!
//! Fields are private; every mutation path trims, validates, and either
//! commits or leaves the contact exactly as it was. A contact always carries
//! at least one well-formed phone number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  phone::Phone,
  stats::StatsHandle,
  validate,
};

/// One address-book entry.
///
/// Mandatory fields (name, surname, email, phones) are validated at
/// construction; the optional fields (patronymic, address, birth date) start
/// absent and are attached through their setters.
#[derive(Debug, Serialize, Deserialize)]
pub struct Contact {
  name:       String,
  surname:    String,
  patronymic: Option<String>,
  email:      String,
  address:    Option<String>,
  birth_date: Option<NaiveDate>,
  phones:     Vec<Phone>,
  #[serde(skip)]
  stats:      Option<StatsHandle>,
}

// ─── Construction ────────────────────────────────────────────────────────────

impl Contact {
  /// Build a contact from the four mandatory fields.
  ///
  /// Names are trimmed and checked against the personal-name shape, the
  /// email is normalized (both sides of the first `@` trimmed and rejoined)
  /// and checked, and the phone list must be non-empty with every number
  /// well-formed.
  pub fn new(
    name: &str,
    surname: &str,
    email: &str,
    phones: Vec<Phone>,
  ) -> Result<Self> {
    let name = validated_name(name)?;
    let surname = validated_name(surname)?;
    let email = normalized_email(email)?;
    let phones = validated_phones(phones)?;

    Ok(Self {
      name,
      surname,
      patronymic: None,
      email,
      address: None,
      birth_date: None,
      phones,
      stats: None,
    })
  }

  /// Like [`Contact::new`], but attaches a [`StatsHandle`] that counts this
  /// construction plus every later clone and drop of the contact.
  pub fn new_counted(
    name: &str,
    surname: &str,
    email: &str,
    phones: Vec<Phone>,
    stats: &StatsHandle,
  ) -> Result<Self> {
    let mut contact = Self::new(name, surname, email, phones)?;
    stats.record_constructed();
    contact.stats = Some(stats.clone());
    Ok(contact)
  }
}

// ─── Accessors ───────────────────────────────────────────────────────────────

impl Contact {
  pub fn name(&self) -> &str { &self.name }

  pub fn surname(&self) -> &str { &self.surname }

  pub fn patronymic(&self) -> Option<&str> { self.patronymic.as_deref() }

  pub fn email(&self) -> &str { &self.email }

  pub fn address(&self) -> Option<&str> { self.address.as_deref() }

  pub fn birth_date(&self) -> Option<NaiveDate> { self.birth_date }

  /// Phones in insertion order; never empty.
  pub fn phones(&self) -> &[Phone] { &self.phones }
}

// ─── Setters ─────────────────────────────────────────────────────────────────

impl Contact {
  pub fn set_name(&mut self, raw: &str) -> Result<()> {
    self.name = validated_name(raw)?;
    Ok(())
  }

  pub fn set_surname(&mut self, raw: &str) -> Result<()> {
    self.surname = validated_name(raw)?;
    Ok(())
  }

  /// `None` clears the patronymic; `Some(v)` validates it like a name.
  /// Whether an empty input means "clear" or "invalid" is the caller's call,
  /// made by choosing the variant.
  pub fn set_patronymic(&mut self, raw: Option<&str>) -> Result<()> {
    self.patronymic = match raw {
      None => None,
      Some(v) => Some(validated_name(v)?),
    };
    Ok(())
  }

  /// Normalizes around the first `@` (both sides trimmed, rejoined) before
  /// checking the email shape; the normalized form is what gets stored.
  pub fn set_email(&mut self, raw: &str) -> Result<()> {
    self.email = normalized_email(raw)?;
    Ok(())
  }

  /// `None` clears the birth date; `Some(d)` must be strictly before today.
  pub fn set_birth_date(&mut self, date: Option<NaiveDate>) -> Result<()> {
    if let Some(d) = date
      && !validate::is_valid_birth_date(d)
    {
      return Err(Error::DateNotPast);
    }
    self.birth_date = date;
    Ok(())
  }

  /// Replaces the whole phone list atomically; a partially applied
  /// replacement is never observable.
  pub fn set_phones(&mut self, phones: Vec<Phone>) -> Result<()> {
    self.phones = validated_phones(phones)?;
    Ok(())
  }

  /// `None` clears the address; `Some(v)` trims and rejects empty.
  pub fn set_address(&mut self, raw: Option<&str>) -> Result<()> {
    self.address = match raw {
      None => None,
      Some(v) => {
        let address = v.trim();
        if address.is_empty() {
          return Err(Error::EmptyField);
        }
        Some(address.to_string())
      }
    };
    Ok(())
  }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn validated_name(raw: &str) -> Result<String> {
  let name = raw.trim();
  if name.is_empty() {
    return Err(Error::EmptyField);
  }
  if !validate::is_valid_personal_name(name) {
    return Err(Error::BadPersonalName);
  }
  Ok(name.to_string())
}

fn normalized_email(raw: &str) -> Result<String> {
  let all = raw.trim();
  let Some((local, domain)) = all.split_once('@') else {
    return Err(Error::BadEmail);
  };
  let (local, domain) = (local.trim(), domain.trim());
  if local.is_empty() || domain.is_empty() {
    return Err(Error::BadEmail);
  }
  let normalized = format!("{local}@{domain}");
  if !validate::is_valid_email(&normalized) {
    return Err(Error::BadEmail);
  }
  Ok(normalized)
}

fn validated_phones(phones: Vec<Phone>) -> Result<Vec<Phone>> {
  if phones.is_empty() {
    return Err(Error::NoPhones);
  }
  // Store numbers trimmed, so what the wire format writes is what was
  // admitted and decoding it restores the same value.
  phones
    .into_iter()
    .map(|mut p| {
      let number = p.number.trim();
      if !validate::is_valid_phone_number(number) {
        return Err(Error::BadPhoneNumber);
      }
      if number.len() != p.number.len() {
        p.number = number.to_string();
      }
      Ok(p)
    })
    .collect()
}

// ─── Instrumented lifecycle ──────────────────────────────────────────────────

impl Clone for Contact {
  fn clone(&self) -> Self {
    if let Some(h) = &self.stats {
      h.record_cloned();
    }
    Self {
      name:       self.name.clone(),
      surname:    self.surname.clone(),
      patronymic: self.patronymic.clone(),
      email:      self.email.clone(),
      address:    self.address.clone(),
      birth_date: self.birth_date,
      phones:     self.phones.clone(),
      stats:      self.stats.clone(),
    }
  }
}

impl Drop for Contact {
  fn drop(&mut self) {
    if let Some(h) = &self.stats {
      h.record_dropped();
    }
  }
}

/// Equality over the data fields only; the stats handle is bookkeeping.
impl PartialEq for Contact {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
      && self.surname == other.surname
      && self.patronymic == other.patronymic
      && self.email == other.email
      && self.address == other.address
      && self.birth_date == other.birth_date
      && self.phones == other.phones
  }
}

impl Eq for Contact {}

// ─── Tests ───────────────────────────────────────────────────────────────────
