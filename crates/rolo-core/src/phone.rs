//! Phone numbers and their closed set of types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of line a phone number belongs to.
///
/// A closed tag set: every consumer (wire formatting, wire parsing, display)
/// matches exhaustively, so adding a variant is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
  Work,
  Home,
  Service,
}

impl PhoneType {
  /// The wire-format name, as written between `|` and `:` delimiters.
  pub fn as_str(self) -> &'static str {
    match self {
      PhoneType::Work    => "Work",
      PhoneType::Home    => "Home",
      PhoneType::Service => "Service",
    }
  }
}

impl fmt::Display for PhoneType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PhoneType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Work"    => Ok(PhoneType::Work),
      "Home"    => Ok(PhoneType::Home),
      "Service" => Ok(PhoneType::Service),
      other     => Err(Error::UnknownPhoneType(other.to_string())),
    }
  }
}

/// A typed phone number.
///
/// The number is a raw string at construction time; it is validated against
/// the phone shape when admitted into a [`crate::Contact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
  pub phone_type: PhoneType,
  pub number:     String,
}

impl Phone {
  pub fn new(phone_type: PhoneType, number: impl Into<String>) -> Self {
    Self {
      phone_type,
      number: number.into(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
