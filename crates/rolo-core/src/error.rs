//! Error types for `rolo-core`.

use thiserror::Error;

/// Why a candidate field value was rejected.
///
/// Every setter on [`crate::Contact`] is total: on `Err` the contact is left
/// exactly as it was, with no partial write observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("value is empty after trimming")]
  EmptyField,

  #[error("personal name does not match the expected shape")]
  BadPersonalName,

  #[error("email address does not match the expected shape")]
  BadEmail,

  #[error("birth date is not strictly in the past")]
  DateNotPast,

  #[error("a contact must have at least one phone")]
  NoPhones,

  #[error("phone number does not match the expected format")]
  BadPhoneNumber,

  #[error("unknown phone type: {0:?}")]
  UnknownPhoneType(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
