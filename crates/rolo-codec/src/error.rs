//! Error types for the rolo-codec flat-file codec.

use thiserror::Error;

/// A failure of the stream itself. Content problems never surface here —
/// decode reports them per line inside [`crate::Snapshot`].
#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why one persisted line was rejected during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
  #[error("fewer than seven `|`-delimited fields")]
  FieldCount,

  #[error("unparseable or non-past birth date")]
  BadDate,

  #[error("no usable phone entries")]
  NoPhones,

  #[error("mandatory field failed validation")]
  BadContact,
}
