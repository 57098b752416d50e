/// Error type for the [`SkipMap`](crate::SkipMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  /// Indicates that no entry with the requested key exists in the skipmap.
  KeyNotFound,

  /// Indicates that the requested operation is not supported by the skipmap.
  /// The payload names the operation.
  NotSupported(&'static str),
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::KeyNotFound => write!(f, "key not found in the skipmap"),
      Self::NotSupported(op) => write!(f, "{op} is not supported by the skipmap"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
