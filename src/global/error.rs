use std::io;
use thiserror::Error;

/// Internal `Result` type alias used by `vpak`. Basically equal to: `Result<T, InternalError>`
pub type InternalResult<T = ()> = Result<T, InternalError>;

/// All errors manifestable within `vpak` collected into a neat enum
#[derive(Debug, Error)]
pub enum InternalError {
	/// thin wrapper over [io::Error](std::io::Error), captures all IO errors
	#[error("[VpakError::IOError] {0}")]
	IOError(#[from] io::Error),
	/// the source does not open with the VPK [`SIGNATURE`](crate::SIGNATURE); it belongs to some other format, contains the magic actually found
	#[error("[VpakError::UnrecognizedSource] Unknown signature: {:#010X}, expected {:#010X}. Not a VPK source", .0, crate::SIGNATURE)]
	UnrecognizedSource(u32),
	/// the signature matched but the archive version is neither 1 nor 2, contains the offending version
	#[error("[VpakError::UnsupportedArchiveVersion] The provided source has version: {0}. Only VPK versions 1 and 2 are supported")]
	UnsupportedArchiveVersion(u32),
	/// the signature matched but the directory section is structurally invalid, hinting at corruption or a desynchronized stream
	#[error("[VpakError::CorruptSource] {0}")]
	CorruptSource(String),
	/// an attempt was made to open an archive with write intent, VPK sources are strictly read-only
	#[error("[VpakError::ReadOnlySource] VPK archives cannot be opened for writing")]
	ReadOnlySource,
}

impl InternalError {
	/// Whether this failure occurred before the source was claimed as a VPK archive.
	///
	/// Only a signature mismatch leaves the source unclaimed: archive dispatch
	/// may probe other format handlers iff this returns `true`. Every other
	/// variant means the source *is* a VPK archive, just an unusable one.
	pub fn is_unrecognized(&self) -> bool {
		matches!(self, InternalError::UnrecognizedSource(_))
	}
}
