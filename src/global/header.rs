use std::io::Read;
use super::{dir_entry::DirEntry, error::*};

#[derive(Debug)]
pub(crate) struct Header {
	pub magic: u32,
	pub version: u32,
	pub dir_offset: u32,
	pub dir_size: u32,
}

impl Header {
	pub const BASE_SIZE: usize = 16;

	// Data appears in this order
	pub const SIGNATURE_SIZE: usize = 4;

	/// Validates this Header's VERSION and directory section alignment.
	/// The magic has already been checked by [`from_handle`](Header::from_handle),
	/// so every failure here reports a claimed-but-unusable source.
	pub(crate) fn validate(&self) -> InternalResult {
		if self.version != 1 && self.version != 2 {
			return Err(InternalError::UnsupportedArchiveVersion(self.version));
		};

		// A directory section always holds a whole number of entry records
		if self.dir_size as usize % DirEntry::FULL_SIZE != 0 {
			return Err(InternalError::CorruptSource(format!(
				"directory section length ({}) is not a multiple of the entry record size ({})",
				self.dir_size,
				DirEntry::FULL_SIZE
			)));
		};

		Ok(())
	}

	/// Upper bound on the number of entries the directory section can hold.
	/// The true count is driven by the walker's sentinels, this only guards
	/// against a desynchronized stream and sizes allocations.
	pub(crate) fn capacity(&self) -> usize {
		self.dir_size as usize / DirEntry::FULL_SIZE
	}

	pub(crate) fn from_handle<T: Read>(mut handle: T) -> InternalResult<Header> {
		// The magic is read and checked on its own: a mismatch must surface as
		// "not this format" before anything else is consumed from the source
		let mut magic: [u8; Header::SIGNATURE_SIZE] = [0u8; Header::SIGNATURE_SIZE];
		handle.read_exact(&mut magic)?;

		let magic = u32::from_le_bytes(magic);
		if magic != crate::SIGNATURE {
			return Err(InternalError::UnrecognizedSource(magic));
		};

		let mut buffer: [u8; Header::BASE_SIZE - Header::SIGNATURE_SIZE] =
			[0u8; Header::BASE_SIZE - Header::SIGNATURE_SIZE];
		handle.read_exact(&mut buffer)?;

		// Construct header
		Ok(Header {
			magic,
			// Read version, u32 from [u8;4]
			version: u32::from_le_bytes(buffer[0..4].try_into().unwrap()),
			// Read the offset of the directory section, u32 from [u8;4]
			dir_offset: u32::from_le_bytes(buffer[4..8].try_into().unwrap()),
			// Read the byte length of the directory section, u32 from [u8;4]
			dir_size: u32::from_le_bytes(buffer[8..12].try_into().unwrap()),
		})
	}

	#[cfg(test)]
	pub(crate) fn to_bytes(&self) -> [u8; Header::BASE_SIZE] {
		let mut buffer: [u8; Header::BASE_SIZE] = [0u8; Header::BASE_SIZE];
		buffer[0..4].copy_from_slice(&self.magic.to_le_bytes());
		buffer[4..8].copy_from_slice(&self.version.to_le_bytes());
		buffer[8..12].copy_from_slice(&self.dir_offset.to_le_bytes());
		buffer[12..16].copy_from_slice(&self.dir_size.to_le_bytes());
		buffer
	}
}
