use std::{fmt, io::Read};
use super::error::*;

/// Stand-alone meta-data for one file listed in the directory section. Locates
/// the file's bytes without reading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
	/// CRC-32 checksum of the file's contents, surfaced as-is. Verification is
	/// left to whatever layer actually reads the bytes.
	pub crc: u32,
	/// Number of preload bytes stored alongside the directory entry
	pub preload_length: u16,
	/// Which archive holds the file's bytes: [`SELF_ARCHIVE_INDEX`](crate::SELF_ARCHIVE_INDEX)
	/// for the directory file itself, otherwise the number of a companion archive.
	/// Opaque to this crate, companion resolution happens outside it.
	pub archive_index: i16,
	/// The location of the file's bytes, as an offset from the beginning of its archive
	pub offset: u32,
	/// The size of the file's bytes, on disk
	pub size: u32,
}

impl DirEntry {
	/// 4(crc) + 2(preload length) + 2(archive index) + 4(offset) + 4(size) + 2(terminator)
	pub const FULL_SIZE: usize = 18;

	/// Whether the file's bytes live in the directory file itself, rather than
	/// in a numbered companion archive.
	#[inline(always)]
	pub fn is_inline(&self) -> bool {
		self.archive_index == crate::SELF_ARCHIVE_INDEX
	}

	/// Given a read handle, will proceed to read and parse bytes into a [`DirEntry`] struct. (de-serialization)
	/// Consumes exactly [`FULL_SIZE`](DirEntry::FULL_SIZE) bytes.
	pub(crate) fn from_handle<T: Read>(mut handle: T) -> InternalResult<DirEntry> {
		let mut buffer: [u8; DirEntry::FULL_SIZE] = [0u8; DirEntry::FULL_SIZE];
		handle.read_exact(&mut buffer)?;

		// Construct entry
		let entry = DirEntry {
			crc: u32::from_le_bytes(buffer[0..4].try_into().unwrap()),
			preload_length: u16::from_le_bytes(buffer[4..6].try_into().unwrap()),
			archive_index: i16::from_le_bytes(buffer[6..8].try_into().unwrap()),
			offset: u32::from_le_bytes(buffer[8..12].try_into().unwrap()),
			size: u32::from_le_bytes(buffer[12..16].try_into().unwrap()),
		};

		// The terminator is the format's structural self-check: a mismatch means
		// the string table and the records have gone out of step
		let terminator = u16::from_le_bytes(buffer[16..18].try_into().unwrap());
		if terminator != crate::ENTRY_TERMINATOR {
			return Err(InternalError::CorruptSource(format!(
				"entry record terminator is {:#06X}, expected {:#06X}",
				terminator,
				crate::ENTRY_TERMINATOR
			)));
		};

		Ok(entry)
	}

	/// Serializes a [`DirEntry`] struct into an array of bytes
	#[cfg(test)]
	pub(crate) fn to_bytes(&self) -> [u8; DirEntry::FULL_SIZE] {
		let mut buffer: [u8; DirEntry::FULL_SIZE] = [0u8; DirEntry::FULL_SIZE];
		buffer[0..4].copy_from_slice(&self.crc.to_le_bytes());
		buffer[4..6].copy_from_slice(&self.preload_length.to_le_bytes());
		buffer[6..8].copy_from_slice(&self.archive_index.to_le_bytes());
		buffer[8..12].copy_from_slice(&self.offset.to_le_bytes());
		buffer[12..16].copy_from_slice(&self.size.to_le_bytes());
		buffer[16..18].copy_from_slice(&crate::ENTRY_TERMINATOR.to_le_bytes());
		buffer
	}
}

impl fmt::Display for DirEntry {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"[DirEntry] archive_index: {}, offset: {}, size: {}, preload_length: {}, crc: {:#010X}",
			self.archive_index, self.offset, self.size, self.preload_length, self.crc
		)
	}
}
