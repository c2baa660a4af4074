use std::{io::Read, str, sync::Arc};

use crate::global::{dir_entry::DirEntry, error::*};
use crate::MAX_SEGMENT_LENGTH;

/// Reads one NUL-terminated path segment into `scratch`, a byte at a time,
/// returning the number of bytes consumed, terminator included. A return of 1
/// is the empty segment, the format's "pop one level" sentinel.
///
/// The cursor advances by exactly the consumed count, failed or not. Running
/// out of buffer before a NUL appears is corruption, not a soft EOF.
fn read_segment<T: Read>(handle: &mut T, scratch: &mut [u8; MAX_SEGMENT_LENGTH]) -> InternalResult<usize> {
	let mut byte = [0u8; 1];

	for consumed in 0..scratch.len() {
		handle.read_exact(&mut byte)?;
		scratch[consumed] = byte[0];

		if byte[0] == 0 {
			return Ok(consumed + 1);
		};
	}

	Err(InternalError::CorruptSource(format!(
		"path segment is missing a terminator within {} bytes",
		MAX_SEGMENT_LENGTH
	)))
}

/// The content of a freshly read segment, terminator excluded.
fn as_segment(scratch: &[u8]) -> InternalResult<&str> {
	str::from_utf8(scratch)
		.map_err(|_| InternalError::CorruptSource(format!("path segment is not valid UTF-8: {:?}", scratch)))
}

/// Decodes the three-level nested string table interleaved with entry records,
/// in a single forward pass.
///
/// The table is self-describing: each level runs until its empty-string
/// sentinel, and an empty *extension* ends the whole directory. Every
/// (extension, directory, name) triple is immediately followed by one
/// [`DirEntry`] record. Entries are returned in exact stream order.
///
/// `capacity` is the record count the directory section could hold at most
/// ([`Header::capacity`](crate::global::header::Header::capacity)); since the section also carries the string table, a
/// conformant source always lists strictly fewer entries. Reaching it means
/// the walker has run off the rails.
pub(crate) fn read_directory<T: Read>(handle: &mut T, capacity: usize) -> InternalResult<Vec<(Arc<str>, DirEntry)>> {
	// `capacity` comes straight from an untrusted header field, so it only
	// hints the allocation, clamped; a hostile length must surface as an Err
	// once the walk runs out of bytes, never as an allocation failure
	let mut entries = Vec::with_capacity(capacity.min(4096));
	let mut scratch = [0u8; MAX_SEGMENT_LENGTH];

	loop {
		let consumed = read_segment(handle, &mut scratch)?;
		if consumed == 1 {
			// no more extensions, the directory is done
			break;
		};

		let extension = as_segment(&scratch[..consumed - 1])?.to_string();

		loop {
			let consumed = read_segment(handle, &mut scratch)?;
			if consumed == 1 {
				// pop back up to the next extension
				break;
			};

			let directory = as_segment(&scratch[..consumed - 1])?.to_string();

			loop {
				let consumed = read_segment(handle, &mut scratch)?;
				if consumed == 1 {
					// pop back up to the next directory
					break;
				};

				let name = as_segment(&scratch[..consumed - 1])?;

				// VPK always joins with forward slashes, whatever the host convention
				let path = format!("{directory}/{name}.{extension}");
				let entry = DirEntry::from_handle(&mut *handle)?;

				if entries.len() >= capacity {
					return Err(InternalError::CorruptSource(format!(
						"directory lists more entries than its section length ({}) can hold",
						capacity * DirEntry::FULL_SIZE
					)));
				};

				entries.push((Arc::from(path.as_str()), entry));
			}
		}
	}

	Ok(entries)
}
