#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

/*!
A decoder for the directory section of Valve Pack (VPK) archives, in pure Rust.

A VPK source starts with a small header, followed by a three-level nested
string table (file extension → directory → file base name) interleaved with
fixed-size entry records. This crate decodes that directory into a flat
registry of `path → (offset, size)` entries. It never reads file *contents*:
resolving companion `_NNN.vpk` archives, preload data and CRC verification are
the concern of whatever layer consumes the registry.

The format is strictly read-only here, and a decode either fully succeeds or
fails as a whole.

### 🀄 Show me some code _dang it!_

```
use std::io::Cursor;
use vpak::prelude::*;

let mut bytes = Vec::new();

// header: signature, version 1, directory at 16, directory length 54
bytes.extend_from_slice(&vpak::SIGNATURE.to_le_bytes());
bytes.extend_from_slice(&1u32.to_le_bytes());
bytes.extend_from_slice(&16u32.to_le_bytes());
bytes.extend_from_slice(&54u32.to_le_bytes());

// one file: models/props/chair.txt
bytes.extend_from_slice(b"txt\0models/props\0chair\0");
bytes.extend_from_slice(&0u32.to_le_bytes()); // crc
bytes.extend_from_slice(&0u16.to_le_bytes()); // preload length
bytes.extend_from_slice(&(-1i16).to_le_bytes()); // archive index
bytes.extend_from_slice(&128u32.to_le_bytes()); // offset
bytes.extend_from_slice(&64u32.to_le_bytes()); // size
bytes.extend_from_slice(&vpak::ENTRY_TERMINATOR.to_le_bytes());
bytes.extend_from_slice(b"\0\0\0"); // name, directory and extension sentinels

let archive = Archive::new(Cursor::new(bytes)).unwrap();
let entry = archive.fetch_entry("models/props/chair.txt").unwrap();

assert_eq!((entry.offset, entry.size), (128, 64));
```
*/


pub(crate) mod global;
pub(crate) mod loader;

/// Magic sequence opening every VPK source, stored little-endian on disk.
pub const SIGNATURE: u32 = 0x55AA1234;

/// Sentinel closing every directory entry record. Any other value in the
/// terminator field means the stream has desynchronized.
pub const ENTRY_TERMINATOR: u16 = 0xFFFF;

/// Maximum byte length of a single path segment, NUL terminator included.
pub const MAX_SEGMENT_LENGTH: usize = 256;

/// Archive index marking data stored in the directory file itself, rather
/// than in a numbered companion archive.
pub const SELF_ARCHIVE_INDEX: i16 = 0x7FFF;

/// Consolidated crate imports.
pub mod prelude {
	pub use crate::global::{dir_entry::DirEntry, error::*};
	pub use crate::loader::archive::Archive;
}

/// Archive reading logic and data-structures, [`Archive`](crate::archive::Archive) and [`DirEntry`](crate::archive::DirEntry)
pub mod archive {
	pub use crate::global::{dir_entry::DirEntry, error::*};
	pub use crate::loader::archive::Archive;
}
