use std::{
	collections::HashMap,
	io::{Read, Seek, SeekFrom},
	sync::Arc,
};

use super::directory;
use crate::global::{dir_entry::DirEntry, error::*, header::Header};

/// Parses the directory section of a VPK source into a flat path registry.
///
/// Holds only meta-data: paths, offsets and sizes. The underlying handle is
/// kept so the layer that actually reads file contents can
/// [`reclaim`](Archive::into_inner) it once it knows where everything lives.
#[derive(Debug)]
pub struct Archive<T> {
	handle: T,

	// Registry data
	header: Header,
	entries: HashMap<Arc<str>, DirEntry>,
	// Paths in the exact order they appear in the directory section
	order: Vec<Arc<str>>,

	label: Option<String>,
}

impl<T> std::fmt::Display for Archive<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"[Archive] label: {}, version: {}, members: {}",
			self.label.as_deref().unwrap_or("<none>"),
			self.header.version,
			self.order.len(),
		)
	}
}

impl<T> Archive<T>
where
	T: Read + Seek,
{
	/// Parses an [`Archive`] from the given source.
	///
	/// Equivalent to [`open`](Archive::open) with no label and no write intent.
	#[inline(always)]
	pub fn new(handle: T) -> InternalResult<Archive<T>> {
		Archive::open(handle, None, false)
	}

	/// Parses an [`Archive`] from the given source, the full entry point.
	///
	/// `label` is a purely diagnostic name for the source, surfaced by
	/// [`label`](Archive::label) and `Display`. `writable` must be `false`:
	/// the format is read-only here and write intent is rejected outright.
	///
	/// Decoding is one linear pass: validate the header, seek to the
	/// directory section, walk the string table. It succeeds as a whole or
	/// fails as a whole, a partially decoded registry is never observable.
	/// On failure, [`is_unrecognized`](InternalError::is_unrecognized)
	/// separates "not a VPK source" from "a VPK source, but unusable".
	pub fn open(mut handle: T, label: Option<&str>, writable: bool) -> InternalResult<Archive<T>> {
		if writable {
			return Err(InternalError::ReadOnlySource);
		};

		// Start reading from the start of the input
		handle.seek(SeekFrom::Start(0))?;

		let header = Header::from_handle(&mut handle)?;
		header.validate()?;

		// The directory section is the only part of the source visited; a v2
		// trailer after it is simply never reached
		handle.seek(SeekFrom::Start(header.dir_offset as u64))?;
		let listed = directory::read_directory(&mut handle, header.capacity())?;

		// Construct the registry, preserving stream order for enumeration
		let mut entries = HashMap::with_capacity(listed.len());
		let mut order = Vec::with_capacity(listed.len());

		for (path, entry) in listed {
			if entries.insert(path.clone(), entry).is_some() {
				return Err(InternalError::CorruptSource(format!(
					"directory lists the path twice: {path}"
				)));
			};

			order.push(path);
		}

		Ok(Archive {
			handle,
			header,
			entries,
			order,
			label: label.map(str::to_string),
		})
	}
}

impl<T> Archive<T> {
	/// Fetch a [`DirEntry`] from this [`Archive`] by its full path.
	/// Paths are always forward-slash joined: `directory/name.extension`.
	pub fn fetch_entry(&self, path: impl AsRef<str>) -> Option<DirEntry> {
		self.entries.get(path.as_ref()).copied()
	}

	/// Returns an immutable reference to the underlying [`HashMap`]. This hashmap stores [`DirEntry`] values and uses the full paths as keys.
	#[inline(always)]
	pub fn entries(&self) -> &HashMap<Arc<str>, DirEntry> {
		&self.entries
	}

	/// Iterates over all full paths, in the exact order they appear in the source.
	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(|path| path.as_ref())
	}

	/// The number of files listed in the directory section
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// Whether the directory section lists no files at all
	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// The version extracted from the `Header` section of the source, either 1 or 2
	#[inline(always)]
	pub fn version(&self) -> u32 {
		self.header.version
	}

	/// The diagnostic label given to [`open`](Archive::open), if any
	#[inline(always)]
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Consume the [Archive] and return the underlying handle
	pub fn into_inner(self) -> T {
		self.handle
	}
}
