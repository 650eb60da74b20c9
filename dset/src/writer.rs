//! Synchronous writer for DSET container files
//!
//! The builder accumulates named arrays in memory, computes the aligned
//! file layout, and writes header, directory, payloads, and attributes in
//! one pass.

use crate::element::Element;
use crate::error::{classify_io, Error, Result};
use dset_core::format::constants::{ALIGNMENT_BOUNDARY, ENTRY_SIZE, HEADER_SIZE};
use dset_core::{ContainerHeader, DirEntry, DsetError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Align a file offset up to the next alignment boundary
pub(crate) const fn align_up(offset: u64) -> u64 {
    let align = ALIGNMENT_BOUNDARY as u64;
    offset.div_ceil(align) * align
}

struct PendingDataset {
    entry: DirEntry,
    data: Vec<u8>,
}

/// Builder that accumulates named arrays and writes a container file
pub struct ContainerBuilder {
    datasets: Vec<PendingDataset>,
    #[cfg(feature = "serde")]
    attrs: crate::attrs::Attrs,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            datasets: Vec::new(),
            #[cfg(feature = "serde")]
            attrs: crate::attrs::Attrs::new(),
        }
    }

    /// Add a rank-2 array stored in row-major order
    pub fn add_matrix<T: Element>(
        self,
        name: &str,
        rows: usize,
        cols: usize,
        values: &[T],
    ) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(DsetError::ArraySizeOverflow)?;
        if expected != values.len() {
            return Err(DsetError::InvalidEntry.into());
        }

        let entry = DirEntry::new(name, T::scalar_type(), 2, rows as u64, cols as u64)?;
        self.push(entry, values)
    }

    /// Add a rank-1 array (a column of single-value rows when exported)
    pub fn add_vector<T: Element>(self, name: &str, values: &[T]) -> Result<Self> {
        let entry = DirEntry::new(name, T::scalar_type(), 1, values.len() as u64, 1)?;
        self.push(entry, values)
    }

    /// Set a container attribute
    #[cfg(feature = "serde")]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    fn push<T: Element>(mut self, mut entry: DirEntry, values: &[T]) -> Result<Self> {
        let name = entry.name()?;
        if self
            .datasets
            .iter()
            .any(|ds| ds.entry.name() == Ok(name))
        {
            return Err(DsetError::InvalidEntry.into());
        }

        let mut data = Vec::with_capacity(values.len() * T::size_bytes());
        for &value in values {
            data.extend_from_slice(&value.to_le_bytes());
        }
        entry.data_size = data.len() as u64;

        self.datasets.push(PendingDataset { entry, data });
        Ok(self)
    }

    /// Write the container to disk, creating or overwriting the file
    pub fn write_to<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Layout: header | directory | aligned payloads | attributes
        let dir_offset = HEADER_SIZE as u64;
        let dir_size = (self.datasets.len() * ENTRY_SIZE) as u64;

        let mut cursor = dir_offset + dir_size;
        for ds in &mut self.datasets {
            cursor = align_up(cursor);
            ds.entry.data_offset = cursor;
            cursor += ds.entry.data_size;
        }

        let mut header = ContainerHeader::new();
        header.entry_count = self.datasets.len() as u64;
        header.dir_offset = dir_offset;
        header.dir_size = dir_size;

        #[cfg(feature = "serde")]
        let attrs_bytes = if self.attrs.is_empty() {
            None
        } else {
            let bytes = self.attrs.to_json_vec()?;
            let offset = align_up(cursor);
            header.set_attrs_region(offset, bytes.len() as u64);
            Some((offset, bytes))
        };

        let file = File::create(path).map_err(|err| classify_io(err, path))?;
        let mut out = BufWriter::new(file);

        out.write_all(&header.to_bytes())?;
        let mut pos = HEADER_SIZE as u64;

        for ds in &self.datasets {
            out.write_all(&ds.entry.to_bytes())?;
            pos += ENTRY_SIZE as u64;
        }

        for ds in &self.datasets {
            write_padding(&mut out, ds.entry.data_offset, pos)?;
            out.write_all(&ds.data)?;
            pos = ds.entry.data_offset + ds.entry.data_size;
        }

        #[cfg(feature = "serde")]
        if let Some((offset, bytes)) = attrs_bytes {
            write_padding(&mut out, offset, pos)?;
            out.write_all(&bytes)?;
        }

        out.flush().map_err(Error::Io)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_padding<W: Write>(out: &mut W, target_offset: u64, current_pos: u64) -> Result<()> {
    if target_offset > current_pos {
        let padding = vec![0u8; (target_offset - current_pos) as usize];
        out.write_all(&padding)?;
    }
    Ok(())
}
