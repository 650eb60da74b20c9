//! Memory-mapped read-only access to DSET containers
//!
//! A [`Container`] is a scoped handle over one container file: the file is
//! mapped on open, every dataset access borrows from the mapping, and the
//! mapping is released when the handle is dropped - on every exit path.

use crate::element::Element;
use crate::error::{classify_io, Error, Result};
use dset_core::format::constants::{ENTRY_SIZE, MAX_ENTRY_COUNT};
use dset_core::{validate_payload, ContainerHeader, DirEntry, DsetError, ScalarType};
use hashbrown::HashMap;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// A typed, zero-copy view of one dataset
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a, T> {
    values: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Element> Dataset<'a, T> {
    /// First-axis length
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Second-axis length (1 for rank-1 arrays)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the dataset holds no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All elements in row-major order
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// One first-axis slice
    pub fn row(&self, index: usize) -> Option<&'a [T]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Get an element at the specified position
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }
}

/// Dynamic-typed dataset view over the supported scalar types
#[derive(Debug, Clone, Copy)]
pub enum DatasetRef<'a> {
    F32(Dataset<'a, f32>),
    F64(Dataset<'a, f64>),
    I32(Dataset<'a, i32>),
    I64(Dataset<'a, i64>),
    U32(Dataset<'a, u32>),
    U64(Dataset<'a, u64>),
}

impl DatasetRef<'_> {
    /// First-axis length
    pub fn rows(&self) -> usize {
        match self {
            DatasetRef::F32(d) => d.rows(),
            DatasetRef::F64(d) => d.rows(),
            DatasetRef::I32(d) => d.rows(),
            DatasetRef::I64(d) => d.rows(),
            DatasetRef::U32(d) => d.rows(),
            DatasetRef::U64(d) => d.rows(),
        }
    }

    /// Second-axis length (1 for rank-1 arrays)
    pub fn cols(&self) -> usize {
        match self {
            DatasetRef::F32(d) => d.cols(),
            DatasetRef::F64(d) => d.cols(),
            DatasetRef::I32(d) => d.cols(),
            DatasetRef::I64(d) => d.cols(),
            DatasetRef::U32(d) => d.cols(),
            DatasetRef::U64(d) => d.cols(),
        }
    }

    /// True when the dataset holds no elements
    pub fn is_empty(&self) -> bool {
        match self {
            DatasetRef::F32(d) => d.is_empty(),
            DatasetRef::F64(d) => d.is_empty(),
            DatasetRef::I32(d) => d.is_empty(),
            DatasetRef::I64(d) => d.is_empty(),
            DatasetRef::U32(d) => d.is_empty(),
            DatasetRef::U64(d) => d.is_empty(),
        }
    }

    /// Scalar type of the stored elements
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            DatasetRef::F32(_) => ScalarType::F32,
            DatasetRef::F64(_) => ScalarType::F64,
            DatasetRef::I32(_) => ScalarType::I32,
            DatasetRef::I64(_) => ScalarType::I64,
            DatasetRef::U32(_) => ScalarType::U32,
            DatasetRef::U64(_) => ScalarType::U64,
        }
    }
}

/// Memory-mapped container holding named dense arrays
pub struct Container {
    mmap: Mmap,
    header: ContainerHeader,
    entries: HashMap<String, DirEntry>,
}

impl Container {
    /// Open a container file read-only using memory mapping
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| classify_io(err, path))?;

        // SAFETY: Read-only mapping; the file is treated as immutable while open
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(Error::Io)?;

        let header = ContainerHeader::from_bytes(&mmap)?;

        if header.entry_count > MAX_ENTRY_COUNT {
            return Err(DsetError::CorruptedData.into());
        }

        let expected_dir_size = header
            .entry_count
            .checked_mul(ENTRY_SIZE as u64)
            .ok_or(DsetError::ArraySizeOverflow)?;
        if header.dir_size != expected_dir_size {
            return Err(DsetError::CorruptedData.into());
        }

        let dir_start = header.dir_offset as usize;
        let dir_end = dir_start
            .checked_add(header.dir_size as usize)
            .ok_or(DsetError::ArraySizeOverflow)?;
        if dir_end > mmap.len() {
            return Err(DsetError::CorruptedData.into());
        }

        let mut entries = HashMap::with_capacity(header.entry_count as usize);
        for chunk in mmap[dir_start..dir_end].chunks_exact(ENTRY_SIZE) {
            let entry = DirEntry::from_bytes(chunk)?;

            let data_start = entry.data_offset as usize;
            let data_end = data_start
                .checked_add(entry.data_size as usize)
                .ok_or(DsetError::ArraySizeOverflow)?;
            if data_end > mmap.len() {
                return Err(DsetError::CorruptedData.into());
            }

            let name = entry.name()?.to_string();
            if entries.insert(name, entry).is_some() {
                return Err(DsetError::InvalidEntry.into());
            }
        }

        Ok(Self {
            mmap,
            header,
            entries,
        })
    }

    /// Parsed container header
    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// Number of datasets in the container
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the container holds no datasets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all stored datasets (unordered)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Directory entry for a named dataset
    pub fn entry(&self, name: &str) -> Option<&DirEntry> {
        self.entries.get(name)
    }

    /// Raw payload bytes for an entry (bounds validated at open)
    fn payload(&self, entry: &DirEntry) -> &[u8] {
        let start = entry.data_offset as usize;
        let end = start + entry.data_size as usize;
        &self.mmap[start..end]
    }

    /// Statically typed zero-copy view of a named dataset
    pub fn typed<T: Element>(&self, name: &str) -> Result<Dataset<'_, T>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))?;

        if entry.element_type()? != T::scalar_type() {
            return Err(DsetError::TypeMismatch.into());
        }

        let bytes = self.payload(entry);
        validate_payload(entry, bytes)?;
        let values =
            bytemuck::try_cast_slice(bytes).map_err(|_| DsetError::ArrayAlignment)?;

        Ok(Dataset {
            values,
            rows: entry.row_count(),
            cols: entry.col_count(),
        })
    }

    /// Dynamic-typed zero-copy view of a named dataset
    pub fn dataset(&self, name: &str) -> Result<DatasetRef<'_>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))?;

        Ok(match entry.element_type()? {
            ScalarType::F32 => DatasetRef::F32(self.typed(name)?),
            ScalarType::F64 => DatasetRef::F64(self.typed(name)?),
            ScalarType::I32 => DatasetRef::I32(self.typed(name)?),
            ScalarType::I64 => DatasetRef::I64(self.typed(name)?),
            ScalarType::U32 => DatasetRef::U32(self.typed(name)?),
            ScalarType::U64 => DatasetRef::U64(self.typed(name)?),
        })
    }

    /// Parse the optional JSON attribute region
    #[cfg(feature = "serde")]
    pub fn attrs(&self) -> Result<crate::attrs::Attrs> {
        let Some((offset, size)) = self.header.attrs_region() else {
            return Ok(crate::attrs::Attrs::new());
        };

        let start = offset as usize;
        let end = start
            .checked_add(size as usize)
            .ok_or(DsetError::ArraySizeOverflow)?;
        if end > self.mmap.len() {
            return Err(DsetError::CorruptedData.into());
        }

        crate::attrs::Attrs::from_json_bytes(&self.mmap[start..end])
    }
}
