//! Reader for ILCD zip packages.
//!
//! The reader owns the open archive and a snapshot of its directory listing.
//! Every lookup and enumeration walks that listing in archive order; nothing
//! decoded is cached, each call reads and decodes the entry again.

use super::config::{LookupStrategy, ReaderOptions};
use super::{decode, path};
use crate::common::{Error, Result};
use crate::model::{Contact, DataSet, DataSetKind, Flow, FlowProperty, Method, Process, Source, UnitGroup};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, trace};
use zip::ZipArchive;

/// Tells an enumeration whether to go on with the next data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the next data set
    Continue,
    /// End the enumeration without error
    Stop,
}

/// An open ILCD package.
///
/// Entry reads share the one archive handle, so a reader must not be used
/// from several threads at once; open one reader per thread instead.
///
/// # Examples
///
/// ```no_run
/// use ilcd::package::{Visit, ZipReader};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let reader = ZipReader::open("package.zip")?;
///
/// let flow = reader.get_flow("08a91e70-3ddc-11dd-923d-0050c2490048")?;
/// println!("{}", flow.name("en"));
///
/// reader.each_process(|process| {
///     println!("{}", process.name("en"));
///     Visit::Continue
/// })?;
///
/// reader.close()?;
/// # Ok(())
/// # }
/// ```
pub struct ZipReader<R = File> {
    archive: RefCell<ZipArchive<R>>,
    /// Entry names in archive order
    names: Vec<String>,
    /// Entry positions per data set type, with `LookupStrategy::Indexed`
    index: Option<HashMap<DataSetKind, Vec<usize>>>,
    options: ReaderOptions,
}

impl ZipReader<File> {
    /// Open the package at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ReaderOptions::default())
    }

    /// Open the package at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened or is not a zip
    /// archive.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(path.display().to_string(), e))?;
        let archive =
            ZipArchive::new(file).map_err(|e| Error::open(path.display().to_string(), e))?;
        debug!(path = %path.display(), "opened ILCD package");
        Ok(Self::from_archive(archive, options))
    }
}

impl<R: Read + Seek> ZipReader<R> {
    /// Open a package from any seekable reader with default options.
    pub fn from_reader(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ReaderOptions::default())
    }

    /// Open a package from any seekable reader.
    pub fn from_reader_with_options(reader: R, options: ReaderOptions) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| Error::open("<reader>", e))?;
        Ok(Self::from_archive(archive, options))
    }

    fn from_archive(archive: ZipArchive<R>, options: ReaderOptions) -> Self {
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.name_for_index(i).unwrap_or_default().to_string())
            .collect();

        let index = match options.lookup {
            LookupStrategy::Scan => None,
            LookupStrategy::Indexed => Some(build_index(&names)),
        };

        debug!(entries = names.len(), lookup = ?options.lookup, "read package directory");

        Self {
            archive: RefCell::new(archive),
            names,
            index,
            options,
        }
    }

    /// Close the package.
    ///
    /// Values returned by earlier calls stay valid; they do not borrow from
    /// the archive.
    pub fn close(self) -> Result<()> {
        debug!(entries = self.names.len(), "closed ILCD package");
        drop(self.archive.into_inner());
        Ok(())
    }

    /// Options the reader was opened with.
    #[inline]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Number of entries, including directories and non data set files.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All entry names in archive order.
    #[inline]
    pub fn entry_names(&self) -> &[String] {
        &self.names
    }

    /// Names of the entries of the given kind, in archive order.
    pub fn paths(&self, kind: DataSetKind) -> Vec<&str> {
        self.positions(kind)
            .iter()
            .map(|&i| self.names[i].as_str())
            .collect()
    }

    /// Positions of the entries of `kind`, in archive order.
    fn positions(&self, kind: DataSetKind) -> Cow<'_, [usize]> {
        match &self.index {
            Some(index) => Cow::Borrowed(index.get(&kind).map(Vec::as_slice).unwrap_or_default()),
            None => Cow::Owned(
                self.names
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| path::is_data_set_path(kind, name))
                    .map(|(i, _)| i)
                    .collect(),
            ),
        }
    }

    /// First entry of `kind` whose path contains `uuid`.
    fn find(&self, kind: DataSetKind, uuid: &str) -> Option<usize> {
        match &self.index {
            Some(index) => index
                .get(&kind)?
                .iter()
                .copied()
                .find(|&i| self.names[i].contains(uuid)),
            None => self
                .names
                .iter()
                .position(|name| path::matches_uuid(kind, name, uuid)),
        }
    }

    fn find_or_not_found(&self, kind: DataSetKind, uuid: &str) -> Result<usize> {
        self.find(kind, uuid).ok_or_else(|| {
            debug!(%kind, uuid, "data set not found");
            Error::NotFound {
                kind,
                uuid: uuid.to_string(),
            }
        })
    }

    /// Read the complete content of the entry at `index`.
    fn read_at(&self, index: usize) -> Result<Vec<u8>> {
        let name = &self.names[index];
        let mut archive = self.archive.borrow_mut();
        let file = archive
            .by_index(index)
            .map_err(|e| Error::from_entry_zip_error(name, e))?;
        let size = file.size();
        decode::read_raw(name, file, size)
    }

    fn decode_at<T: DataSet>(&self, index: usize) -> Result<T> {
        let name = &self.names[index];
        trace!(entry = %name, kind = %T::KIND, "decoding data set");
        let data = self.read_at(index)?;
        decode::decode_entry(name, &data)
    }

    /// Get the data set of type `T` with the given UUID.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no entry of that type contains `uuid` in its
    /// path; [`Error::Io`] or [`Error::Decode`] if the first matching entry
    /// cannot be read or decoded.
    pub fn get<T: DataSet>(&self, uuid: &str) -> Result<T> {
        let index = self.find_or_not_found(T::KIND, uuid)?;
        self.decode_at(index)
    }

    /// Get the raw document of the data set of `kind` with the given UUID.
    pub fn get_data(&self, kind: DataSetKind, uuid: &str) -> Result<Vec<u8>> {
        let index = self.find_or_not_found(kind, uuid)?;
        self.read_at(index)
    }

    /// Decode every data set of type `T` in archive order and pass it to
    /// `visit`.
    ///
    /// The enumeration ends when `visit` returns [`Visit::Stop`] or at the
    /// first entry that cannot be read or decoded; that error is returned
    /// and no later entry is visited.
    pub fn each<T, F>(&self, mut visit: F) -> Result<()>
    where
        T: DataSet,
        F: FnMut(T) -> Visit,
    {
        for (count, &index) in self.positions(T::KIND).iter().enumerate() {
            let data_set = self.decode_at::<T>(index).inspect_err(|e| {
                debug!(kind = %T::KIND, visited = count, error = %e, "enumeration aborted");
            })?;
            if visit(data_set) == Visit::Stop {
                debug!(kind = %T::KIND, visited = count + 1, "enumeration stopped by visitor");
                break;
            }
        }
        Ok(())
    }

    /// Pass the name and content of every entry, in archive order, to `visit`.
    ///
    /// The walk ends at the first read failure or the first error returned
    /// by `visit`; either is returned to the caller.
    pub fn each_entry<F, E>(&self, mut visit: F) -> std::result::Result<(), E>
    where
        F: FnMut(&str, &[u8]) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        for (index, name) in self.names.iter().enumerate() {
            let data = self.read_at(index)?;
            visit(name, &data)?;
        }
        Ok(())
    }

    /// Get the process with the given UUID.
    pub fn get_process(&self, uuid: &str) -> Result<Process> {
        self.get(uuid)
    }

    /// Get the raw process document with the given UUID.
    pub fn get_process_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::Process, uuid)
    }

    /// Visit every process of the package.
    pub fn each_process<F: FnMut(Process) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the flow with the given UUID.
    pub fn get_flow(&self, uuid: &str) -> Result<Flow> {
        self.get(uuid)
    }

    /// Get the raw flow document with the given UUID.
    pub fn get_flow_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::Flow, uuid)
    }

    /// Visit every flow of the package.
    pub fn each_flow<F: FnMut(Flow) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the flow property with the given UUID.
    pub fn get_flow_property(&self, uuid: &str) -> Result<FlowProperty> {
        self.get(uuid)
    }

    /// Get the raw flow property document with the given UUID.
    pub fn get_flow_property_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::FlowProperty, uuid)
    }

    /// Visit every flow property of the package.
    pub fn each_flow_property<F: FnMut(FlowProperty) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the unit group with the given UUID.
    pub fn get_unit_group(&self, uuid: &str) -> Result<UnitGroup> {
        self.get(uuid)
    }

    /// Get the raw unit group document with the given UUID.
    pub fn get_unit_group_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::UnitGroup, uuid)
    }

    /// Visit every unit group of the package.
    pub fn each_unit_group<F: FnMut(UnitGroup) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the source with the given UUID.
    pub fn get_source(&self, uuid: &str) -> Result<Source> {
        self.get(uuid)
    }

    /// Get the raw source document with the given UUID.
    pub fn get_source_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::Source, uuid)
    }

    /// Visit every source of the package.
    pub fn each_source<F: FnMut(Source) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the contact with the given UUID.
    pub fn get_contact(&self, uuid: &str) -> Result<Contact> {
        self.get(uuid)
    }

    /// Get the raw contact document with the given UUID.
    pub fn get_contact_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::Contact, uuid)
    }

    /// Visit every contact of the package.
    pub fn each_contact<F: FnMut(Contact) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }

    /// Get the LCIA method with the given UUID.
    pub fn get_method(&self, uuid: &str) -> Result<Method> {
        self.get(uuid)
    }

    /// Get the raw LCIA method document with the given UUID.
    pub fn get_method_data(&self, uuid: &str) -> Result<Vec<u8>> {
        self.get_data(DataSetKind::Method, uuid)
    }

    /// Visit every LCIA method of the package.
    pub fn each_method<F: FnMut(Method) -> Visit>(&self, visit: F) -> Result<()> {
        self.each(visit)
    }
}

impl<R> std::fmt::Debug for ZipReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipReader")
            .field("entries", &self.names.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Group entry positions by every kind whose path predicate they satisfy.
fn build_index(names: &[String]) -> HashMap<DataSetKind, Vec<usize>> {
    let mut index: HashMap<DataSetKind, Vec<usize>> = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        for kind in DataSetKind::ALL {
            if path::is_data_set_path(kind, name) {
                index.entry(kind).or_default().push(i);
            }
        }
    }
    index
}
