use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use parking_lot::RwLock;
use tempfile::NamedTempFile;
use tracing::debug;
use urbanlift_matching::problem::{error::ShipmentError, shipment::ShipmentRecord};

use crate::{error::StoreError, shipment_records::ShipmentRecords, shipment_store::ShipmentStore};

/// Shipment store backed by a single JSON array on disk.
///
/// The file is read once when the store is opened and rewritten in full after every
/// mutation. Each write goes to a sibling temporary file that is then renamed over the store,
/// so the file on disk is always a complete snapshot. Memory is only updated once the write
/// succeeded.
#[derive(Debug)]
pub struct JsonFileShipmentStore {
    path: PathBuf,
    records: RwLock<ShipmentRecords>,
}

impl JsonFileShipmentStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let records = match File::open(&path) {
            Ok(file) => {
                let records: Vec<ShipmentRecord> = serde_json::from_reader(BufReader::new(file))
                    .map_err(|source| StoreError::Malformed {
                        path: path.clone(),
                        source,
                    })?;
                ShipmentRecords::new(records)?
            }
            Err(error) if error.kind() == ErrorKind::NotFound => ShipmentRecords::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!(path = %path.display(), records = records.len(), "shipment store opened");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &ShipmentRecords) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;

        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)?;
        drop(writer);

        file.persist(&self.path).map_err(|error| io_error(error.error))?;

        debug!(path = %self.path.display(), records = records.len(), "shipment store written");

        Ok(())
    }
}

impl ShipmentStore for JsonFileShipmentStore {
    fn list(&self) -> Result<Vec<ShipmentRecord>, StoreError> {
        Ok(self.records.read().as_slice().to_vec())
    }

    fn get(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError> {
        Ok(self.records.read().get(id).cloned())
    }

    fn append(&self, record: ShipmentRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let mut staged = records.clone();
        staged.prepend(record)?;

        self.persist(&staged)?;
        *records = staged;

        Ok(())
    }

    fn update_many(
        &self,
        ids: &[String],
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<Vec<ShipmentRecord>, StoreError> {
        let mut records = self.records.write();
        let (staged, updated) = records.staged_update(ids, update)?;

        self.persist(&staged)?;
        *records = staged;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::{NamedTempFile, TempDir};
    use urbanlift_matching::problem::shipment_status::ShipmentStatus;

    use super::*;
    use crate::test_utils;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileShipmentStore::open(dir.path().join("shipments.json")).unwrap();

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipments.json");

        {
            let store = JsonFileShipmentStore::open(&path).unwrap();
            store.append(test_utils::create_shipment("1")).unwrap();
            store.append(test_utils::create_shipment("2")).unwrap();
            store.update_status("1", ShipmentStatus::Delivered).unwrap();
        }

        let store = JsonFileShipmentStore::open(&path).unwrap();
        let records = store.list().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "2");
        assert_eq!(records[1].status(), ShipmentStatus::Delivered);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = JsonFileShipmentStore::open(file.path());

        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_rejected_update_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipments.json");
        let store = JsonFileShipmentStore::open(&path).unwrap();
        store
            .append(test_utils::create_shipment_with_status(
                "1",
                ShipmentStatus::Delivered,
            ))
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(store.update_status("1", ShipmentStatus::Pending).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipments.json");
        let store = JsonFileShipmentStore::open(&path).unwrap();

        store.append(test_utils::create_shipment("1")).unwrap();
        store.append(test_utils::create_shipment("2")).unwrap();

        let entries = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect::<Vec<_>>();
        assert_eq!(entries, vec![std::ffi::OsString::from("shipments.json")]);
        let reopened = JsonFileShipmentStore::open(&path).unwrap();
        assert_eq!(reopened.list().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_write_keeps_file_and_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipments.json");
        let store = JsonFileShipmentStore::open(&path).unwrap();
        store.append(test_utils::create_shipment("1")).unwrap();

        // The rename target turns into a non-empty directory, so the write cannot land.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"").unwrap();

        let result = store.append(test_utils::create_shipment("2"));

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(store.list().unwrap().len(), 1);
        assert!(path.join("keep").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
