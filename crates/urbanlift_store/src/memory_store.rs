use parking_lot::RwLock;
use urbanlift_matching::problem::{error::ShipmentError, shipment::ShipmentRecord};

use crate::{error::StoreError, shipment_records::ShipmentRecords, shipment_store::ShipmentStore};

#[derive(Debug, Default)]
pub struct MemoryShipmentStore {
    records: RwLock<ShipmentRecords>,
}

impl MemoryShipmentStore {
    pub fn new(records: Vec<ShipmentRecord>) -> Result<Self, StoreError> {
        Ok(Self {
            records: RwLock::new(ShipmentRecords::new(records)?),
        })
    }
}

impl ShipmentStore for MemoryShipmentStore {
    fn list(&self) -> Result<Vec<ShipmentRecord>, StoreError> {
        Ok(self.records.read().as_slice().to_vec())
    }

    fn get(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError> {
        Ok(self.records.read().get(id).cloned())
    }

    fn append(&self, record: ShipmentRecord) -> Result<(), StoreError> {
        self.records.write().prepend(record)
    }

    fn update_many(
        &self,
        ids: &[String],
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<Vec<ShipmentRecord>, StoreError> {
        let mut records = self.records.write();
        let (staged, updated) = records.staged_update(ids, update)?;
        *records = staged;

        Ok(updated)
    }
}
