use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use urbanlift_matching::problem::{error::ShipmentError, shipment::ShipmentRecord};

use crate::error::StoreError;

/// Ordered shipment collection shared by the store implementations. Newest records come first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentRecords(Vec<ShipmentRecord>);

impl ShipmentRecords {
    pub fn new(records: Vec<ShipmentRecord>) -> Result<Self, StoreError> {
        let mut seen = FxHashMap::default();
        for (index, record) in records.iter().enumerate() {
            if seen.insert(record.id(), index).is_some() {
                return Err(StoreError::DuplicateId(record.id().to_owned()));
            }
        }

        Ok(ShipmentRecords(records))
    }

    pub fn as_slice(&self) -> &[ShipmentRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ShipmentRecord> {
        self.0.iter().find(|record| record.id() == id)
    }

    pub fn prepend(&mut self, record: ShipmentRecord) -> Result<(), StoreError> {
        if self.get(record.id()).is_some() {
            return Err(StoreError::DuplicateId(record.id().to_owned()));
        }

        self.0.insert(0, record);
        Ok(())
    }

    /// Applies `update` to every record in `ids` on staged copies and only returns the new
    /// collection when all of them succeed. `self` is never modified.
    pub fn staged_update(
        &self,
        ids: &[String],
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<(ShipmentRecords, Vec<ShipmentRecord>), StoreError> {
        let positions = self
            .0
            .iter()
            .enumerate()
            .map(|(index, record)| (record.id(), index))
            .collect::<FxHashMap<_, _>>();

        let mut staged = self.0.clone();
        let mut updated = Vec::with_capacity(ids.len());

        for id in ids {
            let index = *positions
                .get(id.as_str())
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;

            update(&mut staged[index])?;
            updated.push(staged[index].clone());
        }

        Ok((ShipmentRecords(staged), updated))
    }
}
