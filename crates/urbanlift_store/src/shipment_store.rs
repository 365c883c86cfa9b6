use urbanlift_matching::problem::{
    error::ShipmentError, shipment::ShipmentRecord, shipment_status::ShipmentStatus,
};

use crate::error::StoreError;

/// Persistence collaborator for shipment records.
///
/// Implementations keep records newest first and apply every mutation atomically: a failing
/// update leaves the store untouched.
pub trait ShipmentStore: Send + Sync {
    fn list(&self) -> Result<Vec<ShipmentRecord>, StoreError>;

    fn get(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError>;

    /// Adds a new record in front of the others.
    fn append(&self, record: ShipmentRecord) -> Result<(), StoreError>;

    /// Applies `update` to each record of `ids` and returns the updated records in the same
    /// order.
    fn update_many(
        &self,
        ids: &[String],
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<Vec<ShipmentRecord>, StoreError>;

    fn update(
        &self,
        id: &str,
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<ShipmentRecord, StoreError> {
        self.update_many(&[id.to_owned()], update)?
            .pop()
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    fn update_status(&self, id: &str, status: ShipmentStatus) -> Result<ShipmentRecord, StoreError> {
        self.update(id, &mut |record| record.set_status(status))
    }
}

impl<S: ShipmentStore + ?Sized> ShipmentStore for std::sync::Arc<S> {
    fn list(&self) -> Result<Vec<ShipmentRecord>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError> {
        (**self).get(id)
    }

    fn append(&self, record: ShipmentRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn update_many(
        &self,
        ids: &[String],
        update: &mut dyn FnMut(&mut ShipmentRecord) -> Result<(), ShipmentError>,
    ) -> Result<Vec<ShipmentRecord>, StoreError> {
        (**self).update_many(ids, update)
    }
}
