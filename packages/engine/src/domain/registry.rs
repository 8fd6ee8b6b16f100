//! ElementRegistry - ordered element records shared by layout and simulation
//!
//! Index `i` is the i-th physical child in traversal order, and after world
//! creation it is also the i-th body. Once sealed, the registry only allows
//! in-place field updates; inserting or removing would desynchronize the
//! index-to-body binding, so those calls are rejected.

use tracing::warn;

use crate::core::error::{PhysicsError, PhysicsResult};

use super::record::ElementPhysicsRecord;

#[derive(Debug, Default)]
pub struct ElementRegistry {
    records: Vec<ElementPhysicsRecord>,
    sealed: bool,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn push(&mut self, record: ElementPhysicsRecord) -> PhysicsResult<usize> {
        self.check_unsealed("push")?;
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Insert at `index` (clamped to the current length)
    pub fn insert(&mut self, index: usize, record: ElementPhysicsRecord) -> PhysicsResult<()> {
        self.check_unsealed("insert")?;
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> PhysicsResult<ElementPhysicsRecord> {
        self.check_unsealed("remove")?;
        if index >= self.records.len() {
            return Err(PhysicsError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ElementPhysicsRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ElementPhysicsRecord> {
        self.records.get_mut(index)
    }

    /// Refresh the measured size of an existing record
    pub fn update_size(&mut self, index: usize, width: i32, height: i32) -> PhysicsResult<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(PhysicsError::IndexOutOfRange { index, len })?;
        record.set_size(width, height);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementPhysicsRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ElementPhysicsRecord> {
        self.records.iter_mut()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [ElementPhysicsRecord] {
        &mut self.records
    }

    /// Freeze the structure; called when bodies get bound to indices
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Drop every record and accept structural changes again (session restart)
    pub fn unseal_and_clear(&mut self) {
        self.records.clear();
        self.sealed = false;
    }

    fn check_unsealed(&self, operation: &'static str) -> PhysicsResult<()> {
        if self.sealed {
            warn!(operation, len = self.records.len(), "registry sealed, structural change rejected");
            return Err(PhysicsError::StructuralViolation {
                operation,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
