//! StudentStore — the in-memory record collection behind the API.
//!
//! Records live in a `Vec` so listing follows insertion order. Every
//! operation takes the lock once, does its in-memory work and releases it,
//! which makes each call atomic with respect to the others.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::{StudentInput, StudentStore};
//!
//! let store = StudentStore::seeded();
//! let dana = store.create(StudentInput::default().name("Dana").age(21).course("Art"))?;
//! store.update(&dana.id, StudentInput::default().age(22))?;
//! store.delete("1")?;
//! ```

mod error;
mod ids;

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::student::{self, Student, StudentInput};

pub use error::StoreError;
pub use ids::{IdGenerator, SequentialIds, TimestampIds};

/// Ordered, shared collection of students.
///
/// Clone-friendly via Arc: clones see the same records.
#[derive(Clone)]
pub struct StudentStore {
    records: Arc<RwLock<Vec<Student>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore {
    /// Create an empty store using timestamp ids.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store holding the three sample students.
    pub fn seeded() -> Self {
        Self::with_records(student::seed())
    }

    /// Create a store pre-loaded with `records`, in order.
    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            ids: Arc::new(TimestampIds::new()),
        }
    }

    /// Swap the id strategy used by `create`.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Result<Vec<Student>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(records.clone())
    }

    /// Look up a single record by id.
    pub fn get(&self, id: &str) -> Result<Option<Student>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(records.iter().find(|s| s.id == id).cloned())
    }

    /// Append a new record built from `input` and return it with its id.
    ///
    /// Fields are stored exactly as supplied; missing ones stay `None`.
    pub fn create(&self, input: StudentInput) -> Result<Student, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let mut id = self.ids.next_id();
        while records.iter().any(|s| s.id == id) {
            id = self.ids.next_id();
        }

        let student = Student::from_input(id, input);
        records.push(student.clone());
        debug!(id = %student.id, total = records.len(), "student created");
        Ok(student)
    }

    /// Patch the first record matching `id` and return its new state.
    ///
    /// Only truthy fields in `input` overwrite; see [`Student::apply`].
    pub fn update(&self, id: &str, input: StudentInput) -> Result<Student, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let student = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        student.apply(input);
        debug!(id, "student updated");
        Ok(student.clone())
    }

    /// Remove the first record matching `id` and return it as it was.
    pub fn delete(&self, id: &str) -> Result<Student, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        let index = records
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = records.remove(index);
        debug!(id, total = records.len(), "student deleted");
        Ok(removed)
    }

    /// Number of records currently held.
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(records.len())
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
