//! Presence-tracked record storage.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use sparse_ir::{FieldError, FieldIndex, FieldResult};
use sparse_schema::{FieldDescriptor, PresenceGroup, Resolution, Schema};

use crate::coerce::admit;
use crate::enumerator::FieldEnumerator;
use crate::typed::FromValue;
use crate::value::Value;

/// Field values for one entity, plus which of them were assigned.
///
/// `Clone` is a full by-value copy; see [`Record::copy`].
#[derive(Clone)]
pub struct Record {
    schema: Arc<Schema>,
    slots: Box<[Value]>,
    presence: SmallVec<[PresenceGroup; 2]>,
}

impl Record {
    /// Create a record with every slot at its type default and nothing set.
    pub fn new(schema: Arc<Schema>) -> Self {
        let slots = schema
            .fields()
            .iter()
            .map(|field| Value::default_for(field.ty()))
            .collect();
        let presence = SmallVec::from_elem(PresenceGroup::EMPTY, schema.presence().group_count());
        Record {
            schema,
            slots,
            presence,
        }
    }

    #[inline]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Presence groups, one per 32 fields.
    #[inline]
    pub fn presence(&self) -> &[PresenceGroup] {
        &self.presence
    }

    /// Whether `field` has been explicitly assigned.
    #[inline]
    pub fn is_set(&self, field: FieldIndex) -> bool {
        self.presence
            .get(field.group())
            .is_some_and(|group| group.contains(field.bit()))
            && field.index() < self.slots.len()
    }

    /// Number of set fields.
    pub fn len(&self) -> usize {
        self.presence.iter().map(|group| group.len() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.presence.iter().all(|group| group.is_empty())
    }

    fn descriptor(&self, field: FieldIndex) -> FieldResult<&FieldDescriptor> {
        self.schema.descriptor(field)
    }

    fn index_of(&self, name: &str) -> FieldResult<FieldIndex> {
        match self.schema.resolve(name) {
            Resolution::Field(index) => Ok(index),
            Resolution::Unresolved => Err(FieldError::KeyNotFound {
                name: name.to_owned(),
            }),
        }
    }

    /// Type-check `value`, store it, and mark `field` as set.
    ///
    /// The presence bit is set even when the stored value is null. A failed
    /// check leaves the record unchanged.
    pub fn set(&mut self, field: FieldIndex, value: impl Into<Value>) -> FieldResult<()> {
        let stored = admit(self.descriptor(field)?, value.into())?;
        self.slots[field.index()] = stored;
        self.presence[field.group()].insert(field.bit());
        Ok(())
    }

    pub fn set_by_name(&mut self, name: &str, value: impl Into<Value>) -> FieldResult<()> {
        let field = self.index_of(name)?;
        self.set(field, value)
    }

    /// Stored value whether or not the field is set.
    ///
    /// An unset field reads as its type default.
    pub fn get(&self, field: FieldIndex) -> FieldResult<&Value> {
        self.descriptor(field)?;
        Ok(&self.slots[field.index()])
    }

    /// Value of a set field; unknown names and unset fields are `KeyNotFound`.
    pub fn get_by_name(&self, name: &str) -> FieldResult<&Value> {
        self.try_get_by_name(name)?
            .ok_or_else(|| FieldError::KeyNotFound {
                name: name.to_owned(),
            })
    }

    /// Value of `field` if it has been set.
    pub fn try_get(&self, field: FieldIndex) -> Option<&Value> {
        if self.is_set(field) {
            Some(&self.slots[field.index()])
        } else {
            None
        }
    }

    /// Value of the named field if it has been set; unknown names are
    /// `KeyNotFound`.
    pub fn try_get_by_name(&self, name: &str) -> FieldResult<Option<&Value>> {
        let field = self.index_of(name)?;
        Ok(self.try_get(field))
    }

    /// Whether `name` resolves to a set field.
    pub fn contains(&self, name: &str) -> bool {
        self.schema
            .resolve(name)
            .field()
            .is_some_and(|field| self.is_set(field))
    }

    /// Drop `field`'s presence bit and restore its default.
    pub fn clear(&mut self, field: FieldIndex) -> FieldResult<()> {
        let default = Value::default_for(self.descriptor(field)?.ty());
        self.slots[field.index()] = default;
        self.presence[field.group()].remove(field.bit());
        Ok(())
    }

    /// Independent copy: every slot and presence group duplicated by value.
    #[must_use]
    pub fn copy(&self) -> Record {
        self.clone()
    }

    /// Set fields in ascending index order.
    pub fn iter(&self) -> FieldEnumerator<'_> {
        FieldEnumerator::new(self)
    }

    /// Typed read of a set field.
    ///
    /// `Ok(None)` when the field is unset. A null value converts only into
    /// `Option<T>`; asking for a plain `T` reports `InvalidFieldType`.
    pub fn try_get_as<T: FromValue>(&self, name: &str) -> FieldResult<Option<T>> {
        let field = self.index_of(name)?;
        match self.try_get(field) {
            Some(value) => self.convert(field, value).map(Some),
            None => Ok(None),
        }
    }

    /// Typed read that treats an unset field as `KeyNotFound`.
    pub fn get_as<T: FromValue>(&self, name: &str) -> FieldResult<T> {
        self.try_get_as(name)?
            .ok_or_else(|| FieldError::KeyNotFound {
                name: name.to_owned(),
            })
    }

    /// Typed read falling back to `T::default()` when unset or null.
    pub fn safe_get<T: FromValue + Default>(&self, name: &str) -> FieldResult<T> {
        let field = self.index_of(name)?;
        match self.try_get(field) {
            Some(Value::Null) | None => Ok(T::default()),
            Some(value) => self.convert(field, value),
        }
    }

    fn convert<T: FromValue>(&self, field: FieldIndex, value: &Value) -> FieldResult<T> {
        T::from_value(value).ok_or_else(|| FieldError::InvalidFieldType {
            field: self.schema.fields()[field.index()].name().to_owned(),
            expected: T::KIND.to_owned(),
            found: value.kind().to_owned(),
        })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema)
            && self.presence == other.presence
            && self.slots == other.slots
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'r> IntoIterator for &'r Record {
    type Item = (&'r str, &'r Value);
    type IntoIter = FieldEnumerator<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap to fail loudly on unexpected errors"
)]
