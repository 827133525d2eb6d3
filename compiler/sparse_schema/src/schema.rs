//! Compiled schemas and their field descriptors.

use std::fmt;

use sparse_ir::{FieldError, FieldFlags, FieldIndex, FieldResult, FieldType, SchemaId};
use sparse_resolve::{NameResolver, Resolution};

use crate::presence::{PresenceLayout, PresenceSlot};

/// One declared field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub(crate) name: String,
    pub(crate) ty: FieldType,
    pub(crate) index: FieldIndex,
    pub(crate) flags: FieldFlags,
    pub(crate) slot: PresenceSlot,
}

impl FieldDescriptor {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    #[inline]
    pub fn index(&self) -> FieldIndex {
        self.index
    }

    #[inline]
    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// Whether external codecs should leave this field out.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.flags.contains(FieldFlags::IGNORED)
    }

    #[inline]
    pub fn presence(&self) -> PresenceSlot {
        self.slot
    }
}

/// Immutable, ordered field set shared by every record built from it.
#[derive(Debug)]
pub struct Schema {
    pub(crate) id: SchemaId,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) presence: PresenceLayout,
    pub(crate) resolver: NameResolver,
    pub(crate) interfaces: Vec<String>,
}

impl Schema {
    #[inline]
    pub fn id(&self) -> SchemaId {
        self.id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Descriptors in index order.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[inline]
    pub fn field(&self, index: FieldIndex) -> Option<&FieldDescriptor> {
        self.fields.get(index.index())
    }

    /// Like [`Schema::field`], but a foreign index is an error.
    pub fn descriptor(&self, index: FieldIndex) -> FieldResult<&FieldDescriptor> {
        self.field(index).ok_or(FieldError::FieldOutOfRange {
            index: index.raw(),
            len: self.fields.len(),
        })
    }

    #[inline]
    pub fn presence(&self) -> PresenceLayout {
        self.presence
    }

    /// Exact, case-sensitive name resolution.
    #[inline]
    pub fn resolve(&self, name: &str) -> Resolution {
        self.resolver.resolve(name)
    }

    /// Resolve `name`, failing with `KeyNotFound` when it names no field.
    pub fn lookup(&self, name: &str) -> FieldResult<&FieldDescriptor> {
        match self.resolve(name) {
            Resolution::Field(index) => self.descriptor(index),
            Resolution::Unresolved => Err(FieldError::KeyNotFound {
                name: name.to_owned(),
            }),
        }
    }

    /// Case-insensitive lookup by linear scan.
    ///
    /// Names are unique ignoring case, so at most one field matches. This is
    /// the slow path for callers that want the looser policy; [`resolve`]
    /// stays exact.
    ///
    /// [`resolve`]: Schema::resolve
    pub fn resolve_ignore_case(&self, name: &str) -> Option<FieldIndex> {
        if let Resolution::Field(index) = self.resolve(name) {
            return Some(index);
        }
        let folded = name.to_lowercase();
        self.fields
            .iter()
            .find(|field| field.name.to_lowercase() == folded)
            .map(|field| field.index)
    }

    /// Whether the named interface was merged into this schema.
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface)
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.ty)?;
        }
        f.write_str("}")
    }
}
