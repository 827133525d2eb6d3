//! Turning field declarations into a [`Schema`].

use std::sync::Arc;

use rustc_hash::FxHashSet;
use sparse_ir::{FieldError, FieldFlags, FieldIndex, FieldResult, FieldType, SchemaId};
use sparse_resolve::{DispatchOptions, NameResolver, RadixTree};

use crate::interface::Interface;
use crate::presence::PresenceAllocator;
use crate::schema::{FieldDescriptor, Schema};

struct Declared {
    name: String,
    ty: FieldType,
    flags: FieldFlags,
}

/// Collects declarations, then validates and compiles them in one step.
///
/// The compiler owns its [`SchemaId`] from the start, so declarations can
/// refer to the schema being built:
///
/// ```text
/// let compiler = SchemaCompiler::new();
/// let me = compiler.id();
/// let schema = compiler
///     .field("Name", FieldType::Text)
///     .field("Children", FieldType::list(FieldType::Record(me)))
///     .compile()?;
/// ```
pub struct SchemaCompiler {
    id: SchemaId,
    declared: Vec<Declared>,
    interfaces: Vec<Interface>,
    options: DispatchOptions,
}

impl SchemaCompiler {
    pub fn new() -> Self {
        SchemaCompiler {
            id: SchemaId::fresh(),
            declared: Vec::new(),
            interfaces: Vec::new(),
            options: DispatchOptions::default(),
        }
    }

    /// Id the compiled schema will carry.
    pub fn id(&self) -> SchemaId {
        self.id
    }

    #[must_use]
    pub fn field(self, name: impl Into<String>, ty: FieldType) -> Self {
        self.declare(name.into(), ty, FieldFlags::empty())
    }

    /// Declare a field that external codecs leave out of serialized forms.
    #[must_use]
    pub fn ignored_field(self, name: impl Into<String>, ty: FieldType) -> Self {
        self.declare(name.into(), ty, FieldFlags::IGNORED)
    }

    #[must_use]
    pub fn fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldType)>,
        S: Into<String>,
    {
        fields
            .into_iter()
            .fold(self, |compiler, (name, ty)| compiler.field(name, ty))
    }

    /// Merge an interface's fields after the declared ones.
    #[must_use]
    pub fn implement(mut self, interface: &Interface) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    #[must_use]
    pub fn dispatch_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    fn declare(mut self, name: String, ty: FieldType, flags: FieldFlags) -> Self {
        self.declared.push(Declared { name, ty, flags });
        self
    }

    /// Validate every declaration and build the schema.
    pub fn compile(self) -> FieldResult<Arc<Schema>> {
        let SchemaCompiler {
            id,
            mut declared,
            interfaces,
            options,
        } = self;

        let mut interface_names = Vec::with_capacity(interfaces.len());
        for interface in &interfaces {
            merge_interface(&mut declared, interface)?;
            interface_names.push(interface.name().to_owned());
        }

        check_names(&declared)?;

        let mut tree = RadixTree::new();
        let mut alloc = PresenceAllocator::new();
        let mut fields = Vec::with_capacity(declared.len());
        for (i, Declared { name, ty, flags }) in declared.into_iter().enumerate() {
            let index = FieldIndex::try_from(i).map_err(|_| {
                tracing::debug!(schema = %id, count = i + 1, "too many fields");
                FieldError::TooManyFields { count: i + 1 }
            })?;
            tree.insert(&name, index).inspect_err(|err| {
                tracing::debug!(schema = %id, %err, "schema compilation failed");
            })?;
            fields.push(FieldDescriptor {
                name,
                ty,
                index,
                flags,
                slot: alloc.allocate(),
            });
        }

        let resolver = NameResolver::compile_with(&tree, options);
        let presence = alloc.finish();
        tracing::debug!(
            schema = %id,
            fields = fields.len(),
            groups = presence.group_count(),
            interfaces = interface_names.len(),
            "compiled schema"
        );

        Ok(Arc::new(Schema {
            id,
            fields,
            presence,
            resolver,
            interfaces: interface_names,
        }))
    }
}

impl Default for SchemaCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile an ordered list of `(name, type)` pairs.
pub fn compile_schema<I, S>(fields: I) -> FieldResult<Arc<Schema>>
where
    I: IntoIterator<Item = (S, FieldType)>,
    S: Into<String>,
{
    SchemaCompiler::new().fields(fields).compile()
}

fn merge_interface(declared: &mut Vec<Declared>, interface: &Interface) -> FieldResult<()> {
    for (name, ty) in interface.fields() {
        match declared.iter().find(|field| field.name == *name) {
            Some(existing) if existing.ty != *ty => {
                tracing::debug!(
                    interface = interface.name(),
                    name = %name,
                    existing = %existing.ty,
                    requested = %ty,
                    "conflicting interface field type"
                );
                return Err(FieldError::ConflictingFieldType {
                    name: name.clone(),
                    existing: existing.ty.to_string(),
                    requested: ty.to_string(),
                });
            }
            Some(_) => {}
            None => declared.push(Declared {
                name: name.clone(),
                ty: ty.clone(),
                flags: FieldFlags::FROM_INTERFACE,
            }),
        }
    }
    Ok(())
}

fn check_names(declared: &[Declared]) -> FieldResult<()> {
    let mut seen = FxHashSet::default();
    for field in declared {
        if field.name.is_empty() {
            tracing::debug!("empty field name");
            return Err(FieldError::EmptyFieldName);
        }
        if !seen.insert(field.name.to_lowercase()) {
            tracing::debug!(name = %field.name, "duplicate case-insensitive field");
            return Err(FieldError::DuplicateField {
                name: field.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap to fail loudly on unexpected errors"
)]
