//! Interface mix-ins: named field sets merged into a schema.

use sparse_ir::FieldType;

/// A named, ordered set of fields a schema can promise to carry.
///
/// Merging an interface adds each of its fields that the schema does not
/// already declare. A field the schema does declare must agree on the type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<(String, FieldType)>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push((name.into(), ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[(String, FieldType)] {
        &self.fields
    }
}
