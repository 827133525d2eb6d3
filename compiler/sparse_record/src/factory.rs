//! Record creation from a shared prototype.

use std::sync::Arc;

use sparse_schema::Schema;

use crate::record::Record;

/// Builds fresh records for one schema.
///
/// Defaults are computed once into a prototype; each [`RecordFactory::create`]
/// clones it instead of walking the schema again.
#[derive(Clone, Debug)]
pub struct RecordFactory {
    prototype: Record,
}

impl RecordFactory {
    pub fn new(schema: Arc<Schema>) -> Self {
        RecordFactory {
            prototype: Record::new(schema),
        }
    }

    #[inline]
    pub fn schema(&self) -> &Arc<Schema> {
        self.prototype.schema()
    }

    /// A new record with every field unset.
    pub fn create(&self) -> Record {
        self.prototype.clone()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap to fail loudly on unexpected errors"
)]
mod tests {
    use pretty_assertions::assert_eq;
    use sparse_ir::FieldType;
    use sparse_schema::compile_schema;

    use super::*;
    use crate::value::Value;

    #[test]
    fn created_records_are_independent() {
        let schema = compile_schema([("Name", FieldType::Text), ("Age", FieldType::Int)]).unwrap();
        let factory = RecordFactory::new(Arc::clone(&schema));

        let mut first = factory.create();
        first.set_by_name("Age", 41).unwrap();
        let second = factory.create();

        assert!(Arc::ptr_eq(factory.schema(), &schema));
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(second.try_get_by_name("Age").unwrap(), None);
        assert_eq!(second.get(schema.lookup("Age").unwrap().index()).unwrap(), &Value::Int(0));
    }
}
