//! Table schema description (pure data).

/// Name of the table holding the todos.
pub const TODOS_TABLE: &str = "todos";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types usable as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

/// Table status as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Archived, inaccessible, or in a state this service does not know.
    Unavailable,
}

impl TableStatus {
    /// Whether the table accepts reads and writes.
    pub fn is_active(self) -> bool {
        self == TableStatus::Active
    }
}

/// Returns the table configuration for the todos collection: a single string
/// partition key `id`, billed on demand.
pub fn todos_table_spec() -> TableSpec {
    TableSpec {
        table_name: TODOS_TABLE.to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}
