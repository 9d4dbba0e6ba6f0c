mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{TableAdmin, TodoRepository};
pub use types::{
    todos_table_spec, AttributeType, BillingMode, KeyAttribute, TableSpec, TableStatus,
    TODOS_TABLE,
};
