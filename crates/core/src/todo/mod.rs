mod error;
mod normalize;
mod requests;
mod sorting;
mod types;

pub use error::TodoError;
pub use normalize::{normalize_record, normalize_records};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use sorting::sort_by_created_at;
pub use types::{timestamp, Todo, TodoRecord};
