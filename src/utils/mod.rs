pub mod error;
pub mod types;

pub use error::db_error;
pub use error::handler_404;
pub use error::internal_error;
pub use error::validation_error;
