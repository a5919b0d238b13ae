mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::{DocumentStore, StoreProvider};
pub use types::StoredDocument;
