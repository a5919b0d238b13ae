mod error;
mod reachability;
mod traits;

pub use error::{CacheError, Result};
pub use reachability::Reachability;
pub use traits::CacheTransport;
