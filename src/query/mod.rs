pub mod cache;
pub mod keys;

pub use cache::{DehydratedQuery, DehydratedState, QueryCache};
pub use keys::QueryOptions;
