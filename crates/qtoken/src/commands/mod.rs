pub mod inspect;
pub mod schema;
pub mod sort;

pub use inspect::*;
pub use schema::*;
pub use sort::*;
