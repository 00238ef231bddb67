pub mod common;
pub mod entry;

pub use common::common_routes;
pub use entry::entry_routes;
