//! EntryService: CRUD for shopping entries using the safe SQL builder.

mod entry;
pub use entry::EntryService;
