//! Predefined implementations of [ListFormat](crate::ListFormat) and [ListBuilder](crate::ListBuilder)

mod generic_list;
pub(crate) use generic_list::GenericList;
mod indexed_list;
pub use indexed_list::{IndexedListFormat, IndexedListBuilder};
mod deindexed_list;
pub use deindexed_list::{DeindexedListFormat, DeindexedListBuilder};
mod reverse_list;
pub use reverse_list::{ReverseListFormat, ReverseListBuilder};
