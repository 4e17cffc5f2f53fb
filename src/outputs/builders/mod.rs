mod indexed_list_builder;
pub use indexed_list_builder::IndexedListBuilder;
mod deindexed_list_builder;
pub use deindexed_list_builder::DeindexedListBuilder;
