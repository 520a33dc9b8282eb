pub mod entry_index;
pub mod property_key;
pub mod sequence;
