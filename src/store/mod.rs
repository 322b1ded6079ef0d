pub mod blob;
pub mod records;
