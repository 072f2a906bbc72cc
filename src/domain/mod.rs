pub mod collection;
pub mod document;
pub mod host;
pub mod index;
