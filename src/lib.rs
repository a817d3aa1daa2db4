pub mod aggregate;
pub mod error;
pub mod files;
pub mod load;
pub mod map;
pub mod output;
pub mod plot;
pub mod summary;
pub mod table;
