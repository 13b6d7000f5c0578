pub mod names;
pub mod table;
pub mod vector_names;
