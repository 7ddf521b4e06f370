pub mod chunk_profile;
pub mod file_size;
pub mod report_kind;
pub mod row;
pub mod table;
