pub mod json_writer;
pub mod table;
pub mod tsv_writer;
