pub mod json_read;
pub mod xml_write;
