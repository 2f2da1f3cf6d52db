pub mod json_extraction;
