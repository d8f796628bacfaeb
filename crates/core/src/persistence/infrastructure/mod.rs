pub mod system_file_opener;
pub mod transcript_store;
