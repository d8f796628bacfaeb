pub mod file_opener;
