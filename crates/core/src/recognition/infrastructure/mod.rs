pub mod backend_factory;
pub mod google_recognizer;
pub mod sphinx_recognizer;
