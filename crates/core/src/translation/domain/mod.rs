pub mod translation_request;
pub mod translation_result;
pub mod translator;
