pub mod audio;
pub mod persistence;
pub mod pipeline;
pub mod recognition;
pub mod shared;
pub mod translation;
