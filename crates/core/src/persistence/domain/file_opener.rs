use std::path::Path;

/// Injected capability for opening a file with the host's default handler.
///
/// Kept behind a trait so the session flow stays testable without a real
/// OS file-association dependency.
pub trait FileOpener: Send {
    fn open(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}
