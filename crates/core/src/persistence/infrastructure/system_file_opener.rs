use std::path::Path;

use crate::persistence::domain::file_opener::FileOpener;

/// Opens files with the OS default handler via the `open` crate.
pub struct SystemFileOpener;

impl FileOpener for SystemFileOpener {
    fn open(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        open::that(path)?;
        Ok(())
    }
}
