use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Result, Write};
use std::path::{Path, PathBuf};

/// Scratch file living next to its destination, removed on drop unless
/// it has been moved into place.
pub struct TmpFile {
    file: File,
    path: PathBuf,
}

impl TmpFile {
    pub fn create_in(temp_dir: impl AsRef<Path>) -> Result<Self> {
        let filename: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(10)
            .collect();
        let path = temp_dir
            .as_ref()
            .join(format!(".{}.tmp", filename));
        let file = File::create(&path)?;
        Ok(Self { file, path })
    }

    /// Flush to disk and atomically replace `dest` with this file.
    pub fn persist(self, dest: impl AsRef<Path>) -> Result<()> {
        self.file.sync_data()?;
        fs::rename(&self.path, dest.as_ref())
    }
}

impl std::io::Write for &TmpFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (&self.file).write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        (&self.file).flush()
    }
}

impl Drop for TmpFile {
    fn drop(&mut self) {
        // After a successful rename the old path is gone and this is a no-op.
        let _ = fs::remove_file(&self.path);
    }
}

/// Serialize `value` as JSON and swap it in at `dest` in one step, so
/// readers see either the old document or the new one.
pub fn replace_json<T: Serialize>(dest: &Path, value: &T) -> Result<()> {
    let directory = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    let tmp = TmpFile::create_in(directory)?;
    let mut writer = BufWriter::new(&tmp);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    drop(writer);
    tmp.persist(dest)?;

    log::debug!("replaced {}", dest.display());
    Ok(())
}
