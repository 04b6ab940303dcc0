use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

// Serialises tests that write and exec scripts. A fork on another test
// thread while a script is still open for writing makes exec fail with
// ETXTBSY.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

/// Per-test directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let lock = EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = std::env::temp_dir().join(format!(
            "rdt-bench-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path, _lock: lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `body` as an executable `/bin/sh` script named `name`.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        self.file(name, &format!("#!/bin/sh\n{body}\n"), 0o755)
    }

    #[cfg(unix)]
    pub fn file(&self, name: &str, contents: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path.join(name);
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[cfg(not(unix))]
    pub fn file(&self, name: &str, contents: &str, _mode: u32) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
