use crate::api::AccessmapApi;
use crate::catalog::Catalog;
use crate::favorites::PersistMode;
use crate::preferences::NoopTarget;
use crate::store::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(&self.root)
    }

    /// A fresh API over this environment's directory. Each call re-hydrates,
    /// like a new process would.
    pub fn api(&self, mode: PersistMode) -> AccessmapApi<FsBackend> {
        AccessmapApi::new(self.backend(), Catalog::builtin(), mode, NoopTarget)
    }
}
