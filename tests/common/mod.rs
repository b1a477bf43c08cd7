use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EXPECTED_STDOUT: &str = "⚠️  ADVERTENCIA: Este script está DEPRECADO\n\
📝 Usa src/services/csvProcessor.js en su lugar\n\
📖 Ver MIGRATION.md para más información\n\
❌ Este archivo puede ser eliminado de forma segura\n";

/// Isolated run directory with an empty environment.
///
/// `home` is never created; the binary must not need it.
pub struct Sandbox {
    _tmp: TempDir,
    pub workdir: PathBuf,
    pub home: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let workdir = tmp.path().join("work");
        fs::create_dir_all(&workdir).expect("create workdir");
        let home = tmp.path().join("missing-home");

        Self {
            _tmp: tmp,
            workdir,
            home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("generate-json-from-csv");
        cmd.env_clear()
            .env("HOME", &self.home)
            .current_dir(&self.workdir);
        cmd
    }

    pub fn run_stdout(&self, args: &[&str]) -> Vec<u8> {
        self.cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    }

    pub fn workdir_entries(&self) -> Vec<PathBuf> {
        list_dir(&self.workdir)
    }
}

fn list_dir(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("read workdir")
        .map(|e| e.expect("dir entry").path())
        .collect()
}
