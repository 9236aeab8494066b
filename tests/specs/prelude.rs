//! Shared helpers for rig behavioral specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the built rig binary.
///
/// `Command::cargo_bin` only resolves binaries owned by the test's own
/// package; the specs live in the root package while the binary lives
/// in crates/cli, so derive the target path directly.
pub fn rig_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("rig")
}

/// Command for the rig binary with no project wiring
pub fn rig_cmd() -> Command {
    Command::new(rig_bin())
}

/// The fixed phase sequence, as the binary runs it
pub const PHASES: [&str; 5] = [
    "infrastructure_provisioning",
    "workload_setup",
    "mongodb_setup",
    "test_control",
    "infrastructure_teardown",
];

/// A scratch project: a bin/ of fake phase executables and a work dir
pub struct Project {
    temp: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::create_dir(temp.path().join("bin")).expect("create bin dir");
        std::fs::create_dir(temp.path().join("work")).expect("create work dir");
        Self { temp }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    pub fn work_file(&self, name: &str) -> PathBuf {
        self.work_dir().join(name)
    }

    pub fn bin_file(&self, name: &str) -> PathBuf {
        self.temp.path().join("bin").join(name)
    }

    /// Install a fake phase executable with the given shell body
    pub fn phase(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_file(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write phase script");
        let mut perms = std::fs::metadata(&path).expect("stat phase script").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod phase script");
    }

    /// Install all five phases with the same body
    pub fn all_phases(&self, body: &str) {
        for name in PHASES {
            self.phase(name, body);
        }
    }

    /// Command for the rig binary pointed at this project
    pub fn rig(&self) -> Command {
        let mut cmd = rig_cmd();
        cmd.current_dir(self.temp.path())
            .arg("--bin-dir")
            .arg(self.temp.path().join("bin"))
            .arg("--work-dir")
            .arg(self.work_dir());
        cmd
    }
}
