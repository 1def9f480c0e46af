//! Stamps the binary with commit, build time and profile for `--version`.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const UNKNOWN: &str = "unknown";

struct BuildStamp {
    commit: String,
    built_at: String,
    profile: String,
}

impl BuildStamp {
    /// Explicit `OFFICE_BUILD_*` variables win over probing the environment.
    fn collect() -> Self {
        Self {
            commit: env::var("OFFICE_BUILD_GIT_HASH").unwrap_or_else(|_| probe_commit()),
            built_at: env::var("OFFICE_BUILD_TIMESTAMP").unwrap_or_else(|_| probe_time()),
            profile: env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string()),
        }
    }

    fn emit(&self) {
        println!("cargo:rustc-env=OFFICE_BUILD_GIT_HASH={}", self.commit);
        println!("cargo:rustc-env=OFFICE_BUILD_TIMESTAMP={}", self.built_at);
        println!("cargo:rustc-env=OFFICE_BUILD_PROFILE={}", self.profile);
    }
}

fn main() {
    for var in ["OFFICE_BUILD_GIT_HASH", "OFFICE_BUILD_TIMESTAMP"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    watch_git_head();
    BuildStamp::collect().emit();
}

fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_owned));
    if let Some(branch) = branch {
        println!("cargo:rerun-if-changed=.git/{branch}");
    }
}

fn probe_commit() -> String {
    command_stdout("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn probe_time() -> String {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("unix:{secs}")
    })
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
