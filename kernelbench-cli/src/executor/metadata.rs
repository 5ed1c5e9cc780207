//! Host metadata for the report header
//!
//! Everything here is best effort: a missing `git`, a non-Linux host or an
//! unreadable `/proc/cpuinfo` leaves the field empty instead of failing the run.

use chrono::Utc;
use kernelbench_report::{ReportMeta, SystemInfo};
use std::process::Command;

const UNKNOWN_CPU: &str = "Unknown";

/// Report header for a run starting now
pub fn build_report_meta() -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit: git_stdout(&["rev-parse", "HEAD"]),
        system: host_system(),
    }
}

fn host_system() -> SystemInfo {
    let cpu = read_cpuinfo()
        .as_deref()
        .and_then(cpu_model_from)
        .unwrap_or_else(|| UNKNOWN_CPU.to_string());

    SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu,
        cpu_cores: std::thread::available_parallelism()
            .map_or(1, |n| u32::try_from(n.get()).unwrap_or(u32::MAX)),
    }
}

/// Trimmed stdout of a successful `git` invocation
fn git_stdout(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(target_os = "linux")]
fn read_cpuinfo() -> Option<String> {
    std::fs::read_to_string("/proc/cpuinfo").ok()
}

#[cfg(not(target_os = "linux"))]
fn read_cpuinfo() -> Option<String> {
    None
}

/// First `model name` entry of a `/proc/cpuinfo` dump
fn cpu_model_from(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, model)| model.trim().to_string())
        .filter(|model| !model.is_empty())
}
