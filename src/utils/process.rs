use std::path::Path;
use sysinfo::System;

pub struct ProcessChecker;

impl ProcessChecker {
    /// True when some running process was started from `target`. Takes the
    /// `System` by mutable ref so sysinfo can reuse its internal buffers
    /// between checks.
    pub fn is_running(sys: &mut System, target: &Path) -> bool {
        sys.refresh_processes();
        sys.processes().values().any(|p| p.exe() == Some(target))
    }
}
