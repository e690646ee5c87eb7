//! Host probes used before the first run

use std::process::{Command, Stdio};

use sysinfo::System;

/// Whether the process runs with root privileges
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

/// Whether `host` answers two pings
pub fn check_internet(host: &str) -> bool {
    Command::new("ping")
        .args(["-c", "2", host])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Friendly operating system name
pub fn detect_os() -> String {
    let name = System::name().unwrap_or_default();
    os_label(&name).to_string()
}

fn os_label(name: &str) -> &str {
    let lower = name.to_lowercase();
    let known = [
        ("ubuntu", "Ubuntu"),
        ("debian", "Debian"),
        ("centos", "CentOS"),
        ("red hat", "RHEL"),
        ("fedora", "Fedora"),
        ("arch", "Arch"),
        ("darwin", "MacOS"),
        ("macos", "MacOS"),
    ];
    known
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_label() {
        assert_eq!(os_label("Ubuntu"), "Ubuntu");
        assert_eq!(os_label("Red Hat Enterprise Linux"), "RHEL");
        assert_eq!(os_label("Arch Linux"), "Arch");
        assert_eq!(os_label("Darwin"), "MacOS");
        assert_eq!(os_label(""), "Unknown");
        assert_eq!(os_label("Plan 9"), "Unknown");
    }

    #[test]
    fn test_detect_os_never_empty() {
        assert!(!detect_os().is_empty());
    }
}
