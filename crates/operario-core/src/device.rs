//! Identity of the machine the robot runs on.
//!
//! Failure notifications and execution reports identify the robot by the
//! machine it ran on, so operators can tell apart parallel deployments of
//! the same process.

use std::net::UdpSocket;

/// User, hostname and local IP of the current machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// OS user the robot runs as.
    pub user: String,
    /// Machine hostname.
    pub hostname: String,
    /// Outbound local IPv4 address, when one can be determined.
    pub local_ip: Option<String>,
}

impl DeviceInfo {
    /// Detect the current machine's identity.
    ///
    /// Missing pieces degrade to `"unknown"` rather than failing; a
    /// notification with a partial identity still beats no notification.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            user: env_first(&["USER", "USERNAME"]),
            hostname: env_first(&["HOSTNAME", "COMPUTERNAME"]),
            local_ip: local_ip(),
        }
    }

    /// `ip:hostname` label, falling back to the hostname alone.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.local_ip {
            Some(ip) => format!("{ip}:{}", self.hostname),
            None => self.hostname.clone(),
        }
    }
}

fn env_first(keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| std::env::var(key).ok())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Local address the OS would route external traffic through.
///
/// Binding a UDP socket and "connecting" it does not send any packets; it
/// only asks the kernel which interface it would pick.
fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_never_panics() {
        let info = DeviceInfo::detect();
        assert!(!info.user.is_empty());
        assert!(!info.hostname.is_empty());
    }

    #[test]
    fn test_label_with_ip() {
        let info = DeviceInfo {
            user: "svc".to_string(),
            hostname: "worker-01".to_string(),
            local_ip: Some("10.0.0.5".to_string()),
        };
        assert_eq!(info.label(), "10.0.0.5:worker-01");
    }

    #[test]
    fn test_label_without_ip() {
        let info = DeviceInfo {
            user: "svc".to_string(),
            hostname: "worker-01".to_string(),
            local_ip: None,
        };
        assert_eq!(info.label(), "worker-01");
    }
}
