use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

pub use cache::{Cache, Stats};
pub use filter::ignored;
pub use shared::Shared;
pub use url::full_url;

mod cache;
mod filter;
mod shared;
mod url;


/// One connection as reported by the host's connection lister.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawConnection {
    pub local:       Option<String>,
    pub remote_ip:   Option<String>,
    pub remote_port: Option<u16>,
    pub label:       Option<String>,
    pub status:      Option<String>,
    pub protocol:    Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub domain:      String,
    pub full_url:    String,
    #[serde(rename = "browser")]
    pub label:       String,
    pub ip_address:  String,
    pub detected_at: DateTime<Utc>,
    pub protocol:    String,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Key(pub String, pub u16);

impl RawConnection {
    pub fn new(remote_ip: &str, remote_port: u16, label: &str) -> Self {
        Self {
            remote_ip:   Some(remote_ip.to_owned()),
            remote_port: Some(remote_port),
            label:       Some(label.to_owned()),
            ..Default::default()
        }
    }

    pub fn protocol(mut self, protocol: &str) -> Self {
        self.protocol = Some(protocol.to_owned());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_owned());
        self
    }

    /// Connections without a status are assumed established.
    pub fn established(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status.trim().eq_ignore_ascii_case("ESTABLISHED"),
            None         => true,
        }
    }

    /// Remote address and port, `None` when either is missing.
    pub fn remote(&self) -> Option<(&str, u16)> {
        let ip = self.remote_ip.as_deref()?.trim();
        let ip = ip.trim_start_matches('[').trim_end_matches(']');
        match (ip, self.remote_port) {
            ("", _)          => None,
            (ip, Some(port)) => Some((ip, port)),
            (_, None)        => None,
        }
    }
}
