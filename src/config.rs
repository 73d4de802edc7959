use std::time::Duration;
use crate::Error;

pub const SEEN_WINDOW:     Duration = Duration::from_secs(60);
pub const DNS_CACHE_TTL:   Duration = Duration::from_secs(3600);
pub const DNS_TIMEOUT:     Duration = Duration::from_secs(2);
pub const MAX_DNS_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub seen_window: Duration,
    pub dns_ttl:     Duration,
    pub dns_timeout: Duration,
}

impl Config {
    pub fn new(seen_window: Duration, dns_ttl: Duration, dns_timeout: Duration) -> Result<Self, Error> {
        if seen_window == Duration::from_secs(0) {
            return Err(Error::Window("seen window"));
        }

        if dns_ttl == Duration::from_secs(0) {
            return Err(Error::Window("dns cache ttl"));
        }

        if dns_timeout == Duration::from_secs(0) || dns_timeout > MAX_DNS_TIMEOUT {
            return Err(Error::Timeout(dns_timeout));
        }

        Ok(Self { seen_window, dns_ttl, dns_timeout })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seen_window: SEEN_WINDOW,
            dns_ttl:     DNS_CACHE_TTL,
            dns_timeout: DNS_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;
    use crate::Error;
    use super::Config;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(Duration::from_secs(60),   cfg.seen_window);
        assert_eq!(Duration::from_secs(3600), cfg.dns_ttl);
        assert_eq!(Duration::from_secs(2),    cfg.dns_timeout);
    }

    #[test]
    fn validate() {
        let secs = Duration::from_secs;
        let ms   = Duration::from_millis;

        assert!(Config::new(secs(30), secs(600), ms(500)).is_ok());
        assert_eq!(Err(Error::Window("seen window")),   Config::new(secs(0), secs(1), secs(1)));
        assert_eq!(Err(Error::Window("dns cache ttl")), Config::new(secs(1), secs(0), secs(1)));
        assert_eq!(Err(Error::Timeout(secs(3))),        Config::new(secs(1), secs(1), secs(3)));
        assert_eq!(Err(Error::Timeout(secs(0))),        Config::new(secs(1), secs(1), secs(0)));
    }
}
