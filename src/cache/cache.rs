use std::collections::HashMap;
use std::time::Duration;
use chrono::{DateTime, Utc};
use log::{debug, trace};
use crate::config::Config;
use crate::resolve::Resolve;
use super::{full_url, ignored, Event, Key, RawConnection};

/// Suppresses repeated connections to the same remote endpoint and
/// remembers reverse lookups, negative answers included.
pub struct Cache<R> {
    seen:     HashMap<Key, DateTime<Utc>>,
    names:    HashMap<String, Name>,
    config:   Config,
    resolver: R,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub seen:     usize,
    pub resolved: usize,
}

#[derive(Debug)]
struct Name {
    host: String,
    time: DateTime<Utc>,
}

impl<R: Resolve> Cache<R> {
    pub fn new(config: Config, resolver: R) -> Self {
        Self {
            seen:     HashMap::new(),
            names:    HashMap::new(),
            config:   config,
            resolver: resolver,
        }
    }

    pub fn observe(&mut self, raw: &[RawConnection], now: DateTime<Utc>) -> Vec<Event> {
        self.evict(now);

        let mut events = Vec::new();

        for conn in raw {
            let (ip, port) = match conn.remote() {
                Some(remote) => remote,
                None         => {
                    trace!("skipping malformed connection {:?}", conn);
                    continue;
                }
            };

            if ignored(ip) {
                continue;
            }

            if !conn.established() {
                trace!("{}:{} not established: {:?}", ip, port, conn.status);
                continue;
            }

            let key = Key(ip.to_owned(), port);
            if self.seen.contains_key(&key) {
                trace!("{}:{} already reported", ip, port);
                continue;
            }
            self.seen.insert(key, now);

            let host = self.resolve(ip, now);

            let local = conn.local.as_deref().unwrap_or("??");
            trace!("{} -> {}:{}: {}", local, ip, port, host);

            events.push(event(conn, ip, port, host, now));
        }

        debug!("{} connections, {} events, {} seen, {} names",
               raw.len(), events.len(), self.seen.len(), self.names.len());

        events
    }

    pub fn reset(&mut self) {
        self.seen.clear();
        self.names.clear();
    }

    pub fn stats(&self) -> Stats {
        Stats {
            seen:     self.seen.len(),
            resolved: self.names.len(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn evict(&mut self, now: DateTime<Utc>) {
        let window = self.config.seen_window;
        let ttl    = self.config.dns_ttl;
        self.seen.retain(|_, seen| live(now, *seen, window));
        self.names.retain(|_, name| live(now, name.time, ttl));
    }

    fn resolve(&mut self, ip: &str, now: DateTime<Utc>) -> String {
        let Self { names, resolver, config, .. } = self;
        let timeout = config.dns_timeout;

        names.entry(ip.to_owned()).or_insert_with(|| {
            let host = ip.parse().ok().and_then(|addr| {
                resolver.reverse(addr, timeout)
            });

            if host.is_none() {
                debug!("no name for {}, caching address", ip);
            }

            Name {
                host: host.unwrap_or_else(|| ip.to_owned()),
                time: now,
            }
        }).host.clone()
    }
}

// a timestamp ahead of now is clock skew and stays live
fn live(now: DateTime<Utc>, then: DateTime<Utc>, limit: Duration) -> bool {
    match now.signed_duration_since(then).to_std() {
        Ok(age) => age < limit,
        Err(_)  => true,
    }
}

fn event(conn: &RawConnection, ip: &str, port: u16, host: String, now: DateTime<Utc>) -> Event {
    let label = match conn.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_owned(),
        _                                => "unknown".to_owned(),
    };

    Event {
        full_url:    full_url(&host, port),
        domain:      host,
        label:       label,
        ip_address:  ip.to_owned(),
        detected_at: now,
        protocol:    conn.protocol.clone().unwrap_or_else(|| "tcp".to_owned()),
    }
}
