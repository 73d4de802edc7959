use std::net::IpAddr;
use std::time::Duration;
use log::{debug, trace, warn};
use tokio::runtime::{Builder, Runtime};
use tokio::time::timeout;
use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use crate::Error;
use super::Resolve;

pub struct System {
    rt:       Runtime,
    resolver: TokioAsyncResolver,
}

impl System {
    pub fn new() -> Result<Self, Error> {
        let rt = Builder::new_current_thread().enable_all().build()?;

        let resolver = {
            let _guard = rt.enter();
            TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
                warn!("system resolver config unavailable: {}", e);
                TokioAsyncResolver::tokio(ResolverConfig::google(), ResolverOpts::default())
            })
        };

        Ok(Self { rt, resolver })
    }

    async fn lookup(&self, ip: IpAddr, delay: Duration) -> Option<String> {
        let lookup = match timeout(delay, self.resolver.reverse_lookup(ip)).await {
            Ok(Ok(lookup)) => lookup,
            Ok(Err(e))     => {
                debug!("reverse lookup of {} failed: {}", ip, e);
                return None;
            }
            Err(_)         => {
                debug!("reverse lookup of {} timed out after {:?}", ip, delay);
                return None;
            }
        };

        let name = lookup.iter().next()?.to_string();
        let name = name.trim_end_matches('.');

        match name {
            "" => None,
            _  => Some(name.to_owned()),
        }
    }
}

impl Resolve for System {
    fn reverse(&self, ip: IpAddr, timeout: Duration) -> Option<String> {
        let name = self.rt.block_on(self.lookup(ip, timeout));
        trace!("{} resolved to {:?}", ip, name);
        name
    }
}
