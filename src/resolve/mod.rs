use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

pub use system::System;

mod system;

#[cfg(test)]
mod test;

/// Blocking reverse lookup of a single address.
///
/// Implementations must give up once `timeout` has elapsed and return
/// `None` for failures, timeouts and empty answers alike.
pub trait Resolve {
    fn reverse(&self, ip: IpAddr, timeout: Duration) -> Option<String>;
}

impl<T: Resolve + ?Sized> Resolve for &T {
    fn reverse(&self, ip: IpAddr, timeout: Duration) -> Option<String> {
        (**self).reverse(ip, timeout)
    }
}

impl<T: Resolve + ?Sized> Resolve for Box<T> {
    fn reverse(&self, ip: IpAddr, timeout: Duration) -> Option<String> {
        (**self).reverse(ip, timeout)
    }
}

impl<T: Resolve + ?Sized> Resolve for Arc<T> {
    fn reverse(&self, ip: IpAddr, timeout: Duration) -> Option<String> {
        (**self).reverse(ip, timeout)
    }
}

/// Resolver that never answers, every address resolves to itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Resolve for Never {
    fn reverse(&self, _ip: IpAddr, _timeout: Duration) -> Option<String> {
        None
    }
}
