use std::cell::Cell;
use std::net::IpAddr;
use std::time::Duration;
use anyhow::Result;
use super::{Never, Resolve, System};

struct Count(Cell<usize>);

impl Resolve for Count {
    fn reverse(&self, _ip: IpAddr, _timeout: Duration) -> Option<String> {
        self.0.set(self.0.get() + 1);
        Some("counted.example".to_owned())
    }
}

#[test]
fn never() -> Result<()> {
    let ip = "93.184.216.34".parse()?;
    assert_eq!(None, Never.reverse(ip, Duration::from_secs(1)));
    Ok(())
}

#[test]
fn forward() -> Result<()> {
    let ip    = "93.184.216.34".parse()?;
    let count = Count(Cell::new(0));
    let delay = Duration::from_secs(1);

    let by_ref: &dyn Resolve = &count;
    assert_eq!(Some("counted.example".to_owned()), by_ref.reverse(ip, delay));
    assert_eq!(Some("counted.example".to_owned()), (&count).reverse(ip, delay));

    let boxed: Box<dyn Resolve> = Box::new(Never);
    assert_eq!(None, boxed.reverse(ip, delay));

    assert_eq!(2, count.0.get());

    Ok(())
}

#[test]
fn bounded() -> Result<()> {
    let system = System::new()?;
    let ip     = "192.0.2.1".parse()?;
    assert_eq!(None, system.reverse(ip, Duration::from_millis(1)));
    Ok(())
}
