pub mod args;
pub mod cache;
pub mod config;
pub mod lsof;
pub mod resolve;

mod error;

pub use cache::{Cache, Event, RawConnection, Shared};
pub use config::Config;
pub use error::Error;
pub use resolve::Resolve;
