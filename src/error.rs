use std::fmt;
use std::time::Duration;

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Timeout(Duration),
    Window(&'static str),
    Other(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Timeout(d) => write!(f, "invalid dns timeout {:?}", d),
            Error::Window(w)  => write!(f, "{} must be non-zero", w),
            Error::Other(s)   => write!(f, "{}", s),
        }
    }
}
