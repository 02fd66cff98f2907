use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

pub fn invalid_config_error(key: &str, value: &str) -> Error {
    Error {
        code: 100,
        message: format!("invalid value {:?} for {}", value, key),
    }
}

pub fn io_error(err: io::Error) -> Error {
    Error {
        code: 1,
        message: format!("output error: {}", err),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 2,
        message: "environment variable error".into(),
    }
}

pub fn serialization_error<T: Debug>(_: T) -> Error {
    Error {
        code: 3,
        message: "serialization error".into(),
    }
}

#[test]
fn io_error_conversion_test() {
    let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();

    assert_eq!(err.code, 1);
    assert!(err.message.contains("closed"));
}

#[test]
fn invalid_config_error_test() {
    let err = invalid_config_error("RIDESHARE_FORMAT", "yaml");

    assert_eq!(err.code, 100);
    assert_eq!(err.to_string(), "invalid value \"yaml\" for RIDESHARE_FORMAT (code 100)");
}
