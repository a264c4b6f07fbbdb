use std::{error::Error, fmt};

pub type GenericError = Box<dyn Error + Send + Sync + 'static>;

pub type PingResult<T> = std::result::Result<T, PingError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PingErrorKind {
    /// Invalid packet size, unresolvable host or missing raw-socket privilege.
    /// Terminates the process before any probe is sent.
    FatalConfig,
    /// A single send or receive failed. Counted, never fatal.
    ProbeTransient,
    /// A blocking call was cut short by an interrupt signal.
    Interrupted,
}

#[derive(Clone, Debug)]
pub struct PingError {
    pub kind: PingErrorKind,
    pub message: String,
}

impl PingError {
    pub fn fatal_config(message: impl Into<String>) -> Self {
        PingError { kind: PingErrorKind::FatalConfig, message: message.into() }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == PingErrorKind::FatalConfig
    }

    pub fn is_interrupted(&self) -> bool {
        self.kind == PingErrorKind::Interrupted
    }
}

impl fmt::Display for PingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "PingError")?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for PingError {
    fn from(error: std::io::Error) -> PingError {
        let kind = if error.kind() == std::io::ErrorKind::Interrupted {
            PingErrorKind::Interrupted
        } else {
            PingErrorKind::ProbeTransient
        };
        PingError { kind, message: error.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn fmt_without_message() {
        let ping_error = PingError { kind: PingErrorKind::ProbeTransient, message: String::new() };
        assert_eq!("PingError", format!("{ping_error}"));
    }

    #[test]
    fn fmt_with_message() {
        let ping_error = PingError::fatal_config("packet size out of range");
        assert_eq!("PingError: packet size out of range", format!("{ping_error}"));
    }

    #[test]
    fn source() {
        assert!(PingError::fatal_config("").source().is_none());
    }

    #[test]
    fn ping_error_from_std_io_error() {
        let ping_error = PingError::from(std::io::Error::from(ErrorKind::Other));
        assert_eq!(PingErrorKind::ProbeTransient, ping_error.kind);
        assert!(!ping_error.is_fatal());
    }

    #[test]
    fn interrupted_io_error_maps_to_interrupted() {
        let ping_error = PingError::from(std::io::Error::from(ErrorKind::Interrupted));
        assert!(ping_error.is_interrupted());
    }
}
