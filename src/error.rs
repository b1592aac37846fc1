use std::{borrow::Cow, fmt, io};

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// An `io::Error` occurred, e.g. while reading or writing the save file.
    Io(io::Error),
    /// `bincode` couldn't encode or decode the save file's contents.
    Encoding(bincode::Error),
    /// The save file exists, but isn't one of ours.
    Corrupt(Cow<'static, str>),
    /// The game was configured with settings it can't run with.
    Config(Cow<'static, str>),
    /// Just directly contains an error message.
    Bare(Cow<'static, str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Encoding(e) => write!(f, "invalid save data: {}", e),
            Self::Corrupt(m) => write!(f, "corrupt save file: {}", m),
            Self::Config(m) => write!(f, "bad configuration: {}", m),
            Self::Bare(m) => f.write_str(m),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<bincode::Error> for Error {
    fn from(value: bincode::Error) -> Self {
        match *value {
            // bincode wraps I/O failures; report them as what they are
            bincode::ErrorKind::Io(e) => Self::Io(e),
            other => Self::Encoding(Box::new(other)),
        }
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Bare(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
