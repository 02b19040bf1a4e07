/// Coarse classification of a [`LookupError`], comparable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoInput,
    InvalidIp,
    PrivateIp,
    NoData,
    ServiceUnavailable,
    BadGateway,
    Unknown,
    Transport,
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no input IP")]
    NoInput,
    #[error("invalid IP")]
    InvalidIp,
    #[error("private IP")]
    PrivateIp,
    #[error("API no data")]
    NoData,
    #[error("API unavailable")]
    ServiceUnavailable,
    #[error("API bad gateway")]
    BadGateway,
    #[error("unknown error (code {0})")]
    Unknown(i64),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoInput => ErrorKind::NoInput,
            Self::InvalidIp => ErrorKind::InvalidIp,
            Self::PrivateIp => ErrorKind::PrivateIp,
            Self::NoData => ErrorKind::NoData,
            Self::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            Self::BadGateway => ErrorKind::BadGateway,
            Self::Unknown(_) => ErrorKind::Unknown,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether the upstream gateway answered with an error page instead of JSON. This is what the
    /// service returns once its request rate cap is exceeded.
    pub fn is_outage(&self) -> bool {
        matches!(self, Self::ServiceUnavailable | Self::BadGateway)
    }
}
