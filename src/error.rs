use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("out of memory allocating {requested} bytes for an OID")]
    OutOfMemory { requested: usize },
    /// The bytes are not a well-formed OID encoding. `offset` points at the byte where decoding gave up.
    #[error("malformed OID encoding at byte {offset}: {kind}")]
    Malformed { offset: usize, kind: MalformedKind },
}
impl Error {
    pub(crate) fn malformed(offset: usize, kind: MalformedKind) -> Self {
        Self::Malformed { offset, kind }
    }
    pub(crate) fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// Both a source OID and raw elements were given to the builder
    ConflictingSources,
    /// Neither a source OID nor raw elements were given to the builder
    MissingSource,
    EmptyElements,
    NullPointer,
    TooFewArcs { count: usize },
    InvalidComponent { input: String },
    FirstArc(u64),
    SecondArc { first: u64, second: u64 },
    ArcOverflow,
}
impl std::error::Error for InvalidArgument {}
impl Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingSources => write!(f, "a source OID and raw elements are mutually exclusive"),
            Self::MissingSource => write!(f, "either a source OID or raw elements are required"),
            Self::EmptyElements => write!(f, "OID elements must not be empty"),
            Self::NullPointer => write!(f, "null OID pointer"),
            Self::TooFewArcs { count } => write!(f, "an OID needs at least 2 arcs, got {count}"),
            Self::InvalidComponent { input } => write!(f, "invalid dotted OID component in {input:?}"),
            Self::FirstArc(arc) => write!(f, "first arc must be 0, 1 or 2, got {arc}"),
            Self::SecondArc { first, second } => {
                write!(f, "second arc must be below 40 under arc {first}, got {second}")
            }
            Self::ArcOverflow => write!(f, "arc value does not fit the first subidentifier"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedKind {
    Empty,
    /// The last subidentifier still has its continuation bit set
    Truncated,
    /// A subidentifier starts with a 0x80 padding byte
    NonMinimal,
    Overflow,
    UnexpectedTag(u8),
    InvalidLength,
    TrailingData,
}
impl Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty encoding"),
            Self::Truncated => write!(f, "truncated subidentifier"),
            Self::NonMinimal => write!(f, "non-minimal subidentifier"),
            Self::Overflow => write!(f, "arc exceeds 64 bits"),
            Self::UnexpectedTag(tag) => write!(f, "expected tag 0x06, found {tag:#04x}"),
            Self::InvalidLength => write!(f, "invalid length"),
            Self::TrailingData => write!(f, "trailing data"),
        }
    }
}
