//! Shared configuration value types.

/// Minhash strategy used by the sketch engine.
///
/// Persisted as its integer code (`-1`, `0`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinhashType {
    /// Perfect hash for nucleotides, usable while 5^kmerlen < 2^63.
    PerfectHash,
    /// One hash function, multiple minimum values.
    SingleHashMultiMin,
    /// Multiple hash functions, one minimum value each.
    MultiHashSingleMin,
    /// One hash function with partitioned buckets.
    #[default]
    Bucketed,
}

impl MinhashType {
    /// Integer code used on the command line and in sketch headers.
    pub const fn code(self) -> i32 {
        match self {
            Self::PerfectHash => -1,
            Self::SingleHashMultiMin => 0,
            Self::MultiHashSingleMin => 1,
            Self::Bucketed => 2,
        }
    }

    /// Inverse of [`MinhashType::code`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::PerfectHash),
            0 => Some(Self::SingleHashMultiMin),
            1 => Some(Self::MultiHashSingleMin),
            2 => Some(Self::Bucketed),
            _ => None,
        }
    }
}

impl std::fmt::Display for MinhashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for MinhashType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i32 = s
            .parse()
            .map_err(|_| format!("'{s}' is not a valid minhash type"))?;
        Self::from_code(code)
            .ok_or_else(|| format!("minhash type must be one of -1, 0, 1, 2, got {code}"))
    }
}
