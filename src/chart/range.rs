use std::fmt;
use std::str::FromStr;

use crate::core::IexError;

/// The time ranges the chart endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRange {
    /// Today, minute by minute.
    D1,
    D5,
    M1,
    M3,
    M6,
    /// Year to date.
    Ytd,
    Y1,
    Y2,
    Y5,
}

impl ChartRange {
    /// Every supported range, shortest first.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D5,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Ytd,
        Self::Y1,
        Self::Y2,
        Self::Y5,
    ];

    /// The token used in the request path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1m",
            Self::M3 => "3m",
            Self::M6 => "6m",
            Self::Ytd => "ytd",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
        }
    }

    /// Whether points are minutes within a single day rather than whole days.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::D1)
    }

    /// Whether every point falls within one calendar year, so month/day labels are unambiguous.
    #[must_use]
    pub const fn is_short(self) -> bool {
        matches!(self, Self::D5 | Self::M1 | Self::M3 | Self::M6 | Self::Ytd)
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == token)
            .ok_or_else(|| IexError::InvalidRange(s.to_string()))
    }
}
