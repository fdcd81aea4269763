use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

pub type Seconds = u64;

/// A timespan with a second precision, the resolution the on-chain clock
/// based parameters are expressed in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(Seconds);

impl Duration {
    const SECONDS_IN_MINUTE: Seconds = 60;
    const SECONDS_IN_HOUR: Seconds = Self::SECONDS_IN_MINUTE * Self::MINUTES_IN_HOUR;
    const SECONDS_IN_DAY: Seconds = Self::SECONDS_IN_HOUR * Self::HOURS_IN_DAY;

    const MINUTES_IN_HOUR: Seconds = 60;
    const HOURS_IN_DAY: Seconds = 24;

    pub const HOUR: Duration = Self::from_hours(1);

    pub const DAY: Duration = Self::from_days(1);

    pub const YEAR: Duration = Self::from_days(365);

    pub const fn from_secs(secs: Seconds) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u16) -> Self {
        Self::from_secs(minutes as Seconds * Self::SECONDS_IN_MINUTE)
    }

    pub const fn from_hours(hours: u16) -> Self {
        Self::from_secs(hours as Seconds * Self::SECONDS_IN_HOUR)
    }

    pub const fn from_days(days: u16) -> Self {
        Self::from_secs(days as Seconds * Self::SECONDS_IN_DAY)
    }

    pub const fn secs(&self) -> Seconds {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether `self` splits into a whole number of `part`-s.
    pub const fn is_multiple_of(&self, part: Self) -> bool {
        !part.is_zero() && self.0 % part.0 == 0
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}s", self.0)
    }
}
