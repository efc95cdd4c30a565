//! Season-versioned setting values
//!
//! A `Timeline<T>` records when a setting changed. Each entry is effective from
//! its `start` season until the next entry starts; the first entry always
//! starts at negative infinity so every season resolves to some value.
//!
//! ```text
//! [{start: -inf, value: [7,7,7,7]}, {start: 2031, value: [5,7,7]}]
//!   2030 -> [7,7,7,7]
//!   2031 -> [5,7,7]
//! ```
//!
//! League files are JSON, which has no `-Infinity`, so the sentinel is written
//! as `null`.

use crate::models::Phase;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Malformed timeline errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("timeline has no entries")]
    Empty,

    #[error("first timeline entry must start at -Infinity, found season {0}")]
    MissingSentinel(i32),

    #[error("timeline entries must be strictly ascending, found {0} out of order")]
    OutOfOrder(SeasonStart),
}

/// First season an entry applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeasonStart {
    NegativeInfinity,
    Season(i32),
}

impl fmt::Display for SeasonStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonStart::NegativeInfinity => write!(f, "-Infinity"),
            SeasonStart::Season(season) => write!(f, "{}", season),
        }
    }
}

impl Serialize for SeasonStart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeasonStart::NegativeInfinity => serializer.serialize_none(),
            SeasonStart::Season(season) => serializer.serialize_i32(*season),
        }
    }
}

impl<'de> Deserialize<'de> for SeasonStart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawStart {
            Season(i32),
            Label(String),
        }

        match Option::<RawStart>::deserialize(deserializer)? {
            None => Ok(SeasonStart::NegativeInfinity),
            Some(RawStart::Season(season)) => Ok(SeasonStart::Season(season)),
            Some(RawStart::Label(label)) if label == "-Infinity" => {
                Ok(SeasonStart::NegativeInfinity)
            }
            Some(RawStart::Label(label)) => {
                Err(D::Error::custom(format!("invalid timeline start: {}", label)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimelineEntry<T> {
    #[schemars(with = "Option<i32>")]
    pub start: SeasonStart,
    pub value: T,
}

impl<T> TimelineEntry<T> {
    pub fn new(start: SeasonStart, value: T) -> Self {
        Self { start, value }
    }
}

/// Season at which a change made now becomes effective.
///
/// Once the playoffs are over the current season is settled, so changes
/// apply from next season.
pub fn next_configurable_season(season: i32, phase: Phase) -> i32 {
    if phase.after_playoffs() {
        season.saturating_add(1)
    } else {
        season
    }
}

/// Ordered, non-empty history of a setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    entries: Vec<TimelineEntry<T>>,
}

impl<T> Timeline<T> {
    /// A value with no history, effective for every season.
    pub fn new(value: T) -> Self {
        Self { entries: vec![TimelineEntry::new(SeasonStart::NegativeInfinity, value)] }
    }

    pub fn from_entries(entries: Vec<TimelineEntry<T>>) -> Result<Self, TimelineError> {
        let first = entries.first().ok_or(TimelineError::Empty)?;
        if let SeasonStart::Season(season) = first.start {
            return Err(TimelineError::MissingSentinel(season));
        }

        for pair in entries.windows(2) {
            if pair[1].start <= pair[0].start {
                return Err(TimelineError::OutOfOrder(pair[1].start));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TimelineEntry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimelineEntry<T>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_history(&self) -> bool {
        self.entries.len() > 1
    }

    /// Index of the entry in effect for `season`.
    pub fn entry_index_at(&self, season: i32) -> usize {
        // The sentinel sorts before every season, so the partition point is at least 1.
        let point = self.entries.partition_point(|entry| entry.start <= SeasonStart::Season(season));
        point.saturating_sub(1)
    }

    /// Value in effect for `season`.
    pub fn resolve(&self, season: i32) -> &T {
        &self.entries[self.entry_index_at(season)].value
    }

    /// Most recent value, including one scheduled for a future season.
    pub fn latest(&self) -> &T {
        &self.entries[self.entries.len() - 1].value
    }

    pub fn latest_start(&self) -> SeasonStart {
        self.entries[self.entries.len() - 1].start
    }

    /// Record `value` as of the next configurable season.
    ///
    /// Overwrites the last entry when it already starts at that season,
    /// appends otherwise. Returns the season the value takes effect.
    pub fn set_effective_now(&mut self, season: i32, phase: Phase, value: T) -> i32 {
        let effective = next_configurable_season(season, phase);
        let start = SeasonStart::Season(effective);
        let last = self.entries.len() - 1;

        if self.entries[last].start == start {
            self.entries[last].value = value;
        } else if self.entries[last].start < start {
            self.entries.push(TimelineEntry::new(start, value));
        } else {
            // History already runs past the effective season; correct the
            // entry covering it instead of breaking the ordering.
            let index = self.entry_index_at(effective);
            if self.entries[index].start == start {
                self.entries[index].value = value;
            } else {
                self.entries.insert(index + 1, TimelineEntry::new(start, value));
            }
        }

        effective
    }
}

impl<T: PartialEq> Timeline<T> {
    /// True when the value never changes across the history.
    pub fn is_constant(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0].value == pair[1].value)
    }
}

impl<T: Serialize> Serialize for Timeline<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Timeline<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<U> {
            History(Vec<TimelineEntry<U>>),
            Scalar(U),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::History(entries) => Timeline::from_entries(entries).map_err(D::Error::custom),
            Repr::Scalar(value) => Ok(Timeline::new(value)),
        }
    }
}

impl<T: JsonSchema> JsonSchema for Timeline<T> {
    fn schema_name() -> String {
        format!("Timeline_{}", T::schema_name())
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <Vec<TimelineEntry<T>>>::json_schema(gen)
    }
}
