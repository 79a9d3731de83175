//! Synthetic records and the random source that draws them.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Serialize, Serializer};

use crate::config::TabularConfig;

/// Column names, in serialization order.
pub const HEADER: [&str; 8] = [
    "id",
    "name",
    "email",
    "value",
    "date",
    "description",
    "category",
    "status",
];

/// Domain appended to every generated email local part.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Year used for every generated date.
pub const DATE_YEAR: u16 = 2025;

/// Smallest generated `value`.
pub const VALUE_MIN: u32 = 100;
/// Largest generated `value`, inclusive.
pub const VALUE_MAX: u32 = 10_000;

// Capping days at 28 keeps every month/day pair a real calendar date.
const DAY_MAX: u8 = 28;

/// One generated row. Field order matches [`HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub value: u32,
    pub date: CalendarDay,
    pub description: String,
    pub category: Category,
    pub status: Status,
}

/// A `YYYY-MM-DD` date with a month in `1..=12` and a day in `1..=28`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Categorical label, serialized as its single-letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];
}

/// Status label, serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];
}

/// Draws records with strictly increasing ids starting at 0.
///
/// Every random field is sampled independently and uniformly.
pub struct RecordSource<R> {
    rng: R,
    next_id: u64,
    name_len: usize,
    email_local_len: usize,
    description_len: usize,
}

impl<R: Rng> RecordSource<R> {
    /// Creates a source whose first record has id 0.
    pub fn new(rng: R, config: &TabularConfig) -> Self {
        Self {
            rng,
            next_id: 0,
            name_len: config.name_len,
            email_local_len: config.email_local_len,
            description_len: config.description_len,
        }
    }

    /// Id the next call to [`next_record`](Self::next_record) will use.
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Draws the next record and advances the id.
    pub fn next_record(&mut self) -> SyntheticRecord {
        let id = self.next_id;
        self.next_id += 1;

        let name = alphanumeric(&mut self.rng, self.name_len);
        let local = alphanumeric(&mut self.rng, self.email_local_len);
        let value = self.rng.gen_range(VALUE_MIN..=VALUE_MAX);
        let date = CalendarDay {
            year: DATE_YEAR,
            month: self.rng.gen_range(1..=12),
            day: self.rng.gen_range(1..=DAY_MAX),
        };
        let description = alphanumeric(&mut self.rng, self.description_len);
        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];
        let status = Status::ALL[self.rng.gen_range(0..Status::ALL.len())];

        SyntheticRecord {
            id,
            name,
            email: format!("{local}@{EMAIL_DOMAIN}"),
            value,
            date,
            description,
            category,
            status,
        }
    }
}

/// Samples `len` characters uniformly from `[A-Za-z0-9]`.
pub fn alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
