//! Closed enumeration of collection week days.

use super::ordinal_set::Ordinal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week, ordered Monday first (ISO 8601).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const WEEKDAY_LABELS: [&str; 7] = [
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
    "Domingo",
];

const WEEKDAY_SHORT_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

impl WeekDay {
    /// Every day, Monday through Sunday.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [WeekDay; 5] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
            WeekDay::Sunday => "sunday",
        }
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn iso_number(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }

    pub fn short_label(self) -> &'static str {
        WEEKDAY_SHORT_LABELS[self as usize]
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, WeekDay::Saturday | WeekDay::Sunday)
    }

    /// Parse a persisted name, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL.iter().copied().find(|day| day.as_str() == normalized)
    }

    pub(crate) fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|day| day.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Ordinal for WeekDay {
    const ALL: &'static [Self] = &WeekDay::ALL;

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl From<chrono::Weekday> for WeekDay {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => WeekDay::Monday,
            chrono::Weekday::Tue => WeekDay::Tuesday,
            chrono::Weekday::Wed => WeekDay::Wednesday,
            chrono::Weekday::Thu => WeekDay::Thursday,
            chrono::Weekday::Fri => WeekDay::Friday,
            chrono::Weekday::Sat => WeekDay::Saturday,
            chrono::Weekday::Sun => WeekDay::Sunday,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
