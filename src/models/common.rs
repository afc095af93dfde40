//! Shared category and status enums
//!
//! Stored as TEXT with the exact labels used on the forms and in the
//! database CHECK constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{grades, roles, sexes, statuses};

/// Competition sex category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Sex {
    #[sqlx(rename = "Boys")]
    Boys,
    #[sqlx(rename = "Girls")]
    Girls,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Boys, Sex::Girls];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boys => sexes::BOYS,
            Self::Girls => sexes::GIRLS,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Competition bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Grade {
    #[sqlx(rename = "A")]
    A,
    #[sqlx(rename = "B")]
    B,
    #[sqlx(rename = "C")]
    C,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::A, Grade::B, Grade::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => grades::A,
            Self::B => grades::B,
            Self::C => grades::C,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    #[sqlx(rename = "admin")]
    Admin,
    #[sqlx(rename = "user")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => roles::ADMIN,
            Self::User => roles::USER,
        }
    }
}

/// Whether an event has been run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EventStatus {
    #[sqlx(rename = "Completed")]
    Completed,
    #[sqlx(rename = "Not yet start")]
    NotYetStart,
}

impl EventStatus {
    pub const ALL: [EventStatus; 2] = [EventStatus::Completed, EventStatus::NotYetStart];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => statuses::COMPLETED,
            Self::NotYetStart => statuses::NOT_YET_START,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Outcome of an athlete's entry in an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ResultStatus {
    #[sqlx(rename = "Completed")]
    Completed,
    #[sqlx(rename = "Not yet start")]
    NotYetStart,
    #[sqlx(rename = "Disqualification")]
    Disqualification,
}

impl ResultStatus {
    pub const ALL: [ResultStatus; 3] = [
        ResultStatus::Completed,
        ResultStatus::NotYetStart,
        ResultStatus::Disqualification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => statuses::COMPLETED,
            Self::NotYetStart => statuses::NOT_YET_START,
            Self::Disqualification => statuses::DISQUALIFICATION,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Only completed entries take part in ranking
    pub fn is_rankable(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
