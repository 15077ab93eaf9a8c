//! Rent due-date models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{RENT_DUE_SOON_DAYS, RENT_DUE_TODAY_DAYS, RENT_DUE_URGENT_DAYS};

/// How close the next rent due date is.
///
/// Tier breakpoints are 0, 3 and 7 days and are part of the contract;
/// test fixtures depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentDueUrgency {
    DueToday,
    Urgent,
    Soon,
    Routine,
}

impl RentDueUrgency {
    /// Classifies a day count until the due date into a tier.
    pub fn classify(days_until: i64) -> Self {
        if days_until <= RENT_DUE_TODAY_DAYS {
            RentDueUrgency::DueToday
        } else if days_until <= RENT_DUE_URGENT_DAYS {
            RentDueUrgency::Urgent
        } else if days_until <= RENT_DUE_SOON_DAYS {
            RentDueUrgency::Soon
        } else {
            RentDueUrgency::Routine
        }
    }

    /// Short display label for the tier.
    pub const fn label(&self) -> &'static str {
        match self {
            RentDueUrgency::DueToday => "due today",
            RentDueUrgency::Urgent => "urgent",
            RentDueUrgency::Soon => "soon",
            RentDueUrgency::Routine => "routine",
        }
    }

    /// Color tier used by the presentation layer.
    pub const fn color(&self) -> &'static str {
        match self {
            RentDueUrgency::DueToday => "danger",
            RentDueUrgency::Urgent => "warning",
            RentDueUrgency::Soon => "primary",
            RentDueUrgency::Routine => "default",
        }
    }
}

/// The projected next rent due date for a rented asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDueProjection {
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub urgency: RentDueUrgency,
}
