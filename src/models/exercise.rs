// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exercise record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Document ID assigned by Firestore on insert; never written back
    /// into the document body.
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: Option<String>,
    /// Owning user's document ID. A plain string copy of the path
    /// parameter, not enforced by the store; a user deleted out-of-band
    /// orphans its exercises.
    pub user_id: String,
    /// Calendar date of the exercise. Serialized as `YYYY-MM-DD`, so
    /// lexicographic range filters in the store are chronological.
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration: f64,
    /// Free-form description
    pub description: String,
}
