//! Entity records
//!
//! Every record here is an immutable value. Field names serialize in
//! camelCase so exported JSON matches the shape consumed by chart and map
//! front ends.

use crate::ids::{PassportId, ProjectId, SupplierId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supply chain stage labels used by the seed
///
/// The stage set is open: any label is a valid stage, these are just the
/// ones the seed emits, in chain order.
pub mod stage {
    /// Raw material extraction and processing
    pub const RAW_MATERIAL: &str = "Raw Material";
    /// Manufacturing
    pub const MANUFACTURING: &str = "Manufacturing";
    /// Distribution and freight
    pub const DISTRIBUTION: &str = "Distribution";
    /// Retail
    pub const RETAIL: &str = "Retail";

    /// Seed stages in chain order
    pub const CHAIN: [&str; 4] = [RAW_MATERIAL, MANUFACTURING, DISTRIBUTION, RETAIL];
}

/// A tracked project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project id
    pub id: ProjectId,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Technology stack label
    pub stack: String,
    /// Reported latency in milliseconds (presentational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<u32>,
}

impl Project {
    /// Create project without a latency figure
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            stack: stack.into(),
            latency: None,
        }
    }

    /// With latency
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency = Some(latency_ms);
        self
    }
}

/// A supplier in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique supplier id
    pub id: SupplierId,
    /// Display name
    pub name: String,
    /// Free-text location
    pub location: String,
    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Sustainability rating, 0..=100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Certification labels, in display order
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Supplier {
    /// Create supplier with only the required fields
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<SupplierId>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            lat: None,
            lng: None,
            rating: None,
            certifications: Vec::new(),
        }
    }

    /// With coordinates
    #[inline]
    #[must_use]
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// With rating
    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// With certifications
    #[must_use]
    pub fn with_certifications<I, S>(mut self, certifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.certifications = certifications.into_iter().map(Into::into).collect();
        self
    }

    /// Coordinates, when both are known
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }
}

/// Where a product originates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Country name
    pub country: String,
    /// City name
    pub city: String,
    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Static sustainability record for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPassport {
    /// Passport id
    pub id: PassportId,
    /// Product this passport describes
    pub product_id: ProjectId,
    /// Display serial, e.g. `GV-2025-0001`
    pub serial: String,
    /// Product origin
    pub origin: Origin,
    /// Material labels
    pub materials: Vec<String>,
    /// Certification labels
    pub certifications: Vec<String>,
    /// Mock ledger verification flag
    pub blockchain_verified: bool,
    /// Sustainability score, 0..=100
    pub sustainability_score: u8,
}

/// One stage-level carbon measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionPoint {
    /// Stage label (see [`stage`])
    pub stage: String,
    /// Emitted CO2-equivalent in kilograms, never negative
    pub emissions_kg: f64,
    /// Free-text location
    pub location: String,
    /// When the measurement was taken
    pub timestamp: DateTime<Utc>,
}

impl EmissionPoint {
    /// Create emission point
    #[inline]
    #[must_use]
    pub fn new(
        stage: impl Into<String>,
        emissions_kg: f64,
        location: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            stage: stage.into(),
            emissions_kg,
            location: location.into(),
            timestamp,
        }
    }
}

/// Emission points per owning project
///
/// Keys keep insertion order; each slice keeps the order its points were
/// recorded in, which is not necessarily sorted by timestamp.
pub type EmissionLedger = IndexMap<ProjectId, Arc<[EmissionPoint]>>;
