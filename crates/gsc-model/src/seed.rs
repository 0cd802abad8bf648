//! Seed dataset
//!
//! [`DataContext`] holds every record the tracker serves. It is built once
//! from literal rows plus a closed-form expansion (no RNG), so two builds
//! always produce identical ids, values, and ordering.
//!
//! # Expansion
//!
//! - Suppliers are padded from the three literal rows to [`SUPPLIER_TARGET`].
//! - Projects `p3` and `p4` each get [`GENERATED_EVENTS_PER_PROJECT`] emission
//!   points cycling through the chain stages. `p1` and `p2` keep only their
//!   literal events.

use crate::error::SeedError;
use crate::ids::{PassportId, ProjectId, SupplierId};
use crate::types::{stage, EmissionLedger, EmissionPoint, Origin, ProductPassport, Project, Supplier};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Number of suppliers after expansion
pub const SUPPLIER_TARGET: usize = 250;

/// Generated emission points per expanded project
pub const GENERATED_EVENTS_PER_PROJECT: usize = 512;

/// Projects whose ledgers are generated
const GENERATED_PROJECTS: [&str; 2] = ["p3", "p4"];

/// Per-stage baseline in kg, indexed like [`stage::CHAIN`]
const STAGE_BASE_KG: [u32; 4] = [100, 380, 190, 60];

const HOURS_BETWEEN_EVENTS: i64 = 6;

const ADJECTIVES: &[&str] = &[
    "Green", "Eco", "Terra", "Solar", "Verdant", "Blue", "Renew", "Pure", "Clear", "Harvest",
    "Circular", "Nordic", "Coastal", "Summit", "Prime", "Evergreen",
];

const NOUNS: &[&str] = &[
    "Fabrics",
    "Textiles",
    "Logistics",
    "Freight",
    "Dyeworks",
    "Mills",
    "Packaging",
    "Fibers",
    "Cargo",
    "Looms",
    "Threads",
    "Supply",
    "Works",
    "Trading",
    "Materials",
    "Transit",
];

/// (city, country, lat, lng)
const HUBS: &[(&str, &str, f64, f64)] = &[
    ("Bhubaneswar", "India", 20.2961, 85.8245),
    ("Dhaka", "Bangladesh", 23.8103, 90.4125),
    ("Dubai", "UAE", 25.2048, 55.2708),
    ("Ho Chi Minh City", "Vietnam", 10.8231, 106.6297),
    ("Istanbul", "Turkey", 41.0082, 28.9784),
    ("Porto", "Portugal", 41.1579, -8.6291),
    ("Guangzhou", "China", 23.1291, 113.2644),
    ("Tiruppur", "India", 11.1085, 77.3411),
    ("Karachi", "Pakistan", 24.8607, 67.0011),
    ("Rotterdam", "Netherlands", 51.9244, 4.4777),
    ("Jakarta", "Indonesia", -6.2088, 106.8456),
    ("Lima", "Peru", -12.0464, -77.0428),
];

const CERTIFICATIONS: &[&str] = &[
    "ISO14001", "FairTrade", "B Corp", "GOTS", "OEKO-TEX", "SA8000", "Bluesign",
];

const EMISSION_COUNTRIES: &[&str] = &["India", "Bangladesh", "UAE", "Vietnam", "Turkey", "Portugal"];

/// Immutable seed shared by every reader
///
/// Built once at startup and handed to the data service behind an `Arc`.
/// Nothing in the workspace mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataContext {
    projects: Arc<[Project]>,
    suppliers: Arc<[Supplier]>,
    passports: Arc<[ProductPassport]>,
    emissions: EmissionLedger,
}

impl DataContext {
    /// Build the full seed: literal rows plus deterministic expansion
    ///
    /// # Errors
    /// Returns error if a seed constant violates a dataset invariant
    pub fn seeded() -> Result<Self, SeedError> {
        let ctx = Self::from_parts(
            seed_projects(),
            seed_suppliers(),
            seed_passports(),
            seed_emissions()?,
        );
        ctx.validate()?;

        tracing::debug!(
            projects = ctx.projects.len(),
            suppliers = ctx.suppliers.len(),
            passports = ctx.passports.len(),
            emission_points = ctx.emission_point_count(),
            "seed dataset built"
        );
        Ok(ctx)
    }

    /// Assemble context from parts without validating
    #[must_use]
    pub fn from_parts(
        projects: Vec<Project>,
        suppliers: Vec<Supplier>,
        passports: Vec<ProductPassport>,
        emissions: EmissionLedger,
    ) -> Self {
        Self {
            projects: projects.into(),
            suppliers: suppliers.into(),
            passports: passports.into(),
            emissions,
        }
    }

    /// Assemble context from parts and validate it
    ///
    /// # Errors
    /// Returns the first invariant violation found
    pub fn try_from_parts(
        projects: Vec<Project>,
        suppliers: Vec<Supplier>,
        passports: Vec<ProductPassport>,
        emissions: EmissionLedger,
    ) -> Result<Self, SeedError> {
        let ctx = Self::from_parts(projects, suppliers, passports, emissions);
        ctx.validate()?;
        Ok(ctx)
    }

    /// Check every dataset invariant
    ///
    /// # Errors
    /// Returns the first violation in this order: duplicate ids, supplier
    /// ratings, passport scores and references, emission keys and values.
    pub fn validate(&self) -> Result<(), SeedError> {
        ensure_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("supplier", self.suppliers.iter().map(|s| s.id.as_str()))?;
        ensure_unique("passport", self.passports.iter().map(|p| p.id.as_str()))?;

        if let Some(supplier) = self.suppliers.iter().find(|s| s.rating.is_some_and(|r| r > 100)) {
            return Err(SeedError::RatingOutOfRange {
                supplier: supplier.id.to_string(),
                rating: supplier.rating.unwrap_or_default(),
            });
        }

        for passport in self.passports.iter() {
            if passport.sustainability_score > 100 {
                return Err(SeedError::ScoreOutOfRange {
                    passport: passport.id.to_string(),
                    score: passport.sustainability_score,
                });
            }
            if self.project(passport.product_id.as_str()).is_none() {
                return Err(SeedError::UnknownProject {
                    referenced_by: format!("passport {}", passport.id),
                    project: passport.product_id.to_string(),
                });
            }
        }

        for (project, points) in &self.emissions {
            if self.project(project.as_str()).is_none() {
                return Err(SeedError::UnknownProject {
                    referenced_by: "emission ledger".to_string(),
                    project: project.to_string(),
                });
            }
            if let Some((index, point)) = points
                .iter()
                .enumerate()
                .find(|(_, p)| !p.emissions_kg.is_finite() || p.emissions_kg < 0.0)
            {
                return Err(SeedError::InvalidEmission {
                    project: project.to_string(),
                    index,
                    kg: point.emissions_kg,
                });
            }
        }

        Ok(())
    }

    /// All projects in seed order
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &Arc<[Project]> {
        &self.projects
    }

    /// All suppliers in seed order
    #[inline]
    #[must_use]
    pub fn suppliers(&self) -> &Arc<[Supplier]> {
        &self.suppliers
    }

    /// All product passports
    #[inline]
    #[must_use]
    pub fn passports(&self) -> &Arc<[ProductPassport]> {
        &self.passports
    }

    /// Emission ledger keyed by project
    #[inline]
    #[must_use]
    pub fn emissions(&self) -> &EmissionLedger {
        &self.emissions
    }

    /// First project with the given id
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// First passport describing the given product
    #[must_use]
    pub fn passport_for_product(&self, product_id: &str) -> Option<&ProductPassport> {
        self.passports.iter().find(|p| p.product_id == product_id)
    }

    /// Total number of emission points across all projects
    #[must_use]
    pub fn emission_point_count(&self) -> usize {
        self.emissions.values().map(|points| points.len()).sum()
    }

    /// Sum of every emission point in kg
    #[must_use]
    pub fn grand_total_kg(&self) -> f64 {
        self.emissions
            .values()
            .flat_map(|points| points.iter())
            .map(|p| p.emissions_kg)
            .sum()
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn instant(year: i32, month: u32, day: u32, hour: u32) -> Result<DateTime<Utc>, SeedError> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .ok_or(SeedError::InvalidTimestamp {
            year,
            month,
            day,
            hour,
        })
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            "p1",
            "GreenVision",
            "Model monitoring for energy optimization",
            "Angular · Node",
        )
        .with_latency(120),
        Project::new(
            "p2",
            "EcoAnnotate",
            "Labeling UI with active learning",
            "Angular · Python",
        )
        .with_latency(98),
        Project::new(
            "p3",
            "CarbonTracker",
            "Estimating carbon impact of model training",
            "Angular · Go",
        )
        .with_latency(200),
        Project::new(
            "p4",
            "ReUseNet",
            "Model registry and reuse recommendations",
            "Angular · Java",
        )
        .with_latency(85),
    ]
}

fn seed_suppliers() -> Vec<Supplier> {
    let mut suppliers = Vec::with_capacity(SUPPLIER_TARGET);
    suppliers.push(
        Supplier::new("s1", "GreenCut Fabrics", "Bhubaneswar, India")
            .with_coordinates(20.2961, 85.8245)
            .with_rating(88)
            .with_certifications(["ISO14001", "FairTrade"]),
    );
    suppliers.push(
        Supplier::new("s2", "Bright Sew", "Dhaka, Bangladesh")
            .with_coordinates(23.8103, 90.4125)
            .with_rating(62)
            .with_certifications(["B Corp"]),
    );
    suppliers.push(
        Supplier::new("s3", "LogiMove", "Dubai, UAE")
            .with_coordinates(25.2048, 55.2708)
            .with_rating(74),
    );

    let first_generated = suppliers.len() + 1;
    suppliers.extend((first_generated..=SUPPLIER_TARGET).map(generated_supplier));
    suppliers
}

fn generated_supplier(i: usize) -> Supplier {
    let name = format!(
        "{} {}",
        ADJECTIVES[i % ADJECTIVES.len()],
        NOUNS[(i / ADJECTIVES.len()) % NOUNS.len()]
    );
    let (city, country, lat, lng) = HUBS[i % HUBS.len()];
    #[allow(clippy::cast_precision_loss)]
    let offset = (i % 10) as f64 * 0.01;
    #[allow(clippy::cast_possible_truncation)]
    let rating = (35 + (i * 37) % 66) as u8;
    let certifications = (0..i % 4).map(|k| CERTIFICATIONS[(i + k) % CERTIFICATIONS.len()]);

    Supplier::new(SupplierId::new(format!("s{i}")), name, format!("{city}, {country}"))
        .with_coordinates(lat + offset, lng + offset)
        .with_rating(rating)
        .with_certifications(certifications)
}

fn seed_passports() -> Vec<ProductPassport> {
    vec![
        ProductPassport {
            id: PassportId::new("pp1"),
            product_id: ProjectId::new("p1"),
            serial: "GV-2025-0001".to_string(),
            origin: Origin {
                country: "India".to_string(),
                city: "Bhubaneswar".to_string(),
                lat: Some(20.2961),
                lng: Some(85.8245),
            },
            materials: vec!["Recycled Cotton".to_string(), "Biobased Dye".to_string()],
            certifications: vec!["GOTS".to_string(), "FairTrade".to_string()],
            blockchain_verified: true,
            sustainability_score: 86,
        },
        ProductPassport {
            id: PassportId::new("pp2"),
            product_id: ProjectId::new("p2"),
            serial: "EA-2025-0002".to_string(),
            origin: Origin {
                country: "Bangladesh".to_string(),
                city: "Dhaka".to_string(),
                lat: Some(23.8103),
                lng: Some(90.4125),
            },
            materials: vec!["Organic Cotton".to_string(), "Recycled PET".to_string()],
            certifications: vec!["OEKO-TEX".to_string()],
            blockchain_verified: false,
            sustainability_score: 72,
        },
    ]
}

fn seed_emissions() -> Result<EmissionLedger, SeedError> {
    let mut ledger = EmissionLedger::new();

    ledger.insert(
        ProjectId::new("p1"),
        Arc::from(vec![
            EmissionPoint::new(stage::RAW_MATERIAL, 120.0, "India", instant(2025, 1, 15, 8)?),
            EmissionPoint::new(stage::MANUFACTURING, 450.0, "Bangladesh", instant(2025, 2, 10, 9)?),
            EmissionPoint::new(stage::DISTRIBUTION, 230.0, "UAE", instant(2025, 3, 5, 3)?),
            EmissionPoint::new(stage::RETAIL, 80.0, "India", instant(2025, 3, 20, 10)?),
        ]),
    );
    ledger.insert(
        ProjectId::new("p2"),
        Arc::from(vec![
            EmissionPoint::new(stage::RAW_MATERIAL, 90.0, "India", instant(2025, 1, 22, 8)?),
            EmissionPoint::new(stage::MANUFACTURING, 350.0, "Bangladesh", instant(2025, 2, 14, 9)?),
            EmissionPoint::new(stage::DISTRIBUTION, 150.0, "UAE", instant(2025, 3, 7, 3)?),
        ]),
    );

    let start = instant(2025, 1, 1, 0)?;
    for (offset, project) in GENERATED_PROJECTS.iter().enumerate() {
        ledger.insert(ProjectId::new(*project), generated_ledger(offset, start));
    }

    Ok(ledger)
}

fn generated_ledger(project_offset: usize, start: DateTime<Utc>) -> Arc<[EmissionPoint]> {
    let project_start = start + Duration::hours(3 * project_offset as i64);
    (0..GENERATED_EVENTS_PER_PROJECT)
        .map(|n| {
            let stage_index = n % stage::CHAIN.len();
            let variation = (n * 53 + project_offset * 17) % 97;
            #[allow(clippy::cast_possible_truncation)]
            let kg = STAGE_BASE_KG[stage_index] + variation as u32;
            let location = EMISSION_COUNTRIES[(n / stage::CHAIN.len()) % EMISSION_COUNTRIES.len()];
            EmissionPoint::new(
                stage::CHAIN[stage_index],
                f64::from(kg),
                location,
                project_start + Duration::hours(HOURS_BETWEEN_EVENTS * n as i64),
            )
        })
        .collect()
}
