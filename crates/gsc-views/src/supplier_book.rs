//! Page-local supplier list
//!
//! The suppliers page edits its own copy of the list. Adds, edits and
//! removals stay in the [`SupplierBook`]; the service's dataset never
//! changes.

use crate::error::SupplierFormError;
use gsc_model::{Supplier, SupplierId};
use gsc_service::SupplyChainApi;
use serde::{Deserialize, Serialize};

/// Raw supplier form input
///
/// Every field is text, as typed. Numbers are parsed when the draft is
/// applied to a [`SupplierBook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierDraft {
    /// Name (required)
    pub name: String,
    /// Location (required)
    pub location: String,
    /// Latitude, blank for none
    pub lat: String,
    /// Longitude, blank for none
    pub lng: String,
    /// Rating 0-100, blank for 0
    pub rating: String,
    /// Comma-separated certifications
    pub certifications: String,
}

/// Parsed, validated form values
#[derive(Debug, Clone, PartialEq)]
struct SupplierFields {
    name: String,
    location: String,
    lat: Option<f64>,
    lng: Option<f64>,
    rating: u8,
    certifications: Vec<String>,
}

impl SupplierDraft {
    /// Create draft with the required fields
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// With coordinates text
    #[must_use]
    pub fn with_coordinates(mut self, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        self.lat = lat.into();
        self.lng = lng.into();
        self
    }

    /// With rating text
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// With comma-separated certifications
    #[must_use]
    pub fn with_certifications(mut self, certifications: impl Into<String>) -> Self {
        self.certifications = certifications.into();
        self
    }

    /// Pre-fill an edit form from an existing supplier
    #[must_use]
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            location: supplier.location.clone(),
            lat: supplier.lat.map(|v| v.to_string()).unwrap_or_default(),
            lng: supplier.lng.map(|v| v.to_string()).unwrap_or_default(),
            rating: supplier.rating.map(|v| v.to_string()).unwrap_or_default(),
            certifications: supplier.certifications.join(", "),
        }
    }

    fn parse(&self) -> Result<SupplierFields, SupplierFormError> {
        let name = required("name", &self.name)?;
        let location = required("location", &self.location)?;
        let lat = optional_number("lat", &self.lat)?;
        let lng = optional_number("lng", &self.lng)?;

        let rating = match optional_number("rating", &self.rating)? {
            None => 0,
            Some(value) if (0.0..=100.0).contains(&value) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let rating = value.round() as u8;
                rating
            }
            Some(value) => return Err(SupplierFormError::RatingOutOfRange(value)),
        };

        let certifications = self
            .certifications
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        Ok(SupplierFields {
            name,
            location,
            lat,
            lng,
            rating,
            certifications,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, SupplierFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SupplierFormError::MissingField(field));
    }
    Ok(value.to_string())
}

fn optional_number(field: &'static str, value: &str) -> Result<Option<f64>, SupplierFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(SupplierFormError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

impl SupplierFields {
    fn into_supplier(self, id: SupplierId) -> Supplier {
        Supplier {
            id,
            name: self.name,
            location: self.location,
            lat: self.lat,
            lng: self.lng,
            rating: Some(self.rating),
            certifications: self.certifications,
        }
    }
}

/// Editable copy of the supplier list
#[derive(Debug, Clone)]
pub struct SupplierBook {
    suppliers: Vec<Supplier>,
    /// `None` once `s{u64::MAX}` has been taken
    next_ordinal: Option<u64>,
}

impl SupplierBook {
    /// Create book from a supplier list
    ///
    /// New ids continue after the highest `s<n>` id in the list.
    #[must_use]
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        let next_ordinal = suppliers
            .iter()
            .filter_map(|s| s.id.ordinal())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            suppliers,
            next_ordinal,
        }
    }

    /// Copy the service's supplier list into a new book
    pub async fn load<A>(api: &A) -> Self
    where
        A: SupplyChainApi + ?Sized,
    {
        let suppliers = api.list_suppliers().await;
        tracing::debug!(suppliers = suppliers.len(), "supplier book loaded");
        Self::new(suppliers.to_vec())
    }

    /// Suppliers in display order
    #[inline]
    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Number of suppliers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    /// Whether the book is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Supplier by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Append a supplier from a form draft
    ///
    /// # Errors
    /// Returns error if the draft fails validation or no unused id is left
    pub fn add(&mut self, draft: &SupplierDraft) -> Result<SupplierId, SupplierFormError> {
        let fields = draft.parse()?;
        let ordinal = self.next_ordinal.ok_or(SupplierFormError::IdsExhausted)?;
        let id = SupplierId::new(format!("s{ordinal}"));
        self.next_ordinal = ordinal.checked_add(1);

        tracing::debug!(id = %id, name = %fields.name, "supplier added");
        self.suppliers.push(fields.into_supplier(id.clone()));
        Ok(id)
    }

    /// Replace a supplier's fields from a form draft, keeping its id
    ///
    /// # Errors
    /// Returns error if the draft fails validation or the id is unknown
    pub fn edit(&mut self, id: &str, draft: &SupplierDraft) -> Result<(), SupplierFormError> {
        let fields = draft.parse()?;
        let slot = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SupplierFormError::NotFound(id.to_string()))?;

        *slot = fields.into_supplier(slot.id.clone());
        tracing::debug!(id, "supplier edited");
        Ok(())
    }

    /// Remove a supplier; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.suppliers.len();
        self.suppliers.retain(|s| s.id != id);
        let removed = self.suppliers.len() != before;
        if removed {
            tracing::debug!(id, "supplier removed");
        }
        removed
    }

    /// Suppliers whose name or location contains `text`, ignoring case
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&Supplier> {
        let needle = text.trim().to_lowercase();
        self.suppliers
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || s.name.to_lowercase().contains(&needle)
                    || s.location.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for SupplierBook {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
