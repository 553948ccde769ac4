// ABOUTME: Immutable breed catalog with id/name lookup and typed fallback resolution
// ABOUTME: Built from a static breed table, optionally extended at construction time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Breed Catalog
//!
//! Holds the breed records the calculators need. The catalog is assembled once
//! by [`CatalogBuilder`] and is read-only afterwards, so a single instance can
//! be shared across threads during parallel report generation.
//!
//! Lookups by id or name return `Option`; only [`BreedCatalog::resolve`] turns a
//! miss into an error, and only when the [`BreedFallbackPolicy`] says so.

use herdwise_core::errors::{AppError, AppResult};
use herdwise_core::models::BreedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Built-in breed table: (id, name, species, growth potential factor, mature weight kg)
///
/// Factors are relative to a commercial crossbred steer (1.0). Mature weights are
/// typical cow weights in moderate body condition.
const BUILTIN_BREEDS: &[(&str, &str, &str, f64, f64)] = &[
    ("crossbred", "Commercial Crossbred", "cattle", 1.00, 650.0),
    ("angus", "Aberdeen Angus", "cattle", 1.05, 620.0),
    ("hereford", "Hereford", "cattle", 1.00, 640.0),
    ("charolais", "Charolais", "cattle", 1.12, 800.0),
    ("limousin", "Limousin", "cattle", 1.10, 720.0),
    ("simmental", "Simmental", "cattle", 1.08, 760.0),
    ("holstein", "Holstein-Friesian", "cattle", 0.92, 680.0),
    ("brahman", "Brahman", "cattle", 0.88, 560.0),
    ("blonde-d-aquitaine", "Blonde d'Aquitaine", "cattle", 1.11, 780.0),
    ("piemontese", "Piemontese", "cattle", 1.06, 650.0),
];

/// How a breed reference that matches nothing is handled
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", content = "breed_id", rename_all = "snake_case")]
pub enum BreedFallbackPolicy {
    /// A miss is a `NotFound` error
    Strict,
    /// A miss resolves to the first catalog entry
    #[default]
    FirstInCatalog,
    /// A miss resolves to the named breed id
    Specific(String),
}

impl fmt::Display for BreedFallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::FirstInCatalog => f.write_str("first"),
            Self::Specific(id) => write!(f, "specific:{id}"),
        }
    }
}

impl FromStr for BreedFallbackPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "first" | "first_in_catalog" => Ok(Self::FirstInCatalog),
            _ => trimmed
                .strip_prefix("specific:")
                .filter(|id| !id.trim().is_empty())
                .map(|id| Self::Specific(id.trim().to_owned()))
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Unrecognized breed fallback policy '{trimmed}' (expected strict, first or specific:<breed id>)"
                    ))
                }),
        }
    }
}

/// How a breed reference was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedMatch {
    /// Exact id match
    Id,
    /// Case-insensitive name match
    Name,
    /// No match; the fallback policy supplied the breed
    Fallback,
}

/// Result of resolving a breed reference against the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBreed<'a> {
    /// The breed the calculations will use
    pub record: &'a BreedRecord,
    /// How the record was found
    pub matched_by: BreedMatch,
}

impl ResolvedBreed<'_> {
    /// Whether the fallback policy had to supply the breed
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.matched_by == BreedMatch::Fallback
    }
}

/// Read-only registry of breed records
#[derive(Debug, Clone, PartialEq)]
pub struct BreedCatalog {
    breeds: Vec<BreedRecord>,
}

impl Default for BreedCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BreedCatalog {
    /// Catalog containing only the built-in breed table
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            breeds: builtin_records(),
        }
    }

    /// Start building a catalog from the built-in table
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::with_builtin()
    }

    /// Look up a breed by its exact id
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&BreedRecord> {
        self.breeds.iter().find(|breed| breed.id == id)
    }

    /// Look up a breed by display name, ignoring case
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&BreedRecord> {
        let wanted = name.trim().to_lowercase();
        self.breeds
            .iter()
            .find(|breed| breed.name.to_lowercase() == wanted)
    }

    /// All breeds in insertion order
    #[must_use]
    pub fn get_all(&self) -> &[BreedRecord] {
        &self.breeds
    }

    /// Number of breeds
    #[must_use]
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Whether the catalog has no breeds
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Find a breed by id, then by name, without any fallback
    #[must_use]
    pub fn lookup(&self, breed_ref: &str) -> Option<ResolvedBreed<'_>> {
        let trimmed = breed_ref.trim();
        self.get_by_id(trimmed)
            .map(|record| ResolvedBreed {
                record,
                matched_by: BreedMatch::Id,
            })
            .or_else(|| {
                self.get_by_name(trimmed).map(|record| ResolvedBreed {
                    record,
                    matched_by: BreedMatch::Name,
                })
            })
    }

    /// Resolve a breed reference, applying the fallback policy on a miss
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches and the policy is
    /// `Strict`, when the catalog is empty, or when a `Specific` fallback id is
    /// itself not in the catalog.
    pub fn resolve(
        &self,
        breed_ref: &str,
        policy: &BreedFallbackPolicy,
    ) -> AppResult<ResolvedBreed<'_>> {
        if let Some(resolved) = self.lookup(breed_ref) {
            return Ok(resolved);
        }

        let fallback = match policy {
            BreedFallbackPolicy::Strict => None,
            BreedFallbackPolicy::FirstInCatalog => self.breeds.first(),
            BreedFallbackPolicy::Specific(id) => self.get_by_id(id),
        };

        fallback.map_or_else(
            || {
                debug!(breed_ref, policy = %policy, "Breed lookup failed without fallback");
                Err(AppError::not_found(format!("Breed '{breed_ref}'")).with_resource_id(breed_ref))
            },
            |record| {
                warn!(
                    breed_ref,
                    fallback_breed = %record.id,
                    "Unknown breed, using fallback"
                );
                Ok(ResolvedBreed {
                    record,
                    matched_by: BreedMatch::Fallback,
                })
            },
        )
    }
}

fn builtin_records() -> Vec<BreedRecord> {
    BUILTIN_BREEDS
        .iter()
        .map(|&(id, name, species, factor, mature_weight)| {
            BreedRecord::new(id, name, species, factor, mature_weight)
        })
        .collect()
}

/// Construction-time configuration of a [`BreedCatalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    breeds: Vec<BreedRecord>,
}

impl CatalogBuilder {
    /// Builder with no breeds at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder seeded with the built-in breed table
    #[must_use]
    pub fn with_builtin() -> Self {
        Self {
            breeds: builtin_records(),
        }
    }

    /// Append a breed; checked when the catalog is built
    #[must_use]
    pub fn add_breed(mut self, breed: BreedRecord) -> Self {
        self.breeds.push(breed);
        self
    }

    /// Append several breeds; checked when the catalog is built
    #[must_use]
    pub fn add_breeds(mut self, breeds: impl IntoIterator<Item = BreedRecord>) -> Self {
        self.breeds.extend(breeds);
        self
    }

    /// Validate every record and freeze the catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a record that fails its own validation and
    /// `ResourceAlreadyExists` for a duplicate id.
    pub fn build(self) -> AppResult<BreedCatalog> {
        let mut seen = HashSet::with_capacity(self.breeds.len());
        for breed in &self.breeds {
            breed.validate()?;
            if !seen.insert(breed.id.as_str()) {
                return Err(
                    AppError::already_exists(format!("Breed id '{}'", breed.id))
                        .with_resource_id(&breed.id),
                );
            }
        }

        debug!(breeds = self.breeds.len(), "Breed catalog built");
        Ok(BreedCatalog {
            breeds: self.breeds,
        })
    }
}
