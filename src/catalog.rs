//! Property catalog providers
//!
//! The carousel is independent of where listings come from: anything that
//! yields an ordered slice of properties can feed it. Two providers exist —
//! the built-in seed catalog and a JSON file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Address, Property};

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog file {path} is not a valid property list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// An ordered provider of property listings
pub trait Catalog {
    /// Listings in display order. The order and contents are fixed for the
    /// lifetime of a browsing session.
    fn properties(&self) -> &[Property];

    fn len(&self) -> usize {
        self.properties().len()
    }

    fn is_empty(&self) -> bool {
        self.properties().is_empty()
    }
}

/// Built-in demo catalog
#[derive(Debug, Default)]
pub struct SeedCatalog {
    properties: Vec<Property>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        Self {
            properties: seed_properties(),
        }
    }
}

impl Catalog for SeedCatalog {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// Catalog loaded from a JSON file containing an array of properties
#[derive(Debug)]
pub struct FileCatalog {
    properties: Vec<Property>,
}

impl FileCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let properties = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { properties })
    }
}

impl Catalog for FileCatalog {
    fn properties(&self) -> &[Property] {
        &self.properties
    }
}

fn prop(
    name: &str,
    rera: &str,
    city: &str,
    area: &str,
    specification: &str,
    rate: u64,
    total_plots: u32,
    description: &str,
    map_url: &str,
) -> Property {
    Property {
        name: name.to_string(),
        rera_number: rera.to_string(),
        address: Address {
            city: city.to_string(),
            area: area.to_string(),
        },
        specification: specification.to_string(),
        rate,
        total_plots,
        description: description.to_string(),
        map_url: map_url.to_string(),
    }
}

/// The featured listings bundled with the binary
pub fn seed_properties() -> Vec<Property> {
    vec![
        prop(
            "VRB Sparkle",
            "RAJ2025VS002",
            "Jaipur",
            "Tonk Road",
            "Luxury Modern Community",
            2800,
            85,
            "Luxury plotted development with wide roads, green zones, and proximity to key locations",
            "https://maps.google.com/?q=VRB+Sparkle+Tonk+Road+Jaipur",
        ),
        prop(
            "VRB Sapphire Park",
            "RAJ2025VSP003",
            "Jaipur",
            "Kalwar Road",
            "Modern Vastu-Compliant Layout",
            3000,
            95,
            "A modern gated community with well-laid roads and eco-friendly planning",
            "https://maps.google.com/?q=VRB+Sapphire+Park+Kalwar+Road+Jaipur",
        ),
        prop(
            "Elite Word Dreamworld City",
            "RAJ2025EDC004",
            "Jaipur",
            "Jagatpura",
            "Smart Investment Destination",
            3200,
            150,
            "Smart city plots with premium amenities, future metro connectivity, and modern infrastructure",
            "https://maps.google.com/?q=Elite+Dreamworld+City+Jagatpura+Jaipur",
        ),
        prop(
            "VRB World City",
            "RAJ2025VWC005",
            "Jaipur",
            "Sikar Road",
            "Affordable Family Housing",
            2700,
            110,
            "Affordable residential plots with high-growth potential due to proximity to major highways",
            "https://maps.google.com/?q=VRB+World+City+Sikar+Road+Jaipur",
        ),
        prop(
            "Ring Avenue Ring Enclave",
            "RAJ2025RARE006",
            "Jaipur",
            "Ring Road",
            "Eco-Friendly Green Living",
            2600,
            100,
            "Strategically located project with seamless ring road access and lush green environment",
            "https://maps.google.com/?q=Ring+Avenue+Enclave+Ring+Road+Jaipur",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_catalog_has_listings() {
        let catalog = SeedCatalog::new();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.properties()[0].name, "VRB Sparkle");
    }

    #[test]
    fn test_file_catalog_loads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&seed_properties()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = FileCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.properties()[2].address.area, "Jagatpura");
    }

    #[test]
    fn test_file_catalog_missing_file() {
        let err = FileCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_file_catalog_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();

        let err = FileCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_empty_file_catalog_is_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let catalog = FileCatalog::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }
}
