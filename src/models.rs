//! Data model for property listings
//!
//! A `Property` is one plotted-development listing from the catalog. The
//! shape matches the catalog JSON files: nested address, per-square-yard
//! rate, and plot count.

use serde::{Deserialize, Serialize};

/// Location of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub area: String,
}

/// A single property listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Project name as shown on the card
    pub name: String,
    /// RERA registration number
    pub rera_number: String,
    pub address: Address,
    /// Short marketing line, e.g. "Luxury Modern Community"
    pub specification: String,
    /// Rate in AED per 1000 sq units; display price is `rate * 1000`
    pub rate: u64,
    pub total_plots: u32,
    pub description: String,
    pub map_url: String,
}

impl Property {
    /// Display price in AED. Rates are stored scaled down by 1000.
    pub fn price(&self) -> u64 {
        self.rate * 1000
    }

    /// Price line as shown on the card, e.g. "AED 2800000.00"
    pub fn price_line(&self) -> String {
        format!("AED {}.00", self.price())
    }

    /// Location line, e.g. "Tonk Road | Jaipur"
    pub fn location(&self) -> String {
        format!("{} | {}", self.address.area, self.address.city)
    }

    /// Specification line, e.g. "Luxury Modern Community | 85 Plots"
    pub fn spec_line(&self) -> String {
        format!("{} | {} Plots", self.specification, self.total_plots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property {
            name: "VRB Sparkle".to_string(),
            rera_number: "RAJ2025VS002".to_string(),
            address: Address {
                city: "Jaipur".to_string(),
                area: "Tonk Road".to_string(),
            },
            specification: "Luxury Modern Community".to_string(),
            rate: 2800,
            total_plots: 85,
            description: "Luxury plotted development".to_string(),
            map_url: "https://maps.google.com/?q=VRB+Sparkle".to_string(),
        }
    }

    #[test]
    fn test_price_scaling() {
        let prop = sample();
        assert_eq!(prop.price(), 2_800_000);
        assert_eq!(prop.price_line(), "AED 2800000.00");
    }

    #[test]
    fn test_card_lines() {
        let prop = sample();
        assert_eq!(prop.location(), "Tonk Road | Jaipur");
        assert_eq!(prop.spec_line(), "Luxury Modern Community | 85 Plots");
    }

    #[test]
    fn test_json_shape() {
        let prop = sample();
        let json = serde_json::to_string(&prop).unwrap();
        let back: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prop);

        // Field names must match the catalog file format
        assert!(json.contains("\"rera_number\""));
        assert!(json.contains("\"total_plots\""));
        assert!(json.contains("\"area\":\"Tonk Road\""));
    }
}
