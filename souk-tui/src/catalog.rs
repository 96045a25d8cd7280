//! Asset listings.
//!
//! The JSON shape matches the marketplace asset record: unknown fields are
//! ignored and the risk level is read from the optional AI analysis.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use souk::widgets::TableRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read assets from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid asset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Translation key for the level's label.
    pub fn label_key(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk.low",
            RiskLevel::Medium => "risk.medium",
            RiskLevel::High => "risk.high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub risks: RiskAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Display price, e.g. `"$1,250,000"`.
    pub price: String,
    pub status: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysis>,
}

impl Asset {
    pub fn risk(&self) -> Option<RiskLevel> {
        self.ai_analysis.as_ref().map(|a| a.risks.level)
    }

    /// Numeric value of the display price, ignoring currency symbols and
    /// grouping separators.
    pub fn price_value(&self) -> Option<f64> {
        let digits: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().ok()
    }
}

impl TableRow for Asset {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "type" => Some(self.kind.clone()),
            "price" => Some(self.price.clone()),
            "status" => Some(self.status.clone()),
            "location" => Some(self.location.clone()),
            "description" => Some(self.description.clone()),
            "risk" => self.risk().map(|r| r.as_str().to_string()),
            _ => None,
        }
    }
}

/// Read a JSON array of assets.
pub async fn load_assets(path: &Path) -> Result<Vec<Asset>, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_assets(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_assets(json: &str) -> Result<Vec<Asset>, serde_json::Error> {
    serde_json::from_str(json)
}

fn asset(
    id: u64,
    title: &str,
    kind: &str,
    price: &str,
    status: &str,
    location: &str,
    risk: Option<RiskLevel>,
) -> Asset {
    Asset {
        id,
        title: title.to_string(),
        kind: kind.to_string(),
        price: price.to_string(),
        status: status.to_string(),
        location: location.to_string(),
        description: String::new(),
        ai_analysis: risk.map(|level| AiAnalysis {
            risks: RiskAnalysis { level },
        }),
    }
}

/// Listings shown when no asset file is configured.
pub fn sample_assets() -> Vec<Asset> {
    use RiskLevel::*;
    vec![
        asset(1, "Cedar Coffee Roasters", "Business", "$450,000", "Active", "Beirut", Some(Low)),
        asset(2, "Gulf Logistics Hub", "Real Estate", "$3,200,000", "Active", "Dubai", Some(Medium)),
        asset(3, "Souk Crafts Online", "Website", "$85,000", "Pending", "Marrakesh", Some(Low)),
        asset(4, "Harbor View Hotel", "Real Estate", "$12,500,000", "Active", "Haifa", Some(High)),
        asset(5, "Atlas SaaS Analytics", "Website", "$1,150,000", "Sold", "Casablanca", None),
        asset(6, "Nile Textile Mill", "Business", "$2,700,000", "Active", "Cairo", Some(High)),
        asset(7, "Persian Rug Gallery", "Business", "$620,000", "Pending", "Isfahan", Some(Medium)),
        asset(8, "Lisbon Co-working Space", "Real Estate", "$980,000", "Active", "Lisbon", Some(Low)),
        asset(9, "Montréal Bakery Chain", "Business", "$1,400,000", "Active", "Montréal", Some(Medium)),
        asset(10, "Valencia Solar Farm", "Energy", "$7,800,000", "Pending", "Valencia", Some(Low)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marketplace_record() {
        let json = r#"[{
            "id": 42,
            "title": "Corner Shop",
            "type": "Business",
            "price": "$1,250,000.50",
            "status": "Active",
            "description": "Family run",
            "location": "Tunis",
            "financials": {"revenue": 1.0, "profit": 0.5, "employees": 3, "year_founded": 1999},
            "documents": [],
            "ai_analysis": {"risks": {"level": "medium", "items": ["lease"]}, "opportunities": []}
        }]"#;

        let assets = parse_assets(json).unwrap();

        assert_eq!(assets.len(), 1);
        let shop = &assets[0];
        assert_eq!(shop.kind, "Business");
        assert_eq!(shop.risk(), Some(RiskLevel::Medium));
        assert_eq!(shop.price_value(), Some(1_250_000.5));
        assert_eq!(shop.field("type").as_deref(), Some("Business"));
        assert_eq!(shop.field("risk").as_deref(), Some("medium"));
        assert_eq!(shop.field("unknown"), None);
    }

    #[test]
    fn asset_without_analysis_has_no_risk_field() {
        let json = r#"[{"id": 1, "title": "t", "type": "x", "price": "n/a", "status": "s", "location": "l"}]"#;
        let assets = parse_assets(json).unwrap();
        assert_eq!(assets[0].field("risk"), None);
        assert_eq!(assets[0].price_value(), None);
    }

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn sample_ids_are_unique() {
        let mut ids: Vec<_> = sample_assets().iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), sample_assets().len());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("souk-no-such-assets.json");
        let result = load_assets(&path).await;
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
