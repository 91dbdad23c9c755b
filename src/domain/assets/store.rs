//! The asset store: a fixed, read-only ordered sequence of records.

/// Operational status of a monitored asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Operational,
    Maintenance,
    Alert,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Operational, Status::Maintenance, Status::Alert];

    pub fn title(&self) -> &'static str {
        match self {
            Status::Operational => "Operational",
            Status::Maintenance => "Maintenance",
            Status::Alert => "Alert",
        }
    }
}

/// A monitored equipment record. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub site: String,
    pub status: Status,
    /// Lexicographically sortable timestamp string ("YYYY-MM-DD HH:MM")
    pub updated_at: String,
}

impl Asset {
    fn new(id: &str, name: &str, site: &str, status: Status, updated_at: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            site: site.to_string(),
            status,
            updated_at: updated_at.to_string(),
        }
    }
}

/// Seed the portal's asset list. The returned sequence is never mutated;
/// the Assets view treats its order as the tie-break order for sorting.
pub fn mock_assets() -> Vec<Asset> {
    vec![
        Asset::new(
            "WTG-001",
            "Wind Turbine A1",
            "Helsinki",
            Status::Operational,
            "2025-12-22 14:10",
        ),
        Asset::new(
            "GEN-014",
            "Generator Unit 14",
            "Vaasa",
            Status::Maintenance,
            "2025-12-23 08:40",
        ),
        Asset::new(
            "BMS-203",
            "Battery System 203",
            "Turku",
            Status::Alert,
            "2025-12-23 10:05",
        ),
        Asset::new(
            "WTG-007",
            "Wind Turbine B3",
            "Oulu",
            Status::Operational,
            "2025-12-21 19:55",
        ),
        Asset::new(
            "SOL-112",
            "Solar Array 112",
            "Espoo",
            Status::Operational,
            "2025-12-23 06:20",
        ),
    ]
}
