use serde::Serialize;

/// Holding company subsidiary. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subsidiary {
    pub id: &'static str,
    pub name: &'static str,
    /// Icon token resolved by the frontend icon set
    pub icon: &'static str,
}

pub static SUBSIDIARIES: [Subsidiary; 5] = [
    Subsidiary {
        id: "rhcl",
        name: "Reliable HealthCare Logistics",
        icon: "heart-pulse",
    },
    Subsidiary {
        id: "gfs",
        name: "Global Freight Solutions",
        icon: "globe",
    },
    Subsidiary {
        id: "tsc",
        name: "Tech Supply Chain Partners",
        icon: "cpu",
    },
    Subsidiary {
        id: "fbd",
        name: "Food & Beverage Distribution",
        icon: "utensils",
    },
    Subsidiary {
        id: "rfn",
        name: "Retail Fulfillment Network",
        icon: "shopping-basket",
    },
];

pub fn find_subsidiary(id: &str) -> Option<&'static Subsidiary> {
    SUBSIDIARIES.iter().find(|s| s.id == id)
}

/// First subsidiary, used whenever a selection does not resolve
pub fn default_subsidiary() -> &'static Subsidiary {
    &SUBSIDIARIES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = SUBSIDIARIES.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SUBSIDIARIES.len());
    }

    #[test]
    fn test_find_subsidiary() {
        assert_eq!(find_subsidiary("gfs").map(|s| s.name), Some("Global Freight Solutions"));
        assert!(find_subsidiary("GFS").is_none());
        assert_eq!(default_subsidiary().id, "rhcl");
    }
}
