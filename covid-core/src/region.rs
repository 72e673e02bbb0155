use crate::daily_record::DailyRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt};

/// Region code the API uses for the national aggregate.
pub const NATIONWIDE_CODE: &str = "ALL";

/// Label of the synthetic selector entry that maps back to the national series.
pub const NATIONWIDE_LABEL: &str = "ALL (Nationwide)";

/// Where a series of daily records comes from: the national aggregate or a
/// single state/territory identified by its postal code (e.g. "CA").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Region {
    #[default]
    Nationwide,
    State(String),
}

/// Per-region series, each in ascending date order. Keys iterate sorted by code.
pub type RegionMap = BTreeMap<Region, Vec<DailyRecord>>;

impl Region {
    /// Build a region from the API's `state` field. Absent, blank and "ALL"
    /// all denote the national aggregate.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            None | Some("") | Some(NATIONWIDE_CODE) => Region::Nationwide,
            Some(code) => Region::State(code.to_string()),
        }
    }

    /// Resolve a selector label back into a region.
    pub fn from_label(label: &str) -> Self {
        if label == NATIONWIDE_LABEL {
            Region::Nationwide
        } else {
            Region::from_code(Some(label))
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Region::Nationwide => NATIONWIDE_CODE,
            Region::State(code) => code,
        }
    }

    /// Text shown in the region selector.
    pub fn label(&self) -> &str {
        match self {
            Region::Nationwide => NATIONWIDE_LABEL,
            Region::State(code) => code,
        }
    }

    pub fn is_nationwide(&self) -> bool {
        matches!(self, Region::Nationwide)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(Region::from_code(code.as_deref()))
    }
}

/// Group records by region, preserving the relative order of each group.
///
/// Feed this an ascending sequence and every group comes out ascending.
pub fn group_by_region(records: Vec<DailyRecord>) -> RegionMap {
    let mut result = RegionMap::new();
    for record in records {
        result.entry(record.region.clone()).or_default().push(record);
    }
    result
}

/// Entries for the region selector: the nationwide sentinel first, then the
/// region codes in sorted order.
pub fn region_choices(regions: &RegionMap) -> Vec<String> {
    std::iter::once(NATIONWIDE_LABEL.to_string())
        .chain(
            regions
                .keys()
                .filter(|region| !region.is_nationwide())
                .map(|region| region.label().to_string()),
        )
        .collect()
}
