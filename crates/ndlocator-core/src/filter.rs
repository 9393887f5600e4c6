//! Pure filter/sort pipeline over reseller lists.
//!
//! Two variants: the structured filter (type + region + sort) used by the
//! advanced-filter panel, and a free-text search used by the main search box.
//! Both take the full list and return a new list; neither mutates input.

use std::cmp::Ordering;

use crate::reseller::Reseller;

/// Unit-type predicate: either keep everything or require an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Exact(String),
}

impl TypeFilter {
    fn matches(&self, reseller: &Reseller) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Exact(unit_type) => reseller.unit_type == *unit_type,
        }
    }
}

/// Region codes offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCode {
    Sp,
    Mg,
}

impl RegionCode {
    /// The literal substring that must appear in the address.
    ///
    /// Case-sensitive exact text: "SP" also matches inside unrelated words.
    /// Kept as-is for the current dataset; a geographic lookup is out of scope.
    #[must_use]
    pub fn address_marker(self) -> &'static str {
        match self {
            RegionCode::Sp => "SP",
            RegionCode::Mg => "MG",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sp" => Some(RegionCode::Sp),
            "mg" => Some(RegionCode::Mg),
            _ => None,
        }
    }
}

/// Region predicate: keep everything, or require the region's address marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Code(RegionCode),
}

impl RegionFilter {
    fn matches(self, reseller: &Reseller) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Code(code) => reseller.address.contains(code.address_marker()),
        }
    }
}

/// Sort key for the structured filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    UnitType,
    Address,
}

impl SortKey {
    /// Parses the panel's sort option values. The panel labels the address
    /// sort "region", so both spellings are accepted. Unknown values parse to
    /// `None`, which leaves input order unchanged.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(SortKey::Name),
            "type" => Some(SortKey::UnitType),
            "region" | "address" => Some(SortKey::Address),
            _ => None,
        }
    }

    fn field(self, reseller: &Reseller) -> &str {
        match self {
            SortKey::Name => &reseller.name,
            SortKey::UnitType => &reseller.unit_type,
            SortKey::Address => &reseller.address,
        }
    }
}

/// Criteria for the structured filter variant.
///
/// `sort: None` means "leave input order unchanged" and only arises from
/// parsing an unknown sort value; the default criteria sort by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub unit_type: TypeFilter,
    pub region: RegionFilter,
    pub sort: Option<SortKey>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            unit_type: TypeFilter::All,
            region: RegionFilter::All,
            sort: Some(SortKey::Name),
        }
    }
}

/// Applies the type and region predicates, then stable-sorts by the chosen key.
///
/// The two predicates are independent and commutative; application order only
/// affects intermediate list sizes, never membership of the result.
#[must_use]
pub fn apply_filters(resellers: &[Reseller], criteria: &FilterCriteria) -> Vec<Reseller> {
    let mut filtered: Vec<Reseller> = resellers
        .iter()
        .filter(|r| criteria.unit_type.matches(r))
        .filter(|r| criteria.region.matches(r))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort {
        // Vec::sort_by is stable, so equal keys keep their input order.
        filtered.sort_by(|a, b| lexical_cmp(key.field(a), key.field(b)));
    }

    filtered
}

/// Case-insensitive ascending comparison, with the original strings as a
/// tiebreaker so ordering stays total. Stands in for locale collation; see
/// DESIGN.md for the trade-off.
fn lexical_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Free-text variant used by the main search box: case-insensitive substring
/// containment against name, address, or unit type. No sorting is applied.
///
/// An empty or whitespace-only query returns the input unchanged.
#[must_use]
pub fn free_text_search(resellers: &[Reseller], query: &str) -> Vec<Reseller> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return resellers.to_vec();
    }

    resellers
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.address.to_lowercase().contains(&needle)
                || r.unit_type.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
