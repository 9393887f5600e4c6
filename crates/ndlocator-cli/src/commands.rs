//! Subcommand implementations over the reseller store.

use ndlocator_core::{
    apply_filters, FilterCriteria, NewReseller, Position, RegionCode, RegionFilter, Reseller,
    SearchController, SortKey, TypeFilter,
};
use ndlocator_store::{FetchOutcome, ResellerStore};

pub struct AddArgs {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub lat: f64,
    pub lng: f64,
    pub unit_type: String,
    pub website: Option<String>,
    pub description: Option<String>,
}

pub async fn list(store: &mut ResellerStore, json: bool) -> anyhow::Result<()> {
    fetch(store).await;
    print_units(store.records(), json)
}

pub async fn search(store: &mut ResellerStore, query: &str, json: bool) -> anyhow::Result<()> {
    fetch(store).await;
    let mut controller = SearchController::default();
    let results = controller.submit_query(store.records(), query);
    print_units(&results, json)?;
    if !json && !results.is_empty() {
        let center = controller.viewport.center;
        println!(
            "map -> [{:.4}, {:.4}] zoom {}",
            center.lat(),
            center.lng(),
            controller.viewport.zoom
        );
    }
    Ok(())
}

pub async fn filter(
    store: &mut ResellerStore,
    unit_type: &str,
    region: &str,
    sort: &str,
    json: bool,
) -> anyhow::Result<()> {
    let criteria = build_criteria(unit_type, region, sort)?;
    fetch(store).await;
    let results = apply_filters(store.records(), &criteria);
    print_units(&results, json)
}

pub async fn add(store: &mut ResellerStore, args: AddArgs, json: bool) -> anyhow::Result<()> {
    let position = Position(args.lat, args.lng);
    anyhow::ensure!(position.in_range(), "position out of range: {position:?}");

    let new = NewReseller {
        name: args.name,
        address: args.address,
        phone: args.phone,
        email: args.email,
        position,
        unit_type: args.unit_type,
        website: args.website,
        description: args.description,
        photo: None,
        coverage_radius: None,
        show_coverage: None,
        covered_cities: None,
    };
    let created = store.create(&new).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("created unit {} ({})", created.id, created.name);
    }
    Ok(())
}

pub async fn remove(store: &mut ResellerStore, id: i64) -> anyhow::Result<()> {
    store.delete(id).await?;
    println!("deleted unit {id}");
    Ok(())
}

async fn fetch(store: &mut ResellerStore) {
    if store.fetch_all().await == FetchOutcome::Fallback {
        tracing::warn!("remote store unreachable; showing the static fallback dataset");
    }
}

fn build_criteria(unit_type: &str, region: &str, sort: &str) -> anyhow::Result<FilterCriteria> {
    let unit_type = if unit_type == "all" {
        TypeFilter::All
    } else {
        TypeFilter::Exact(unit_type.to_string())
    };

    let region = if region == "all" {
        RegionFilter::All
    } else {
        RegionCode::parse(region)
            .map(RegionFilter::Code)
            .ok_or_else(|| anyhow::anyhow!("unknown region code: {region}"))?
    };

    // Unknown sort values mean "leave input order unchanged".
    Ok(FilterCriteria {
        unit_type,
        region,
        sort: SortKey::parse(sort),
    })
}

fn print_units(units: &[Reseller], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(units)?);
        return Ok(());
    }

    if units.is_empty() {
        println!("no units found");
        return Ok(());
    }

    for unit in units {
        println!("[{}] {} — {}", unit.id, unit.name, unit.unit_type);
        println!("    {}", unit.address);
        println!("    {} · {}", unit.phone, unit.email);
        if let Some(website) = &unit.website {
            println!("    {website}");
        }
    }
    println!("{} unit(s)", units.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_criteria_accepts_known_values() {
        let criteria = build_criteria("Sede Principal", "mg", "type").unwrap();
        assert_eq!(
            criteria.unit_type,
            TypeFilter::Exact("Sede Principal".to_string())
        );
        assert_eq!(criteria.region, RegionFilter::Code(RegionCode::Mg));
        assert_eq!(criteria.sort, Some(SortKey::UnitType));
    }

    #[test]
    fn build_criteria_rejects_unknown_region() {
        assert!(build_criteria("all", "rj", "name").is_err());
    }

    #[test]
    fn build_criteria_degrades_unknown_sort() {
        let criteria = build_criteria("all", "all", "distance").unwrap();
        assert_eq!(criteria.sort, None);
    }
}
