//! Effect type listing

use anyhow::Result;
use jianghu_particles::{EffectType, EngineSettings};
use serde::Serialize;

#[derive(Serialize)]
struct EffectRow {
    tag: &'static str,
    legacy_tag: &'static str,
    category: String,
    max_particles: usize,
}

pub fn run(settings: &EngineSettings, format: &str) -> Result<()> {
    let budget = settings.budget_table();
    let rows: Vec<EffectRow> = EffectType::ALL
        .iter()
        .map(|effect| EffectRow {
            tag: effect.tag(),
            legacy_tag: effect.legacy_tag(),
            category: format!("{:?}", effect.category()).to_lowercase(),
            max_particles: budget.per_type_max(Some(*effect)),
        })
        .collect();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
        "text" => {
            println!("{:<20} {:<10} {:<10} {:>5}", "TAG", "LEGACY", "MOTION", "MAX");
            for row in &rows {
                println!(
                    "{:<20} {:<10} {:<10} {:>5}",
                    row.tag, row.legacy_tag, row.category, row.max_particles
                );
            }
            println!();
            println!(
                "Unrecognized tags: fallback profile, max {}",
                budget.per_type_max(None)
            );
        }
        other => anyhow::bail!("Unknown format '{}'; expected text or json", other),
    }

    Ok(())
}
