//! Single-particle profile inspection

use anyhow::Result;
use jianghu_particles::{EngineSettings, Particle};
use serde::Serialize;

#[derive(Serialize)]
struct ProfileReport<'a> {
    key: String,
    recognized: bool,
    particle: &'a Particle,
}

pub fn run(
    settings: &EngineSettings,
    tag: &str,
    index: usize,
    color: Option<&str>,
    format: &str,
) -> Result<()> {
    let config = super::config_from(settings, tag, None, color);
    let effect = config.effect();
    let particle = Particle::resolve(effect, &config.effect_tag, index, &config.color);

    let report = ProfileReport {
        key: particle.key.to_string(),
        recognized: effect.is_some(),
        particle: &particle,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "toml" => println!("{}", toml::to_string_pretty(&report)?),
        other => anyhow::bail!("Unknown format '{}'; expected json or toml", other),
    }

    Ok(())
}
