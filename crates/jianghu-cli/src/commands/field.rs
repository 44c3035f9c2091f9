//! Whole-field resolution

use anyhow::Result;
use jianghu_animation::Property;
use jianghu_particles::{build_field, EngineSettings};

pub struct FieldArgs {
    pub tag: String,
    pub count: Option<i64>,
    pub color: Option<String>,
    pub strict: bool,
    pub format: String,
}

pub fn run(args: FieldArgs, settings: &EngineSettings) -> Result<()> {
    let config = super::config_from(settings, &args.tag, args.count, args.color.as_deref());
    if args.strict {
        config.strict_effect()?;
    }

    let field = build_field(&config, &settings.budget_table());

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&field)?),
        "summary" => {
            let effect = field
                .effect
                .map_or_else(|| "fallback".to_string(), |e| e.tag().to_string());
            println!("Effect:    {} ({})", field.effect_tag, effect);
            println!("Color:     {}", field.color);
            println!(
                "Particles: {} (requested {})",
                field.actual_count(),
                config.requested_count
            );
            println!();
            println!(
                "{:<24} {:>7} {:>7} {:>6} {:>7} {:>7}  SHAPE",
                "KEY", "LEFT", "TOP", "SIZE", "DELAY", "PERIOD"
            );
            for particle in &field.particles {
                let t = &particle.profile.transition;
                let tracks: Vec<&str> = particle
                    .profile
                    .tracks
                    .iter()
                    .map(|track| track.property.name())
                    .collect();
                println!(
                    "{:<24} {:>7.1} {:>7.1} {:>6.2} {:>7.2} {:>7.2}  {:?}/{} [{}]",
                    particle.key.to_string(),
                    particle.profile.initial.left,
                    particle.profile.initial.top,
                    particle.derived.size,
                    t.delay,
                    t.duration + t.repeat_delay,
                    particle.shape.family,
                    particle.shape.variant_name(),
                    tracks.join(",")
                );
            }
            let animated_opacity = field
                .particles
                .iter()
                .filter(|p| p.profile.has_track(Property::Opacity))
                .count();
            println!();
            println!(
                "{} of {} particle(s) fade in and out",
                animated_opacity,
                field.actual_count()
            );
        }
        other => anyhow::bail!("Unknown format '{}'; expected summary or json", other),
    }

    Ok(())
}
