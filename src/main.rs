mod config;
mod context;
mod error;
mod games;
mod geometry;
mod i18n;
mod layers;
mod layout;
mod preview;
mod settings;
mod solver;
mod types;

use crate::config::{FovMode, HfovRadMode, SceneConfig};
use crate::context::FovContext;
use crate::games::{compute_game_fov, format_fixed, list_game_keys, lookup};
use crate::i18n::tr;
use crate::preview::Preview;
use crate::settings::Settings;
use crate::types::{AspectRatio, Locale};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simfov")]
#[command(about = "Field-of-view calculator for sim-racing monitor setups", version)]
struct Args {
    /// Screen diagonal in inches
    #[arg(long)]
    screen_size: Option<f64>,

    /// Aspect ratio as width:height (e.g. "16:9", "21:9", "9:16")
    #[arg(long)]
    aspect: Option<String>,

    /// Curvature radius in centimetres (80 for 800R); 0 for a flat panel
    #[arg(long)]
    curvature: Option<f64>,

    /// Eye to screen distance in centimetres
    #[arg(long)]
    distance: Option<f64>,

    /// Triple monitor setup (true/false)
    #[arg(long)]
    triple: Option<bool>,

    /// Toe-in angle of the side monitors in degrees
    #[arg(long)]
    triple_angle: Option<f64>,

    /// Keep this vertical FOV (degrees) and solve for the distance instead
    #[arg(long)]
    target_vfov: Option<f64>,

    /// Output language, either en or cn
    #[arg(long)]
    lang: Option<String>,

    /// Convert the horizontal angle for radian-based games instead of the vertical one
    #[arg(long)]
    hfov_rad_from_horizontal: bool,

    /// Only print the setting for this game key (see --list-games)
    #[arg(long)]
    game: Option<String>,

    /// List supported game keys and exit
    #[arg(long)]
    list_games: bool,

    /// JSON file holding the last used parameters
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the parameters back to the settings file after the run
    #[arg(long, requires = "settings")]
    save: bool,

    /// Optional SVG preview output path
    #[arg(short = 'o', long = "out")]
    out: Option<String>,

    /// Optional CSS override file path for the preview; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,
}

fn apply_overrides(args: &Args, mut cfg: SceneConfig) -> Result<SceneConfig> {
    if let Some(size) = args.screen_size {
        cfg.screen.size_in = size;
    }
    if let Some(aspect) = &args.aspect {
        cfg.screen.aspect = aspect.parse::<AspectRatio>()?;
    }
    if let Some(curvature) = args.curvature {
        cfg.screen.curvature_cm = curvature;
    }
    if let Some(distance) = args.distance {
        cfg.distance_cm = distance;
    }
    if let Some(triple) = args.triple {
        cfg.triple = triple;
    }
    if let Some(angle) = args.triple_angle {
        cfg.triple_angle_deg = angle;
    }
    if let Some(target_deg) = args.target_vfov {
        cfg.mode = FovMode::FixedVertical { target_deg };
    }
    if let Some(lang) = &args.lang {
        cfg.locale = lang.parse::<Locale>()?;
    }
    if args.hfov_rad_from_horizontal {
        cfg.hfov_rad = HfovRadMode::Corrected;
    }
    Ok(cfg)
}

fn angle_text(locale: Locale, angle: Option<f64>) -> String {
    match angle {
        Some(deg) => format!("{}°", format_fixed(deg, 1)),
        None => tr(locale, "undefined").to_string(),
    }
}

fn report(context: &FovContext) -> Vec<String> {
    let locale = context.cfg.locale;
    let mut lines = vec![
        format!(
            "{}: {}",
            tr(locale, "distanceToScreen"),
            format_fixed(context.distance_cm, 1)
        ),
        format!(
            "{}: {}",
            tr(locale, "verticalFov"),
            angle_text(locale, context.vertical())
        ),
        format!(
            "{}: {}",
            tr(locale, "horizontalFov"),
            angle_text(locale, context.horizontal())
        ),
    ];
    for fov in context.game_fovs() {
        lines.push(format!("{}: {}", fov.entry.name(locale), fov.display()));
    }
    lines
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_games {
        for key in list_game_keys() {
            let (_, entry) = lookup(key)?;
            println!("{key:<26} {:<16} {}", entry.kind.tag(), entry.name_en);
        }
        return Ok(());
    }

    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let cfg = apply_overrides(&args, settings.to_scene())?;
    let context = FovContext::new(cfg);

    if let Some(key) = &args.game {
        let (h, v) = context
            .horizontal()
            .zip(context.vertical())
            .context("field of view is undefined for this setup")?;
        let fov = compute_game_fov(key, h, v, context.cfg.hfov_rad)?;
        println!("{}", fov.display());
    } else {
        for line in report(&context) {
            println!("{line}");
        }
    }

    if let Some(out) = &args.out {
        Preview::new(&context, args.css.clone())
            .to_file(out)
            .with_context(|| format!("writing {out}"))?;
        info!("preview written to {out}");
    }

    if args.save {
        if let Some(path) = &args.settings {
            let mut saved = Settings::from(&context.cfg);
            saved.distance_to_screen = context.distance_cm;
            saved.save(path)?;
            info!("settings saved to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["simfov"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn no_flags_keep_the_base_scene() {
        let cfg = apply_overrides(&parse(&[]), SceneConfig::default()).unwrap();
        assert!(approx(cfg.screen.size_in, 32.0, 0.0));
        assert!(cfg.triple);
        assert_eq!(cfg.mode, FovMode::Manual);
    }

    #[test]
    fn flags_override_every_parameter() {
        let args = parse(&[
            "--screen-size",
            "49",
            "--aspect",
            "32:9",
            "--curvature",
            "100",
            "--distance",
            "80",
            "--triple",
            "false",
            "--triple-angle",
            "45",
            "--target-vfov",
            "40",
            "--lang",
            "cn",
            "--hfov-rad-from-horizontal",
        ]);
        let cfg = apply_overrides(&args, SceneConfig::default()).unwrap();
        assert!(approx(cfg.screen.size_in, 49.0, 0.0));
        assert_eq!(cfg.screen.aspect, AspectRatio::new(32, 9));
        assert!(approx(cfg.screen.curvature_cm, 100.0, 0.0));
        assert!(approx(cfg.distance_cm, 80.0, 0.0));
        assert!(!cfg.triple);
        assert!(approx(cfg.triple_angle_deg, 45.0, 0.0));
        assert_eq!(cfg.mode, FovMode::FixedVertical { target_deg: 40.0 });
        assert_eq!(cfg.locale, Locale::Cn);
        assert_eq!(cfg.hfov_rad, HfovRadMode::Corrected);
    }

    #[test]
    fn bad_aspect_or_language_errors() {
        assert!(apply_overrides(&parse(&["--aspect", "wide"]), SceneConfig::default()).is_err());
        assert!(apply_overrides(&parse(&["--lang", "xx"]), SceneConfig::default()).is_err());
    }

    #[test]
    fn save_requires_a_settings_path() {
        assert!(Args::try_parse_from(["simfov", "--save"]).is_err());
        assert!(Args::try_parse_from(["simfov", "--save", "--settings", "s.json"]).is_ok());
    }

    #[test]
    fn report_lists_angles_then_games() {
        let context = FovContext::new(SceneConfig {
            triple: false,
            ..SceneConfig::default()
        });
        let lines = report(&context);
        assert_eq!(lines[0], "Distance to Screen (cm): 70.0");
        assert_eq!(lines[1], "Vertical FOV: 31.8°");
        assert_eq!(lines[2], "Horizontal FOV: 53.7°");
        assert_eq!(lines.len(), 3 + crate::games::GAMES.len());
        assert_eq!(lines[3], "F1 2016-2018: -0.58");
        assert!(lines.contains(&"rFactor 2: 32°".to_string()));
        assert!(lines.contains(&"Richard Burns Rally: 0.5546rad".to_string()));
    }

    #[test]
    fn undefined_angle_is_reported_as_such() {
        assert_eq!(angle_text(Locale::En, None), "n/a");
        assert_eq!(angle_text(Locale::Cn, Some(31.776)), "31.8°");
    }
}
