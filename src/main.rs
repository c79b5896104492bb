//! Host-side preview: runs live wallpapers headlessly and prints what each
//! tick drew. Handy for checking a variant's cost without a browser.
//!
//! `cargo run -- [variant|all] --seconds 2 --size 1920x1080`

use clap::Parser;

use live_wallpaper::scheduler::ManualScheduler;
use live_wallpaper::surface::HeadlessSurfaces;
use live_wallpaper::{EngineConfig, LiveBackground, Size, VariantId};

#[derive(Parser, Debug)]
#[command(about = "Run live wallpapers headlessly and report per-tick cost")]
struct Args {
    /// wallpaper id, or `all` for every built-in
    #[arg(default_value = "all")]
    variant: String,

    /// simulated seconds per wallpaper
    #[arg(long, default_value_t = 2)]
    seconds: u32,

    /// surface size as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    size: Size,

    /// base seed for every simulation
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn parse_size(raw: &str) -> Result<Size, String> {
    let invalid = || format!("`{raw}` is not a size like 1920x1080");
    let (w, h) = raw.split_once('x').ok_or_else(invalid)?;
    let w = w.trim().parse().map_err(|_| invalid())?;
    let h = h.trim().parse().map_err(|_| invalid())?;
    Ok(Size::new(w, h))
}

fn main() {
    let args = Args::parse();

    let variants: Vec<&str> = if args.variant == "all" {
        VariantId::ALL.iter().map(|v| v.id()).collect()
    } else {
        vec![args.variant.as_str()]
    };

    let mut bg = LiveBackground::new(
        HeadlessSurfaces::new(args.size),
        ManualScheduler::new(),
        EngineConfig {
            seed: Some(args.seed),
            ..EngineConfig::default()
        },
    );

    let window = bg.surfaces().window();
    println!(
        "{}x{} surface, seed {:#x}, {}s per wallpaper",
        window.width,
        window.height,
        bg.config().seed.unwrap_or_default(),
        args.seconds
    );
    println!(
        "{:<14} {:>8} {:>7} {:>10} {:>12}",
        "variant", "interval", "ticks", "entities", "draws/tick"
    );
    for raw in variants {
        if let Err(err) = bg.activate(raw) {
            eprintln!("{raw}: {err}");
            continue;
        }
        let (Some(variant), Some(surface)) = (bg.active_variant(), bg.surface_id()) else {
            println!("{raw:<14} handed to media playback");
            continue;
        };

        let before = bg.scheduler().fired();
        bg.scheduler_mut().advance(args.seconds.saturating_mul(1000));
        let ticks = bg.scheduler().fired() - before;

        let draws = bg
            .surfaces()
            .context(surface)
            .map(|ctx| ctx.borrow().draw_calls())
            .unwrap_or(0);
        let per_tick = if ticks == 0 { 0 } else { draws as u64 / ticks };
        println!(
            "{:<14} {:>8} {:>7} {:>10} {:>12}",
            variant.id(),
            variant.interval().to_string(),
            ticks,
            bg.population().unwrap_or(0),
            per_tick
        );
    }
    bg.deactivate();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_flag_parses() {
        assert_eq!(parse_size("800x600"), Ok(Size::new(800, 600)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn defaults_run_everything() {
        let args = Args::try_parse_from(["live_wallpaper"]).unwrap();
        assert_eq!(args.variant, "all");
        assert_eq!(args.seconds, 2);
        assert_eq!(args.size, Size::new(1920, 1080));
    }

    #[test]
    fn flags_are_not_taken_as_values() {
        let argv = ["live_wallpaper", "stars", "--seconds", "1", "--size", "640x480"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.variant, "stars");
        assert_eq!(args.seconds, 1);
        assert_eq!(args.size, Size::new(640, 480));

        assert!(Args::try_parse_from(["live_wallpaper", "stars", "--size"]).is_err());
        assert!(Args::try_parse_from(["live_wallpaper", "--size", "big"]).is_err());
        let help = Args::try_parse_from(["live_wallpaper", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
