//! Prize Wheel demo entry point
//!
//! Spins a wheel headlessly, drives the animation at a fixed frame rate and
//! writes the resting wheel as SVG. The browser build uses `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use prize_wheel::renderer::{SvgOptions, render_svg};
    use prize_wheel::wheel::{SegmentItem, SpinRng, Wheel};
    use prize_wheel::{Result, WheelConfig, WheelStyle};

    #[derive(Parser, Debug)]
    #[command(name = "prize-wheel", version, about = "Spin a prize wheel and render it as SVG")]
    pub struct Args {
        /// JSON wheel config (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Style preset when no config file is given (donut, petal)
        #[arg(long, default_value = "donut")]
        preset: String,

        /// Seed for a replayable spin
        #[arg(long)]
        seed: Option<u64>,

        /// Land on this slot instead of a random one
        #[arg(long)]
        target: Option<usize>,

        /// Override the number of cosmetic full turns
        #[arg(long)]
        spins: Option<u32>,

        /// Host frame rate used to drive the animation (1-1000)
        #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
        fps: f64,

        /// Write the resting wheel here (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    }

    const FPS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=1000.0;

    /// Frame rate the demo loop can actually step with
    fn parse_fps(s: &str) -> std::result::Result<f64, String> {
        let fps: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
        if !FPS_RANGE.contains(&fps) {
            return Err(format!(
                "frame rate must be between {} and {}, got {s}",
                FPS_RANGE.start(),
                FPS_RANGE.end()
            ));
        }
        Ok(fps)
    }

    /// Prizes shown on the reference wheel; the rest of the slots stay empty
    fn demo_items() -> Vec<SegmentItem> {
        vec![
            SegmentItem::new("cherry", "🍒").with_color("#FF6B6B"),
            SegmentItem::new("lemon", "🍋").with_color("#FFD93D"),
            SegmentItem::new("star", "⭐").with_color("#6BCB77"),
            SegmentItem::new("gem", "💎").with_color("#4D96FF"),
            SegmentItem::new("bell", "🔔").with_color("#C77DFF"),
        ]
    }

    pub fn run(args: Args) -> Result<()> {
        let mut config = match &args.config {
            Some(path) => WheelConfig::load(path)?,
            None => {
                let style = WheelStyle::from_str(&args.preset).unwrap_or_else(|| {
                    log::warn!("Unknown preset '{}', using {}", args.preset, WheelStyle::default().as_str());
                    WheelStyle::default()
                });
                WheelConfig::from_preset(style)
            }
        };
        if let Some(spins) = args.spins {
            config.extra_full_spins = spins;
        }

        let rng = match args.seed {
            Some(seed) => SpinRng::seeded(seed),
            None => SpinRng::from_entropy(),
        };
        let radius = config.outer_radius;
        let mut wheel = Wheel::with_rng(config, &demo_items(), rng)?;
        wheel.set_on_stop(|index, item| match &item.label {
            Some(label) => eprintln!("Landed on slot {index}: {label} ({})", item.id),
            None => eprintln!("Landed on slot {index}: no prize"),
        });

        let plan = match args.target {
            Some(target) => wheel.spin_to(target)?,
            None => wheel.spin()?,
        };
        log::info!(
            "Spinning to slot {} ({:.1}° over {:.1}s)",
            plan.target_index,
            plan.delta,
            wheel.config().spin_duration_s
        );

        let dt = 1.0 / args.fps;
        let mut frames = 0u32;
        while wheel.is_spinning() {
            wheel.update(dt);
            frames += 1;
        }
        log::debug!("Animation settled after {frames} frames at rotation {:.2}", wheel.rotation());

        let slices = wheel.slices()?;
        let options = SvgOptions {
            radius,
            background: Some("#1B1B2F".to_string()),
            ..SvgOptions::default()
        };
        let svg = render_svg(&slices, wheel.items(), wheel.rotation(), &options);
        match &args.out {
            Some(path) => {
                std::fs::write(path, svg)?;
                log::info!("Wrote {}", path.display());
            }
            None => println!("{svg}"),
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_fps_accepts_range() {
            assert_eq!(parse_fps("60").unwrap(), 60.0);
            assert_eq!(parse_fps("1").unwrap(), 1.0);
            assert_eq!(parse_fps("1000").unwrap(), 1000.0);
        }

        #[test]
        fn test_fps_rejects_unbounded_values() {
            for bad in ["1e12", "inf", "NaN", "0", "-30", "0.5", "fast"] {
                assert!(parse_fps(bad).is_err(), "{bad}");
            }
        }

        #[test]
        fn test_cli_rejects_huge_fps() {
            assert!(Args::try_parse_from(["prize-wheel", "--fps", "1e12"]).is_err());
            let args = Args::try_parse_from(["prize-wheel", "--fps", "30", "--target", "3"]).unwrap();
            assert_eq!(args.fps, 30.0);
            assert_eq!(args.target, Some(3));
        }

        #[test]
        fn test_run_at_fastest_rate_settles() {
            let out = std::env::temp_dir().join(format!("prize-wheel-demo-{}.svg", std::process::id()));
            let out_arg = out.to_string_lossy().into_owned();
            let args = Args::try_parse_from([
                "prize-wheel",
                "--fps",
                "1000",
                "--seed",
                "1",
                "--target",
                "3",
                "--out",
                out_arg.as_str(),
            ])
            .unwrap();
            run(args).unwrap();
            let svg = std::fs::read_to_string(&out).unwrap();
            std::fs::remove_file(&out).unwrap();
            assert!(svg.contains(r#"transform="rotate(-1957.5)""#));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Prize Wheel (native) starting...");

    let args = native::Args::parse();
    if let Err(err) = native::run(args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
