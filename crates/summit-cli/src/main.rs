use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use summit_booklet::{
    Booklet, BookletOptions, DeviceClass, FsLogoLoader, StaticRepository, TextOnlyLogos,
};

mod logger;

#[derive(Parser)]
#[command(name = "summit", about = "Summit agenda booklet CLI", version)]
struct Cli {
    /// Booklet options file (JSON)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Log layout decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show page and spread counts for an agenda
    Stats {
        /// Agenda JSON file (defaults to the built-in Summit agenda)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print one spread as text
    Render {
        /// Agenda JSON file (defaults to the built-in Summit agenda)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Lay out as this device class instead of using --width
        #[arg(long, value_enum)]
        device: Option<DeviceArg>,

        /// Spread to print (1-based)
        #[arg(long, default_value = "1")]
        spread: usize,

        /// Directory holding sponsor logo images
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Print every spread, optionally switching layout part way through
    Walk {
        /// Agenda JSON file (defaults to the built-in Summit agenda)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Lay out as this device class instead of using --width
        #[arg(long, value_enum)]
        device: Option<DeviceArg>,

        /// Resize to this width after the given number of spreads
        #[arg(long, requires = "resize_after")]
        resize_to: Option<f32>,

        /// Spreads to show before resizing
        #[arg(long)]
        resize_after: Option<usize>,

        /// Directory holding sponsor logo images
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Write the default options to a file for editing
    InitOptions {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DeviceArg {
    Mobile,
    Desktop,
}

impl From<DeviceArg> for DeviceClass {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Mobile => Self::Mobile,
            DeviceArg::Desktop => Self::Desktop,
        }
    }
}

/// A width on the requested side of the breakpoint
fn width_for(device: Option<DeviceArg>, width: f32, options: &BookletOptions) -> f32 {
    match device.map(DeviceClass::from) {
        Some(DeviceClass::Mobile) => options.breakpoint_px - 1.0,
        Some(DeviceClass::Desktop) => options.breakpoint_px,
        None => width,
    }
}

async fn load_options(path: Option<&Path>) -> Result<BookletOptions> {
    match path {
        Some(path) => BookletOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display())),
        None => Ok(BookletOptions::default()),
    }
}

async fn load_repository(path: Option<&Path>) -> Result<StaticRepository> {
    match path {
        Some(path) => StaticRepository::load(path)
            .await
            .with_context(|| format!("Failed to load agenda from {}", path.display())),
        None => Ok(StaticRepository::summit()),
    }
}

fn build_booklet(
    repository: StaticRepository,
    options: BookletOptions,
    width: f32,
    assets: Option<PathBuf>,
) -> Booklet<StaticRepository> {
    let booklet = Booklet::new(repository, options, width);
    match assets {
        Some(dir) => booklet.with_logo_loader(FsLogoLoader::new(dir)),
        None => booklet.with_logo_loader(TextOnlyLogos),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    let options = load_options(cli.options.as_deref()).await?;

    match cli.command {
        Commands::Stats { data } => {
            let repository = load_repository(data.as_deref()).await?;
            let stats = summit_booklet::calculate_statistics(&repository, &options);

            println!("Booklet Statistics:");
            println!("  Logical pages: {}", stats.logical_pages);
            println!("  Spreads (mobile): {}", stats.mobile_spreads);
            println!("  Spreads (desktop): {}", stats.desktop_spreads);
            println!("  Special sessions: {}", stats.special_sessions);
            for (day, count) in &stats.sessions_per_day {
                println!("  {}: {} sessions", day, count);
            }
            for (tier, count) in &stats.sponsors_per_tier {
                println!("  {} sponsors: {}", tier.label(), count);
            }
        }

        Commands::Render {
            data,
            width,
            device,
            spread,
            assets,
        } => {
            let repository = load_repository(data.as_deref()).await?;
            let width = width_for(device, width, &options);
            let booklet = build_booklet(repository, options, width, assets);

            if spread == 0 || spread > booklet.total_spreads() {
                bail!(
                    "Spread {} is out of range (1-{})",
                    spread,
                    booklet.total_spreads()
                );
            }

            print!(
                "{}",
                summit_booklet::spread_to_text(&booklet.render_spread(spread - 1))
            );
        }

        Commands::Walk {
            data,
            width,
            device,
            resize_to,
            resize_after,
            assets,
        } => {
            let repository = load_repository(data.as_deref()).await?;
            let width = width_for(device, width, &options);
            let mut booklet = build_booklet(repository, options, width, assets);

            let mut shown = 0;
            loop {
                print!(
                    "{}",
                    summit_booklet::spread_to_text(&booklet.render_current())
                );
                shown += 1;

                if let (Some(to), Some(after)) = (resize_to, resize_after) {
                    if shown == after {
                        let changed = booklet.resize(to);
                        println!(
                            "\n*** Resized to {}px ({}) ***",
                            to,
                            if changed {
                                "layout changed"
                            } else {
                                "same layout"
                            }
                        );
                        print!(
                            "{}",
                            summit_booklet::spread_to_text(&booklet.render_current())
                        );
                    }
                }

                if !booklet.next() {
                    break;
                }
                println!();
            }
        }

        Commands::InitOptions { output } => {
            BookletOptions::default()
                .save(&output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
