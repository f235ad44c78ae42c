use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

use mapmask::config::FileConfig;
use mapmask::geojson::{Coordinates, extract_coordinates, read_geojson, write_geojson};
use mapmask::geometry::{
    compute_bounds, interior_label_position, resolve_label_position, world_mask_feature,
};
use mapmask::slug::create_slug;

/// Build cookie-cutter map masks, bounds, and label anchors from GeoJSON region geometry
///
/// Examples:
///   # Write the world-minus-region mask for a boundary file
///   mapmask mask boundaries/florida.geojson -o florida-mask.geojson --pretty
///
///   # Print the default label anchor, or honor a stored override
///   mapmask label boundaries/tampa-bay.geojson
///   mapmask label boundaries/tampa-bay.geojson --lng -82.46 --lat 27.95
///
///   # Process every region listed in mapmask.toml
///   mapmask batch -o out/masks
#[derive(Parser, Debug)]
#[command(name = "mapmask")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a world-covering polygon with the region cut out as holes
    Mask {
        /// Boundary GeoJSON file (FeatureCollection, Feature, or bare geometry)
        input: PathBuf,

        /// Output file (defaults to {input stem}-mask.geojson)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the label anchor point for a region
    Label {
        /// Boundary GeoJSON file
        input: PathBuf,

        /// Stored label longitude override (use with --lat)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// Stored label latitude override (use with --lng)
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Use the interior-point algorithm instead of the bbox midpoint
        #[arg(long)]
        interior: bool,
    },

    /// Print the bounding box of a region
    Bounds {
        /// Boundary GeoJSON file
        input: PathBuf,
    },

    /// Print the slug for a region or city name
    Slug {
        /// Display name, e.g. "Tampa Bay"
        name: String,
    },

    /// Process every region listed in the config file
    Batch {
        /// Path to config file (optional, auto-searches mapmask.toml if not provided)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for mask files (overrides the config value)
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Mask {
            input,
            output,
            pretty,
        } => run_mask(&input, output, pretty, args.verbose),
        Command::Label {
            input,
            lng,
            lat,
            interior,
        } => run_label(&input, lng, lat, interior),
        Command::Bounds { input } => run_bounds(&input),
        Command::Slug { name } => {
            println!("{}", create_slug(&name));
            Ok(())
        }
        Command::Batch {
            config,
            output_dir,
            pretty,
        } => run_batch(config, output_dir, pretty, args.verbose),
    }
}

/// Read a boundary file and normalize it to the canonical coordinate tree.
fn load_coordinates(path: &Path) -> Result<Coordinates> {
    let doc = read_geojson(path)?;
    extract_coordinates(Some(&doc))
        .with_context(|| format!("Failed to extract geometry from {}", path.display()))
}

fn run_mask(input: &Path, output: Option<PathBuf>, pretty: bool, verbose: bool) -> Result<()> {
    let coords = load_coordinates(input)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "region".to_string());
        input.with_file_name(format!("{}-mask.geojson", stem))
    });

    let mask = world_mask_feature(&coords);
    write_geojson(&output_path, &mask, pretty)?;

    if verbose {
        println!(
            "Mask: {} ring(s) cut out of the world polygon",
            coords.ring_count()
        );
    }
    println!("Wrote {}", output_path.display());
    Ok(())
}

fn run_label(input: &Path, lng: Option<f64>, lat: Option<f64>, interior: bool) -> Result<()> {
    let coords = load_coordinates(input)?;

    let stored = match (lng, lat) {
        (Some(lng), Some(lat)) => Some([lng, lat]),
        _ => None,
    };

    let [lng, lat] = if interior && stored.is_none() {
        interior_label_position(&coords)
    } else {
        resolve_label_position(stored, &coords)
    };

    println!("{} {}", lng, lat);
    Ok(())
}

fn run_bounds(input: &Path) -> Result<()> {
    let coords = load_coordinates(input)?;
    let bounds = compute_bounds(&coords);

    if bounds.is_empty() {
        bail!("No coordinates found in {}", input.display());
    }

    println!(
        "{} {} {} {}",
        bounds.min_lng, bounds.min_lat, bounds.max_lng, bounds.max_lat
    );
    Ok(())
}

fn run_batch(
    config_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    pretty: bool,
    verbose: bool,
) -> Result<()> {
    let start = Instant::now();

    let config = if let Some(ref path) = config_path {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", path);
        }
    } else {
        FileConfig::load().context(
            "No config file found (searched mapmask.toml, .mapmask.toml, and config dirs)",
        )?
    };

    if config.regions.is_empty() {
        bail!("Config has no [[regions]] entries");
    }

    let output_dir = output_dir.unwrap_or(config.output_dir);
    let pretty = pretty || config.pretty;

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    println!("mapmask - Region Mask Generator");
    println!("===============================");
    println!();

    let pb = ProgressBar::new(config.regions.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.green} {pos}/{len} {msg}").unwrap(),
    );

    let mut summaries = Vec::with_capacity(config.regions.len());

    for region in &config.regions {
        pb.set_message(region.name.clone());

        let coords = load_coordinates(&region.boundary)
            .with_context(|| format!("Failed to process region '{}'", region.name))?;

        let slug = create_slug(&region.name);
        if slug.is_empty() {
            bail!("Region name '{}' produces an empty slug", region.name);
        }

        let mask_path = output_dir.join(format!("{}.geojson", slug));
        write_geojson(&mask_path, &world_mask_feature(&coords), pretty)?;

        // Persisted drag position wins over the computed default.
        let [lng, lat] = resolve_label_position(region.stored_label(), &coords);

        if verbose {
            let bounds = compute_bounds(&coords);
            summaries.push(format!(
                "{}: {} ring(s), bounds [{:.4}, {:.4}, {:.4}, {:.4}], label ({:.4}, {:.4}) -> {}",
                region.name,
                coords.ring_count(),
                bounds.min_lng,
                bounds.min_lat,
                bounds.max_lng,
                bounds.max_lat,
                lng,
                lat,
                mask_path.display()
            ));
        } else {
            summaries.push(format!(
                "{}: label ({:.4}, {:.4}) -> {}",
                region.name,
                lng,
                lat,
                mask_path.display()
            ));
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");
    println!();

    for line in &summaries {
        println!("{}", line);
    }

    println!();
    println!(
        "Processed {} region(s) in {:.1}s",
        config.regions.len(),
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
