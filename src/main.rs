use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

use decksect::config::FileConfig;
use decksect::derive::derive_lines;
use decksect::domain::{DeckSection, MaterialProperties, Polygon, ReferencePoint};
use decksect::geometry;
use decksect::interchange::read_document;
use decksect::sink::{ImportOptions, PolygonSink, import_section};

/// Transfer bridge deck cross-sections from civil CAD into structural
/// analysis tools
///
/// Examples:
///   # Push the first section of a file into the analysis model
///   decksect import section.json
///
///   # Import under a different target section name, keep existing voids
///   decksect import section.json --target BridgeDeck --keep-voids
///
///   # Check a file before importing
///   decksect validate section.json
///
///   # Show the export header and section summaries
///   decksect info section.json
#[derive(Parser, Debug)]
#[command(name = "decksect")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches decksect.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a section file, derive centerlines, and push it into the target
    Import {
        /// Interchange JSON file to import
        file: PathBuf,

        /// Target section name in the analysis model
        #[arg(long)]
        target: Option<String>,

        /// Don't set the reference point
        #[arg(long)]
        no_ref_point: bool,

        /// Don't clear existing voids on the target section
        #[arg(long)]
        keep_voids: bool,
    },

    /// Check a section file for structural problems
    Validate {
        /// Interchange JSON file to validate
        file: PathBuf,
    },

    /// Print the export header and a per-section summary
    Info {
        /// Interchange JSON file to inspect
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    let verbose = args.verbose || file_config.verbose;

    match args.command {
        Command::Import {
            file,
            target,
            no_ref_point,
            keep_voids,
        } => {
            let options = ImportOptions {
                target_section_name: target.or(file_config.target),
                set_reference_point: !(no_ref_point || file_config.no_ref_point),
                clear_existing_voids: !(keep_voids || file_config.keep_voids),
            };
            handle_import(&file, &options, verbose)
        }
        Command::Validate { file } => handle_validate(&file),
        Command::Info { file } => handle_info(&file, verbose),
    }
}

fn handle_import(file: &Path, options: &ImportOptions, verbose: bool) -> Result<()> {
    println!("decksect - Bridge Deck Section Transfer");
    println!("=======================================");
    println!();

    let spinner = create_spinner("Loading section file...");
    let start = Instant::now();
    let document = read_document(file)
        .with_context(|| format!("Failed to load section file: {}", file.display()))?;
    let mut section = document
        .sections
        .into_iter()
        .next()
        .context("Section file is empty")?;
    spinner.finish_with_message(format!(
        "Loaded section '{}' [{:.1}s]",
        section.name,
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        print_section_summary(&section);
    }

    let spinner = create_spinner("Deriving centerlines and cutlines...");
    derive_lines(&mut section).context("Centerline derivation failed")?;
    spinner.finish_with_message(format!(
        "Derived {} centerlines, {} cutlines",
        section.centerlines.len(),
        section.cutlines.len()
    ));

    println!();
    let mut sink = ReportSink { verbose };
    import_section(&section, &mut sink, options).context("Import failed")?;

    println!();
    println!("Done.");
    Ok(())
}

fn handle_validate(file: &Path) -> Result<()> {
    println!("Validating: {}", file.display());

    let document = read_document(file)
        .with_context(|| format!("Failed to load section file: {}", file.display()))?;

    println!();
    println!("=== VALIDATION RESULTS ===");
    println!();

    let mut failed = false;

    for section in &document.sections {
        println!("Section '{}':", section.name);

        let exterior = &section.exterior_boundary.points;
        if exterior.len() < 3 {
            println!("  [FAIL] Exterior boundary: need at least 3 points, got {}", exterior.len());
            failed = true;
            continue;
        }
        println!("  [PASS] Exterior boundary: {} vertices", exterior.len());

        let exterior_area = geometry::area(exterior).abs();
        if exterior_area <= 0.0 {
            println!("  [FAIL] Exterior area is zero or negative");
            failed = true;
            continue;
        }
        println!("  [PASS] Calculated exterior area: {:.4}", exterior_area);

        for void in &section.interior_voids {
            if void.points.len() < 3 {
                println!("  [WARN] Void '{}': fewer than 3 vertices", void.name);
            } else {
                let void_area = geometry::area(&void.points).abs();
                println!(
                    "  [PASS] Void '{}': {} vertices, area {:.4}",
                    void.name,
                    void.points.len(),
                    void_area
                );
            }
        }

        let net_area = geometry::net_area(section);
        println!("  [INFO] Net area (exterior - voids): {:.4}", net_area);
        if net_area <= 0.0 {
            println!("  [WARN] Net area is zero or negative - voids may be larger than exterior!");
        }

        // Derivation doubles as a geometry sanity check
        let mut derived = section.clone();
        match derive_lines(&mut derived) {
            Ok(()) => println!(
                "  [PASS] Derivation: {} centerlines, {} cutlines",
                derived.centerlines.len(),
                derived.cutlines.len()
            ),
            Err(e) => {
                println!("  [FAIL] Derivation: {}", e);
                failed = true;
            }
        }
        println!();
    }

    if failed {
        bail!("validation failed");
    }
    println!("=== VALIDATION PASSED ===");
    Ok(())
}

fn handle_info(file: &Path, verbose: bool) -> Result<()> {
    let document = read_document(file)
        .with_context(|| format!("Failed to load section file: {}", file.display()))?;

    let info = &document.export_info;
    println!("File: {}", file.display());
    println!("  Exported: {}", info.date.to_rfc3339());
    println!("  Tool: {} {}", info.tool, info.version);
    println!("  Units: {}", info.units);
    println!("  Coordinate system: {}", info.coordinate_system);
    println!("  Sections: {}", document.sections.len());
    println!();

    for section in &document.sections {
        print_section_summary(section);

        if verbose {
            let mut derived = section.clone();
            match derive_lines(&mut derived) {
                Ok(()) => {
                    for cl in &derived.centerlines {
                        println!("    {}: {}", cl.name, cl.description);
                    }
                    for cl in &derived.cutlines {
                        println!("    {}: {}", cl.name, cl.description);
                    }
                }
                Err(e) => println!("    (derivation failed: {})", e),
            }
        }
        println!();
    }

    Ok(())
}

fn print_section_summary(section: &DeckSection) {
    println!("  Section: {} (station {:.2})", section.name, section.station);
    println!(
        "    Exterior vertices: {}",
        section.exterior_boundary.points.len()
    );
    println!("    Voids: {}", section.num_voids());
    println!("    Area: {:.4}", section.area);
    println!(
        "    Centroid: ({:.4}, {:.4})",
        section.centroid.x, section.centroid.y
    );
    println!(
        "    Reference: ({:.4}, {:.4}) {}",
        section.reference_point.x, section.reference_point.y, section.reference_point.description
    );
}

/// Stand-in adapter that reports each operation instead of driving a live
/// host. Real analysis-side integrations supply their own `PolygonSink`.
struct ReportSink {
    verbose: bool,
}

impl PolygonSink for ReportSink {
    fn begin_section(
        &mut self,
        name: &str,
        material: &MaterialProperties,
    ) -> decksect::error::Result<()> {
        println!("Target section: {}", name);
        println!(
            "  Material: f'c={:.1}, density={:.1}, E={:.1}",
            material.concrete_strength, material.density, material.elastic_modulus
        );
        Ok(())
    }

    fn clear_voids(&mut self) -> decksect::error::Result<()> {
        println!("  Clearing existing voids");
        Ok(())
    }

    fn define_exterior_polygon(&mut self, polygon: &Polygon) -> decksect::error::Result<()> {
        println!(
            "  Exterior polygon '{}': {} vertices",
            polygon.name,
            polygon.points.len()
        );
        if self.verbose {
            for p in &polygon.points {
                println!("    ({:.4}, {:.4})", p.x, p.y);
            }
        }
        Ok(())
    }

    fn define_void_polygon(&mut self, polygon: &Polygon) -> decksect::error::Result<()> {
        println!(
            "  Void polygon '{}': {} vertices",
            polygon.name,
            polygon.points.len()
        );
        if self.verbose {
            for p in &polygon.points {
                println!("    ({:.4}, {:.4})", p.x, p.y);
            }
        }
        Ok(())
    }

    fn set_reference_point(&mut self, point: &ReferencePoint) -> decksect::error::Result<()> {
        println!(
            "  Reference point: ({:.4}, {:.4}) {}",
            point.x, point.y, point.description
        );
        Ok(())
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
