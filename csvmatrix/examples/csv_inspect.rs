#[cfg(all(feature = "cli", feature = "mmap"))]
use clap::{Args, Parser, Subcommand};

#[cfg(all(feature = "cli", feature = "mmap"))]
use csvmatrix::{parse_delimiter, parse_quote, CsvMatrix, MappedRegion, MatrixConfig};

#[cfg(all(feature = "cli", feature = "mmap"))]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "csv_inspect - query large delimited files without loading them into memory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(all(feature = "cli", feature = "mmap"))]
#[derive(Args)]
struct OpenArgs {
    /// Path to the delimited file
    path: std::path::PathBuf,

    /// Delimiter: auto, tab, comma, semicolon, space or a single character
    #[arg(long)]
    delimiter: Option<String>,

    /// Quote character: none, double, single or a single character
    #[arg(long)]
    quote: Option<String>,

    /// JSON configuration file; --delimiter and --quote override it
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[cfg(all(feature = "cli", feature = "mmap"))]
#[derive(Subcommand)]
enum Commands {
    /// Show size and detected delimiter
    Info {
        #[command(flatten)]
        open: OpenArgs,
    },
    /// Print a single field
    Get {
        #[command(flatten)]
        open: OpenArgs,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,
    },
    /// Print every field of a row
    Row {
        #[command(flatten)]
        open: OpenArgs,

        row: usize,
    },
}

#[cfg(all(feature = "cli", feature = "mmap"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Info { open } => {
            let matrix = open_matrix(open)?;
            let (rows, cols) = matrix.dimensions();
            println!("File: {}", open.path.display());
            println!("  Size: {} bytes", matrix.byte_len());
            println!("  Dimensions: {rows} x {cols}");
            println!(
                "  Delimiter: {:?} ({})",
                matrix.delimiter() as char,
                if matrix.dialect().delimiter.is_some() {
                    "configured"
                } else {
                    "detected"
                }
            );
        }
        Commands::Get { open, row, col } => {
            let matrix = open_matrix(open)?;
            match matrix.get_field(*row, *col)? {
                Some(value) => println!("{value}"),
                None => println!("No field at ({row}, {col})"),
            }
        }
        Commands::Row { open, row } => {
            let matrix = open_matrix(open)?;
            for (col, value) in matrix.row_fields(*row)?.iter().enumerate() {
                println!("  ({row}, {col}) = {value:?}");
            }
        }
    }

    let elapsed = start_time.elapsed();
    eprintln!("Completed in {elapsed:.2?}");

    Ok(())
}

#[cfg(not(all(feature = "cli", feature = "mmap")))]
fn main() {
    eprintln!("This example requires the 'cli' and 'mmap' features to be enabled.");
    eprintln!("Run with: cargo run --features cli --example csv_inspect");
    std::process::exit(1);
}

#[cfg(all(feature = "cli", feature = "mmap"))]
fn open_matrix(args: &OpenArgs) -> Result<CsvMatrix<MappedRegion>, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => MatrixConfig::from_json_file(path)?,
        None => MatrixConfig::default(),
    };

    if let Some(name) = &args.delimiter {
        config.delimiter = parse_delimiter(name)?.map(char::from);
    }
    if let Some(name) = &args.quote {
        config.quote = parse_quote(name)?.map(char::from);
    }

    Ok(CsvMatrix::open_with_config(&args.path, &config)?)
}
