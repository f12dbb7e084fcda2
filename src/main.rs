use clap::{Parser, Subcommand};
use log::debug;

use foodiq::render;
use foodiq::{FoodiqConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "foodiq")]
#[command(about = "Shelf-life estimates and HACCP checklists for food products")]
#[command(version)]
struct Args {
    /// Print results as JSON (overrides the configured output format)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate shelf-life from a comma-separated ingredient list
    ShelfLife {
        /// Ingredients, e.g. "milk, eggs"
        ingredients: String,

        /// Storage temperature in °C (defaults to the configured value, 4 °C)
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Show the per-ingredient baselines and temperature band
        #[arg(long)]
        explain: bool,
    },
    /// Generate a HACCP critical control point checklist
    Haccp {
        /// Free-text description of the food process
        description: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = FoodiqConfig::load_or_default();
    debug!("{:#?}", config);

    let output = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let rendered = match args.command {
        Command::ShelfLife {
            ingredients,
            temperature,
            explain,
        } => {
            let temperature = temperature.unwrap_or(config.default_storage_temperature);
            if !temperature.is_finite() {
                return Err(
                    format!("Temperature must be a finite number, got {}", temperature).into(),
                );
            }

            render::shelf_life_output(&ingredients, temperature, output, explain)?
        }
        Command::Haccp { description } => render::haccp_output(&description, output)?,
    };

    println!("{}", rendered);
    Ok(())
}
