use std::fs;
use std::path::PathBuf;

use clap::Parser;
use surf_spots_service::api::generate_openapi_spec;

#[derive(Parser, Debug)]
#[command(name = "generate-openapi")]
#[command(about = "Write the surf spots OpenAPI document to disk", long_about = None)]
struct Cli {
    /// Output file
    #[arg(short, long, env = "OPENAPI_OUTPUT", default_value = "openapi.json")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let spec = generate_openapi_spec();
    let json = serde_json::to_string_pretty(&spec)?;

    fs::write(&cli.output, json)?;
    println!("✅ Generated {}", cli.output.display());
    Ok(())
}
