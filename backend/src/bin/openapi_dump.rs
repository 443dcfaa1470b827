//! Print the OpenAPI document as JSON.

use clap::Parser;
use streakboard::ApiDoc;
use utoipa::OpenApi;

/// Export the REST API description for external tooling.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the Streakboard OpenAPI document")]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), serde_json::Error> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    println!("{json}");
    Ok(())
}
