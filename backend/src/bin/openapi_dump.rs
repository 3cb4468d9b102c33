//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use phonebook::doc::ApiDoc;
use utoipa::OpenApi;

/// Write the phonebook OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the phonebook OpenAPI document")]
struct Args {
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(std::io::Error::other)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
}
