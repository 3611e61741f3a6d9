// Prints the OpenAPI document as JSON: cargo run --bin openapi_export > openapi.json

use anyhow::{Context, Result};
use utoipa::OpenApi;

use api_envelope::api::openapi::ApiDoc;

fn main() -> Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;
    println!("{}", json);
    Ok(())
}
