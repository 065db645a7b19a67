//! Generates models for a small offer/order schema and prints one artifact.
//!
//! ```bash
//! cargo run --example generate_models
//! ```

use modelforge::prelude::*;

const SCHEMA: &str = r##"{
    "definitions": {
        "Pricing": {
            "properties": {
                "amount": { "type": "number", "minimum": 0 },
                "currency": { "type": "string", "enum": ["EUR", "USD"] }
            }
        },
        "CreateOfferRequest": {
            "required": ["ean", "qty"],
            "properties": {
                "ean": {
                    "type": "string",
                    "description": "The EAN number associated with this product."
                },
                "qty": { "type": "integer", "minimum": 1, "maximum": 999 },
                "onHoldByRetailer": { "type": "boolean", "default": false },
                "expiryDate": { "type": "string", "format": "date-time" },
                "pricings": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/Pricing" },
                    "minItems": 1
                }
            }
        }
    }
}"##;

fn main() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let schema_path = dir.path().join("offers.json");
    std::fs::write(&schema_path, SCHEMA)?;

    let out_dir = dir.path().join("models");
    let report = modelforge::generate(&schema_path, &out_dir)?;

    println!("generated definitions: {:?}", report.definitions);
    println!();
    println!(
        "{}",
        std::fs::read_to_string(out_dir.join("create_offer_request.rs"))?
    );
    Ok(())
}
