// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Breed catalog listing command for herdwise-cli
// ABOUTME: Prints the built-in breeds as a table or JSON

use crate::helpers::display::display_breed_table;
use crate::Result;
use herdwise::formatters::format_output_pretty;
use herdwise::nutrition::BreedCatalog;

/// List every breed in catalog order
pub fn list(json: bool) -> Result<()> {
    let catalog = BreedCatalog::builtin();
    if json {
        println!("{}", format_output_pretty(&catalog.get_all())?.data);
    } else {
        display_breed_table(catalog.get_all());
    }
    Ok(())
}
