//! List command handler.
//!
//! Displays all stored records in a formatted table.

use std::io::{self, Write};

use anyhow::Result;
use namelist_core::NameService;
use namelist_db::{CoreFactory, StoreConfig};

use crate::presentation::write_records;

/// Execute the list command against the configured store.
pub async fn execute(store: &StoreConfig) -> Result<()> {
    let names = CoreFactory::connect(store).await?;
    let mut out = io::stdout().lock();
    print_records(&names, &mut out).await
}

/// Write every record to `out`, or a hint when the table is empty.
pub async fn print_records<W: Write>(names: &NameService, out: &mut W) -> Result<()> {
    let records = names.get_all().await?;

    if records.is_empty() {
        writeln!(out, "No names stored yet.")?;
        writeln!(out, "Start the server with 'namelist serve' and add one from the browser.")?;
        return Ok(());
    }

    writeln!(out, "Found {} name(s):\n", records.len())?;
    write_records(out, &records)?;
    Ok(())
}
