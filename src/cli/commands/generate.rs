//! Generate command implementation

use crate::scenario::{generate_scenario, write_script, GeneratorConfig};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Generate a scenario script and write it to `out`
pub fn run_generate_command(generator: &GeneratorConfig, out: &Path) -> Result<()> {
    let commands = generate_scenario(generator)?;

    let file = File::create(out)
        .with_context(|| format!("Failed to create scenario script {}", out.display()))?;
    write_script(BufWriter::new(file), &commands)?;

    info!(
        commands = commands.len(),
        path = %out.display(),
        "Wrote scenario script"
    );
    Ok(())
}
