use std::io::Write;

use carrysplit_core::scenarios::builtin_scenarios;

pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &builtin_scenarios())?;
    writeln!(out)?;
    Ok(())
}
