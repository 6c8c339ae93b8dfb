//! Console output for the op dump and the publish receipt.

use std::io::Write;

use ontoseed_core::Op;
use ontoseed_graph::PublishReceipt;

use crate::error::Result;

/// Print the op batch as pretty JSON.
pub fn print_ops<W: Write>(out: &mut W, ops: &[Op]) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(ops)?)?;
    Ok(())
}

/// Print the publish receipt.
pub fn print_receipt<W: Write>(out: &mut W, receipt: &PublishReceipt) -> Result<()> {
    writeln!(
        out,
        "\nSeed ontology published: {}",
        serde_json::to_string_pretty(receipt)?
    )?;
    Ok(())
}
