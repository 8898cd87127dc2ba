//! `flightdeck fields`: list the fields transitions are reported for.

use crate::output;
use anyhow::Result;

pub fn execute(json: bool) -> Result<()> {
    output::print_fields(json);
    Ok(())
}
