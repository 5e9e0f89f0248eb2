//! CSV trajectory output for downstream consumers
//!
//! One row per body per frame: `step,t,name,x,y`. Names are opaque labels,
//! so the name field is always quoted with inner quotes doubled (RFC 4180).

use std::io::{self, Write};

use crate::simulation::states::System;

pub const HEADER: &str = "step,t,name,x,y";

pub fn write_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")
}

/// Write the position of every body at `step`
pub fn write_frame(out: &mut impl Write, step: usize, sys: &System) -> io::Result<()> {
    for (name, x) in sys.positions() {
        writeln!(
            out,
            "{},{},{},{:e},{:e}",
            step,
            sys.time(),
            quote_field(name),
            x.x,
            x.y
        )?;
    }
    Ok(())
}

pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
