//! Console messages shown to the user.
//!
//! Logs go to stderr through `tracing`; these lines are the command's actual output.

use std::io::{self, Write};

pub struct Icons;

impl Icons {
    pub const CHECK: &'static str = "✓";
    pub const PENDING: &'static str = "○";
    pub const MODIFIED: &'static str = "~";
    pub const WARNING: &'static str = "⚠";
}

pub fn info(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

pub fn note(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "  {message}")
}

pub fn warning(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", Icons::WARNING)
}

pub fn blank(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)
}
