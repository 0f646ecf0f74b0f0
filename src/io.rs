// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::Write;

use anyhow::Result;

use crate::Greeting;

/// Writes a [Greeting]'s message plus a single trailing newline to the
/// provided writer. If the writer fails an error will be returned.
pub fn write_greeting<W: Write>(greeting: Greeting, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", greeting.message())?;
    Ok(())
}

/// Writes a [Greeting] line to standard output. If standard output cannot
/// be written to an error will be returned.
pub fn print_greeting(greeting: Greeting) -> Result<()> {
    let stdout = std::io::stdout();
    write_greeting(greeting, &mut stdout.lock())
}
