// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;

use greeter::io::print_greeting;
use greeter::Greeting;

// Command-line arguments are deliberately never read.
fn main() -> Result<()> {
    print_greeting(Greeting::Variant)
}
