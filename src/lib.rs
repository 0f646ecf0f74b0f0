// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Fixed Greeting Emitters
//!
//! This crate backs two tiny command-line programs, `hello-block` and
//! `hello-variant`. Each one writes a single fixed line to standard output
//! and exits successfully. The line differs between the two, the contract
//! does not: one line, one trailing newline, exit code 0.
//!
//! # Quick Start
//!
//! Writing a greeting to an arbitrary sink:
//!
//! ```
//! use greeter::io::write_greeting;
//! use greeter::Greeting;
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! let mut buf = Vec::new();
//! write_greeting(Greeting::BlockStyle, &mut buf)?;
//! assert_eq!(buf, b"Hello from block-style GPLv1 file\n");
//! # Ok(())
//! # }
//! ```
//!
//! The binaries are one-call wrappers over [io::print_greeting] and take
//! no arguments; anything passed on the command line is ignored.

use std::fmt;

pub mod io;

/// One of the two fixed greetings this crate can emit.
///
/// Each variant owns a constant, non-empty message with no embedded line
/// break. The trailing newline is added at write time, not stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    /// The greeting printed by the `hello-block` binary.
    BlockStyle,
    /// The greeting printed by the `hello-variant` binary.
    Variant,
}

impl Greeting {
    /// The fixed message text, without the trailing newline.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BlockStyle => "Hello from block-style GPLv1 file",
            Self::Variant => "Hello from GPLv1-like variant file",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages_are_single_lines() {
        for greeting in [Greeting::BlockStyle, Greeting::Variant] {
            let message = greeting.message();
            assert!(!message.is_empty());
            assert!(!message.contains('\n'));
            assert!(!message.contains('\r'));
            assert!(message.is_ascii());
        }
    }

    #[test]
    fn test_messages_differ_between_variants() {
        assert_ne!(Greeting::BlockStyle.message(), Greeting::Variant.message());
    }

    #[test]
    fn test_display_matches_message() {
        assert_eq!(
            format!("{}", Greeting::BlockStyle),
            "Hello from block-style GPLv1 file"
        );
        assert_eq!(
            format!("{}", Greeting::Variant),
            "Hello from GPLv1-like variant file"
        );
    }
}
