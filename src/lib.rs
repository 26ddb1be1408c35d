//! Lexical front end for the Lox scripting language.
//!
//! Turns a source buffer into classified tokens in a single pass. Lexical
//! errors never stop the scan; they are collected and returned alongside the
//! tokens.
//!
//! ```
//! use lox_tokenizer::{scan, TokenKind};
//!
//! let scan = scan(b"print 1 + 2;");
//! assert_eq!(scan.tokens[0].kind, TokenKind::Print);
//! assert_eq!(scan.tokens[1].to_string(), "NUMBER 1 1.0");
//! assert_eq!(scan.error_count(), 0);
//! ```

pub mod diagnostics;
pub mod error;
pub mod scanner;

pub use diagnostics::{Reporter, Silent, Stderr};
pub use error::{Diagnostic, ScanError};
pub use scanner::{keyword, scan, Literal, Scan, Scanner, Token, TokenKind};
