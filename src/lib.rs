//! Generator for the gamma-corrected WS2812 bit-pattern table.
//!
//! Each of the 256 brightness levels is gamma corrected ([`gamma`]), expanded into one byte
//! slot per bit ([`encode`]), and packed into two 32-bit words. The resulting [`Table`] is
//! emitted as a C array initializer ([`render`]) for firmware that clears the output line
//! per bit slot to shape WS2812 pulses.
//!
//! ```
//! let table = ws2812_tab::Table::generate();
//! assert_eq!(table.get(255).words, [0, 0]);
//!
//! let source = ws2812_tab::render(&table);
//! assert!(source.starts_with("// Generated by ws2812_tab.py, gamma 2.500\n"));
//! ```

pub mod encode;
mod error;
pub mod gamma;
pub mod render;
pub mod table;

pub use error::{Error, Result};
pub use render::{render, write_table};
pub use table::{Table, TableEntry};
