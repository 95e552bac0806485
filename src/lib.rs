#![doc = r#"
doc2pdf — batch conversion of office documents to PDF via LibreOffice.

The heavy lifting (parsing, layout and PDF encoding) is done by LibreOffice's
headless command-line mode. This crate finds the `soffice` executable, walks the
inputs it is given and runs one conversion per document.

The library target backs the `doc2pdf` binary and its tests. It is not meant to
be embedded and may change without notice.

Requirements
------------
- LibreOffice installed, with `soffice` or `libreoffice` on `PATH`
  (or at the default install location on Windows and macOS).

Layout
------
- [`core`](crate::core) — locating the converter and converting one file.
- [`batch`] — walking inputs in argument order.
- [`io`] — console sinks and directory listing.
- [`types`] — `Platform`, `Outcome`, `BatchReport`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod batch;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use batch::{convert_inputs, prepare_output_dir};
pub use crate::core::convert::convert_file;
pub use crate::core::locator::{Converter, find_converter, find_converter_in, resolve_override};
pub use crate::core::params::{ConversionParams, DEFAULT_EXTENSIONS};
pub use error::{Error, Result};
pub use io::console::Console;
pub use types::{BatchReport, Outcome, Platform};

#[cfg(test)]
mod test_support;
