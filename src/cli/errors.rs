use thiserror::Error;

/// Application-specific errors for the CLI. Each one ends the run with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "--- ERROR: Required Program Not Found ---\n\
         This program requires LibreOffice to function.\n\
         Please install LibreOffice from https://www.libreoffice.org/\n\
         If it is already installed, make sure 'soffice' or 'libreoffice'\n\
         is available in your system's PATH."
    )]
    ConverterNotFound,

    #[error(
        "--- ERROR: Required Program Not Found ---\n\
         The configured converter '{command}' could not be found or is not executable.\n\
         Point --converter (or DOC2PDF_CONVERTER) at LibreOffice's 'soffice' program,\n\
         or unset it to search the default locations."
    )]
    ConverterOverrideNotFound { command: String },

    #[error("{0}")]
    Lib(#[from] doc2pdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
