use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "doc2pdf",
    version,
    about = "Convert .doc/.docx files to PDF using LibreOffice.",
    after_help = "Example: doc2pdf -o ./converted_pdfs ~/Documents/report.docx"
)]
pub struct CliArgs {
    /// One or more source files or directories
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory to save all converted PDFs (default: same as source file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Converter command or path, instead of searching the default locations
    #[arg(long, env = "DOC2PDF_CONVERTER")]
    pub converter: Option<String>,

    /// JSON config file (keys: output_dir, converter, extensions)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable diagnostic logging on stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
