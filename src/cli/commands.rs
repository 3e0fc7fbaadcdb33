use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cvsync",
    version,
    about = "Sync a Word resume document into a static HTML resume",
    after_help = "NOTE: 'sync' patches only the name heading, contact text and summary \
                  paragraph of the HTML file; all other markup is left untouched. \
                  Use 'parse' to inspect everything that was extracted from the document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the Word document in a project and patch its HTML resume.
    ///
    /// Picks the first document (sorted by filename) whose extension is
    /// configured in cvsync.toml (default: .docx, .doc), extracts the resume
    /// fields and rewrites the matching regions of the HTML file in place.
    /// Missing inputs are reported and end the run normally.
    Sync {
        /// Project root directory (default: current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Parse a document into a structured resume record (JSON on stdout)
    Parse {
        /// Path to the Word document
        file: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert a document to its intermediate HTML fragment
    Extract {
        /// Path to the Word document
        file: String,
    },
}
