//! CLI argument parsing for the docsearch binary.

use clap::{Args, Parser, Subcommand};

/// docsearch
///
/// Document-store operations against a remote search server, each reported
/// as one well-defined outcome and a matching exit code.
#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "DOCSEARCH_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the search server lives.
#[derive(Args, Debug)]
pub struct ServerOpts {
    /// Hostname of your search server (e.g. "localhost", or the host of a
    /// hosted instance)
    #[arg(long, env = "DOCSEARCH_HOST")]
    pub hostname: String,

    /// Port the search server is running on (9200 is conventional)
    #[arg(long, env = "DOCSEARCH_PORT", default_value_t = 9200)]
    pub port: u16,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a document, making it searchable; prints the generated id
    Create {
        #[command(flatten)]
        server: ServerOpts,

        /// Index where the document should be stored (an "index" is a lot
        /// like a database in MySQL or MongoDB)
        #[arg(long)]
        index: String,

        /// The "type" of this document
        #[arg(long, default_value = "default")]
        doc_type: String,

        /// The document as inline JSON (e.g. '{"name": "a"}')
        #[arg(required_unless_present = "file")]
        document: Option<String>,

        /// Read the document from a JSON file instead
        #[arg(long, conflicts_with = "document")]
        file: Option<std::path::PathBuf>,
    },

    /// Replace (reindex) the document with the given id
    Update {
        #[command(flatten)]
        server: ServerOpts,

        /// Index where the document is stored
        #[arg(long)]
        index: String,

        /// The "type" of the document to update
        #[arg(long, default_value = "default")]
        doc_type: String,

        /// Unique id of the document to replace
        #[arg(long)]
        id: String,

        /// The new document as inline JSON
        #[arg(required_unless_present = "file")]
        document: Option<String>,

        /// Read the document from a JSON file instead
        #[arg(long, conflicts_with = "document")]
        file: Option<std::path::PathBuf>,
    },

    /// Delete the document with the given id
    Destroy {
        #[command(flatten)]
        server: ServerOpts,

        /// Index where the document is stored
        #[arg(long)]
        index: String,

        /// The "type" of the document to delete
        #[arg(long, default_value = "default")]
        doc_type: String,

        /// Unique id of the document to delete
        #[arg(long)]
        id: String,
    },

    /// Full-text search across all indexed fields
    Search {
        #[command(flatten)]
        server: ServerOpts,

        /// The search query (e.g. "cute dogs"); supports the server's
        /// query-parser syntax, including field filters and wildcards
        query: String,

        /// Restrict the search to one index (searches all indices when
        /// omitted)
        #[arg(long)]
        index: Option<String>,

        /// Print only the ids of the matched documents
        #[arg(long)]
        ids_only: bool,
    },
}
