//! Command handlers: build validated requests, run the adapter, render the
//! outcome as one JSON line and a distinct exit code.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use docsearch_adapter::Adapter;
use docsearch_types::{
    CreateRequest, DestroyRequest, Document, Outcome, SearchRequest, ServerAddr, UpdateRequest,
};

use crate::cli::{Cli, Commands, ServerOpts};

/// Exit codes, one per outcome variant, so scripts can branch without
/// parsing output.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_UNCLASSIFIED: i32 = 1;
pub const EXIT_CONNECTION_FAILURE: i32 = 10;
pub const EXIT_INDEX_NOT_FOUND: i32 = 11;
pub const EXIT_DOCUMENT_NOT_FOUND: i32 = 12;
pub const EXIT_MALFORMED_RESPONSE: i32 = 13;

/// Run one command to completion and return the process exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let adapter = Adapter::new();
    match cli.command {
        Commands::Create {
            server,
            index,
            doc_type,
            document,
            file,
        } => {
            let document = load_document(document, file)?;
            let req = CreateRequest::new(server_addr(&server)?, index, document)?
                .with_doc_type(doc_type);
            Ok(finish(adapter.create(&req).await))
        }
        Commands::Update {
            server,
            index,
            doc_type,
            id,
            document,
            file,
        } => {
            let document = load_document(document, file)?;
            let req = UpdateRequest::new(server_addr(&server)?, index, id, document)?
                .with_doc_type(doc_type);
            Ok(finish(adapter.update(&req).await))
        }
        Commands::Destroy {
            server,
            index,
            doc_type,
            id,
        } => {
            let req = DestroyRequest::new(server_addr(&server)?, index, id)?
                .with_doc_type(doc_type);
            Ok(finish(adapter.destroy(&req).await))
        }
        Commands::Search {
            server,
            query,
            index,
            ids_only,
        } => {
            let mut req = SearchRequest::new(server_addr(&server)?, query)?;
            if let Some(index) = index {
                req = req.with_index(index);
            }
            if ids_only {
                Ok(finish(adapter.search_ids(&req).await))
            } else {
                Ok(finish(adapter.search(&req).await))
            }
        }
    }
}

fn server_addr(opts: &ServerOpts) -> Result<ServerAddr> {
    ServerAddr::new(opts.hostname.as_str(), opts.port).map_err(Into::into)
}

/// Read the document payload from the inline argument or a file.
fn load_document(inline: Option<String>, file: Option<PathBuf>) -> Result<Document> {
    let text = match (inline, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading document from {}", path.display()))?,
        // clap enforces one of the two.
        (None, None) => anyhow::bail!("a document is required"),
    };
    serde_json::from_str(&text).context("document must be a JSON object")
}

fn finish<T: Serialize>(outcome: Outcome<T>) -> i32 {
    println!("{}", render(&outcome));
    exit_code(&outcome)
}

/// One JSON line describing the outcome.
pub fn render<T: Serialize>(outcome: &Outcome<T>) -> serde_json::Value {
    match outcome {
        Outcome::Success(value) => json!({"outcome": outcome.tag(), "result": value}),
        Outcome::MalformedResponse(reason) => {
            json!({"outcome": outcome.tag(), "reason": reason})
        }
        Outcome::Unclassified(err) => {
            json!({"outcome": outcome.tag(), "error": err.to_string()})
        }
        _ => json!({"outcome": outcome.tag()}),
    }
}

/// Map an outcome to its exit code.
pub fn exit_code<T>(outcome: &Outcome<T>) -> i32 {
    match outcome {
        Outcome::Success(_) => EXIT_SUCCESS,
        Outcome::ConnectionFailure => EXIT_CONNECTION_FAILURE,
        Outcome::IndexNotFound => EXIT_INDEX_NOT_FOUND,
        Outcome::DocumentNotFound => EXIT_DOCUMENT_NOT_FOUND,
        Outcome::MalformedResponse(_) => EXIT_MALFORMED_RESPONSE,
        Outcome::Unclassified(_) => EXIT_UNCLASSIFIED,
    }
}
