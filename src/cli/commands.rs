use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promptuary")]
#[command(version, about = "A Langfuse prompt-management bridge exposed as an MCP server")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Connection overrides, the highest-precedence configuration source.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Langfuse host (falls back to LANGFUSE_HOST, then the public cloud endpoint)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Public API key (falls back to LANGFUSE_PUBLIC_KEY)
    #[arg(long, global = true)]
    pub public_key: Option<String>,

    /// Secret API key (falls back to LANGFUSE_SECRET_KEY)
    #[arg(long, global = true)]
    pub secret_key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the MCP bridge on stdio, or over streamable HTTP with --http
    Serve {
        /// Bind address for the HTTP transport (e.g. 127.0.0.1:8077)
        #[arg(long)]
        http: Option<SocketAddr>,

        /// Persona roster entry (can be specified multiple times; falls back
        /// to PROMPTUARY_PERSONAS, then the built-in roster)
        #[arg(long = "persona")]
        personas: Vec<String>,
    },

    /// List prompts in the project
    List {
        /// Filter by exact prompt name
        #[arg(long)]
        name: Option<String>,

        /// Filter by label
        #[arg(long)]
        label: Option<String>,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Get a single prompt by name
    Get {
        /// Prompt name
        name: String,

        /// Pin to a specific version
        #[arg(long, conflicts_with = "label")]
        version: Option<u32>,

        /// Pin to a label such as "production" or "latest"
        #[arg(long)]
        label: Option<String>,
    },

    /// Create a prompt from a JSON create request
    Create {
        /// Path to the JSON request; omit to read from stdin
        file: Option<PathBuf>,
    },

    /// Replace the labels on a prompt version
    Publish {
        /// Prompt name
        name: String,

        /// Version to relabel
        version: u32,

        /// Label to assign (can be specified multiple times; none clears all)
        #[arg(long = "label", short = 'l')]
        labels: Vec<String>,
    },
}
