use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::api::schema::{self, ListPromptsQuery, UpdatePromptVersionRequest};
use crate::api::PromptClient;
use crate::cli::commands::ConnectionArgs;
use crate::config::{self, Connection, Overrides};
use crate::error::{PromptuaryError, Result};
use crate::mcp::PromptuaryServer;

impl From<&ConnectionArgs> for Overrides {
    fn from(args: &ConnectionArgs) -> Self {
        Overrides {
            host: args.host.clone(),
            public_key: args.public_key.clone(),
            secret_key: args.secret_key.clone(),
        }
    }
}

fn client(args: &ConnectionArgs) -> Result<PromptClient> {
    PromptClient::new(&Connection::from_env(&args.into()))
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

pub fn handle_serve(
    args: &ConnectionArgs,
    http: Option<SocketAddr>,
    personas: Vec<String>,
) -> Result<()> {
    // Logs go to stderr: stdio mode owns stdout for the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let connection = Connection::from_env(&args.into());
    let personas = config::personas_from_env(&personas);
    info!(host = %connection.host, personas = personas.len(), "starting promptuary");

    let server = PromptuaryServer::connect(&connection, personas)?;

    match http {
        Some(addr) => runtime()?.block_on(serve_http(server, addr)),
        None => runtime()?.block_on(serve_stdio(server)),
    }
}

async fn serve_stdio(server: PromptuaryServer) -> Result<()> {
    info!("serving MCP on stdio");
    server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| PromptuaryError::Io(std::io::Error::other(e)))
}

async fn serve_http(server: PromptuaryServer, addr: SocketAddr) -> Result<()> {
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("serving MCP over HTTP on http://{addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

pub fn handle_list(
    args: &ConnectionArgs,
    name: Option<String>,
    label: Option<String>,
    tag: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<()> {
    let query = ListPromptsQuery {
        name,
        label,
        tag,
        page,
        limit,
        ..Default::default()
    };

    let client = client(args)?;
    let list = runtime()?.block_on(client.list_prompts(&query))?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

pub fn handle_get(
    args: &ConnectionArgs,
    name: String,
    version: Option<u32>,
    label: Option<String>,
) -> Result<()> {
    let client = client(args)?;
    let prompt = runtime()?.block_on(client.get_prompt(&name, version, label.as_deref()))?;
    println!("{}", serde_json::to_string_pretty(&prompt)?);
    Ok(())
}

pub fn handle_create(args: &ConnectionArgs, file: Option<PathBuf>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let request = schema::parse_create_request(&value)?;

    let client = client(args)?;
    let created = runtime()?.block_on(client.create_prompt(&request))?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}

pub fn handle_publish(
    args: &ConnectionArgs,
    name: String,
    version: u32,
    labels: Vec<String>,
) -> Result<()> {
    let request = UpdatePromptVersionRequest { new_labels: labels };

    let client = client(args)?;
    let updated = runtime()?.block_on(client.update_prompt(&name, version, &request))?;
    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}
