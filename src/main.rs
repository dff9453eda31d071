use clap::Parser;
use promptuary::cli::{
    handle_create, handle_get, handle_list, handle_publish, handle_serve, Cli, Commands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { http, personas } => handle_serve(&cli.connection, http, personas),
        Commands::List {
            name,
            label,
            tag,
            page,
            limit,
        } => handle_list(&cli.connection, name, label, tag, page, limit),
        Commands::Get {
            name,
            version,
            label,
        } => handle_get(&cli.connection, name, version, label),
        Commands::Create { file } => handle_create(&cli.connection, file),
        Commands::Publish {
            name,
            version,
            labels,
        } => handle_publish(&cli.connection, name, version, labels),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
