use clap::Parser;

/// shelf - interactive client for a remote hierarchical file store
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server base URL (falls back to SHELF_SERVER, then the default)
    #[arg(long)]
    server: Option<String>,
}

fn main() {
    let args = Args::parse();
    let server = args.server.or_else(|| std::env::var("SHELF_SERVER").ok());

    if let Err(e) = shelf_repl::run(server.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
