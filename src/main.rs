use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "moneta",
    about = "Personal financial planning calculator (budget + debt + investing + life events)"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the HTTP JSON API")]
    Serve {
        #[arg(help = "Port to listen on", default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    match args.command {
        Command::Serve { port } => {
            if let Err(e) = moneta::api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
    }
}
