//! meteo CLI Client
//!
//! Sends a single weather query and prints the result.

use clap::Parser;
use meteo::config::{DEFAULT_PORT, DEFAULT_SERVER};
use meteo::network;
use meteo::protocol::{Request, Response, Status};

/// meteo CLI
#[derive(Parser, Debug)]
#[command(name = "meteo-cli")]
#[command(about = "CLI client for the meteo weather service")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Weather request: "<type> <city>" with type one of t, h, w, p
    /// (e.g. "t bari")
    #[arg(short, long)]
    request: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> meteo::Result<()> {
    // Parse before touching the network: a malformed request string
    // performs no I/O
    let request = Request::parse(&args.request)?;

    let addr = format!("{}:{}", args.server, args.port);
    let response = network::query(addr.as_str(), &request)?;

    print_result(&args.server, &request, &response);
    Ok(())
}

fn print_result(server: &str, request: &Request, response: &Response) {
    print!("Received result from server {server}. ");

    match response.status {
        Status::Success => {
            if let Some(kind) = response.kind {
                println!(
                    "{}: {} = {:.1} {}",
                    capitalize(&request.city),
                    kind.label(),
                    response.value,
                    kind.unit()
                );
            }
        }
        Status::CityNotFound => println!("City not available."),
        Status::InvalidRequest => println!("Invalid request."),
    }
}

/// Uppercase the first letter of the city for display
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
