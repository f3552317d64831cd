//! camctl Client Binary
//!
//! Interactive remote control for a networked camera device.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use camctl::dispatcher::{self, MenuAction};
use camctl::{CamError, Client, Command, Config, Response};

/// camctl client
#[derive(Parser, Debug)]
#[command(name = "camctl")]
#[command(about = "Remote control client for a networked camera device")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8888")]
    server: String,

    /// Path for a received image
    #[arg(short, long, default_value = "received_image.jpg")]
    output: String,

    /// Connect timeout in milliseconds (0 = no timeout)
    #[arg(long, default_value = "5000")]
    connect_timeout_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the camera preview on the device
    OpenCamera,

    /// Capture a photo and save it locally
    TakePhoto,

    /// Print the device property listing
    GetProp,
}

impl Commands {
    fn to_command(&self) -> Command {
        match self {
            Commands::OpenCamera => Command::OpenCamera,
            Commands::TakePhoto => Command::TakePhoto,
            Commands::GetProp => Command::GetProp,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,camctl=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("camctl v{}", camctl::VERSION);
    tracing::info!("Server address: {}", args.server);

    // Build config from args
    let config = Config::builder()
        .server_addr(&args.server)
        .image_path(&args.output)
        .connect_timeout_ms(args.connect_timeout_ms)
        .build();

    let client = Client::new(config);

    match args.command {
        // One-shot mode: run a single command and exit
        Some(command) => {
            if !dispatch(&client, command.to_command()) {
                std::process::exit(1);
            }
        }
        // Interactive mode: menu loop until the user exits
        None => run_menu(&client),
    }
}

/// Interactive menu loop
///
/// Every request-level failure is reported and the loop continues; only
/// the exit key (or end of stdin) ends the process.
fn run_menu(client: &Client) {
    println!("Client started.");

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{}", dispatcher::menu_text());
        print!(">> ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // stdin closed
            Ok(_) => {}
            Err(e) => {
                tracing::error!("cannot read from stdin: {}", e);
                break;
            }
        }

        match dispatcher::resolve(&input) {
            MenuAction::Quit => {
                println!("Exiting...");
                break;
            }
            MenuAction::Unknown => {
                println!("Unknown command. Please try again.");
            }
            MenuAction::Dispatch(command) => {
                println!("{}", command.description());
                dispatch(client, command);
            }
        }
    }
}

/// Run one command and report the outcome; returns whether it succeeded
fn dispatch(client: &Client, command: Command) -> bool {
    match client.send_and_store(command) {
        Ok(Response::Image { bytes }) => {
            println!(
                "Image saved as '{}' ({} bytes)",
                client.config().image_path.display(),
                bytes.len()
            );
            true
        }
        Ok(Response::Properties { text }) => {
            println!("Properties received:");
            println!("{}", text);
            true
        }
        Err(CamError::Connection(msg)) => {
            tracing::warn!("{}", msg);
            println!("Connection failed. Make sure the server is running.");
            false
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", command, e);
            println!("Error: {}", e);
            false
        }
    }
}
