use chatgrid::core::config::{self, CliOverrides, EnvOverrides};
use chatgrid::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "chatgrid", about = "Terminal chat client")]
struct Args {
    /// Name to send messages as
    #[arg(short, long)]
    username: Option<String>,

    /// Extra room to open (repeatable)
    #[arg(short, long = "room")]
    rooms: Vec<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to chatgrid.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("chatgrid.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config error, using defaults: {}", e);
            eprintln!("Warning: {e}. Using defaults.");
            config::ChatgridConfig::default()
        }
    };

    let cli = CliOverrides {
        username: args.username,
        rooms: args.rooms,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);
    log::info!(
        "chatgrid starting up as {} with {} room(s)",
        resolved.username,
        resolved.rooms.len()
    );

    tui::run(resolved)
}
