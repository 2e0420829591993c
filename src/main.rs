use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use argh::FromArgs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eno_cursor::app::{run, AppState, RuntimeOptions};
use eno_cursor::events::EventBus;
use eno_cursor::model::DEFAULT_FPS;
use eno_cursor::platform::{native_host, Host, SimulatedHost, TracingSurfaceFactory};
use eno_cursor::storage::{default_config_path, ConfigStore};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Eno Cursor - cursor highlight circles on every display
#[derive(FromArgs)]
struct Cli {
    /// settings file (defaults to the platform config directory)
    #[argh(option)]
    config: Option<PathBuf>,

    /// frames per second of the tracking loop
    #[argh(option, default = "DEFAULT_FPS")]
    fps: u32,

    /// show the overlay right away
    #[argh(switch)]
    start: bool,

    /// use the simulated host instead of the native one
    #[argh(switch)]
    simulate: bool,

    /// print version information
    #[argh(switch)]
    version: bool,
}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    if cli.version {
        println!("eno-cursor {}", VERSION);
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("eno-cursor {} starting", VERSION);

    let path = match cli.config {
        Some(path) => path,
        None => default_config_path().context("cannot locate settings file")?,
    };
    let store = ConfigStore::open(path);

    let host: Box<dyn Host> = if cli.simulate {
        Box::new(SimulatedHost::dual_hd())
    } else {
        match native_host() {
            Ok(host) => host,
            Err(e) => {
                warn!("{}, falling back to the simulated host", e);
                Box::new(SimulatedHost::dual_hd())
            }
        }
    };

    let mut bus = EventBus::new();
    let factory = TracingSurfaceFactory::with_ready_signal(bus.publisher());
    let mut state = AppState::new(factory, store, cli.start);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;

    let options = RuntimeOptions {
        fps: cli.fps,
        read_stdin: true,
    };
    runtime.block_on(run(&mut state, &*host, &mut bus, options));

    // A pending stdin read cannot be cancelled
    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
