use anyhow::Result;

use tracery_engine::logging::{LoggingConfig, init_logging};
use tracery_engine::window::{Runtime, RuntimeConfig};

mod app;
mod scene;
mod shaders;

use app::WireframeApp;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}

fn run() -> Result<()> {
    let runtime = Runtime::new(RuntimeConfig::default())?;
    let app = WireframeApp::new(runtime.gl())?;
    runtime.run(app)
}
