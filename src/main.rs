use std::io;

use anyhow::Result;
use log::{error, info};

use ytupload::auth;
use ytupload::config::UPLOAD_SCOPE;
use ytupload::{AuthConfig, Cli, UploadConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = inner_main() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn inner_main() -> Result<()> {
    let cli = Cli::parse_normalized(std::env::args_os());

    // Validated before any client exists or file is touched.
    let cfg = UploadConfig::from_cli(&cli)?;

    let client = auth::authorized_client(UPLOAD_SCOPE, &AuthConfig::from_cli(&cli))?;
    info!("authorized against {}", client.base_url());

    let mut out = io::stdout().lock();
    ytupload::run(&cfg, &client, &mut out)?;

    Ok(())
}
