//! Serve command
//!
//! Usage: mixtape serve [--dir <DIR>] [--port <PORT>]

use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Directory whose files are served under /data
    #[arg(long, default_value = "data")]
    pub dir: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
}

/// Execute serve command; runs until interrupted
pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.dir.is_dir() {
        return Err(format!("{} is not a directory", args.dir.display()).into());
    }

    let addr = SocketAddr::new(args.host, args.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(mixtape_ingest::serve::serve(&args.dir, addr))?;
    Ok(())
}
