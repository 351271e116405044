use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "SERVER_ADDRESS";
pub const STORAGE_PATH_ENV: &str = "FILE_STORAGE_PATH";
pub const BASE_URL_ENV: &str = "BASE_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STORAGE_PATH: &str = "storage.txt";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    /// Address the HTTP server listens on.
    #[arg(short = 'a', long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Path to the durable log file.
    #[arg(short = 'f', long, env = STORAGE_PATH_ENV, default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: PathBuf,

    /// Base URL used when formatting shortened links.
    #[arg(short = 'b', long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
