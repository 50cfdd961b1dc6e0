use std::net::SocketAddr;

use clap::Parser;

/// Storage backend serving all requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Process-local guarded map, lost on restart.
    Memory,
    /// Single-file sqlite database.
    Sqlite,
}

/// Runtime parameters for the todod daemon.
#[derive(Debug, Parser)]
#[command(name = "todod", about = "Todo record-keeping HTTP service")]
pub struct Params {
    /// Address the HTTP server binds to.
    #[arg(long, env = "TODOD_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Storage backend.
    #[arg(long, value_enum, env = "TODOD_BACKEND", default_value = "memory")]
    pub backend: Backend,

    /// Sqlite database location, used with `--backend sqlite`.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://db.sqlite3")]
    pub database_url: String,
}
