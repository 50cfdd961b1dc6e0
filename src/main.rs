use clap::Parser;
use log::info;

use todod::params::{Backend, Params};
use todod::repo::{
    MemoryTodoEntryMapper, MemoryTodoLabelMapper, SqliteTodoEntryMapper, SqliteTodoLabelMapper,
    TodoEntryRepository, TodoLabelRepository,
};
use todod::server::{self, AppState};
use todod::store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let params = Params::parse();

    let listener = tokio::net::TcpListener::bind(params.listen).await?;
    info!("todod listening on {}", params.listen);

    match params.backend {
        Backend::Memory => {
            info!("using in-memory storage (state is lost on restart)");

            // Seeded with the demo entry `id:1` so the service answers
            // something out of the box.
            let store = store::MemoryStore::with_demo_entry();
            let state = AppState::new(
                TodoEntryRepository::new(MemoryTodoEntryMapper::new(store.clone())),
                TodoLabelRepository::new(MemoryTodoLabelMapper::new(store)),
            );

            axum::serve(listener, server::router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Backend::Sqlite => {
            let pool = store::connect(&params.database_url).await?;
            let state = AppState::new(
                TodoEntryRepository::new(SqliteTodoEntryMapper::new(pool.clone())),
                TodoLabelRepository::new(SqliteTodoLabelMapper::new(pool)),
            );

            axum::serve(listener, server::router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    info!("todod stopped");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
