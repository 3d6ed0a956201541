use devserve::server::{start_signal_handler, SignalHandler};
use devserve::{logger, Config, Server, ServerState};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let root = cfg.root_dir()?;
    let state = Arc::new(ServerState::new(&cfg, root));

    // A bind failure is fatal: the error propagates out of main with its
    // diagnostic, nothing is retried.
    let server = Server::bind(addr, Arc::clone(&state))?;

    let signals = SignalHandler::new();
    start_signal_handler(&signals);

    logger::log_server_start(&server.local_addr()?, &state.root);

    server.serve(Arc::clone(&signals.shutdown)).await?;

    logger::log_server_stop();
    Ok(())
}
