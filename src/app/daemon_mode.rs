// Author: Dustin Pilgrim
// License: MIT

use std::io;

use tokio::sync::{mpsc, watch};

use crate::cli::Args;
use crate::config::ConfigSource;
use crate::core::manager_msg::ManagerMsg;
use crate::daemon::Daemon;
use crate::{serror, sinfo};

use super::AnyError;

pub async fn run(args: Args) -> Result<(), AnyError> {
    crate::log::init(args.verbose, !args.no_console);

    // socket doubles as the single-instance lock
    let socket_path = crate::ipc::socket_path()
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let listener = crate::ipc::server::bind_socket(&socket_path).map_err(|e| {
        eprintln!("studytimer: {e}");
        io::Error::new(io::ErrorKind::AlreadyExists, e)
    })?;

    // file logging
    let log_path = crate::log::default_log_path();
    if let Err(e) = crate::log::enable_file_output(&log_path, crate::log::LogPolicy::default()) {
        serror!("Studytimer", "failed to enable file logging: {}", e);
    } else {
        sinfo!("Studytimer", "file logging enabled: {}", log_path.display());
    }

    sinfo!("Studytimer", "studytimer starting");

    let loaded = crate::config::load(args.config.as_deref()).map_err(|e| -> AnyError {
        serror!("Config", "{:#}", e);
        format!("{e:#}").into()
    })?;

    match &loaded.source {
        ConfigSource::File(path) => sinfo!("Config", "loaded config from {}", path.display()),
        ConfigSource::BuiltIn => sinfo!("Config", "no config file found; using built-in defaults"),
    }

    let (tx, rx) = mpsc::channel::<ManagerMsg>(256);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    crate::ipc::server::spawn_ipc_server(listener, socket_path.clone(), tx.clone());
    sinfo!("Ipc", "listening on {}", socket_path.display());

    let mut daemon = Daemon::new(&loaded.cfg);

    let mut daemon_task = tokio::spawn(async move { daemon.run(tx, rx, shutdown_rx).await });

    let res = tokio::select! {
        res = &mut daemon_task => res,

        _ = tokio::signal::ctrl_c() => {
            sinfo!("Studytimer", "received Ctrl+C, shutting down");
            let _ = shutdown_tx.send(true);
            daemon_task.await
        }
    };

    let _ = std::fs::remove_file(&socket_path);

    match res {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(join_err) => Err(Box::new(join_err)),
    }
}
