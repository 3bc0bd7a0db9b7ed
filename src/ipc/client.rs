// Author: Dustin Pilgrim
// License: MIT

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::UnixStream,
    time::{Duration, timeout},
};

const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Sends one command and returns the daemon's reply.
///
/// `reply_timeout` of `None` waits as long as the daemon needs (saves block on
/// the webhook).
pub async fn send_raw(cmd: &str, reply_timeout: Option<Duration>) -> Result<String, String> {
    let path = crate::ipc::socket_path()?;

    if !path.exists() {
        return Err("daemon not running".to_string());
    }

    let mut stream = match timeout(IO_TIMEOUT, UnixStream::connect(&path)).await {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => return Err(format!("failed to connect to {}: {e}", path.display())),
        Err(_) => return Err("timeout connecting to daemon".to_string()),
    };

    timeout(IO_TIMEOUT, stream.write_all(cmd.as_bytes()))
        .await
        .map_err(|_| "timeout writing to daemon".to_string())?
        .map_err(|e| format!("write failed: {e}"))?;

    timeout(IO_TIMEOUT, stream.shutdown())
        .await
        .map_err(|_| "timeout finalizing request".to_string())?
        .map_err(|e| format!("shutdown failed: {e}"))?;

    let mut resp = Vec::new();
    let read = stream.read_to_end(&mut resp);

    match reply_timeout {
        Some(limit) => timeout(limit, read)
            .await
            .map_err(|_| "timeout reading response".to_string())?
            .map_err(|e| format!("read failed: {e}"))?,
        None => read.await.map_err(|e| format!("read failed: {e}"))?,
    };

    Ok(String::from_utf8_lossy(&resp).to_string())
}
