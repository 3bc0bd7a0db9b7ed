// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::path::{Path, PathBuf};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{UnixListener, UnixStream},
    sync::mpsc,
    time::{Duration, timeout},
};

use crate::core::manager_msg::ManagerMsg;
use crate::{sdebug, serror, swarn};

use super::router::route_command;

const MAX_REQUEST_BYTES: u64 = 4096;
const TOO_LARGE: &str = "ERROR: request too large";
const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Binds the daemon socket. The socket doubles as the single-instance lock:
/// a connectable socket means another daemon owns it, a dead one is replaced.
pub fn bind_socket(path: &Path) -> Result<UnixListener, String> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match UnixListener::bind(path) {
        Ok(l) => Ok(l),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            match std::os::unix::net::UnixStream::connect(path) {
                Ok(_) => Err(format!(
                    "studytimer is already running (another instance holds {})",
                    path.display()
                )),
                Err(_) => {
                    let _ = std::fs::remove_file(path);
                    UnixListener::bind(path)
                        .map_err(|e| format!("failed to bind {}: {e}", path.display()))
                }
            }
        }
        Err(e) => Err(format!("failed to bind {}: {e}", path.display())),
    }
}

/// Accepts connections until the daemon channel closes. Each connection is
/// one request and one response.
pub fn spawn_ipc_server(listener: UnixListener, path: PathBuf, tx: mpsc::Sender<ManagerMsg>) {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tx.closed() => break,

                accepted = listener.accept() => match accepted {
                    Ok((mut stream, _addr)) => {
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(&mut stream, &tx).await {
                                serror!("Ipc", "Error handling IPC connection: {}", e);
                            }
                            let _ = stream.shutdown().await;
                        });
                    }
                    Err(e) => serror!("Ipc", "Failed to accept IPC connection: {}", e),
                },
            }
        }

        let _ = std::fs::remove_file(&path);
        sdebug!("Ipc", "socket server stopped");
    });
}

async fn handle_connection(
    stream: &mut UnixStream,
    tx: &mpsc::Sender<ManagerMsg>,
) -> io::Result<()> {
    let mut buf = Vec::new();

    // One byte past the limit tells an oversized request from one that fits.
    timeout(READ_TIMEOUT, (&mut *stream).take(MAX_REQUEST_BYTES + 1).read_to_end(&mut buf))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "timed out reading request"))??;

    if buf.is_empty() {
        return Ok(());
    }

    let response = if buf.len() as u64 > MAX_REQUEST_BYTES {
        swarn!("Ipc", "rejected IPC request over {} bytes", MAX_REQUEST_BYTES);
        TOO_LARGE.to_string()
    } else {
        let cmd = String::from_utf8_lossy(&buf).trim().to_string();

        // No overall deadline: a save waits for the webhook for as long as it takes.
        route_command(&cmd, tx).await
    };

    stream.write_all(response.as_bytes()).await?;
    stream.flush().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socket_in_temp(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("studytimer-ipc-{}-{}", name, std::process::id()))
            .join("studytimer.sock")
    }

    async fn exchange(request: Vec<u8>, tx: mpsc::Sender<ManagerMsg>) -> String {
        let (mut client, mut server) = UnixStream::pair().unwrap();

        let handler = tokio::spawn(async move {
            handle_connection(&mut server, &tx).await.unwrap();
        });

        client.write_all(&request).await.unwrap();
        client.shutdown().await.unwrap();

        let mut resp = String::new();
        client.read_to_string(&mut resp).await.unwrap();
        handler.await.unwrap();
        resp
    }

    #[tokio::test]
    async fn request_is_routed_and_answered() {
        let (tx, mut rx) = mpsc::channel(1);

        let daemon = tokio::spawn(async move {
            match rx.recv().await {
                Some(ManagerMsg::Request { reply, .. }) => {
                    let _ = reply.send(Ok("Timer started".into()));
                }
                other => panic!("unexpected message: {other:?}"),
            }
        });

        assert_eq!(exchange(b"start\n".to_vec(), tx).await, "Timer started");
        daemon.await.unwrap();
    }

    #[tokio::test]
    async fn oversized_request_is_refused_without_routing() {
        let (tx, mut rx) = mpsc::channel(1);

        let mut request = b"add ".to_vec();
        request.resize(MAX_REQUEST_BYTES as usize + 1, b'1');

        assert_eq!(exchange(request, tx).await, TOO_LARGE);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn request_at_the_limit_is_still_routed() {
        let (tx, mut rx) = mpsc::channel(1);

        let daemon = tokio::spawn(async move {
            match rx.recv().await {
                Some(ManagerMsg::Request { event, reply }) => {
                    let _ = reply.send(Ok(format!("{event:?}")));
                }
                other => panic!("unexpected message: {other:?}"),
            }
        });

        let mut request = b"link ".to_vec();
        request.resize(MAX_REQUEST_BYTES as usize, b'x');

        let resp = exchange(request, tx).await;
        daemon.await.unwrap();
        assert!(resp.starts_with("SubmitLessonLink"), "{resp}");
        assert_eq!(resp.matches('x').count(), MAX_REQUEST_BYTES as usize - 5);
    }

    #[tokio::test]
    async fn empty_request_gets_no_reply() {
        let (tx, mut rx) = mpsc::channel(1);
        assert_eq!(exchange(Vec::new(), tx).await, "");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_socket_is_replaced() {
        let path = socket_in_temp("stale");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        // A socket file nobody listens on, as left behind by a crashed daemon.
        drop(bind_socket(&path).unwrap());
        assert!(path.exists());

        let listener = bind_socket(&path).unwrap();
        let accept = tokio::spawn(async move { listener.accept().await.map(|_| ()) });
        UnixStream::connect(&path).await.unwrap();
        accept.await.unwrap().unwrap();

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn live_socket_refuses_a_second_instance() {
        let path = socket_in_temp("live");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let _first = bind_socket(&path).unwrap();
        let err = bind_socket(&path).unwrap_err();
        assert!(err.contains("already running"), "{err}");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
