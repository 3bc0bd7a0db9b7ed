// Author: Dustin Pilgrim
// License: MIT

use crate::core::events::Event;
use crate::core::manager_msg::ManagerMsg;
use crate::sdebug;

use tokio::sync::mpsc::Sender;
use tokio::time::{Duration, sleep};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Sends one `Tick` per second for run `epoch`. Missed ticks are not made up.
pub async fn run_ticker(tx: Sender<ManagerMsg>, epoch: u64) {
    sdebug!("Ticker", "ticker started (run {})", epoch);

    loop {
        sleep(TICK_PERIOD).await;

        // If the daemon is gone, stop.
        if tx.send(ManagerMsg::Event(Event::Tick { epoch })).await.is_err() {
            sdebug!("Ticker", "ticker stopping (receiver dropped)");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second_with_epoch() {
        let (tx, mut rx) = mpsc::channel(8);
        let started = Instant::now();
        let handle = tokio::spawn(run_ticker(tx, 7));

        for _ in 0..3 {
            match rx.recv().await {
                Some(ManagerMsg::Event(Event::Tick { epoch })) => assert_eq!(epoch, 7),
                other => panic!("unexpected message: {other:?}"),
            }
        }

        let waited = started.elapsed();
        assert!(waited >= Duration::from_secs(3));
        assert!(waited < Duration::from_secs(4));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Returns after the first failed send instead of looping forever.
        run_ticker(tx, 1).await;
    }
}
