//! Usage: Periodic `time` broadcast to the frontend.
//!
//! The first tick fires immediately; later ticks follow `TickerOptions::period`.
//! Late ticks are delayed rather than bunched up, so a slow emit shifts every
//! following tick instead of triggering a catch-up burst.

use super::options::TickerOptions;
use crate::shared::time;
use tauri::{AppHandle, Emitter, Runtime};
use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;

/// Destination for ticker payloads.
pub(crate) trait TimeSink: Send + Sync + 'static {
    fn publish(&self, event: &str, payload: String) -> Result<(), String>;
}

impl<R: Runtime> TimeSink for AppHandle<R> {
    fn publish(&self, event: &str, payload: String) -> Result<(), String> {
        self.emit(event, payload).map_err(|e| format!("TIME_EMIT: {e}"))
    }
}

/// Stops the ticker task when `stop` is called or when dropped.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown: oneshot::Sender<()>,
}

impl TickerHandle {
    pub fn stop(self) {
        let _ = self.shutdown.send(());
    }
}

pub(crate) fn shutdown_pair() -> (TickerHandle, oneshot::Receiver<()>) {
    let (shutdown, rx) = oneshot::channel();
    (TickerHandle { shutdown }, rx)
}

/// Spawn the ticker on tauri's async runtime.
pub(crate) fn start<R: Runtime>(app: &AppHandle<R>, options: TickerOptions) -> TickerHandle {
    let (handle, shutdown) = shutdown_pair();
    tauri::async_runtime::spawn(run(app.clone(), options, shutdown));
    handle
}

pub(crate) async fn run<S: TimeSink>(
    sink: S,
    options: TickerOptions,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut interval = tokio::time::interval(options.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(
        event = options.event,
        period_ms = options.period.as_millis() as u64,
        "ticker started"
    );

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                let now = time::now_rfc1123(options.zone);
                if let Err(err) = sink.publish(options.event, now) {
                    tracing::warn!(event = options.event, "时间事件推送失败: {}", err);
                }
            }
        }
    }

    tracing::debug!(event = options.event, "ticker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::time::ClockZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const OPTIONS: TickerOptions = TickerOptions {
        event: "time",
        period: Duration::from_secs(1),
        zone: ClockZone::Utc,
    };

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<(String, String)>>>);

    impl RecordingSink {
        fn events(&self) -> Vec<(String, String)> {
            self.0.lock().unwrap().clone()
        }
    }

    impl TimeSink for RecordingSink {
        fn publish(&self, event: &str, payload: String) -> Result<(), String> {
            self.0.lock().unwrap().push((event.to_string(), payload));
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FailingSink(Arc<AtomicUsize>);

    impl TimeSink for FailingSink {
        fn publish(&self, _event: &str, _payload: String) -> Result<(), String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err("webview gone".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn emits_once_per_period_starting_immediately() {
        let sink = RecordingSink::default();
        let (handle, shutdown) = shutdown_pair();
        let task = tokio::spawn(run(sink.clone(), OPTIONS, shutdown));

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        handle.stop();
        task.await.unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 4);
        for (event, payload) in &events {
            assert_eq!(event, "time");
            assert!(payload.ends_with(" GMT"), "unexpected payload {payload:?}");
            assert!(chrono::DateTime::parse_from_rfc2822(payload).is_ok());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_task() {
        let sink = RecordingSink::default();
        let (handle, shutdown) = shutdown_pair();
        let task = tokio::spawn(run(sink.clone(), OPTIONS, shutdown));

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        handle.stop();
        task.await.unwrap();
        let emitted = sink.events().len();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.events().len(), emitted);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let (handle, shutdown) = shutdown_pair();
        let task = tokio::spawn(run(RecordingSink::default(), OPTIONS, shutdown));

        drop(handle);
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("ticker should exit once its handle is gone")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn publish_errors_do_not_stop_the_ticker() {
        let sink = FailingSink::default();
        let (handle, shutdown) = shutdown_pair();
        let task = tokio::spawn(run(sink.clone(), OPTIONS, shutdown));

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        handle.stop();
        task.await.unwrap();

        assert_eq!(sink.0.load(Ordering::SeqCst), 3);
    }
}
