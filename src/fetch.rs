//! Background tasks for list loading and deletion.
//!
//! Fetches run off the UI loop and report completion over the event channel.
//! Each issued fetch carries a generation number; the event loop drops results
//! whose generation no longer matches, so the last issued fetch wins. The
//! in-flight task is aborted when the loader (and with it the app) is torn
//! down, so a late response never touches dead state.

use crate::api_client::ApiClient;
use crate::events::TuiEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct ListLoader {
    generation: u64,
    current: Option<AbortOnDrop>,
}

impl ListLoader {
    pub fn new() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a fetch. Any previous in-flight fetch is aborted.
    pub fn spawn(&mut self, api: ApiClient, sender: mpsc::Sender<TuiEvent>) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            let result = api
                .fetch_discover_list()
                .await
                .map_err(|err| err.to_string());
            let _ = sender.send(TuiEvent::ListLoaded { generation, result }).await;
        });
        self.current = Some(AbortOnDrop(handle));
        generation
    }
}

impl Default for ListLoader {
    fn default() -> Self {
        Self::new()
    }
}

struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Fire a delete request; completion is reported over the channel.
pub fn spawn_delete(api: ApiClient, id: String, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let result = api.delete_post(&id).await.map_err(|err| err.to_string());
        let _ = sender.send(TuiEvent::DeleteFinished { id, result }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, TuiConfig};
    use crate::types::PostRecord;

    fn api() -> ApiClient {
        // Port 9 (discard) is never listened on; requests fail fast.
        ApiClient::new(&TuiConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 200,
            tick_interval_ms: 100,
            default_page_size: 10,
            auth: AuthConfig::default(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn generation_increments_per_spawn() {
        let mut loader = ListLoader::new();
        let (tx, _rx) = mpsc::channel(8);
        let first = loader.spawn(api(), tx.clone());
        let second = loader.spawn(api(), tx);
        assert_eq!(first + 1, second);
        assert_eq!(loader.generation(), second);
    }

    #[tokio::test]
    async fn failed_fetch_reports_over_channel() {
        let mut loader = ListLoader::new();
        let (tx, mut rx) = mpsc::channel(8);
        let generation = loader.spawn(api(), tx);
        match rx.recv().await {
            Some(TuiEvent::ListLoaded {
                generation: got,
                result,
            }) => {
                assert_eq!(got, generation);
                assert!(result.is_err());
            }
            other => panic!("unexpected event: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn stale_generation_detectable() {
        let mut loader = ListLoader::new();
        let (tx, mut rx) = mpsc::channel(8);
        loader.spawn(api(), tx.clone());
        let latest = loader.spawn(api(), tx);
        // Whatever arrives first, only events matching the latest generation count.
        while let Some(event) = rx.recv().await {
            if let TuiEvent::ListLoaded { generation, .. } = event {
                if generation == latest {
                    return;
                }
                assert!(generation < latest);
            }
        }
    }

    #[test]
    fn loaded_event_carries_records() {
        let event = TuiEvent::ListLoaded {
            generation: 1,
            result: Ok(vec![PostRecord::default()]),
        };
        match event {
            TuiEvent::ListLoaded { result, .. } => assert_eq!(result.unwrap().len(), 1),
            _ => unreachable!(),
        }
    }
}
