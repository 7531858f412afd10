// Background viewer task - owns no trie state, renders snapshots on request

use crate::render::{self, TreeSnapshot};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Viewer task is not running")]
    Closed,
}

/// Requests accepted by the viewer task
#[derive(Debug)]
pub enum ViewerRequest {
    /// Render this snapshot now
    Show(TreeSnapshot),
}

/// Handle to a running viewer task
///
/// The menu loop keeps the trie; the viewer only ever sees owned snapshots,
/// so no locking is needed around the trie itself.
pub struct ViewerHandle {
    sender: mpsc::Sender<ViewerRequest>,
    task: JoinHandle<()>,
}

impl ViewerHandle {
    /// Spawn the viewer task and wait for its ready signal
    pub async fn spawn() -> Result<Self, ViewerError> {
        let (ready_tx, ready_rx) = oneshot::channel();
        let (sender, receiver) = mpsc::channel(8);
        let task = tokio::spawn(run_viewer(ready_tx, receiver));

        // Block only until the one-shot ready signal fires
        ready_rx.await.map_err(|_| ViewerError::Closed)?;
        Ok(Self { sender, task })
    }

    /// Ask the viewer to render a snapshot
    pub async fn show(&self, snapshot: TreeSnapshot) -> Result<(), ViewerError> {
        self.sender
            .send(ViewerRequest::Show(snapshot))
            .await
            .map_err(|_| ViewerError::Closed)
    }

    /// Close the request channel and wait for the task to finish
    pub async fn shutdown(self) {
        drop(self.sender);
        let _ = self.task.await;
    }
}

async fn run_viewer(ready: oneshot::Sender<()>, mut requests: mpsc::Receiver<ViewerRequest>) {
    tracing::debug!("viewer task started");
    let _ = ready.send(());

    while let Some(request) = requests.recv().await {
        match request {
            ViewerRequest::Show(snapshot) => {
                tracing::debug!(height = snapshot.height(), "rendering tree");
                println!("\n=== Morse tree (height {}) ===", snapshot.height());
                println!("{}", render::draw(&snapshot));
            }
        }
    }

    tracing::debug!("viewer task stopped");
}
