//! Asynchronous line channel over a UCI child process.
//!
//! One reader task owns the child's stdout. Every trimmed, non-empty line is
//! first fanned out to the registered observers (passive telemetry sinks),
//! then matched against the waiter FIFO; the first waiter whose predicate
//! matches is resolved and removed. Waiters carry their own deadline, and an
//! optional request-id tag lets the supervisor mass-cancel leftovers after a
//! request ends.

use std::collections::{HashMap, VecDeque};
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::oneshot;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("engine timeout")]
    Timeout,

    #[error("engine error: {0}")]
    Engine(String),
}

pub type Observer = Box<dyn FnMut(&str) + Send>;
type Predicate = Box<dyn Fn(&str) -> bool + Send>;

struct Waiter {
    id: u64,
    predicate: Predicate,
    tx: oneshot::Sender<String>,
    request_id: Option<String>,
}

#[derive(Default)]
struct Shared {
    waiters: VecDeque<Waiter>,
    observers: HashMap<u64, Observer>,
    next_id: u64,
    closed: bool,
}

pub struct UciClient {
    name: &'static str,
    stdin: tokio::sync::Mutex<ChildStdin>,
    shared: Arc<Mutex<Shared>>,
    /// Keeps the child handle alive; `kill_on_drop` reaps it with the client.
    _child: Mutex<Child>,
}

impl UciClient {
    /// Spawn the engine process and start its reader task.
    pub fn spawn(name: &'static str, path: &str) -> std::io::Result<UciClient> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("child stdin not piped"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("child stdout not piped"))?;

        let shared = Arc::new(Mutex::new(Shared::default()));
        let reader_shared = Arc::clone(&shared);
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(engine = name, "<<< {}", line);
                let mut shared = reader_shared.lock().unwrap();
                for observer in shared.observers.values_mut() {
                    observer(line);
                }
                if let Some(at) = shared.waiters.iter().position(|w| (w.predicate)(line)) {
                    if let Some(waiter) = shared.waiters.remove(at) {
                        let _ = waiter.tx.send(line.to_string());
                    }
                }
            }
            // Stream closed: fail every pending waiter by dropping its sender.
            let mut shared = reader_shared.lock().unwrap();
            shared.closed = true;
            shared.waiters.clear();
        });

        Ok(UciClient {
            name,
            stdin: tokio::sync::Mutex::new(stdin),
            shared,
            _child: Mutex::new(child),
        })
    }

    /// Write one command line to the engine.
    pub async fn send(&self, line: &str) -> Result<(), ClientError> {
        debug!(engine = self.name, ">>> {}", line);
        let mut stdin = self.stdin.lock().await;
        let io = async {
            stdin.write_all(line.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
            stdin.flush().await
        };
        io.await
            .map_err(|e| ClientError::Engine(format!("write to {}: {}", self.name, e)))
    }

    /// Wait for the first line matching `predicate`, up to `timeout`.
    ///
    /// On expiry the waiter is removed and `ClientError::Timeout` returned; a
    /// closed stream fails immediately with an engine error.
    pub async fn wait_for<F>(
        &self,
        predicate: F,
        timeout: Duration,
        request_id: Option<String>,
    ) -> Result<String, ClientError>
    where
        F: Fn(&str) -> bool + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let waiter_id = {
            let mut shared = self.shared.lock().unwrap();
            if shared.closed {
                return Err(ClientError::Engine(format!("{} stream closed", self.name)));
            }
            shared.next_id += 1;
            let id = shared.next_id;
            shared.waiters.push_back(Waiter {
                id,
                predicate: Box::new(predicate),
                tx,
                request_id,
            });
            id
        };

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(line)) => Ok(line),
            Ok(Err(_)) => Err(ClientError::Engine(format!("{} stream closed", self.name))),
            Err(_) => {
                self.shared
                    .lock()
                    .unwrap()
                    .waiters
                    .retain(|w| w.id != waiter_id);
                Err(ClientError::Timeout)
            }
        }
    }

    /// Register a fan-out callback for every incoming line.
    pub fn add_observer(&self, observer: Observer) -> u64 {
        let mut shared = self.shared.lock().unwrap();
        shared.next_id += 1;
        let id = shared.next_id;
        shared.observers.insert(id, observer);
        id
    }

    pub fn remove_observer(&self, id: u64) {
        self.shared.lock().unwrap().observers.remove(&id);
    }

    /// Drop every waiter tagged with `request_id`.
    pub fn cancel_request(&self, request_id: &str) {
        self.shared
            .lock()
            .unwrap()
            .waiters
            .retain(|w| w.request_id.as_deref() != Some(request_id));
    }
}
