//! Line Loader Module
//!
//! Reads input in a background thread so the UI never blocks on a slow file
//! or pipe. Lines are sent over a channel in batches and drained by `poll`.
//! In follow mode the thread keeps reading past EOF, like `tail -f`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;
use std::time::Duration;

use crate::error::ViewerError;

/// How often a followed file is checked for appended data
const FOLLOW_INTERVAL: Duration = Duration::from_millis(250);

/// Upper bound on lines per channel message
const BATCH_SIZE: usize = 1024;

/// Represents the current state of line loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    /// Reached EOF at least once and waiting for more data
    Following,
    Complete,
    Error(ViewerError),
}

/// Messages from the reader thread
#[derive(Debug)]
enum LoaderEvent {
    Lines(Vec<String>),
    /// First EOF of a followed file
    CaughtUp,
    Finished,
    Failed(ViewerError),
}

/// Manages line loading in a background thread
pub struct LineLoader {
    state: LoadingState,
    rx: Option<Receiver<LoaderEvent>>,
}

impl LineLoader {
    /// Spawn a background thread reading lines from a file
    ///
    /// With `follow`, the thread never finishes on its own: after EOF it
    /// sleeps and retries so appended lines keep arriving.
    pub fn spawn_file(path: PathBuf, follow: bool) -> Self {
        Self::spawn_file_with_interval(path, follow.then_some(FOLLOW_INTERVAL))
    }

    /// Spawn a background thread reading lines from stdin until EOF
    pub fn spawn_stdin() -> Self {
        Self::spawn_reader(std::io::stdin())
    }

    /// Spawn a background thread reading lines from any reader until EOF
    pub fn spawn_reader<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = stream_lines(BufReader::new(reader), &tx, None);
            finish(&tx, result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    fn spawn_file_with_interval(path: PathBuf, follow: Option<Duration>) -> Self {
        let (tx, rx) = channel();

        thread::spawn(move || {
            #[cfg(debug_assertions)]
            log::debug!("Loading {:?} (follow: {})", path, follow.is_some());

            let result = File::open(&path)
                .map_err(ViewerError::from)
                .and_then(|file| stream_lines(BufReader::new(file), &tx, follow));
            finish(&tx, result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Drain every line received so far (non-blocking)
    ///
    /// State moves to `Complete` or `Error` once the reader thread is done;
    /// after that the channel is dropped and this always returns no lines.
    pub fn poll(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        let Some(rx) = self.rx.as_ref() else {
            return lines;
        };

        let mut finished = None;
        loop {
            match rx.try_recv() {
                Ok(LoaderEvent::Lines(batch)) => lines.extend(batch),
                Ok(LoaderEvent::CaughtUp) => self.state = LoadingState::Following,
                Ok(LoaderEvent::Finished) => {
                    finished = Some(LoadingState::Complete);
                    break;
                }
                Ok(LoaderEvent::Failed(err)) => {
                    finished = Some(LoadingState::Error(err));
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = Some(LoadingState::Error(ViewerError::LoaderDisconnected));
                    break;
                }
            }
        }

        if let Some(state) = finished {
            #[cfg(debug_assertions)]
            log::debug!("Line loader finished: {:?}", state);
            self.rx = None;
            self.state = state;
        }
        lines
    }

    /// Get the current loading state
    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Check if the reader thread is still running
    pub fn is_loading(&self) -> bool {
        self.rx.is_some()
    }
}

/// Read lines until EOF (or forever when following), sending them in batches
///
/// A batch is flushed whenever the reader has no more buffered data, so lines
/// from a slow pipe show up as soon as they are complete.
fn stream_lines<R: Read>(
    mut reader: BufReader<R>,
    tx: &Sender<LoaderEvent>,
    follow: Option<Duration>,
) -> Result<(), ViewerError> {
    let mut pending = Vec::new();
    let mut batch = Vec::new();
    let mut caught_up = false;

    loop {
        let read = reader.read_until(b'\n', &mut pending)?;

        if read == 0 {
            if !batch.is_empty() && !send(tx, std::mem::take(&mut batch)) {
                return Ok(());
            }
            match follow {
                Some(interval) => {
                    if !caught_up {
                        caught_up = true;
                        if tx.send(LoaderEvent::CaughtUp).is_err() {
                            return Ok(());
                        }
                    }
                    thread::sleep(interval);
                    continue;
                }
                None => {
                    if !pending.is_empty() {
                        send(tx, vec![decode(&pending)]);
                    }
                    return Ok(());
                }
            }
        }

        if pending.ends_with(b"\n") {
            batch.push(decode(&pending));
            pending.clear();
        }

        if (batch.len() >= BATCH_SIZE || reader.buffer().is_empty())
            && !batch.is_empty()
            && !send(tx, std::mem::take(&mut batch))
        {
            return Ok(());
        }
    }
}

/// Line without its terminator; invalid UTF-8 is replaced rather than rejected
fn decode(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Returns false once the receiving side is gone
fn send(tx: &Sender<LoaderEvent>, lines: Vec<String>) -> bool {
    tx.send(LoaderEvent::Lines(lines)).is_ok()
}

fn finish(tx: &Sender<LoaderEvent>, result: Result<(), ViewerError>) {
    let event = match result {
        Ok(()) => LoaderEvent::Finished,
        Err(err) => {
            #[cfg(debug_assertions)]
            log::error!("Line loader failed: {}", err);
            LoaderEvent::Failed(err)
        }
    };
    let _ = tx.send(event);
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
