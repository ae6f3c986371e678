//! Chat and submission calls run off the UI thread.
//!
//! Each call gets a worker thread and a channel; the app polls the receiving
//! end once per frame, before rendering.

use anyhow::anyhow;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::models::intake::{IntakeRequest, Message};
use crate::services::chat::ChatBackend;
use crate::services::error::IntakeError;
use crate::services::submission::RequestSubmitter;

#[derive(Default)]
pub struct BackgroundTasks {
    chat_rx: Option<Receiver<anyhow::Result<String>>>,
    submission_rx: Option<Receiver<Result<(), IntakeError>>>,
}

impl BackgroundTasks {
    pub fn spawn_chat(&mut self, ctx: &egui::Context, backend: Arc<dyn ChatBackend>, history: Vec<Message>) {
        let (tx, rx) = mpsc::channel();
        self.chat_rx = Some(rx);

        let ctx = ctx.clone();
        thread::spawn(move || {
            let _ = tx.send(backend.reply(&history));
            ctx.request_repaint();
        });
    }

    pub fn spawn_submission(
        &mut self,
        ctx: &egui::Context,
        submitter: Arc<dyn RequestSubmitter>,
        request: IntakeRequest,
    ) {
        let (tx, rx) = mpsc::channel();
        self.submission_rx = Some(rx);

        let ctx = ctx.clone();
        thread::spawn(move || {
            let _ = tx.send(submitter.submit(&request));
            ctx.request_repaint();
        });
    }

    /// The chat reply, once the worker has one.
    pub fn poll_chat(&mut self) -> Option<anyhow::Result<String>> {
        let result = match self.chat_rx.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(anyhow!("Chat worker stopped without a reply")),
        };
        self.chat_rx = None;
        Some(result)
    }

    /// The delivery outcome, once the worker has one.
    pub fn poll_submission(&mut self) -> Option<Result<(), IntakeError>> {
        let result = match self.submission_rx.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(IntakeError::Transport(
                "submission worker stopped without a result".to_string(),
            )),
        };
        self.submission_rx = None;
        Some(result)
    }

    /// Forget in-flight work; late results are dropped with the receivers.
    pub fn cancel(&mut self) {
        self.chat_rx = None;
        self.submission_rx = None;
    }
}
