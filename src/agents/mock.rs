use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::agents::{CompletionError, CompletionRequest, CompletionService};

/// Scripted completion backend that records every request.
/// Once the script runs out it echoes the prompt back.
#[derive(Default)]
pub(crate) struct MockCompletion {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.script.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(CompletionError(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let next = self.script.lock().unwrap().pop_front();
        let echo = request.prompt.clone();
        self.calls.lock().unwrap().push(request);
        next.unwrap_or(Ok(echo))
    }
}
