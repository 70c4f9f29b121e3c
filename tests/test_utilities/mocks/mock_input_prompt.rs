use audit_report::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock InputPrompt answering from a script
#[derive(Default, Clone)]
pub struct MockInputPrompt {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl MockInputPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers.iter().map(|a| a.to_string()).collect(),
            )),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl InputPrompt for MockInputPrompt {
    fn ask(&self, message: &str) -> Result<String> {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No more scripted answers"))
    }
}
