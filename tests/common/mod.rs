#![allow(dead_code)]

use async_trait::async_trait;
use chef_ai::providers::{LlmProvider, ProviderError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the stub answers with
pub enum Reply {
    Completion(String),
    ApiError(i64, String),
    Panic(String),
}

/// In-process provider that records every prompt it receives
pub struct StubProvider {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(StubProvider {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn completing(text: &str) -> Arc<Self> {
        Self::new(Reply::Completion(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Reply::Completion(text) => Ok(text.clone()),
            Reply::ApiError(code, message) => Err(ProviderError::Api {
                code: *code,
                message: message.clone(),
            }),
            Reply::Panic(message) => panic!("{}", message),
        }
    }
}

pub const RECIPE_JSON: &str = r#"{
  "title": "Egg Fried Rice",
  "description": "A savory one-pan classic.",
  "prepTimeActual": "Approx. 20 minutes",
  "servingsActual": 2,
  "ingredientsList": [
    {"item": "Cooked rice", "quantity": "2 cups"},
    {"item": "Egg", "quantity": "2 large"},
    {"item": "Onion", "quantity": "1 small"}
  ],
  "instructions": [
    "Step 1: Dice the onion.",
    "Step 2: Scramble the eggs.",
    "Step 3: Fry the rice with onion and egg."
  ],
  "nutrition": {
    "calories": "Approx. 420 kcal per serving",
    "protein": "Approx. 14 g per serving",
    "carbs": "Approx. 60 g per serving",
    "fat": "Approx. 12 g per serving"
  }
}"#;
