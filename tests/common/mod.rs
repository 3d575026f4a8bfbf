// scripted provider so tests never hit the network

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use xfilter::{Classifier, Error, FailPolicy, Prompt, TextClassifierProvider};

pub enum Reply {
    Text(&'static str),
    Empty,
    ContentFilter,
    Fail,
}

pub struct Scripted {
    reply: Reply,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<(Prompt, u32)>>,
}

impl Scripted {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextClassifierProvider for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn invoke(&self, prompt: &Prompt, max_tokens: u32) -> Result<Option<String>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((prompt.clone(), max_tokens));

        match self.reply {
            Reply::Text(t) => Ok(Some(t.to_string())),
            Reply::Empty => Ok(None),
            Reply::ContentFilter => Err(Error::ContentFiltered("hate".to_string())),
            Reply::Fail => Err(Error::Provider {
                provider: "scripted",
                status: 500,
                message: "boom".to_string(),
            }),
        }
    }
}

pub fn classifier(provider: Arc<Scripted>, policy: FailPolicy) -> Classifier {
    Classifier::new(provider, policy)
}

pub fn tweets(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
