#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::oneshot;

use pushkind_listview::domain::lead::Lead;
use pushkind_listview::domain::query::QueryState;
use pushkind_listview::domain::response::ResponseEnvelope;
use pushkind_listview::domain::types::RowId;
use pushkind_listview::repository::errors::FetchResult;
use pushkind_listview::repository::{FetchError, FetchFuture, ListReader};

pub type LeadPage = FetchResult<ResponseEnvelope<Lead>>;

#[derive(Default)]
struct Script {
    pending: VecDeque<oneshot::Receiver<LeadPage>>,
    requests: Vec<String>,
}

/// Reader whose responses are resolved by the test, in any order.
#[derive(Clone, Default)]
pub struct ScriptedReader {
    script: Rc<RefCell<Script>>,
}

impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response of the next fetch; it resolves once the returned
    /// sender is used.
    pub fn defer(&self) -> oneshot::Sender<LeadPage> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().pending.push_back(rx);
        tx
    }

    /// Queues an already resolved response.
    pub fn ready(&self, page: LeadPage) {
        let _ = self.defer().send(page);
    }

    /// Request keys of every fetch issued so far.
    pub fn requests(&self) -> Vec<String> {
        self.script.borrow().requests.clone()
    }

    /// Yields to other local tasks until `count` fetches were issued.
    pub async fn wait_for_requests(&self, count: usize) {
        while self.script.borrow().requests.len() < count {
            tokio::task::yield_now().await;
        }
    }
}

impl ListReader<Lead> for ScriptedReader {
    fn fetch(&self, state: &QueryState) -> FetchFuture<Lead> {
        let mut script = self.script.borrow_mut();
        script.requests.push(state.to_string());

        match script.pending.pop_front() {
            Some(rx) => Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::Transport("response dropped".into())))
            }),
            None => Box::pin(async { Err(FetchError::Transport("no scripted response".into())) }),
        }
    }
}

pub fn ids(raw: &[i64]) -> Vec<RowId> {
    raw.iter().map(|&id| RowId::new(id).unwrap()).collect()
}

pub fn lead(id: i64) -> Lead {
    Lead {
        id: Some(RowId::new(id).unwrap()),
        name: format!("Lead #{id}"),
        email: Some(format!("lead{id}@example.com")),
        status: Some("new".into()),
        ..Lead::default()
    }
}

pub fn leads(count: i64) -> Vec<Lead> {
    (1..=count).map(lead).collect()
}

/// Successful page containing leads with the given identifiers.
pub fn page_of(raw: &[i64]) -> LeadPage {
    Ok(ResponseEnvelope::success(
        raw.iter().copied().map(lead).collect(),
        None,
    ))
}
