//! Scripted `StatsApi` for unit tests. Records every call it receives.

use super::client::StatsApi;
use crate::error::StatsError;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type Handler = Box<dyn Fn(&Call) -> Result<Value, StatsError> + Send + Sync>;

pub struct FakeStatsApi {
    handler: Handler,
    calls: Mutex<Vec<Call>>,
}

impl FakeStatsApi {
    pub fn new(
        handler: impl Fn(&Call) -> Result<Value, StatsError> + Send + Sync + 'static,
    ) -> Self {
        FakeStatsApi {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl StatsApi for FakeStatsApi {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, StatsError> {
        let call = Call {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        self.calls.lock().unwrap().push(call.clone());
        (self.handler)(&call)
    }
}

pub fn not_found() -> StatsError {
    StatsError::HttpError {
        status: 404,
        body: "Not Found".to_string(),
    }
}
