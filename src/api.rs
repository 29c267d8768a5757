//! Request handling for exposing the compiler over HTTP.
//!
//! This module knows nothing about sockets. It turns an already decoded
//! [`Request`] into a [`Response`] carrying a JSON envelope, so any server
//! can sit in front of it.

use crate::compiler::{self, Compiler};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const USAGE: &str = "No code provided. Usage: /api/compiler?code=(add 1 2)";

const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Credentials", "true"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Methods",
        "GET,OPTIONS,PATCH,DELETE,POST,PUT",
    ),
    (
        "Access-Control-Allow-Headers",
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Get,
    Post,
    Options,
    Other(String),
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "OPTIONS" => Method::Options,
            other => Method::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub query: HashMap<String, String>,
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: HashMap::new(),
            body: None,
        }
    }

    pub fn with_query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body<B: Into<String>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The program to compile, from the `code` query parameter or the
    /// `code` field of a JSON body. A body that isn't valid JSON counts as
    /// empty.
    pub fn code(&self) -> Option<String> {
        let from_query = self.query.get("code").filter(|c| !c.is_empty()).cloned();

        from_query.or_else(|| {
            let body = self.body.as_deref()?;
            serde_json::from_str::<CompileRequest>(body)
                .ok()?
                .code
                .filter(|c| !c.is_empty())
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Response {
    fn new(status: u16, body: Option<String>) -> Self {
        let headers = CORS_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            status,
            headers,
            body,
        }
    }

    fn json<T: Serialize>(status: u16, envelope: &T) -> Self {
        match serde_json::to_string(envelope) {
            Ok(body) => {
                let mut response = Self::new(status, Some(body));
                response
                    .headers
                    .push(("Content-Type".to_string(), "application/json".to_string()));
                response
            }
            Err(e) => {
                log::error!("failed to serialize response: {}", e);
                Self::new(500, None)
            }
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
struct CompileRequest {
    code: Option<String>,
}

/// The JSON body of every non-preflight response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        input: String,
        output: String,
        success: bool,
    },
    Failure {
        error: String,
        success: bool,
    },
}

impl Envelope {
    pub fn success<I: Into<String>, O: Into<String>>(input: I, output: O) -> Self {
        Envelope::Success {
            input: input.into(),
            output: output.into(),
            success: true,
        }
    }

    pub fn failure<E: ToString>(error: E) -> Self {
        Envelope::Failure {
            error: error.to_string(),
            success: false,
        }
    }

    /// The envelope for a compilation result together with its HTTP status.
    pub fn from_result(input: &str, result: &compiler::Result<String>) -> (u16, Self) {
        match result {
            Ok(output) => (200, Self::success(input, output.as_str())),
            Err(e) if e.is_user_error() => (400, Self::failure(e)),
            Err(e) => (500, Self::failure(e)),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn handle(compiler: &Compiler, request: &Request) -> Response {
    log::debug!("handling {:?} request", request.method);

    if request.method == Method::Options {
        return Response::new(200, None);
    }

    let code = match request.code() {
        Some(code) => code,
        None => return Response::json(400, &Envelope::failure(USAGE)),
    };

    let result = compiler.compile(&code);
    let (status, envelope) = Envelope::from_result(&code, &result);

    if let Err(e) = &result {
        log::debug!("compilation failed with status {}: {}", status, e);
    }

    Response::json(status, &envelope)
}
