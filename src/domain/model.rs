use crate::utils::error::CLIENT_FAILURE_MESSAGE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 查詢參數 (city, state)，缺少的欄位以空字串代替
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeQuery {
    pub city: String,
    pub state: String,
}

impl GeocodeQuery {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Picks `city` and `state` out of decoded query pairs. First occurrence wins.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut city = None;
        let mut state = None;

        for (key, value) in pairs {
            match key.as_ref() {
                "city" if city.is_none() => city = Some(value.into()),
                "state" if state.is_none() => state = Some(value.into()),
                _ => {}
            }
        }

        Self {
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
        }
    }

    /// 解析原始查詢字串 (例如 `city=Seattle&state=WA`)
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Address string handed to the geocoding service.
    pub fn address(&self) -> String {
        format!("{},+{}", self.city, self.state)
    }
}

/// Reply body of the geocoding service. `results` is forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default = "empty_results")]
    pub results: serde_json::Value,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

fn empty_results() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Body of the latency service. Only its arrival matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyToken(pub String);

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseBody::Json(_) => "application/json",
            ResponseBody::Text(_) => "text/plain; charset=utf-8",
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: ResponseBody,
}

impl HandlerResponse {
    pub fn success(results: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: vec![("Access-Control-Allow-Origin".to_string(), "*".to_string())],
            body: ResponseBody::Json(results),
        }
    }

    pub fn failure() -> Self {
        Self {
            status: 500,
            headers: Vec::new(),
            body: ResponseBody::Text(CLIENT_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Per-request lifecycle. `Responded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    AwaitingLatency,
    AwaitingGeocode,
    Responded(Outcome),
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Received => f.write_str("RECEIVED"),
            RequestState::AwaitingLatency => f.write_str("AWAITING_LATENCY"),
            RequestState::AwaitingGeocode => f.write_str("AWAITING_GEOCODE"),
            RequestState::Responded(Outcome::Success) => f.write_str("RESPONDED(success)"),
            RequestState::Responded(Outcome::Failure) => f.write_str("RESPONDED(failure)"),
        }
    }
}
