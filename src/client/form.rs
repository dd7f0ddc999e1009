//! Forms submitted through the action client

use reqwest::Method;

use crate::transport::ActionRequest;

/// A form's declared action, method and field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub action: String,
    pub method: Option<Method>,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid form method '{0}'")]
pub struct InvalidMethod(pub String);

/// Parse a method attribute the way browsers read it: case-insensitively.
pub fn parse_method(raw: &str) -> Result<Method, InvalidMethod> {
    let upper = raw.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(InvalidMethod(raw.to_string()));
    }
    Method::from_bytes(upper.as_bytes()).map_err(|_| InvalidMethod(raw.to_string()))
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Declared method, `POST` when none was declared.
    pub fn effective_method(&self) -> Method {
        self.method.clone().unwrap_or(Method::POST)
    }

    pub fn to_request(&self) -> ActionRequest {
        ActionRequest::new(self.effective_method(), self.action.clone()).with_form(self.fields.clone())
    }
}
