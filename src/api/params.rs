//! Request parameters
//!
//! Loosely typed, string-keyed parameters shared by every request shape:
//! query strings, URL-encoded forms, JSON bodies and multipart uploads.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Scalar text form. Lists are comma-joined, as form encoders do.
    pub fn to_text(&self) -> String {
        match self {
            ParamValue::Null => String::new(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
            ParamValue::Text(s) => s.clone(),
            ParamValue::List(items) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(ParamValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// A file attached to an upload request
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// How a request body is serialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

impl BodyEncoding {
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::Json => "application/json",
            BodyEncoding::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// String-keyed request parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiParams {
    values: BTreeMap<String, ParamValue>,
    files: BTreeMap<String, FilePart>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Attach a file for multipart uploads
    pub fn attach(mut self, key: impl Into<String>, file: FilePart) -> Self {
        self.files.insert(key.into(), file);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn files(&self) -> impl Iterator<Item = (&String, &FilePart)> {
        self.files.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.files.is_empty()
    }

    /// Query-string pairs. Lists repeat their key; nulls are dropped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.values {
            match value {
                ParamValue::Null => {}
                ParamValue::List(items) => {
                    for item in items.iter().filter(|v| !v.is_null()) {
                        pairs.push((key.clone(), item.to_text()));
                    }
                }
                other => pairs.push((key.clone(), other.to_text())),
            }
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` body; nulls are dropped
    pub fn to_form(&self) -> String {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_text())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// JSON body; nulls are kept
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.values).unwrap_or(serde_json::Value::Null)
    }

    /// Serialize as a request body in the given encoding
    pub fn encode_body(&self, encoding: BodyEncoding) -> String {
        match encoding {
            BodyEncoding::Json => self.to_json().to_string(),
            BodyEncoding::Form => self.to_form(),
        }
    }

    /// Multipart form with text fields and attached files; nulls are dropped
    pub fn to_multipart(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();

        for (key, value) in self.values.iter().filter(|(_, v)| !v.is_null()) {
            form = form.text(key.clone(), value.to_text());
        }

        for (key, file) in &self.files {
            let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone());
            if let Some(mime) = &file.mime {
                part = part.mime_str(mime)?;
            }
            form = form.part(key.clone(), part);
        }

        Ok(form)
    }
}
