use anyhow::{anyhow, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde_json::Value;

use crate::helpers::predicates::is_present;
use crate::utils::constants::DEFAULT_PROTOCOL;

/// Outgoing body, exactly one encoding per request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON, sent with `Content-Type: application/json`
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs, in order
    Form(Vec<(String, String)>),
    /// `multipart/form-data`; kept as plain parts so a retry can rebuild it
    Multipart(Vec<MultipartPart>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, mime: Option<String>, bytes: Vec<u8> },
}

impl RequestBody {
    pub fn form<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        RequestBody::Form(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Form and multipart bodies go out as-is, without the JSON content type.
    pub fn is_encoded(&self) -> bool {
        matches!(self, RequestBody::Form(_) | RequestBody::Multipart(_))
    }
}

pub(crate) fn multipart_form(parts: &[MultipartPart]) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            MultipartPart::Text { name, value } => form.text(name.clone(), value.clone()),
            MultipartPart::File { name, file_name, mime, bytes } => {
                let mut file = Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = mime {
                    file = file.mime_str(mime)?;
                }
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

/// Base URL for a configured host; bare hosts are reached over https.
pub fn base_url(host: &str) -> Result<Url> {
    let host = host.trim();
    let raw = if host.contains("://") {
        host.to_owned()
    } else {
        format!("{}://{}", DEFAULT_PROTOCOL, host.trim_end_matches('/'))
    };
    let url = Url::parse(&raw)?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(anyhow!("'{}' has no host", raw));
    }
    Ok(url)
}

/// Join `path` onto the base and append every present query parameter.
pub fn build_url(base: &Url, path: &str, query: &[(&str, Value)]) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined)?;

    let present: Vec<&(&str, Value)> = query.iter().filter(|(_, v)| is_present(v)).collect();
    if !present.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in present {
            pairs.append_pair(key, &query_value(value));
        }
    }
    Ok(url)
}

/// Render a query value the way it reads on the wire: lists are comma joined.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
