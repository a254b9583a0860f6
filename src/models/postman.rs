use serde::Deserialize;

/// Postman collection document (format v2.0 / v2.1)
/// https://schema.postman.com/collection/json/v2.1.0/draft-07/docs/index.html
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanCollection {
    /// Metadata about the collection
    #[serde(default)]
    pub info: Option<Info>,

    /// Requests and folders, in recorded order
    #[serde(default)]
    pub item: Vec<Item>,

    /// Collection-level variables
    #[serde(default)]
    pub variable: Vec<KeyValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub name: Option<String>,

    /// Schema URL identifying the collection format version
    #[serde(default)]
    pub schema: Option<String>,
}

/// A request or a folder of further items
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,

    /// Present when the item is a request
    #[serde(default)]
    pub request: Option<RequestDef>,

    /// Present when the item is a folder
    #[serde(default)]
    pub item: Option<Vec<Item>>,
}

/// Postman allows a request to be recorded as a bare URL string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestDef {
    Url(String),
    Full(Request),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub url: Option<Url>,

    #[serde(default)]
    pub header: Vec<KeyValue>,

    #[serde(default)]
    pub body: Option<RequestBody>,
}

/// Either a raw URL string or a structured URL object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Url {
    Raw(String),
    Detailed(UrlParts),
}

/// Structured URL; `raw` is optional, the parts describe the same URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlParts {
    #[serde(default)]
    pub raw: Option<String>,

    #[serde(default)]
    pub protocol: Option<String>,

    /// Host as a string or as dot-separated labels
    #[serde(default)]
    pub host: Option<Segments>,

    /// Port recorded as a string or a number
    #[serde(default)]
    pub port: Option<serde_json::Value>,

    /// Path as a string or as slash-separated segments
    #[serde(default)]
    pub path: Option<Segments>,

    #[serde(default)]
    pub query: Vec<QueryParam>,

    #[serde(default)]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Segments {
    Joined(String),
    Parts(Vec<String>),
}

impl Segments {
    fn join(&self, separator: &str) -> String {
        match self {
            Segments::Joined(joined) => joined.clone(),
            Segments::Parts(parts) => parts.join(separator),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParam {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub disabled: bool,
}

impl Url {
    /// The recorded URL, rebuilt from its parts when no `raw` form was kept
    pub fn to_raw(&self) -> Option<String> {
        match self {
            Url::Raw(raw) => Some(raw.clone()),
            Url::Detailed(parts) => match parts.raw.as_deref() {
                Some(raw) if !raw.is_empty() => Some(raw.to_string()),
                _ => parts.build(),
            },
        }
    }
}

impl UrlParts {
    fn build(&self) -> Option<String> {
        let host = self.host.as_ref().map(|h| h.join(".")).unwrap_or_default();
        let path = self.path.as_ref().map(|p| p.join("/")).unwrap_or_default();
        if host.is_empty() && path.is_empty() {
            return None;
        }

        let mut url = String::new();
        if let Some(ref protocol) = self.protocol {
            url.push_str(protocol);
            url.push_str("://");
        }
        url.push_str(&host);

        match &self.port {
            Some(serde_json::Value::String(port)) if !port.is_empty() => {
                url.push(':');
                url.push_str(port);
            }
            Some(serde_json::Value::Number(port)) => url.push_str(&format!(":{}", port)),
            _ => {}
        }

        if !path.is_empty() {
            if !path.starts_with('/') {
                url.push('/');
            }
            url.push_str(&path);
        }

        let query: Vec<String> = self
            .query
            .iter()
            .filter(|q| !q.disabled)
            .filter_map(|q| {
                let key = q.key.as_deref()?;
                Some(match q.value.as_deref() {
                    Some(value) => format!("{}={}", key, value),
                    None => key.to_string(),
                })
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        if let Some(ref hash) = self.hash {
            url.push('#');
            url.push_str(hash);
        }

        Some(url)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    /// raw, urlencoded, formdata, file or graphql
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub raw: Option<String>,

    #[serde(default)]
    pub urlencoded: Vec<KeyValue>,

    #[serde(default)]
    pub formdata: Vec<KeyValue>,

    #[serde(default)]
    pub disabled: bool,
}

/// Key/value entry shared by headers, form fields and variables
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValue {
    pub key: String,

    #[serde(default)]
    pub value: serde_json::Value,

    #[serde(default)]
    pub disabled: bool,

    /// Form field type (text or file)
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
}

impl KeyValue {
    /// The value as text; scalars are rendered the way they were recorded
    pub fn text(&self) -> String {
        match &self.value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.field_type.as_deref() == Some("file")
    }
}
