use super::read_file;
use crate::error::{ConvertError, Result};
use crate::models::postman::{Item, KeyValue, PostmanCollection, RequestBody, RequestDef, Url};
use crate::models::{Body, Collection, Transaction, VariableMap};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

/// Load a recorded collection from a file
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();

    let content = read_file(path)?;
    let collection = parse_collection(&content)?;

    info!(
        path = %path.display(),
        transactions = collection.transactions.len(),
        "Loaded collection"
    );

    Ok(collection)
}

/// Parse collection JSON into the transaction model
pub fn parse_collection(content: &str) -> Result<Collection> {
    let document: PostmanCollection = serde_json::from_str(content).map_err(|e| {
        ConvertError::InputParseError(format!("Failed to parse collection JSON: {}", e))
    })?;

    let mut transactions = Vec::new();
    flatten_items(&document.item, &mut transactions)?;

    let variables: VariableMap = document
        .variable
        .iter()
        .filter(|v| !v.disabled)
        .map(|v| (v.key.clone(), v.value.clone()))
        .collect();

    Ok(Collection {
        name: document.info.and_then(|info| info.name),
        transactions,
        variables,
    })
}

/// Walk folders depth-first, keeping document order
fn flatten_items(items: &[Item], out: &mut Vec<Transaction>) -> Result<()> {
    for item in items {
        if let Some(ref children) = item.item {
            debug!(folder = item.name.as_deref().unwrap_or(""), "Entering folder");
            flatten_items(children, out)?;
        }

        if let Some(ref request) = item.request {
            let name = item
                .name
                .clone()
                .unwrap_or_else(|| format!("request {}", out.len() + 1));
            let transaction = build_transaction(name, request)?;
            transaction.validate()?;
            out.push(transaction);
        }
    }

    Ok(())
}

fn build_transaction(name: String, request: &RequestDef) -> Result<Transaction> {
    let request = match request {
        RequestDef::Url(url) => {
            return Ok(Transaction {
                name,
                method: "GET".to_string(),
                url: url.clone(),
                headers: IndexMap::new(),
                body: Body::None,
            });
        }
        RequestDef::Full(request) => request,
    };

    let method = request.method.clone().unwrap_or_default();
    let url = request
        .url
        .as_ref()
        .and_then(Url::to_raw)
        .unwrap_or_default();
    let headers = enabled_fields(&request.header);
    let body = build_body(&name, request.body.as_ref())?;

    Ok(Transaction {
        name,
        method,
        url,
        headers,
        body,
    })
}

fn build_body(name: &str, body: Option<&RequestBody>) -> Result<Body> {
    let Some(body) = body.filter(|b| !b.disabled) else {
        return Ok(Body::None);
    };

    match body.mode.as_deref() {
        None => Ok(Body::None),
        Some("raw") => match body.raw.as_deref() {
            None | Some("") => Ok(Body::None),
            Some(text) => Ok(Body::Raw(text.to_string())),
        },
        Some("formdata") => {
            if let Some(field) = body.formdata.iter().find(|f| !f.disabled && f.is_file()) {
                return Err(ConvertError::UnsupportedBodyTypeError(format!(
                    "File field '{}' in form body of '{}'",
                    field.key, name
                )));
            }
            Ok(Body::Form(enabled_fields(&body.formdata)))
        }
        Some("urlencoded") => Ok(Body::UrlEncoded(enabled_fields(&body.urlencoded))),
        Some(other) => Err(ConvertError::UnsupportedBodyTypeError(format!(
            "Body mode '{}' in '{}'",
            other, name
        ))),
    }
}

fn enabled_fields(fields: &[KeyValue]) -> IndexMap<String, String> {
    fields
        .iter()
        .filter(|f| !f.disabled)
        .map(|f| (f.key.clone(), f.text()))
        .collect()
}
