use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use serde::Deserialize;
use tracing::debug;

/// Error codes the API returns for rejected credentials or keys.
const AUTH_ERROR_CODES: [u32; 3] = [1, 15, 184];

#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(default)]
    stat: String,
    #[serde(default)]
    err_code: Option<u32>,
}

/// A single result is returned as an object, several as an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    #[serde(rename = "@attributes")]
    attributes: Option<Attributes>,
    api_key: Option<String>,
    err: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntityRecord {
    name: String,
    #[serde(rename = "embedCode", default)]
    embed_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    form: Option<OneOrMany<EntityRecord>>,
    #[serde(rename = "dynamicContent", default)]
    dynamic_content: Option<OneOrMany<EntityRecord>>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(rename = "@attributes")]
    attributes: Option<Attributes>,
    result: Option<QueryResult>,
    err: Option<String>,
}

/// One page of a query response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    pub entities: Vec<CatalogEntity>,
    /// Number of records on this page, including skipped ones.
    pub records: usize,
    /// Absent when the response omits the count.
    pub total_results: Option<u64>,
}

fn api_failure(attributes: Option<&Attributes>, err: Option<String>) -> Option<DomainError> {
    let failed = attributes.is_some_and(|a| a.stat == "fail") || err.is_some();
    if !failed {
        return None;
    }

    let code = attributes.and_then(|a| a.err_code);
    let message = err.unwrap_or_else(|| "request failed".to_string());
    Some(match code {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => {
            DomainError::AuthenticationError(format!("{message} (code {code})"))
        }
        Some(code) => DomainError::RemoteUnavailable(format!("{message} (code {code})")),
        None => DomainError::RemoteUnavailable(message),
    })
}

/// Extracts the API key from a login response body.
pub fn parse_login(body: &str) -> Result<String, DomainError> {
    let parsed: LoginBody = serde_json::from_str(body)
        .map_err(|e| DomainError::RemoteUnavailable(format!("malformed login response: {e}")))?;

    if let Some(error) = api_failure(parsed.attributes.as_ref(), parsed.err) {
        return Err(match error {
            DomainError::RemoteUnavailable(message) => DomainError::AuthenticationError(message),
            other => other,
        });
    }

    parsed
        .api_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| DomainError::AuthenticationError("login returned no api_key".to_string()))
}

/// Parses one page of a form or dynamic-content query.
///
/// Records without embed code are skipped: they cannot render anything.
pub fn parse_query(body: &str, kind: EntityKind) -> Result<QueryPage, DomainError> {
    let parsed: QueryBody = serde_json::from_str(body)
        .map_err(|e| DomainError::RemoteUnavailable(format!("malformed {kind} response: {e}")))?;

    if let Some(error) = api_failure(parsed.attributes.as_ref(), parsed.err) {
        return Err(error);
    }

    let result = parsed.result.ok_or_else(|| {
        DomainError::RemoteUnavailable(format!("{kind} response has no result"))
    })?;

    let records = match kind {
        EntityKind::Form => result.form,
        EntityKind::DynamicContent => result.dynamic_content,
    }
    .map(OneOrMany::into_vec)
    .unwrap_or_default();

    let record_count = records.len();
    let entities = records
        .into_iter()
        .filter_map(|record| match record.embed_code {
            Some(code) if !code.is_empty() => Some(CatalogEntity::new(record.name, code)),
            _ => {
                debug!(%kind, name = %record.name, "Skipping record without embed code");
                None
            }
        })
        .collect();

    Ok(QueryPage {
        entities,
        records: record_count,
        total_results: result.total_results,
    })
}
