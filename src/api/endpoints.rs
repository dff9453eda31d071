//! Resource URL construction for the prompt-management API.
//!
//! Pure string building: no retries, no caching. Prompt names are pushed as
//! path segments so unsafe characters are percent-encoded.

use url::Url;

use crate::api::schema::ListPromptsQuery;
use crate::error::{PromptuaryError, Result};

const PROMPTS_PATH: [&str; 4] = ["api", "public", "v2", "prompts"];

/// `{host}/api/public/v2/prompts`
fn collection(host: &str) -> Result<Url> {
    let mut url = Url::parse(host)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| PromptuaryError::validation("host", "cannot be used as a base URL"))?;
        segments.pop_if_empty();
        segments.extend(PROMPTS_PATH);
    }
    Ok(url)
}

/// URL for POST (create). Independent of the request content.
pub fn create(host: &str) -> Result<Url> {
    collection(host)
}

/// URL for GET (list), with only the provided query parameters appended.
pub fn list(host: &str, query: &ListPromptsQuery) -> Result<Url> {
    let mut url = collection(host)?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(name) = &query.name {
            pairs.append_pair("name", name);
        }
        if let Some(label) = &query.label {
            pairs.append_pair("label", label);
        }
        if let Some(tag) = &query.tag {
            pairs.append_pair("tag", tag);
        }
        if let Some(page) = query.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if let Some(from) = &query.from_updated_at {
            pairs.append_pair("fromUpdatedAt", from);
        }
        if let Some(to) = &query.to_updated_at {
            pairs.append_pair("toUpdatedAt", to);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

/// `{host}/api/public/v2/prompts/{name}`, with `version` and/or `label`
/// appended iff provided, in that order. Both at once is allowed; resolving
/// the ambiguity is the service's job.
pub fn get(host: &str, name: &str, version: Option<u32>, label: Option<&str>) -> Result<Url> {
    let mut url = collection(host)?;
    url.path_segments_mut()
        .map_err(|_| PromptuaryError::validation("host", "cannot be used as a base URL"))?
        .push(name);
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(version) = version {
            pairs.append_pair("version", &version.to_string());
        }
        if let Some(label) = label {
            pairs.append_pair("label", label);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

/// `{host}/api/public/v2/prompts/{name}/versions/{version}`
pub fn update(host: &str, name: &str, version: u32) -> Result<Url> {
    let mut url = collection(host)?;
    url.path_segments_mut()
        .map_err(|_| PromptuaryError::validation("host", "cannot be used as a base URL"))?
        .extend([name, "versions", &version.to_string()]);
    Ok(url)
}
