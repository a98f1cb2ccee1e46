use super::config::{SERVICE_ANON_KEY, SERVICE_URL};
use super::error::ApiError;
use super::session::{Session, SessionStore};
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Sort directive for a table read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Order {
        Order { column, descending: false }
    }

    pub fn desc(column: &'static str) -> Order {
        Order { column, descending: true }
    }
}

/// Typed client for the PostgREST-style data service.
///
/// Reads fetch whole tables with optional equality filters and a sort
/// column; there is no pagination. Writes touch exactly one row. Auth
/// rides on the stored admin session when present, otherwise on the
/// anon key.
pub struct ApiClient {
    base: String,
    session: Rc<SessionStore>,
}

impl ApiClient {
    pub fn new(session: Rc<SessionStore>) -> Self {
        ApiClient {
            base: SERVICE_URL.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn table_url(&self, table: &str, filters: &[(&str, &str)], order: Option<Order>) -> String {
        let mut url = format!("{}/rest/v1/{}?select=*", self.base, table);
        for (column, value) in filters {
            url.push_str(&format!("&{column}=eq.{value}"));
        }
        if let Some(order) = order {
            let dir = if order.descending { "desc" } else { "asc" };
            url.push_str(&format!("&order={}.{dir}", order.column));
        }
        url
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .session
            .token()
            .unwrap_or_else(|| SERVICE_ANON_KEY.to_string());
        builder
            .header("apikey", SERVICE_ANON_KEY)
            .header("Authorization", &format!("Bearer {bearer}"))
    }

    /// Reads all rows of `table` matching the equality filters.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
        order: Option<Order>,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.table_url(table, filters, order);
        let resp = self.authed(Request::get(&url)).send().await?;
        let resp = ensure_ok(resp).await?;
        Ok(resp.json().await?)
    }

    /// Reads the single row of a singleton table (`company_info`).
    pub async fn select_single<T: DeserializeOwned>(&self, table: &str) -> Result<T, ApiError> {
        let url = self.table_url(table, &[], None);
        let resp = self
            .authed(Request::get(&url))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await?;
        let resp = ensure_ok(resp).await?;
        Ok(resp.json().await?)
    }

    /// Exact row count without fetching bodies.
    pub async fn count(&self, table: &str, filters: &[(&str, &str)]) -> Result<u64, ApiError> {
        let url = self.table_url(table, filters, None);
        let resp = self
            .authed(Request::get(&url))
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;
        let resp = ensure_ok(resp).await?;
        let range = resp.headers().get("content-range").unwrap_or_default();
        parse_content_range(&range)
            .ok_or_else(|| ApiError::Decode(format!("bad content-range: {range:?}")))
    }

    /// Inserts one row; generated columns come from the server.
    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{}", self.base, table);
        let resp = self
            .authed(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(row)?
            .send()
            .await?;
        ensure_ok(resp).await.map(|_| ())
    }

    /// Patches the row with the given primary key.
    pub async fn update(
        &self,
        table: &str,
        id: &str,
        patch: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{}?id=eq.{id}", self.base, table);
        let resp = self
            .authed(Request::patch(&url))
            .header("Prefer", "return=minimal")
            .json(patch)?
            .send()
            .await?;
        ensure_ok(resp).await.map(|_| ())
    }

    /// Deletes the row with the given primary key. Permanent.
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{}?id=eq.{id}", self.base, table);
        let resp = self.authed(Request::delete(&url)).send().await?;
        ensure_ok(resp).await.map(|_| ())
    }

    /// Uploads a browser file into the given bucket and returns its
    /// public URL. The caller owns cleanup if a later step fails.
    pub async fn upload(
        &self,
        bucket: &str,
        name: &str,
        file: &web_sys::File,
    ) -> Result<String, ApiError> {
        let mime = file.type_();
        let bytes = read_as_bytes(&Blob::from(file.clone()))
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let url = format!("{}/storage/v1/object/{bucket}/{name}", self.base);
        let body = js_sys::Uint8Array::from(bytes.as_slice());
        let resp = self
            .authed(Request::post(&url))
            .header("Content-Type", &mime)
            .body(body)?
            .send()
            .await?;
        ensure_ok(resp).await?;
        Ok(self.public_url(bucket, name))
    }

    pub fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{name}", self.base)
    }

    /// Removes an uploaded object. Used as the compensating step when a
    /// table write fails after a successful upload.
    pub async fn remove_object(&self, bucket: &str, name: &str) -> Result<(), ApiError> {
        let url = format!("{}/storage/v1/object/{bucket}/{name}", self.base);
        let resp = self.authed(Request::delete(&url)).send().await?;
        ensure_ok(resp).await.map(|_| ())
    }

    /// Password sign-in; the resulting session is stored and broadcast.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base);
        let resp = Request::post(&url)
            .header("apikey", SERVICE_ANON_KEY)
            .json(&serde_json::json!({ "email": email, "password": password }))?
            .send()
            .await?;
        let resp = ensure_ok(resp).await?;
        let token: TokenResponse = resp.json().await?;
        let expires_at = token.expires_at.unwrap_or_else(|| {
            js_sys::Date::now() / 1000.0 + token.expires_in.unwrap_or(3600.0)
        });
        let session = Session {
            access_token: token.access_token,
            expires_at,
            email: token.user.email.unwrap_or_else(|| email.to_string()),
        };
        self.session.replace(Some(session.clone()));
        Ok(session)
    }

    /// Ends the session server-side (best effort) and always clears the
    /// local one.
    pub async fn sign_out(&self) {
        if let Some(token) = self.session.token() {
            let url = format!("{}/auth/v1/logout", self.base);
            let _ = Request::post(&url)
                .header("apikey", SERVICE_ANON_KEY)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
        self.session.replace(None);
    }

    pub fn session_store(&self) -> &Rc<SessionStore> {
        &self.session
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_at: Option<f64>,
    expires_in: Option<f64>,
    #[serde(default)]
    user: TokenUser,
}

#[derive(Deserialize, Default)]
struct TokenUser {
    email: Option<String>,
}

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Http { status, body })
}

/// Extracts the total from a `content-range` header such as `0-0/57`
/// or `*/0`.
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_total_is_parsed() {
        assert_eq!(parse_content_range("0-0/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range(""), None);
        assert_eq!(parse_content_range("0-24"), None);
    }

    #[test]
    fn order_renders_into_query_directives() {
        assert_eq!(Order::asc("display_order").descending, false);
        assert_eq!(Order::desc("created_at").descending, true);
    }
}
