use anyhow::Context;
use reqwest::{Response, StatusCode};
use serde_json::{json, Value};
use url::Url;

use crate::database::models::BlogPostView;
use crate::handlers::public::auth::login::LoginResponse;

/// Thin HTTP client for the Blog API
pub struct BlogClient {
    base: Url,
    http: reqwest::Client,
}

impl BlogClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        // Relative joins keep any path prefix only when the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("invalid endpoint '{}'", path))
    }

    pub async fn register(&self, username: &str, password: &str) -> anyhow::Result<String> {
        let res = self
            .http
            .post(self.endpoint("api/register")?)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        expect_text(res).await
    }

    pub async fn login(&self, username: &str, password: &str) -> anyhow::Result<String> {
        let res = self
            .http
            .post(self.endpoint("api/login")?)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        let res = ensure_success(res).await?;
        Ok(res.json::<LoginResponse>().await?.token)
    }

    pub async fn create_post(&self, token: &str, title: &str, content: &str) -> anyhow::Result<String> {
        let res = self
            .http
            .post(self.endpoint("api/blog")?)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await?;
        expect_text(res).await
    }

    pub async fn list_posts(&self) -> anyhow::Result<Vec<BlogPostView>> {
        let res = self.http.get(self.endpoint("api/blog")?).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }

    pub async fn add_comment(&self, token: &str, post_id: &str, content: &str) -> anyhow::Result<String> {
        let res = self
            .http
            .post(self.endpoint(&format!("api/blog/{}/comment", post_id))?)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(&json!({ "content": content }))
            .send()
            .await?;
        expect_text(res).await
    }

    /// Health is reported even when degraded (503), so only transport errors fail.
    pub async fn health(&self) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.http.get(self.endpoint("health")?).send().await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }
}

async fn ensure_success(res: Response) -> anyhow::Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    anyhow::bail!("{}: {}", status, body.trim())
}

async fn expect_text(res: Response) -> anyhow::Result<String> {
    let res = ensure_success(res).await?;
    Ok(res.text().await?)
}
