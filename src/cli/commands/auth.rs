use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::{BlogClient, OutputFormat};

pub async fn register(
    client: &BlogClient,
    username: &str,
    password: &str,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let message = client.register(username, password).await?;
    output_success(output_format, &message, Some(json!({ "username": username })))
}

/// Prints the bare token in text mode so it can be captured with
/// `export BLOG_TOKEN=$(blogctl login ...)`.
pub async fn login(
    client: &BlogClient,
    username: &str,
    password: &str,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let token = client.login(username, password).await?;
    match output_format {
        OutputFormat::Json => output_success(output_format, "Logged in", Some(json!({ "token": token }))),
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
