use serde_json::json;

use crate::cli::utils::{output_empty_collection, output_success};
use crate::cli::{BlogClient, OutputFormat};

pub async fn create(
    client: &BlogClient,
    token: &str,
    title: &str,
    content: &str,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let message = client.create_post(token, title, content).await?;
    output_success(output_format, &message, Some(json!({ "title": title })))
}

pub async fn list(client: &BlogClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let posts = client.list_posts().await?;
    if posts.is_empty() {
        return output_empty_collection(output_format, "posts", "No blog posts yet");
    }

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Text => {
            for post in posts {
                let author = post.author.as_ref().map(|a| a.username.as_str()).unwrap_or("[deleted]");
                println!("{}  {} (by {})", post.id, post.title, author);
                println!("    {}", post.content);
                for comment in &post.comments {
                    let commenter = comment
                        .commenter
                        .as_ref()
                        .map(|c| c.username.as_str())
                        .unwrap_or("[deleted]");
                    println!("    - {}: {}", commenter, comment.content);
                }
            }
        }
    }
    Ok(())
}

pub async fn comment(
    client: &BlogClient,
    token: &str,
    post_id: &str,
    content: &str,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let message = client.add_comment(token, post_id, content).await?;
    output_success(output_format, &message, Some(json!({ "post_id": post_id })))
}

pub async fn health(client: &BlogClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let (status, body) = client.health().await?;
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&body)?),
        OutputFormat::Text => println!("{} {}", status, body["status"].as_str().unwrap_or("unknown")),
    }
    if !status.is_success() {
        anyhow::bail!("server reported {}", status);
    }
    Ok(())
}
