pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub use client::BlogClient;

/// Server used when neither --url nor BLOG_API_URL is given
pub const DEFAULT_URL: &str = "http://localhost:2002";

#[derive(Parser)]
#[command(name = "blogctl")]
#[command(about = "Blog CLI - Command-line client for the Blog API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Server base URL (defaults to BLOG_API_URL or http://localhost:2002)")]
    pub url: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Register a new user")]
    Register {
        username: String,
        password: String,
    },

    #[command(about = "Log in and print a session token")]
    Login {
        username: String,
        password: String,
    },

    #[command(about = "Create a blog post")]
    Post {
        #[arg(long, help = "Session token (defaults to BLOG_TOKEN)")]
        token: Option<String>,
        title: String,
        content: String,
    },

    #[command(about = "List all blog posts with their comments")]
    List,

    #[command(about = "Comment on a blog post")]
    Comment {
        #[arg(long, help = "Session token (defaults to BLOG_TOKEN)")]
        token: Option<String>,
        post_id: String,
        content: String,
    },

    #[command(about = "Check server health")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn resolve_url(url: Option<String>) -> String {
    url.or_else(|| std::env::var("BLOG_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

fn resolve_token(token: Option<String>) -> anyhow::Result<String> {
    token
        .or_else(|| std::env::var("BLOG_TOKEN").ok())
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("No session token: pass --token or set BLOG_TOKEN"))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = BlogClient::new(&resolve_url(cli.url))?;

    match cli.command {
        Commands::Register { username, password } => {
            commands::auth::register(&client, &username, &password, &output_format).await
        }
        Commands::Login { username, password } => {
            commands::auth::login(&client, &username, &password, &output_format).await
        }
        Commands::Post { token, title, content } => {
            let token = resolve_token(token)?;
            commands::blog::create(&client, &token, &title, &content, &output_format).await
        }
        Commands::List => commands::blog::list(&client, &output_format).await,
        Commands::Comment { token, post_id, content } => {
            let token = resolve_token(token)?;
            commands::blog::comment(&client, &token, &post_id, &content, &output_format).await
        }
        Commands::Health => commands::blog::health(&client, &output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        assert_eq!(resolve_url(Some("http://example.com".into())), "http://example.com");
    }

    #[test]
    fn explicit_token_wins() {
        assert_eq!(resolve_token(Some("abc".into())).unwrap(), "abc");
    }

    #[test]
    fn parses_comment_command() {
        let cli = Cli::parse_from(["blogctl", "--json", "comment", "--token", "t", "some-id", "nice post"]);
        assert!(cli.json);
        match cli.command {
            Commands::Comment { token, post_id, content } => {
                assert_eq!(token.as_deref(), Some("t"));
                assert_eq!(post_id, "some-id");
                assert_eq!(content, "nice post");
            }
            _ => panic!("expected comment command"),
        }
    }
}
