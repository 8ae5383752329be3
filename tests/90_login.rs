mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn full_flow_against_running_server() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();
    let base = &server.base_url;

    let username = "flow-user";
    let creds = json!({ "username": username, "password": "secret" });

    let res = client.post(format!("{}/api/register", base)).json(&creds).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.post(format!("{}/api/login", base)).json(&creds).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let token = res.json::<Value>().await?["token"]
        .as_str()
        .expect("token field")
        .to_string();

    let res = client
        .post(format!("{}/api/blog", base))
        .json(&json!({ "title": "From the wire", "content": "Body" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .post(format!("{}/api/blog", base))
        .header("Authorization", &token)
        .json(&json!({ "title": "From the wire", "content": "Body" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let posts = client.get(format!("{}/api/blog", base)).send().await?.json::<Value>().await?;
    let post = posts
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["author"]["username"] == username)
        .expect("post listed");

    let res = client
        .post(format!("{}/api/blog/{}/comment", base, post["id"].as_str().unwrap()))
        .header("Authorization", &token)
        .json(&json!({ "content": "Nice" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(())
}
