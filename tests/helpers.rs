#![allow(dead_code)]

use axum::{Router, body::to_bytes, response::Response};
use serde_json::Value;

use hondoko::{api, app_state::AppState, config::Config};

pub const BOOKLOG_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head><title>リーダブルコード | ブクログ</title></head>
<body>
  <div class="item-detail">
    <h1>リーダブルコード</h1>
    <ul class="item-info">
      <li>出版社: オライリージャパン</li>
      <li>ISBN・EAN: 9784798638611</li>
    </ul>
  </div>
</body>
</html>"#;

pub fn test_app() -> Router {
    api::router(AppState::new(&Config::default()))
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
