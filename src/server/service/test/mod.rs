use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::Mutex};

use crate::server::service::notification::{ApplicationNotifier, TelegramCredentials};

mod application;

const TEST_BOT_TOKEN: &str = "TEST_TOKEN";
const TEST_CHAT_ID: &str = "-100123";

/// Local stand-in for the Bot API that records every `sendMessage` body it receives.
struct MockEndpoint {
    url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockEndpoint {
    async fn start(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let app = Router::new().route(
            &format!("/bot{}/sendMessage", TEST_BOT_TOKEN),
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().await.push(body);
                    status
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, received }
    }

    fn notifier(&self) -> ApplicationNotifier {
        notifier_for(&self.url)
    }

    /// Waits until at least `count` messages arrived, or gives up after a few seconds.
    async fn wait_for(&self, count: usize) -> Vec<Value> {
        for _ in 0..100 {
            let received = self.received.lock().await;
            if received.len() >= count {
                return received.clone();
            }
            drop(received);
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.received.lock().await.clone()
    }
}

fn notifier_for(api_url: &str) -> ApplicationNotifier {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    ApplicationNotifier::new(
        http,
        api_url,
        Some(TelegramCredentials {
            bot_token: TEST_BOT_TOKEN.to_string(),
            chat_id: TEST_CHAT_ID.to_string(),
        }),
    )
}

/// Address nothing listens on; connections are refused immediately.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
