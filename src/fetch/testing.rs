//! A throwaway local HTTP endpoint for exercising the download path offline.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves exactly one HTTP response with the given status line and JSON body, and
/// returns a base URL pointing at it.
pub(crate) async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0u8; 8192];
        let _ = socket.read(&mut buffer).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{address}/timeline")
}

/// A base URL nothing listens on.
pub(crate) const CLOSED_PORT_URL: &str = "http://127.0.0.1:1/timeline";

pub(crate) const DOCUMENT: &str = r#"{
    "queryCost": 1,
    "latitude": 38.95,
    "longitude": -95.664,
    "resolvedAddress": "38.95,-95.664",
    "address": "38.95,-95.664",
    "timezone": "America/Chicago",
    "tzoffset": -6.0,
    "days": [
        {
            "datetime": "2024-01-01",
            "temp": 52.6,
            "tempmax": 58.1,
            "hours": [
                {"datetime": "00:00:00", "temp": 49.0},
                {"datetime": "01:00:00", "temp": 48.4}
            ]
        },
        {
            "datetime": "2024-01-02",
            "temp": 54.0,
            "tempmax": 59.0,
            "hours": [
                {"datetime": "00:00:00", "temp": 51.2},
                {"datetime": "01:00:00", "temp": 50.7}
            ]
        }
    ]
}"#;
