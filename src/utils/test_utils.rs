#[cfg(test)]
use crate::api::{AgentReply, Content};
#[cfg(test)]
use crate::core::model_client::{ModelClient, ModelError};
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex as StdMutex;
#[cfg(test)]
use tokio::io::{AsyncReadExt, AsyncWriteExt};
#[cfg(test)]
use tokio::net::{TcpListener, TcpStream};
#[cfg(test)]
use tokio::task::JoinHandle;

/// One HTTP request as seen by [`MockHttpServer`].
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serves a single canned HTTP response on a loopback port.
#[cfg(test)]
pub struct MockHttpServer {
    addr: std::net::SocketAddr,
    handle: JoinHandle<Result<CapturedRequest, String>>,
}

#[cfg(test)]
impl MockHttpServer {
    pub async fn start(status: &str, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("local addr should resolve");
        let status = status.to_string();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.map_err(|err| err.to_string())?;
            let captured = read_http_request(&mut stream).await?;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .map_err(|err| err.to_string())?;
            stream.shutdown().await.map_err(|err| err.to_string())?;
            Ok(captured)
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn captured(self) -> CapturedRequest {
        self.handle
            .await
            .expect("server task should not panic")
            .expect("server should capture a request")
    }
}

#[cfg(test)]
async fn read_http_request(stream: &mut TcpStream) -> Result<CapturedRequest, String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("connection closed before headers".to_string());
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buffer[header_end..].to_vec();
    while body.len() < content_length {
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..read]);
    }

    Ok(CapturedRequest {
        request_line,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

/// Model client that replays queued outcomes and records every call.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedClient {
    outcomes: StdMutex<VecDeque<Result<AgentReply, ModelError>>>,
    calls: StdMutex<Vec<(String, Vec<Content>)>>,
}

#[cfg(test)]
impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, agent_id: &str, text: &str) -> Self {
        self.push(Ok(AgentReply {
            active_agent_id: agent_id.to_string(),
            response_text: text.to_string(),
        }))
    }

    pub fn fail(self) -> Self {
        self.push(Err(ModelError::EmptyResponse))
    }

    fn push(self, outcome: Result<AgentReply, ModelError>) -> Self {
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .push_back(outcome);
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Content>)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ModelClient for ScriptedClient {
    async fn send_message(
        &self,
        message: &str,
        history: &[Content],
    ) -> Result<AgentReply, ModelError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((message.to_string(), history.to_vec()));
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or(Err(ModelError::EmptyResponse))
    }
}
