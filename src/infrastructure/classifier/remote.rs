// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for an external inference service.
//!
//! Request: `POST {endpoint}?model=<id>` with the raw image as body and the
//! image content type as `Content-Type`. Response: a JSON document carrying
//! the stage, its confidence, a description, the confidence level and the
//! full prediction list.
//!
//! The request runs on the async client and races the cancellation token, so
//! a reset drops the connection instead of holding a blocking-pool thread
//! until the timeout elapses.

use crate::application::port::classifier::{
    is_cancelled, CancellationToken, ClassificationRequest, Classifier, ClassifierDescriptor,
    ClassifierError,
};
use crate::domain::classification::{ClassificationOutcome, ConfidenceTier, Prediction, Stage};
use serde::Deserialize;
use std::borrow::Cow;
use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

const USER_AGENT: &str = concat!("CerebroScan/", env!("CARGO_PKG_VERSION"));

/// How often an in-flight request checks for a reset.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Deserialize)]
struct PredictionDto {
    stage: String,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct ClassificationDto {
    stage: String,
    confidence: f64,
    #[serde(default)]
    description: String,
    confidence_level: String,
    #[serde(default)]
    all_predictions: Vec<PredictionDto>,
}

fn parse_percent(value: f64) -> Result<f64, ClassifierError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ClassifierError::InvalidResponse(format!(
            "confidence out of range: {value}"
        )))
    }
}

fn parse_stage(label: &str) -> Result<Stage, ClassifierError> {
    label
        .parse()
        .map_err(|e: crate::domain::classification::UnknownStage| {
            ClassifierError::InvalidResponse(e.to_string())
        })
}

impl TryFrom<ClassificationDto> for ClassificationOutcome {
    type Error = ClassifierError;

    fn try_from(dto: ClassificationDto) -> Result<Self, Self::Error> {
        let stage = parse_stage(&dto.stage)?;
        let confidence_percent = parse_percent(dto.confidence)?;
        let tier: ConfidenceTier = dto
            .confidence_level
            .parse()
            .map_err(ClassifierError::InvalidResponse)?;
        let breakdown = dto
            .all_predictions
            .iter()
            .map(|p| Ok(Prediction::new(parse_stage(&p.stage)?, parse_percent(p.confidence)?)))
            .collect::<Result<Vec<_>, ClassifierError>>()?;

        Ok(ClassificationOutcome {
            stage,
            confidence_percent,
            description: Cow::Owned(dto.description),
            tier,
            breakdown: Cow::Owned(breakdown),
        })
    }
}

fn map_transport_error(err: &reqwest::Error) -> ClassifierError {
    if err.is_timeout() {
        ClassifierError::Timeout
    } else {
        ClassifierError::Transport(err.to_string())
    }
}

async fn cancelled(token: &CancellationToken) {
    while !is_cancelled(token) {
        tokio::time::sleep(CANCEL_POLL_INTERVAL).await;
    }
}

/// Drives `future` to completion from a synchronous caller.
///
/// Inside the application (and `spawn_blocking`) the ambient runtime is
/// reused; plain threads get a throwaway current-thread runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, ClassifierError> {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Ok(handle.block_on(future)),
        Err(_) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map(|runtime| runtime.block_on(future))
            .map_err(|e| ClassifierError::Transport(e.to_string())),
    }
}

/// Classifier backed by an HTTP inference service.
pub struct RemoteClassifier {
    endpoint: String,
    timeout: Duration,
    client: OnceLock<reqwest::Client>,
}

impl RemoteClassifier {
    #[must_use]
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            client: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn client(&self) -> Result<&reqwest::Client, ClassifierError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        // Idle connections belong to the runtime that opened them and the
        // fallback runtime is dropped after each call, so none are kept.
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;
        Ok(self.client.get_or_init(|| client))
    }

    async fn post(
        &self,
        client: &reqwest::Client,
        request: &ClassificationRequest,
    ) -> Result<ClassificationOutcome, ClassifierError> {
        let response = client
            .post(&self.endpoint)
            .query(&[("model", request.model.id())])
            .header(reqwest::header::CONTENT_TYPE, request.mime.as_str())
            .body(request.bytes.as_ref().clone())
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Service {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| map_transport_error(&e))?;
        let dto: ClassificationDto = serde_json::from_slice(&body)
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;
        ClassificationOutcome::try_from(dto)
    }
}

impl Classifier for RemoteClassifier {
    fn classify(
        &self,
        request: &ClassificationRequest,
        cancel: &CancellationToken,
    ) -> Result<ClassificationOutcome, ClassifierError> {
        if is_cancelled(cancel) {
            return Err(ClassifierError::Cancelled);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            model = request.model.id(),
            bytes = request.bytes.len(),
            "sending image to inference service"
        );

        let client = self.client()?;
        block_on(async {
            tokio::select! {
                biased;
                () = cancelled(cancel) => {
                    tracing::debug!(endpoint = %self.endpoint, "inference request abandoned");
                    Err(ClassifierError::Cancelled)
                }
                result = self.post(client, request) => result,
            }
        })?
    }

    fn descriptor(&self) -> ClassifierDescriptor {
        ClassifierDescriptor {
            backend: "remote",
            simulated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::classifier::{cancel, new_cancellation_token};
    use crate::domain::classification::ModelProfile;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::thread::JoinHandle;

    struct Captured {
        request_line: String,
        content_type: String,
        body: Vec<u8>,
    }

    /// Serves exactly one HTTP request with the given status and body.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");

            let mut content_type = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    let value = value.trim();
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.parse().expect("content length");
                    } else if name.eq_ignore_ascii_case("content-type") {
                        content_type = value.to_string();
                    }
                }
            }
            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).expect("body");

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("response");
            stream.flush().expect("flush");

            Captured {
                request_line: request_line.trim_end().to_string(),
                content_type,
                body: request_body,
            }
        });
        (format!("http://{addr}/classify"), handle)
    }

    fn request() -> ClassificationRequest {
        ClassificationRequest {
            file_name: "slice.png".to_string(),
            mime: "image/png".to_string(),
            bytes: Arc::new(vec![0x89, b'P', b'N', b'G']),
            model: ModelProfile::Orion,
        }
    }

    #[test]
    fn successful_response_is_converted() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"stage":"Very Mild Dementia","confidence":67.3,"description":"Early signs.","confidence_level":"uncertain","all_predictions":[{"stage":"Very Mild Dementia","confidence":67.3},{"stage":"Normal","confidence":22.1}]}"#,
        );
        let classifier = RemoteClassifier::new(endpoint, Duration::from_secs(5));

        let outcome = classifier
            .classify(&request(), &new_cancellation_token())
            .expect("classification");
        let captured = server.join().expect("server thread");

        assert_eq!(outcome.stage, Stage::VeryMildDementia);
        assert_eq!(outcome.tier, ConfidenceTier::Uncertain);
        assert_eq!(outcome.description, "Early signs.");
        assert_eq!(outcome.breakdown.len(), 2);
        assert_eq!(outcome.breakdown[1].stage, Stage::Normal);

        assert!(captured.request_line.starts_with("POST /classify?model=orion "));
        assert_eq!(captured.content_type, "image/png");
        assert_eq!(captured.body, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn server_error_maps_to_service_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "{}");
        let classifier = RemoteClassifier::new(endpoint, Duration::from_secs(5));

        let result = classifier.classify(&request(), &new_cancellation_token());
        server.join().expect("server thread");

        assert_eq!(result, Err(ClassifierError::Service { status: 500 }));
    }

    #[test]
    fn unknown_stage_is_invalid_response() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"stage":"Severe","confidence":50.0,"confidence_level":"certain"}"#,
        );
        let classifier = RemoteClassifier::new(endpoint, Duration::from_secs(5));

        let result = classifier.classify(&request(), &new_cancellation_token());
        server.join().expect("server thread");

        assert!(matches!(result, Err(ClassifierError::InvalidResponse(_))));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let dto = ClassificationDto {
            stage: "Normal".into(),
            confidence: 140.0,
            description: String::new(),
            confidence_level: "certain".into(),
            all_predictions: Vec::new(),
        };
        assert!(matches!(
            ClassificationOutcome::try_from(dto),
            Err(ClassifierError::InvalidResponse(_))
        ));
    }

    #[test]
    fn unreachable_service_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("addr");
        let classifier =
            RemoteClassifier::new(format!("http://{addr}/classify"), Duration::from_secs(2));

        let result = classifier.classify(&request(), &new_cancellation_token());
        assert!(matches!(
            result,
            Err(ClassifierError::Transport(_) | ClassifierError::Timeout)
        ));
    }

    #[test]
    fn reset_during_request_returns_promptly() {
        // Accepts the connection but never answers.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                std::thread::sleep(Duration::from_secs(10));
                drop(stream);
            }
        });

        let classifier =
            RemoteClassifier::new(format!("http://{addr}/classify"), Duration::from_secs(30));
        let token = new_cancellation_token();
        let canceller = Arc::clone(&token);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(200));
            cancel(&canceller);
        });

        let started = std::time::Instant::now();
        let result = classifier.classify(&request(), &token);

        assert_eq!(result, Err(ClassifierError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn cancelled_request_is_never_sent() {
        let classifier =
            RemoteClassifier::new("http://127.0.0.1:9/classify".into(), Duration::from_secs(1));
        let token = new_cancellation_token();
        cancel(&token);
        assert_eq!(
            classifier.classify(&request(), &token),
            Err(ClassifierError::Cancelled)
        );
    }
}
