use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;

use window_gate::SlidingLog;

use super::*;

// A mock submitter that counts attempts and answers from a script.
#[derive(Debug)]
struct RecordingSubmitter {
    calls: Arc<AtomicUsize>,
    fail_with_status: Option<StatusCode>,
}

impl RecordingSubmitter {
    fn accepting(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            fail_with_status: None,
        }
    }

    fn rejecting(calls: Arc<AtomicUsize>, status: StatusCode) -> Self {
        Self {
            calls,
            fail_with_status: Some(status),
        }
    }
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, payload: &str, _signature: &str) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with_status {
            Some(status) => Err(TransportError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(format!("accepted {} bytes", payload.len())),
        }
    }
}

fn sample_document() -> Document {
    let date = NaiveDate::from_ymd_opt(2020, 1, 23).unwrap();
    Document {
        description: Description {
            participant_inn: "1234567890".into(),
        },
        doc_id: "doc-1".into(),
        doc_status: "DRAFT".into(),
        doc_type: DocType::LpIntroduceGoods,
        import_request: true,
        owner_inn: "1234567890".into(),
        participant_inn: "1234567890".into(),
        producer_inn: "0987654321".into(),
        production_date: date,
        production_type: "OWN_PRODUCTION".into(),
        products: Product {
            certificate_document: "CONFORMITY_CERTIFICATE".into(),
            certificate_document_date: date,
            certificate_document_number: "cert-42".into(),
            owner_inn: "1234567890".into(),
            producer_inn: "0987654321".into(),
            production_date: date,
            tnved_code: "6403".into(),
            uit_code: "uit".into(),
            uitu_code: "uitu".into(),
        },
        reg_date: date,
        reg_number: "reg-7".into(),
    }
}

fn client_with(
    capacity: usize,
    submitter: RecordingSubmitter,
) -> RegistryClient<SlidingLog, RecordingSubmitter> {
    let gate = Arc::new(SlidingLog::new(Duration::from_secs(5), capacity));
    RegistryClient::from_parts(gate, submitter)
}

#[test]
fn encoding_matches_the_wire_contract() {
    let payload = encode(&sample_document()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    // The one camelCase holdout and a snake_case sibling.
    assert_eq!(value["importRequest"], serde_json::json!(true));
    assert_eq!(value["doc_type"], serde_json::json!("LP_INTRODUCE_GOODS"));

    // Dates serialize as plain YYYY-MM-DD.
    assert_eq!(value["production_date"], serde_json::json!("2020-01-23"));
    assert_eq!(
        value["products"]["certificate_document_date"],
        serde_json::json!("2020-01-23")
    );

    // Nesting: description and products are objects, not flattened.
    assert_eq!(
        value["description"]["participantInn"],
        serde_json::json!("1234567890")
    );
    assert_eq!(value["products"]["tnved_code"], serde_json::json!("6403"));
}

#[tokio::test]
async fn admitted_submission_succeeds() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client_with(1, RecordingSubmitter::accepting(Arc::clone(&calls)));

    let body = client
        .create_document(&sample_document(), "signed")
        .await
        .unwrap();

    assert!(body.starts_with("accepted"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn denial_short_circuits_before_any_transport_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client_with(0, RecordingSubmitter::accepting(Arc::clone(&calls)));

    let err = client
        .create_document(&sample_document(), "signed")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no network I/O on denial");
    assert_eq!(client.gate().occupancy(), 0, "no side effects on denial");
}

#[tokio::test]
async fn transport_failure_is_surfaced_and_the_slot_stays_consumed() {
    let calls = Arc::new(AtomicUsize::new(0));
    let client = client_with(
        1,
        RecordingSubmitter::rejecting(Arc::clone(&calls), StatusCode::BAD_GATEWAY),
    );

    let first = client
        .create_document(&sample_document(), "signed")
        .await
        .unwrap_err();
    assert!(matches!(
        first,
        SubmitError::Submission(TransportError::Status { status, .. })
            if status == StatusCode::BAD_GATEWAY
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The failed attempt used the window slot; the retry is rate limited.
    let second = client
        .create_document(&sample_document(), "signed")
        .await
        .unwrap_err();
    assert!(second.is_rate_limited());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_burst_reaches_the_transport_exactly_capacity_times() {
    let capacity = 4;
    let tasks = 16;

    let calls = Arc::new(AtomicUsize::new(0));
    let client = Arc::new(client_with(
        capacity,
        RecordingSubmitter::accepting(Arc::clone(&calls)),
    ));

    let mut handles = vec![];
    for _ in 0..tasks {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.create_document(&sample_document(), "signed").await
        }));
    }

    let mut accepted = 0;
    let mut limited = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(SubmitError::RateLimited) => limited += 1,
            Err(other) => panic!("unexpected outcome: {other}"),
        }
    }

    assert_eq!(accepted, capacity);
    assert_eq!(limited, tasks - capacity);
    assert_eq!(calls.load(Ordering::SeqCst), capacity);
    assert_eq!(client.gate().occupancy(), capacity);
}
