//! Fires a burst of concurrent submissions through a 2-per-second gate and
//! prints each task's three-way outcome. Pointed at localhost, so admitted
//! tasks will typically report a submission failure unless something is
//! listening there; the interesting part is which tasks get admitted at all.
//!
//! Run with: `cargo run --example burst`

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing_subscriber::EnvFilter;

use ismp_submit::Description;
use ismp_submit::DocType;
use ismp_submit::Document;
use ismp_submit::Product;
use ismp_submit::RegistryClient;
use ismp_submit::SubmitError;

fn sample_document() -> Document {
    let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 23).unwrap();
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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = Url::parse("https://localhost")?;
    let client = Arc::new(RegistryClient::new(base, Duration::from_secs(1), 2)?);
    let document = sample_document();

    let mut handles = vec![];
    for task in 0..10 {
        let client = Arc::clone(&client);
        let document = document.clone();
        handles.push(tokio::spawn(async move {
            (task, client.create_document(&document, "signed").await)
        }));
    }

    for handle in handles {
        let (task, outcome) = handle.await?;
        match outcome {
            Ok(_) => println!("task {task}: success"),
            Err(SubmitError::RateLimited) => println!("task {task}: too many requests"),
            Err(err) => println!("task {task}: request failed ({err})"),
        }
    }

    Ok(())
}
