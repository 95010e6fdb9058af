use chrono::NaiveDate;
use serde::Serialize;

/// Known document types accepted by the create-document endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocType {
    #[serde(rename = "LP_INTRODUCE_GOODS")]
    LpIntroduceGoods,
}

/// The `description` block of the wire document.
///
/// The remote contract spells this one field in camelCase, unlike the rest
/// of the document.
#[derive(Debug, Clone, Serialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// The `products` block of the wire document.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

/// A goods-introduction document in the registry's wire layout.
///
/// Field names and nesting are an external contract fixed by the remote
/// service; the mix of snake_case and camelCase is theirs, not ours.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: DocType,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: String,
    pub products: Product,
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

/// Encodes a document into its canonical wire form.
///
/// Pure and side-effect free; the registry accepts pretty-printed JSON and
/// dates as `YYYY-MM-DD`.
pub fn encode(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
