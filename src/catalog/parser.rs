use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::CatalogError;

const DEFAULT_MIN_TENURE: u32 = 6;
const DEFAULT_MAX_TENURE: u32 = 60;
const DEFAULT_ELIGIBILITY: f64 = 0.5;

#[derive(Debug)]
pub(crate) struct OfferRecord {
    pub(crate) loan_type: String,
    pub(crate) min_amount: f64,
    pub(crate) max_amount: f64,
    pub(crate) min_tenure: u32,
    pub(crate) max_tenure: u32,
    pub(crate) interest_rate: f64,
    pub(crate) eligibility_score: f64,
}

/// Parse the seed CSV into offer records. Rows missing the loan type or the
/// amount bounds are skipped; the tenure bounds and eligibility score fall
/// back to seed defaults when absent.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<OfferRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<OfferRow>() {
        let row = row?;

        let (loan_type, min_amount, max_amount) =
            match (&row.loan_type, &row.min_amount, &row.max_amount) {
                (Some(loan_type), Some(min), Some(max)) => {
                    (loan_type.clone(), min.clone(), max.clone())
                }
                _ => continue,
            };

        records.push(OfferRecord {
            min_amount: parse_number(&loan_type, "min_amount", &min_amount)?,
            max_amount: parse_number(&loan_type, "max_amount", &max_amount)?,
            min_tenure: parse_tenure(&loan_type, "min_tenure", &row.min_tenure, DEFAULT_MIN_TENURE)?,
            max_tenure: parse_tenure(&loan_type, "max_tenure", &row.max_tenure, DEFAULT_MAX_TENURE)?,
            interest_rate: match &row.interest_rate {
                Some(value) => parse_number(&loan_type, "interest_rate", value)?,
                None => {
                    return Err(CatalogError::InvalidOffer {
                        loan_type,
                        reason: "missing interest_rate".to_string(),
                    })
                }
            },
            eligibility_score: match &row.eligibility_score {
                Some(value) => parse_number(&loan_type, "eligibility_score", value)?,
                None => DEFAULT_ELIGIBILITY,
            },
            loan_type,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct OfferRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    loan_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    min_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    min_tenure: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_tenure: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    interest_rate: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    eligibility_score: Option<String>,
}

fn parse_number(loan_type: &str, field: &str, value: &str) -> Result<f64, CatalogError> {
    value.parse::<f64>().map_err(|_| CatalogError::InvalidOffer {
        loan_type: loan_type.to_string(),
        reason: format!("{field} is not a number: '{value}'"),
    })
}

fn parse_tenure(
    loan_type: &str,
    field: &str,
    value: &Option<String>,
    default: u32,
) -> Result<u32, CatalogError> {
    match value {
        Some(raw) => raw.parse::<u32>().map_err(|_| CatalogError::InvalidOffer {
            loan_type: loan_type.to_string(),
            reason: format!("{field} is not a month count: '{raw}'"),
        }),
        None => Ok(default),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
