use serde::{Deserialize, Deserializer};

/// One row of the exchange-rate table.
///
/// `rate` is kept as display text. The backend may send it either as a JSON
/// string or as a number; numbers keep their JSON spelling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeRateRecord {
    pub date: String,
    #[serde(deserialize_with = "rate_text")]
    pub rate: String,
}

impl ExchangeRateRecord {
    pub fn new(date: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            rate: rate.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RateValue {
    Text(String),
    Number(serde_json::Number),
}

fn rate_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RateValue::deserialize(deserializer)? {
        RateValue::Text(text) => text,
        RateValue::Number(number) => number.to_string(),
    })
}
