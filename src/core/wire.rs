use serde::{Deserialize, Deserializer};

/// Accepts a JSON string, number or bool and keeps its textual form.
///
/// Alpha Vantage sends most scores as strings (`"0.612"`) but a few as bare
/// numbers; both are normalized to text so they can be echoed verbatim.
pub(crate) fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyScalar {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Text(s)) => Some(s),
        Some(AnyScalar::Number(n)) => Some(n.to_string()),
        Some(AnyScalar::Bool(b)) => Some(b.to_string()),
        None => None,
    })
}
