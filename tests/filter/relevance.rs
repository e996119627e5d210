use sentiment_report::{MalformedScorePolicy, ReportError, relevant_sentiments};

use crate::common::{item, sentiment};

#[test]
fn keeps_only_matching_symbol_above_threshold_in_order() {
    let it = item(
        "Mixed",
        vec![
            sentiment("AAPL", "0.9", "0.2", "Somewhat-Bullish"),
            sentiment("MSFT", "0.95", "0.1", "Neutral"),
            sentiment("AAPL", "0.4", "0.3", "Somewhat-Bullish"),
            sentiment("aapl", "0.8", "0.3", "Somewhat-Bullish"),
            sentiment("AAPL", "0.41", "-0.2", "Somewhat-Bearish"),
        ],
    );

    let got = relevant_sentiments(&it, "AAPL", MalformedScorePolicy::Abort).unwrap();
    let scores: Vec<&str> = got.iter().map(|ts| ts.relevance_score.as_str()).collect();
    assert_eq!(scores, vec!["0.9", "0.41"]);
    assert!(got.iter().all(|ts| ts.ticker == "AAPL"));
}

#[test]
fn threshold_is_strict() {
    let it = item("Edge", vec![sentiment("AAPL", "0.400000", "0.1", "Neutral")]);
    assert!(
        relevant_sentiments(&it, "AAPL", MalformedScorePolicy::Abort)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn no_entries_yields_empty() {
    let it = item("Nothing", vec![]);
    assert!(
        relevant_sentiments(&it, "AAPL", MalformedScorePolicy::Abort)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn malformed_score_aborts_by_default() {
    let it = item("Broken", vec![sentiment("AAPL", "high", "0.1", "Neutral")]);
    let err = relevant_sentiments(&it, "AAPL", MalformedScorePolicy::default()).unwrap_err();
    match err {
        ReportError::MalformedData(msg) => assert!(msg.contains("high"), "message was {msg}"),
        other => panic!("expected MalformedData, got {other:?}"),
    }
}

#[test]
fn malformed_score_on_other_ticker_is_never_parsed() {
    let it = item(
        "Other",
        vec![
            sentiment("MSFT", "high", "0.1", "Neutral"),
            sentiment("AAPL", "0.7", "0.1", "Neutral"),
        ],
    );
    let got = relevant_sentiments(&it, "AAPL", MalformedScorePolicy::Abort).unwrap();
    assert_eq!(got.len(), 1);
}

#[test]
fn skip_policy_drops_malformed_entry() {
    let it = item(
        "Partly broken",
        vec![
            sentiment("AAPL", "N/A", "0.1", "Neutral"),
            sentiment("AAPL", "0.5", "0.1", "Neutral"),
        ],
    );
    let got = relevant_sentiments(&it, "AAPL", MalformedScorePolicy::Skip).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].relevance_score, "0.5");
}
