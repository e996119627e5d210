use sentiment_report::{BATCH_SEPARATOR, Numbering, Structurer};

use crate::common::feed_with_gaps;

fn position(doc: &str, needle: &str) -> usize {
    doc.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in document:\n{doc}"))
}

fn separator_positions(doc: &str) -> Vec<usize> {
    doc.match_indices(BATCH_SEPARATOR).map(|(i, _)| i).collect()
}

#[test]
fn separators_follow_original_positions_five_and_ten() {
    let feed = feed_with_gaps("AAPL", 12, &[3, 8]);
    let doc = Structurer::new().structure(&feed, "AAPL").unwrap();

    let seps = separator_positions(&doc);
    assert_eq!(seps.len(), 2, "document:\n{doc}");

    assert!(position(&doc, "\n5. Title: Story 5\n") < seps[0]);
    assert!(seps[0] < position(&doc, "\n6. Title: Story 6\n"));
    assert!(position(&doc, "\n10. Title: Story 10\n") < seps[1]);
    assert!(seps[1] < position(&doc, "\n11. Title: Story 11\n"));

    // the separator directly follows the last entry line of the block
    let before_first = &doc[..seps[0]];
    assert!(before_first.ends_with("(Neutral)\n\n"), "got {before_first:?}");
}

#[test]
fn ordinals_keep_gaps_for_skipped_items() {
    let feed = feed_with_gaps("AAPL", 12, &[3, 8]);
    let doc = Structurer::new().structure(&feed, "AAPL").unwrap();

    assert!(doc.contains("\n2. Title: Story 2\n"));
    assert!(!doc.contains("\n3. Title"));
    assert!(doc.contains("\n4. Title: Story 4\n"));
    assert!(!doc.contains("\n8. Title"));
    assert!(doc.contains("\n12. Title: Story 12\n"));
}

#[test]
fn skipped_fifth_item_emits_no_separator() {
    let feed = feed_with_gaps("AAPL", 12, &[5]);
    let doc = Structurer::new().structure(&feed, "AAPL").unwrap();

    let seps = separator_positions(&doc);
    assert_eq!(seps.len(), 1, "document:\n{doc}");
    assert!(position(&doc, "\n10. Title: Story 10\n") < seps[0]);
}

#[test]
fn sequential_numbering_renumbers_emitted_blocks() {
    let feed = feed_with_gaps("AAPL", 12, &[3, 8]);
    let doc = Structurer::new()
        .numbering(Numbering::Sequential)
        .structure(&feed, "AAPL")
        .unwrap();

    assert!(doc.contains("\n3. Title: Story 4\n"));
    assert!(doc.contains("\n10. Title: Story 12\n"));
    assert!(!doc.contains("\n11. Title"));

    let seps = separator_positions(&doc);
    assert_eq!(seps.len(), 2, "document:\n{doc}");
    assert!(position(&doc, "\n5. Title: Story 6\n") < seps[0]);
    assert!(seps[0] < position(&doc, "\n6. Title: Story 7\n"));
    assert!(position(&doc, "\n10. Title: Story 12\n") < seps[1]);
}
