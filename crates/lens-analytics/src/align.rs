//! Put per-document results back into input order.
//!
//! The service splits each response into `documents` and `errors`, keyed by
//! the ids we sent (the input positions). Every position must be answered
//! exactly once.

use crate::error::AnalyticsError;
use crate::wire::DocumentError;

/// Per-position result: the value, or the document's error message.
pub type Slot<T> = Result<T, String>;

/// Merge successes and failures into a vector indexed by document id.
pub fn align<T>(
    operation: &str,
    expected: usize,
    successes: impl IntoIterator<Item = (String, T)>,
    failures: Vec<DocumentError>,
) -> Result<Vec<Slot<T>>, AnalyticsError> {
    let mut slots: Vec<Option<Slot<T>>> = std::iter::repeat_with(|| None).take(expected).collect();

    let failures = failures.into_iter().map(|failure| {
        let message = failure.error.most_specific().message.clone();
        (failure.id, Err(message))
    });

    for (id, slot) in successes.into_iter().map(|(id, v)| (id, Ok(v))).chain(failures) {
        let position = parse_position(operation, &id, expected)?;
        if slots[position].replace(slot).is_some() {
            return Err(AnalyticsError::Parse(format!(
                "{operation} response answered document '{id}' more than once"
            )));
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| {
            slot.ok_or_else(|| {
                AnalyticsError::Parse(format!(
                    "{operation} response has no result for document '{position}'"
                ))
            })
        })
        .collect()
}

fn parse_position(operation: &str, id: &str, expected: usize) -> Result<usize, AnalyticsError> {
    id.parse::<usize>()
        .ok()
        .filter(|position| *position < expected)
        .ok_or_else(|| {
            AnalyticsError::Parse(format!(
                "{operation} response references unknown document '{id}'"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ServiceError;
    use pretty_assertions::assert_eq;

    fn failure(id: &str, message: &str) -> DocumentError {
        DocumentError {
            id: id.into(),
            error: ServiceError {
                code: "InvalidArgument".into(),
                message: message.into(),
                innererror: None,
            },
        }
    }

    #[test]
    fn interleaves_errors_by_id() {
        let slots = align(
            "sentiment",
            3,
            vec![("2".to_string(), 'c'), ("0".to_string(), 'a')],
            vec![failure("1", "Document text is empty.")],
        )
        .unwrap();
        assert_eq!(
            slots,
            vec![Ok('a'), Err("Document text is empty.".to_string()), Ok('c')]
        );
    }

    #[test]
    fn missing_document_is_rejected() {
        let err = align("key phrase", 2, vec![("0".to_string(), ())], vec![]).unwrap_err();
        assert!(matches!(err, AnalyticsError::Parse(ref m) if m.contains("document '1'")));
    }

    #[test]
    fn duplicate_document_is_rejected() {
        let err = align(
            "sentiment",
            1,
            vec![("0".to_string(), ())],
            vec![failure("0", "again")],
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::Parse(ref m) if m.contains("more than once")));
    }

    #[test]
    fn unknown_id_is_rejected() {
        for id in ["7", "doc-1", "-1"] {
            let err = align("sentiment", 2, vec![(id.to_string(), ())], vec![]).unwrap_err();
            assert!(matches!(err, AnalyticsError::Parse(ref m) if m.contains("unknown document")));
        }
    }
}
