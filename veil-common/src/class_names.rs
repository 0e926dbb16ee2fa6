/// Join class name fragments, skipping empty and absent ones.
///
/// Fragments are trimmed; the result has single spaces between classes.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_present_parts() {
        assert_eq!(
            class_names([Some("p-confirm-dialog"), Some("danger")]),
            "p-confirm-dialog danger"
        );
    }

    #[test]
    fn test_skips_absent_and_blank() {
        assert_eq!(
            class_names([Some("p-confirm-dialog-reject"), None, Some("  "), Some(" wide ")]),
            "p-confirm-dialog-reject wide"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(class_names([None, None]), "");
    }
}
