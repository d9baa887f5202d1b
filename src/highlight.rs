/// Emphasize the words of a result description that contain a query term.
///
/// Both texts are split on single spaces and compared case-insensitively.
/// A matching word is wrapped in `<em>` once, however many terms it contains.
pub fn highlight(description: &str, query: &str) -> String {
    let terms: Vec<String> = query
        .split(' ')
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect();

    if terms.is_empty() {
        return description.to_owned();
    }

    let mut result = String::with_capacity(description.len() + 16);
    for (i, word) in description.split(' ').enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let lower = word.to_lowercase();
        if !word.is_empty() && terms.iter().any(|term| lower.contains(term.as_str())) {
            result.push_str("<em>");
            result.push_str(word);
            result.push_str("</em>");
        } else {
            result.push_str(word);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_words() {
        assert_eq!(
            highlight("Big cats of Africa", "cats africa"),
            "Big <em>cats</em> of <em>Africa</em>"
        );
    }

    #[test]
    fn test_highlight_substring() {
        assert_eq!(
            highlight("Wildcats, bobcats and lynx.", "cat"),
            "<em>Wildcats,</em> <em>bobcats</em> and lynx."
        );
    }

    #[test]
    fn test_highlight_wraps_once() {
        assert_eq!(highlight("catdog", "cat dog"), "<em>catdog</em>");
    }

    #[test]
    fn test_highlight_empty_query() {
        assert_eq!(highlight("nothing here", ""), "nothing here");
        assert_eq!(highlight("nothing here", "  "), "nothing here");
    }

    #[test]
    fn test_highlight_keeps_spacing() {
        assert_eq!(highlight("a  cat", "cat"), "a  <em>cat</em>");
    }
}
