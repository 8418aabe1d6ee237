/// Lines (or words) holding `<` or `>` are lesson directives, not content.
pub fn is_directive(text: &str) -> bool {
    text.contains('<') || text.contains('>')
}

/// Returns the content lines of a lesson file in order.
///
/// Directive lines and empty lines are dropped; nothing else is touched.
pub fn filter_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.is_empty() && !is_directive(line))
        .map(String::from)
        .collect()
}
