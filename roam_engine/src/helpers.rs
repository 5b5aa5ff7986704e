//! Helpers Module
//!
//! Small text helpers that don't clearly belong in another module.

/// Join labels as "a", "a or b", "a, b or c".
pub fn or_list<S: AsRef<str>>(labels: &[S]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|label| label.as_ref()).collect();
            format!("{} or {}", head.join(", "), last.as_ref())
        },
    }
}
