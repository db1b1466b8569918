//! Default target-type inference from a case name.

/// Uppercase the first character of `case_name`, leaving the rest untouched.
///
/// `detail` becomes `Detail`, `userProfile` becomes `UserProfile`. No other
/// casing or word-boundary rewriting happens. An empty name is returned as is.
///
/// Characters whose uppercase form expands to several characters (`ß` to
/// `SS`) are kept as written so the result has the same character count.
pub fn infer_target_name(case_name: &str) -> String {
    let mut chars = case_name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(case_name.len());
    out.push(head);
    out.push_str(chars.as_str());
    out
}
