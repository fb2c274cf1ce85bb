//! Display formatting for names, money and durations.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// First character of each space-separated word: `Sarah Johnson` -> `SJ`.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}

/// Whole-unit currency with thousands separators: `$1,234`.
pub fn money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `45 min`
pub fn duration(minutes: u16) -> String {
    format!("{minutes} min")
}
