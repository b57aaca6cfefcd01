/// Formats a count with `'` between groups of three digits, e.g. `12'345`.
pub fn with_delimiters(value: u64) -> String {
    let digits = value.to_string().into_bytes();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('\'');
        }
        result.push(d as char);
    }
    result
}
