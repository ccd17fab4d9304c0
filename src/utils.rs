/// Formats an integer with `'` as the thousands delimiter.
pub fn with_delimiters(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead {
            result.push('\'');
        }
        result.push(c);
    }
    result
}
