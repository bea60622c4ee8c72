/// Format a rupee amount with Indian digit grouping: the last three
/// digits, then groups of two (12,34,567.89).
pub fn inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts = Vec::new();
        let head_bytes = head.as_bytes();
        let mut i = head_bytes.len();
        while i > 2 {
            parts.push(&head[i - 2..i]);
            i -= 2;
        }
        parts.push(&head[..i]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        paise
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_indian_style() {
        assert_eq!(inr(500.0), "₹500.00");
        assert_eq!(inr(16134.0), "₹16,134.00");
        assert_eq!(inr(500000.0), "₹5,00,000.00");
        assert_eq!(inr(1234567.89), "₹12,34,567.89");
        assert_eq!(inr(20000000.0), "₹2,00,00,000.00");
    }

    #[test]
    fn handles_negatives_and_rounding() {
        assert_eq!(inr(-1500.5), "-₹1,500.50");
        assert_eq!(inr(0.999), "₹1.00");
    }
}
