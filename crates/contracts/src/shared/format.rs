//! Display formatting shared by tables, cards and exports.

/// `₹1,23,456` (Indian digit grouping, rounded to whole rupees)
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}₹{}", group_indian(&digits))
}

/// `1234567` -> `12,34,567`
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `admin` -> `Admin`
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First letter of each word, upper-cased: `John Doe` -> `JD`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Two-letter badge for a login name: `admin` -> `AD`, `Jane Smith` -> `JS`
pub fn badge(name: &str) -> String {
    let name = name.trim();
    if name.split_whitespace().count() > 1 {
        return initials(name).chars().take(2).collect();
    }
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1250.0), "₹1,250");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(12345678.4), "₹1,23,45,678");
        assert_eq!(format_inr(-5200.0), "-₹5,200");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("admin"), "Admin");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_initials_and_badge() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("  mary  ann  lee "), "MAL");
        assert_eq!(badge("admin"), "AD");
        assert_eq!(badge("Jane Smith"), "JS");
        assert_eq!(badge(""), "");
    }
}
