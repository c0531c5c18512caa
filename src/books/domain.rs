pub mod model;

// parse_book_id reads a path segment the lenient way: leading whitespace is skipped, an optional
// sign and the leading run of digits are taken and anything after them is ignored ("2abc" is 2).
// A 0x prefix switches to hex digits. Segments without leading digits have no id and can never
// match a book.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x") | Some("0X") => (16, &digits[2..]),
        _ => (10, digits),
    };
    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
