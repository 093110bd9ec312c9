//! Rupee formatting with Indian digit grouping (`₹12,34,567.80`).

pub const INR_SYMBOL: &str = "₹";

const PAISE_DIGITS: usize = 2;

/// Formats `value` the way the `en-IN` locale renders an INR amount: two
/// fraction digits rounded half away from zero (on the shortest decimal that
/// round-trips, not the exact binary value), the last three integer digits
/// grouped together and every two digits before that.
pub fn format_inr(value: f64) -> String {
    if value.is_nan() {
        return format!("{INR_SYMBOL}NaN");
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{INR_SYMBOL}∞");
    }

    let (whole, paise) = round_to_paise(value.abs());
    format!("{sign}{INR_SYMBOL}{}.{paise}", group_indian(&whole))
}

fn round_to_paise(magnitude: f64) -> (String, String) {
    let (int_part, frac_part) = shortest_decimal(magnitude);

    let mut digits: Vec<u8> = int_part
        .iter()
        .copied()
        .chain(frac_part.iter().copied().chain(std::iter::repeat(b'0')).take(PAISE_DIGITS))
        .collect();

    // Half away from zero on the shortest decimal that round-trips to
    // `magnitude`, so 1.005 becomes 1.01 even though the binary value is
    // slightly below it.
    let round_up = frac_part
        .get(PAISE_DIGITS)
        .is_some_and(|digit| *digit >= b'5');
    if round_up {
        increment(&mut digits);
    }

    let split = digits.len() - PAISE_DIGITS;
    let whole = digits[..split].iter().map(|d| *d as char).collect();
    let paise = digits[split..].iter().map(|d| *d as char).collect();
    (whole, paise)
}

/// Integer and fraction digits of the shortest round-trip form of
/// `magnitude`, taken from its `{:e}` rendering (`1.005e0`, `5e-324`).
fn shortest_decimal(magnitude: f64) -> (Vec<u8>, Vec<u8>) {
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let significant: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let point = exponent + 1;
    if point <= 0 {
        let leading_zeros = std::iter::repeat(b'0').take(point.unsigned_abs() as usize);
        return (vec![b'0'], leading_zeros.chain(significant).collect());
    }

    let point = point as usize;
    if point >= significant.len() {
        let trailing_zeros = point - significant.len();
        let mut whole = significant;
        whole.extend(std::iter::repeat(b'0').take(trailing_zeros));
        return (whole, Vec::new());
    }

    let fraction = significant[point..].to_vec();
    let mut whole = significant;
    whole.truncate(point);
    (whole, fraction)
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (mut rest, tail) = whole.split_at(whole.len() - 3);
    let mut groups = Vec::new();
    while rest.len() > 2 {
        let (head, group) = rest.split_at(rest.len() - 2);
        groups.push(group);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands_with_paise() {
        assert_eq!(format_inr(1234.5), "₹1,234.50");
        assert_eq!(format_inr(50000.0), "₹50,000.00");
    }

    #[test]
    fn groups_lakhs_and_crores_in_pairs() {
        assert_eq!(format_inr(1234567.8), "₹12,34,567.80");
        assert_eq!(format_inr(12345678901.0), "₹12,34,56,78,901.00");
    }

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(7.0), "₹7.00");
        assert_eq!(format_inr(100.0), "₹100.00");
    }

    #[test]
    fn halves_round_away_from_zero_on_shortest_decimal() {
        assert_eq!(format_inr(1.005), "₹1.01");
        assert_eq!(format_inr(2.675), "₹2.68");
        assert_eq!(format_inr(0.125), "₹0.13");
        assert_eq!(format_inr(1.004), "₹1.00");
    }

    #[test]
    fn tiny_and_huge_magnitudes() {
        assert_eq!(format_inr(0.001), "₹0.00");
        assert_eq!(format_inr(0.005), "₹0.01");
        assert_eq!(format_inr(1e21), "₹1,00,00,00,00,00,00,00,00,00,000.00");
    }

    #[test]
    fn rounding_carries_into_new_group() {
        assert_eq!(format_inr(999.999), "₹1,000.00");
        assert_eq!(format_inr(99999.999), "₹1,00,000.00");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_inr(-1234.5), "-₹1,234.50");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_inr(f64::NAN), "₹NaN");
        assert_eq!(format_inr(f64::INFINITY), "₹∞");
        assert_eq!(format_inr(f64::NEG_INFINITY), "-₹∞");
    }
}
