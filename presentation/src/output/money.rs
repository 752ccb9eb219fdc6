//! Currency display helpers

/// Rupees in one lakh
pub const RUPEES_PER_LAKH: f64 = 100_000.0;

/// `151.0` -> `"₹ 151.00 Lakhs"`
pub fn format_lakhs(price: f64) -> String {
    format!("₹ {:.2} Lakhs", price)
}

/// Absolute rupee amount with thousands separators: `151.0` -> `"₹ 15,100,000"`
pub fn format_rupees(price: f64) -> String {
    format!("₹ {}", group_thousands((price * RUPEES_PER_LAKH).round()))
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
