use leptos::prelude::*;

/// StatCard component - one summary figure with a label
///
/// `value` is pre-formatted by the caller; `None` renders a placeholder while
/// the summary request is in flight or has failed.
#[component]
pub fn StatCard(
    label: &'static str,

    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "...".to_string())}
            </div>
        </div>
    }
}

/// "Rs. 1,234,567.50" with exactly two decimals.
pub fn format_amount(value: f64) -> String {
    format!("Rs. {}", group_thousands(&format!("{value:.2}")))
}

/// "1,234,567" for whole counts.
pub fn format_count(value: i64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(raw: &str) -> String {
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_amount(1_234_567.5), "Rs. 1,234,567.50");
        assert_eq!(format_amount(0.0), "Rs. 0.00");
        assert_eq!(format_amount(999.0), "Rs. 999.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_grouping() {
        assert_eq!(format_amount(-12_500.25), "Rs. -12,500.25");
    }

    #[test]
    fn counts_group_without_decimals() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }
}
