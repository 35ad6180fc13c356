use expression_evaluator::interpreter::evaluate;
use expression_evaluator::EvaluationError;

const SIGNIFICANT_DIGITS: i32 = 14;

/// Evaluates the expression and renders either its value or the failure,
/// prefixed with `Error: `.
pub fn render(expression: &str) -> String {
    match evaluate(expression) {
        Ok(value) => format_value(value),
        Err(error) => render_error(&error),
    }
}

pub fn render_error(error: &EvaluationError) -> String {
    format!("Error: {}", error)
}

/// Formats a value with at most 14 significant digits, switching to
/// exponent notation (`1.0E+25`) for very large or very small magnitudes.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        let infinity = if value.is_sign_positive() { "INF" } else { "-INF" };
        return infinity.to_string();
    }
    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let mut mantissa = trim_fraction(mantissa);
        if !mantissa.contains('.') {
            mantissa.push_str(".0");
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}E{}{}", mantissa, sign, exponent.abs());
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value))
}

fn trim_fraction(number: &str) -> String {
    if !number.contains('.') {
        return number.to_string();
    }
    number
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
