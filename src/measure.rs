/// Quantity found at the start of a measurement string.
///
/// Forms are tried in priority order: mixed fraction, simple fraction, then
/// decimal or integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedMeasure<'a> {
    /// `<int> <int>/<int>`, e.g. `"1 1/2"`
    Mixed {
        whole: f64,
        numerator: f64,
        denominator: f64,
        suffix: &'a str,
    },
    /// `<int>/<int>`, e.g. `"3/4"`
    Simple {
        numerator: f64,
        denominator: f64,
        suffix: &'a str,
    },
    /// `<digits>(.<digits>)?` or `.<digits>`
    Decimal { value: f64, suffix: &'a str },
    /// No leading quantity
    Unparsed,
}

impl<'a> ParsedMeasure<'a> {
    /// Numeric value of the quantity, `None` when nothing was recognized.
    ///
    /// A zero denominator yields a non-finite value.
    pub fn value(&self) -> Option<f64> {
        match *self {
            ParsedMeasure::Mixed {
                whole,
                numerator,
                denominator,
                ..
            } => Some(whole + numerator / denominator),
            ParsedMeasure::Simple {
                numerator,
                denominator,
                ..
            } => Some(numerator / denominator),
            ParsedMeasure::Decimal { value, .. } => Some(value),
            ParsedMeasure::Unparsed => None,
        }
    }

    /// Text following the quantity, including any separating whitespace.
    pub fn suffix(&self) -> Option<&'a str> {
        match *self {
            ParsedMeasure::Mixed { suffix, .. }
            | ParsedMeasure::Simple { suffix, .. }
            | ParsedMeasure::Decimal { suffix, .. } => Some(suffix),
            ParsedMeasure::Unparsed => None,
        }
    }
}

/// Split a measurement into its leading quantity and trailing text.
///
/// Surrounding whitespace of the whole measurement is ignored.
pub fn parse_measure(raw: &str) -> ParsedMeasure<'_> {
    let text = raw.trim();

    parse_mixed(text)
        .or_else(|| parse_simple(text))
        .or_else(|| parse_decimal(text))
        .unwrap_or(ParsedMeasure::Unparsed)
}

/// Multiply the quantity at the start of `raw` and re-render the measurement.
///
/// Empty input gives an empty string and input without a leading quantity is
/// returned unchanged.
///
/// # Example
/// ```
/// use recipe_scaler::measure::scale_measure;
///
/// assert_eq!(scale_measure("2 cups", 1.5), "3 cups");
/// assert_eq!(scale_measure("1 1/2", 2.0), "3");
/// assert_eq!(scale_measure("pinch of salt", 4.0), "pinch of salt");
/// ```
pub fn scale_measure(raw: &str, multiplier: f64) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let parsed = parse_measure(raw);
    match (parsed.value(), parsed.suffix()) {
        (Some(value), Some(suffix)) => {
            format!("{}{}", format_quantity(value * multiplier), suffix)
        }
        _ => raw.to_string(),
    }
}

/// Round to two decimal places and drop trailing zeros.
///
/// `2.00` renders as `"2"`, `1.50` as `"1.5"`. Rounding applies to the exact
/// stored value, so `0.015` (stored just below the half) renders as `"0.01"`.
/// Magnitudes from `1e21` up use exponent form (`"1e+23"`). Non-finite values
/// render as `"Infinity"`, `"-Infinity"` or `"NaN"`.
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let rounded = round_to_cents(value);

    if rounded == 0.0 {
        // avoids "-0"
        "0".to_string()
    } else if rounded.abs() >= 1e21 {
        exponent_form(rounded)
    } else {
        rounded.to_string()
    }
}

/// Round the exact stored value to two decimals, halves away from zero.
fn round_to_cents(value: f64) -> f64 {
    // Only multiples of 1/8 can sit exactly on a half cent, and fixed
    // precision formatting rounds those to even.
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return (value * 100.0 + 0.5 * value.signum()).trunc() / 100.0;
    }

    format!("{value:.2}").parse().unwrap_or(value)
}

/// `1e23` as `"1e+23"`, `1.5e-7` as `"1.5e-7"`.
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn parse_mixed(text: &str) -> Option<ParsedMeasure<'_>> {
    let (whole, rest) = split_digits(text)?;
    let gap = rest.len() - rest.trim_start().len();
    if gap == 0 {
        return None;
    }
    let (numerator, denominator, suffix) = split_fraction(&rest[gap..])?;

    Some(ParsedMeasure::Mixed {
        whole: parse_number(whole)?,
        numerator: parse_number(numerator)?,
        denominator: parse_number(denominator)?,
        suffix,
    })
}

fn parse_simple(text: &str) -> Option<ParsedMeasure<'_>> {
    let (numerator, denominator, suffix) = split_fraction(text)?;

    Some(ParsedMeasure::Simple {
        numerator: parse_number(numerator)?,
        denominator: parse_number(denominator)?,
        suffix,
    })
}

fn parse_decimal(text: &str) -> Option<ParsedMeasure<'_>> {
    let int_len = digit_len(text);
    let after_int = &text[int_len..];

    let len = match after_int.strip_prefix('.') {
        Some(fraction) if digit_len(fraction) > 0 => int_len + 1 + digit_len(fraction),
        _ if int_len > 0 => int_len,
        _ => return None,
    };

    Some(ParsedMeasure::Decimal {
        value: parse_number(&text[..len])?,
        suffix: &text[len..],
    })
}

/// `<digits>/<digits>` at the start of `text`, as (numerator, denominator, rest).
fn split_fraction(text: &str) -> Option<(&str, &str, &str)> {
    let (numerator, rest) = split_digits(text)?;
    let rest = rest.strip_prefix('/')?;
    let (denominator, suffix) = split_digits(rest)?;
    Some((numerator, denominator, suffix))
}

fn split_digits(text: &str) -> Option<(&str, &str)> {
    match digit_len(text) {
        0 => None,
        len => Some(text.split_at(len)),
    }
}

fn digit_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn parse_number(digits: &str) -> Option<f64> {
    digits.parse().ok()
}
