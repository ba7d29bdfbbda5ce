/// Formats `value` as its shortest round-trip decimal form, always keeping a
/// fractional part (`-5.0`, `2.5`) and writing exponents with an explicit
/// sign and at least two digits (`1e-05`, `1e+16`).
pub fn format_repr(value: f64) -> String {
    let debug = format!("{value:?}");

    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}
