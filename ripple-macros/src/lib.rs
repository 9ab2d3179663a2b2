use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a `Signal` at compile time from a string literal.
///
/// This macro parses the sample list at compile time, sorts it by index and
/// generates a direct `Signal::from_sorted()` call, so no parsing
/// or sorting happens at runtime.
///
/// # Format
///
/// A list of `index value` pairs separated by `,` or `;` where:
/// - `index` is an integer (may be negative)
/// - `value` is any finite real number
/// - indices may appear in any order but must not repeat
/// - an empty string yields the empty signal
///
/// # Examples
///
/// ```ignore
/// use ripple::signal;
///
/// let x = signal!("0 5, 1 -2, 2 7");
///
/// // Order does not matter; pairs are sorted by index
/// let y = signal!("3 1.5; -1 0.25");
///
/// let empty = signal!("");
/// ```
#[proc_macro]
pub fn signal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let source = input.value();

    match parse_samples(&source) {
        Ok(samples) => {
            let indices = samples.iter().map(|&(index, _)| index);
            let values = samples.iter().map(|&(_, value)| value);

            let expanded = quote! {
                {
                    ripple::Signal::from_sorted(
                        vec![#(#indices),*],
                        vec![#(#values),*],
                    )
                }
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid signal literal '{}': {}", source, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn parse_pair(s: &str) -> Result<(i64, f64), String> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let [index, value] = tokens.as_slice() else {
        return Err(format!("expected 'index value', found '{}'", s.trim()));
    };

    let index = index
        .parse::<i64>()
        .map_err(|_| format!("index '{}' is not an integer", index))?;
    let value = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("value '{}' is not a finite number", value))?;

    Ok((index, value))
}

fn parse_samples(s: &str) -> Result<Vec<(i64, f64)>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut samples = s
        .split([',', ';'])
        .map(parse_pair)
        .collect::<Result<Vec<_>, _>>()?;

    samples.sort_by_key(|&(index, _)| index);

    if let Some(pair) = samples.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(format!("duplicate index {}", pair[0].0));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("0 5").unwrap(), (0, 5.0));
        assert_eq!(parse_pair("  -3   0.25 ").unwrap(), (-3, 0.25));
        assert!(parse_pair("1").is_err());
        assert!(parse_pair("1 2 3").is_err());
        assert!(parse_pair("x 2").is_err());
        assert!(parse_pair("1 inf").is_err());
    }

    #[test]
    fn test_parse_samples_sorted() {
        let samples = parse_samples("2 7; 0 5, 1 -2").unwrap();
        assert_eq!(samples, vec![(0, 5.0), (1, -2.0), (2, 7.0)]);
    }

    #[test]
    fn test_parse_samples_empty() {
        assert!(parse_samples("").unwrap().is_empty());
        assert!(parse_samples("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_samples_errors() {
        assert!(parse_samples("0 1, 0 2").is_err());
        assert!(parse_samples("0 1,").is_err());
        assert!(parse_samples("0 1,, 2 3").is_err());
    }
}
