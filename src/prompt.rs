use crate::bodies::{find_body, Body};
use crate::error::ConfigError;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

fn ask(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> io::Result<String> {
    queue!(out, SetForegroundColor(Color::Cyan), Print(question), ResetColor, Print(" "))?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask which body to pin at the origin; returns its index in `bodies`.
pub(crate) fn prompt_central(
    input: &mut impl BufRead,
    out: &mut impl Write,
    bodies: &[Body],
) -> anyhow::Result<usize> {
    let answer = ask(input, out, "Central planet?")?;
    Ok(find_body(bodies, &answer)?)
}

pub(crate) fn prompt_years(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<f64> {
    let answer = ask(input, out, "How many years?")?;
    Ok(parse_years(&answer)?)
}

pub(crate) fn parse_years(s: &str) -> Result<f64, ConfigError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidYears(s.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::quasi_bodies;
    use std::io::Cursor;

    #[test]
    fn reads_central_then_years() {
        let bodies = quasi_bodies();
        let mut input = Cursor::new("  saturn\n2.5\n");
        let mut out = Vec::new();
        let idx = prompt_central(&mut input, &mut out, &bodies).unwrap();
        assert_eq!(bodies[idx].name, "Saturn");
        let years = prompt_years(&mut input, &mut out).unwrap();
        assert_eq!(years, 2.5);

        let shown = String::from_utf8_lossy(&out);
        assert!(shown.contains("Central planet?"));
        assert!(shown.contains("How many years?"));
    }

    #[test]
    fn unknown_name_is_an_error_not_a_panic() {
        let mut input = Cursor::new("Vulcan\n");
        let err = prompt_central(&mut input, &mut Vec::new(), &quasi_bodies()).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::UnknownBody { .. })));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        assert!(prompt_central(&mut input, &mut Vec::new(), &quasi_bodies()).is_err());
        assert!(prompt_years(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn years_must_be_a_positive_number() {
        assert_eq!(parse_years(" 3 "), Ok(3.0));
        assert_eq!(parse_years("0.25"), Ok(0.25));
        for bad in ["", "two", "0", "-1", "NaN", "inf"] {
            assert_eq!(parse_years(bad), Err(ConfigError::InvalidYears(bad.to_string())), "{bad:?}");
        }
    }
}
