//! PTNM code string parser implementation using nom.
//!
//! Accepts exactly the canonical form `P{sub}T{sub}N{sub}M{sub}`, with
//! surrounding whitespace ignored.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{all_consuming, value},
    sequence::{preceded, tuple},
    IResult,
};

use crate::code::{Mode, NonPdComponent, PdComponent, PtnmCode, Trauma};
use crate::error::{CodeError, CodeResult};

/// Parse a PTNM code string.
///
/// # Examples
///
/// ```rust
/// use ptnm::{parse_code, Mode, PdComponent};
///
/// let code = parse_code("PClT1N0M0").unwrap();
/// assert_eq!(code.p, PdComponent::Classical);
/// assert_eq!(code.m, Mode::Stable);
///
/// assert!(parse_code("PXT0N0M0").is_err());
/// ```
pub fn parse_code(input: &str) -> CodeResult<PtnmCode> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CodeError::EmptyCode);
    }

    match all_consuming(ptnm_code)(input) {
        Ok((_, code)) => Ok(code),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            if e.input.is_empty() {
                return Err(CodeError::Incomplete(input.to_string()));
            }
            let position = input.len() - e.input.len();
            Err(CodeError::ParseError {
                position,
                message: format!("unexpected input at: '{}'", truncate(e.input, 8)),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(CodeError::Incomplete(input.to_string())),
    }
}

fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn ptnm_code(input: &str) -> IResult<&str, PtnmCode> {
    let (input, (p, t, n, m)) = tuple((
        preceded(char('P'), pd_component),
        preceded(char('T'), trauma),
        preceded(char('N'), non_pd_component),
        preceded(char('M'), mode),
    ))(input)?;

    Ok((input, PtnmCode::new(p, t, n, m)))
}

fn pd_component(input: &str) -> IResult<&str, PdComponent> {
    alt((
        // Two-letter tokens before the single `P`
        value(PdComponent::Classical, tag("Cl")),
        value(PdComponent::Calcifying, tag("Ca")),
        value(PdComponent::None, char('0')),
        value(PdComponent::Progressive, char('P')),
        value(PdComponent::RelapsingRemitting, char('R')),
        value(PdComponent::Undifferentiated, char('U')),
    ))(input)
}

fn trauma(input: &str) -> IResult<&str, Trauma> {
    alt((
        value(Trauma::Absent, char('0')),
        value(Trauma::Present, char('1')),
    ))(input)
}

fn non_pd_component(input: &str) -> IResult<&str, NonPdComponent> {
    alt((
        value(NonPdComponent::None, char('0')),
        value(NonPdComponent::Congenital, char('C')),
        value(NonPdComponent::Maturational, char('M')),
        value(NonPdComponent::Undifferentiated, char('U')),
    ))(input)
}

fn mode(input: &str) -> IResult<&str, Mode> {
    alt((
        value(Mode::Stable, char('0')),
        value(Mode::Active, char('1')),
        value(Mode::NotApplicable, char('x')),
    ))(input)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classical() {
        let code = parse_code("PClT1N0M0").unwrap();
        assert_eq!(
            code,
            PtnmCode::new(
                PdComponent::Classical,
                Trauma::Present,
                NonPdComponent::None,
                Mode::Stable
            )
        );
    }

    #[test]
    fn test_parse_progressive_is_not_confused_with_axis_letter() {
        let code = parse_code("PPT0N0M1").unwrap();
        assert_eq!(code.p, PdComponent::Progressive);
        assert_eq!(code.m, Mode::Active);
    }

    #[test]
    fn test_parse_calcifying() {
        let code = parse_code("PCaT0N0M1").unwrap();
        assert_eq!(code.p, PdComponent::Calcifying);
    }

    #[test]
    fn test_parse_not_applicable_mode() {
        let code = parse_code("P0T0NCMx").unwrap();
        assert_eq!(code.p, PdComponent::None);
        assert_eq!(code.n, NonPdComponent::Congenital);
        assert_eq!(code.m, Mode::NotApplicable);
    }

    #[test]
    fn test_parse_maturational_and_undifferentiated() {
        let code = parse_code("PUT1NMMx").unwrap();
        assert_eq!(code.p, PdComponent::Undifferentiated);
        assert_eq!(code.t, Trauma::Present);
        assert_eq!(code.n, NonPdComponent::Maturational);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(parse_code("  PRT0NUM1 \n").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_code("   "), Err(CodeError::EmptyCode));
    }

    #[test]
    fn test_unknown_token_position() {
        match parse_code("PXT0N0M0") {
            Err(CodeError::ParseError { position, .. }) => assert_eq!(position, 1),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_garbage() {
        match parse_code("PClT1N0M0!") {
            Err(CodeError::ParseError { position, .. }) => assert_eq!(position, 9),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_code() {
        assert!(matches!(
            parse_code("PClT1N0"),
            Err(CodeError::Incomplete(_))
        ));
    }

    #[test]
    fn test_lowercase_axis_letters_rejected() {
        assert!(parse_code("pclt1n0m0").is_err());
    }

    #[test]
    fn test_from_str() {
        let code: PtnmCode = "PClT0N0M0".parse().unwrap();
        assert_eq!(code.to_string(), "PClT0N0M0");
    }
}
