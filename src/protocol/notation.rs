//! Text form of grid coordinates: `x,y`.

use crate::board::Coord;

/// Errors that can occur while parsing a coordinate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 'x,y', got '{0}'")]
    Malformed(String),

    #[error("invalid number in coordinate: '{0}'")]
    InvalidNumber(String),
}

/// Parses `x,y` (surrounding whitespace allowed). Negative and oversized
/// values are accepted here and rejected by the rules as out of range.
pub fn parse_coord(s: &str) -> Result<Coord, NotationError> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| NotationError::Malformed(s.to_string()))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|_| NotationError::InvalidNumber(part.to_string()))
    };
    Ok(Coord::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_spaced() {
        assert_eq!(parse_coord("1,3"), Ok(Coord::new(1, 3)));
        assert_eq!(parse_coord(" 7 , 1 "), Ok(Coord::new(7, 1)));
        assert_eq!(parse_coord("-1,0"), Ok(Coord::new(-1, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_coord("13"), Err(NotationError::Malformed("13".to_string())));
        assert_eq!(parse_coord("a,1"), Err(NotationError::InvalidNumber("a".to_string())));
    }

    #[test]
    fn display_form_parses_back() {
        let c = Coord::new(4, 6);
        assert_eq!(c.to_string(), "4,6");
        assert_eq!(parse_coord(&c.to_string()), Ok(c));
    }
}
