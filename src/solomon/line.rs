pub type NomResult<I, O> = nom::IResult<I, O, nom::error::VerboseError<I>>;

/// One input line, after trimming.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Header(&'a str),
    Data(Vec<&'a str>),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            Line::Blank
        } else if is_section_header(line) {
            Line::Header(line)
        } else {
            Line::Data(split_fields(line))
        }
    }
}

/// True when the line has at least one cased character and none of them
/// are lower-case. Digits, spaces and punctuation don't count either way,
/// so "C102" and "CUST NO." are headers while "25 200" is not.
pub fn is_section_header(line: &str) -> bool {
    let mut cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}

/// Whitespace separated fields of a line, in order. Whitespace is anything
/// `char::is_whitespace` accepts, the same set `str::trim` strips.
pub fn split_fields(line: &str) -> Vec<&str> {
    match fields(line) {
        Ok((_, fields)) => fields,
        // Separator and field between them cover every char, so the
        // remainder is always whitespace and all_consuming cannot fail
        Err(_) => unreachable!("unconsumed input in {:?}", line),
    }
}

fn fields(i: &str) -> NomResult<&str, Vec<&str>> {
    use nom::{
        bytes::complete::{take_till1, take_while},
        combinator::all_consuming,
        multi::many0,
        sequence::{preceded, terminated},
    };

    fn separator(i: &str) -> NomResult<&str, &str> {
        take_while(char::is_whitespace)(i)
    }

    all_consuming(terminated(
        many0(preceded(separator, take_till1(char::is_whitespace))),
        separator,
    ))(i)
}

#[cfg(test)]
mod tests {
    use super::{is_section_header, split_fields, Line};

    #[test]
    fn headers() {
        assert!(is_section_header("VEHICLE"));
        assert!(is_section_header("CUSTOMER"));
        assert!(is_section_header("C102"));
        assert!(is_section_header("CUST NO.  XCOORD.   YCOORD."));
        assert!(is_section_header("NUMBER     CAPACITY"));
    }

    #[test]
    fn not_headers() {
        assert!(!is_section_header(""));
        assert!(!is_section_header("25 200"));
        assert!(!is_section_header("Vehicle"));
        assert!(!is_section_header("vehicle"));
        assert!(!is_section_header("VEHICLe"));
        assert!(!is_section_header("-- 1.5 --"));
    }

    #[test]
    fn fields_split_on_any_whitespace() {
        assert_eq!(
            split_fields("  0      40\t\t50          0   "),
            vec!["0", "40", "50", "0"],
        );
        assert_eq!(split_fields("x,y  1.5"), vec!["x,y", "1.5"]);
        assert!(split_fields("").is_empty());
        assert!(split_fields("   ").is_empty());
    }

    #[test]
    fn fields_split_on_unicode_whitespace() {
        assert_eq!(
            split_fields("0 40\u{a0}50\u{c}0"),
            "0 40\u{a0}50\u{c}0".split_whitespace().collect::<Vec<_>>(),
        );
        assert_eq!(
            split_fields("\u{b}1\u{2003}45\u{3000}68\u{85}10\u{2028}"),
            vec!["1", "45", "68", "10"],
        );
        assert!(split_fields("\u{a0}\u{c}\u{b}").is_empty());
    }

    #[test]
    fn classify() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify(" \t "), Line::Blank);
        assert_eq!(Line::classify("  VEHICLE  "), Line::Header("VEHICLE"));
        assert_eq!(Line::classify("  25   200 "), Line::Data(vec!["25", "200"]));
        assert_eq!(
            Line::classify("Depot at 40 50"),
            Line::Data(vec!["Depot", "at", "40", "50"]),
        );
    }
}
