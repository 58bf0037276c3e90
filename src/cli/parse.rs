use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--symbols" => flags.symbols = true,
            "--strength" => flags.strength = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "-l" | "--length" => flags.length = Some(numeric_value(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(numeric_value(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => value
            .parse()
            .map_err(|_| ParseError::InvalidNumber(value.clone())),
        None => Err(ParseError::MissingValue(flag.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("randstr")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_count() {
        let flags = parse(&args(&["-l", "32", "-n", "5"])).unwrap();
        assert_eq!(flags.length, Some(32));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-upper", "--no-digits", "-s"])).unwrap();
        assert!(flags.no_upper && flags.no_digits && flags.symbols);
        assert!(!flags.no_lower);
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse(&args(&["--bogus"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownArg("--bogus".to_string()));
    }

    #[test]
    fn rejects_bad_number() {
        let err = parse(&args(&["-l", "many"])).unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber("many".to_string()));
    }

    #[test]
    fn rejects_dangling_flag() {
        let err = parse(&args(&["-n"])).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("-n".to_string()));
    }

    #[test]
    fn no_args_is_all_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert_eq!(flags.length, None);
        assert_eq!(flags.number, None);
        assert!(!flags.help && !flags.clipboard && !flags.strength);
    }
}
