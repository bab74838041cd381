use thiserror::Error;

use super::flags::{CliFlags, CommandMode};
use crate::pass::{CharClass, ClassFlags};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid class set: {0} (use letters from \"luds\")")]
    InvalidClasses(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--secure" => flags.secure = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-c" | "--command" => {
                flags.command = match args.get(i + 1).map(String::as_str) {
                    Some("get") => {
                        i += 1;
                        CommandMode::Get
                    }
                    Some("unset") => {
                        i += 1;
                        CommandMode::Unset
                    }
                    Some("set") => {
                        i += 1;
                        CommandMode::Set
                    }
                    Some(_) => CommandMode::Set,
                    None if i == 1 => CommandMode::Unset,
                    None => CommandMode::Set,
                }
            }
            "--no-lower" => flags.disabled.push(CharClass::Lower),
            "--no-upper" => flags.disabled.push(CharClass::Upper),
            "--no-digits" => flags.disabled.push(CharClass::Digit),
            "--no-symbols" => flags.disabled.push(CharClass::Symbol),
            "-C" | "--classes" => {
                let set = value(args, &mut i)?;
                flags.classes = Some(
                    ClassFlags::from_letters(set)
                        .ok_or_else(|| ParseError::InvalidClasses(set.to_string()))?,
                );
            }
            "-l" | "--length" => {
                let n = value(args, &mut i)?;
                flags.length = Some(
                    n.parse()
                        .map_err(|_| ParseError::InvalidNumber(n.to_string()))?,
                );
            }
            "-n" | "--number" => {
                let n = value(args, &mut i)?;
                flags.number = Some(
                    n.parse()
                        .map_err(|_| ParseError::InvalidNumber(n.to_string()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("roundpass")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_number_and_classes() {
        let flags = parse(&args("-l 16 -n 3 -C ld --no-digits")).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.class_flags(ClassFlags::ALL), ClassFlags::from_letters("l").unwrap());
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn negative_length_is_accepted() {
        assert_eq!(parse(&args("--length -4")).unwrap().length, Some(-4));
    }

    #[test]
    fn no_flags_disable_from_base() {
        let flags = parse(&args("--no-symbols --no-upper")).unwrap();
        assert_eq!(flags.class_flags(ClassFlags::ALL), ClassFlags::from_letters("ld").unwrap());
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse(&args("-l twelve")).unwrap_err(),
            ParseError::InvalidNumber("twelve".into())
        );
        assert_eq!(
            parse(&args("-C xyz")).unwrap_err(),
            ParseError::InvalidClasses("xyz".into())
        );
        assert_eq!(
            parse(&args("-n")).unwrap_err(),
            ParseError::MissingValue("-n".into())
        );
        assert_eq!(
            parse(&args("--bogus")).unwrap_err(),
            ParseError::UnknownArg("--bogus".into())
        );
    }

    #[test]
    fn file_output_flag_is_rejected() {
        assert_eq!(
            parse(&args("-o pw.txt")).unwrap_err(),
            ParseError::UnknownArg("-o".into())
        );
        assert_eq!(
            parse(&args("--output")).unwrap_err(),
            ParseError::UnknownArg("--output".into())
        );
    }

    #[test]
    fn command_modes() {
        assert_eq!(parse(&args("-c")).unwrap().command, CommandMode::Unset);
        assert_eq!(parse(&args("-c get")).unwrap().command, CommandMode::Get);
        assert_eq!(parse(&args("-c unset")).unwrap().command, CommandMode::Unset);
        assert_eq!(parse(&args("-c set -l 9")).unwrap().command, CommandMode::Set);
        assert_eq!(parse(&args("-c -l 9")).unwrap().command, CommandMode::Set);
        assert_eq!(parse(&args("-l 9 -c")).unwrap().command, CommandMode::Set);
    }
}
