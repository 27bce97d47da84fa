//! Raw long-flag scanning.
//!
//! Flags are plain tokens: `--release` is present or not, and
//! `--name=value` carries its value after the first `=`. There are no short
//! flags, no combined flags and no `--` terminator.

/// Whether `--<name>` appears exactly.
pub fn has(args: &[String], name: &str) -> bool {
    let flag = format!("--{}", name);
    args.iter().any(|arg| *arg == flag)
}

/// Value of the first `--<key>=<value>` token.
pub fn value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    let prefix = format!("--{}=", key);
    args.iter()
        .find(|arg| arg.starts_with(&prefix))
        .and_then(|arg| arg.split_once('='))
        .map(|(_, value)| value)
}

/// Tokens that are neither `--<name>` nor `--<name>=...` for any of `names`.
pub fn strip(args: &[String], names: &[&str]) -> Vec<String> {
    args.iter()
        .filter(|arg| !names.iter().any(|name| is_flag(arg, name)))
        .cloned()
        .collect()
}

fn is_flag(arg: &str, name: &str) -> bool {
    arg.strip_prefix("--")
        .and_then(|rest| rest.strip_prefix(name))
        .is_some_and(|tail| tail.is_empty() || tail.starts_with('='))
}
