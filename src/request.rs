use std::ffi::OsStr;
use std::path::PathBuf;

/// Paths dumped when no path tokens are given.
pub const DEFAULT_FILES: [&str; 2] = ["bitrev_output.hex", "fft_output.hex"];

/// Leading token that used to mean "skip the bit-reversal stage".
const SKIP_BITREV_TOKEN: &str = "-1";

/// Verbosity flags accepted for compatibility; they do nothing here.
const IGNORED_FLAGS: [&str; 2] = ["V", "NV"];

fn is_skip_token(token: &OsStr) -> bool {
    token.to_str() == Some(SKIP_BITREV_TOKEN)
}

fn is_ignored_flag(token: &OsStr) -> bool {
    // non-UTF-8 tokens are always paths
    token
        .to_str()
        .is_some_and(|t| IGNORED_FLAGS.contains(&t.to_uppercase().as_str()))
}

/// Turn raw argument tokens into the ordered list of paths to dump.
///
/// A leading `-1` is dropped, then every `V`/`NV` token (any case). An empty
/// result falls back to [`DEFAULT_FILES`].
pub fn normalize_request<S: AsRef<OsStr>>(tokens: &[S]) -> Vec<PathBuf> {
    let tokens = match tokens.split_first() {
        Some((first, rest)) if is_skip_token(first.as_ref()) => rest,
        _ => tokens,
    };

    let paths: Vec<PathBuf> = tokens
        .iter()
        .map(AsRef::<OsStr>::as_ref)
        .filter(|token| !is_ignored_flag(token))
        .map(PathBuf::from)
        .collect();

    if paths.is_empty() {
        DEFAULT_FILES.iter().map(PathBuf::from).collect()
    } else {
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(tokens: &[&str]) -> Vec<PathBuf> {
        normalize_request(tokens)
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_uses_defaults() {
        assert_eq!(normalize(&[]), paths(&["bitrev_output.hex", "fft_output.hex"]));
    }

    #[test]
    fn leading_skip_token_is_dropped() {
        assert_eq!(
            normalize(&["-1", "a.hex", "b.hex"]),
            normalize(&["a.hex", "b.hex"])
        );
        assert_eq!(normalize(&["-1"]), paths(&DEFAULT_FILES));
    }

    #[test]
    fn skip_token_only_counts_in_first_position() {
        assert_eq!(normalize(&["a.hex", "-1"]), paths(&["a.hex", "-1"]));
        assert_eq!(normalize(&["-1", "-1"]), paths(&["-1"]));
    }

    #[test]
    fn verbosity_flags_removed_in_any_case() {
        assert_eq!(
            normalize(&["v", "a.hex", "NV", "b.hex", "nV", "V"]),
            paths(&["a.hex", "b.hex"])
        );
        assert_eq!(normalize(&["-1", "v", "nv"]), paths(&DEFAULT_FILES));
    }

    #[test]
    fn flags_match_whole_token_only() {
        assert_eq!(
            normalize(&["vv", "env", "nv.hex"]),
            paths(&["vv", "env", "nv.hex"])
        );
    }

    #[test]
    fn hyphen_tokens_are_paths() {
        assert_eq!(normalize(&["-x", "--y", "-"]), paths(&["-x", "--y", "-"]));
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(normalize(&["c", "a", "b"]), paths(&["c", "a", "b"]));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_are_kept_as_paths() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0xff, b'.', b'h', b'e', b'x']);
        let tokens = vec![raw.clone(), OsString::from("v")];
        assert_eq!(normalize_request(&tokens), vec![PathBuf::from(raw)]);
    }
}
