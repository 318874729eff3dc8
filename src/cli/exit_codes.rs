//! Exit codes for the CLI
//!
//! Standard exit codes used by the RuleDeck CLI for scripting.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Page rendered |
//! | 2 | `NOT_FOUND` | Rule not found | "No item found" page rendered |
//! | 3 | `ERROR` | Runtime error | Catalog unreadable, clipboard unavailable |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Configuration already exists without `--force` |

/// Success - command completed normally.
pub const SUCCESS: i32 = 0;

/// The requested rule is not in the catalog.
///
/// `render` still emits the "No item found" page.
pub const NOT_FOUND: i32 = 2;

/// Runtime error (file not found, invalid catalog, clipboard failure).
pub const ERROR: i32 = 3;

/// Invalid arguments or refused operation.
pub const INVALID_ARGS: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, NOT_FOUND, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(
                    codes[i], codes[j],
                    "Exit codes should be unique: {} and {} are both {}",
                    i, j, codes[i]
                );
            }
        }
    }
}
