//! Help screen listing every registered command

use core::fmt::Write as _;

use crate::commands::Registry;
use crate::config::{BACKEND_ENV_VAR, DEFAULT_BACKEND_URI};

/// Render the usage text for `program`
///
/// Lists one line per registered command, sorted by name.
#[must_use]
#[inline]
pub fn render_help(program: &str, registry: &Registry) -> String {
    let mut help = format!("Usage of '{program}'\n <command> [<args>]\n");
    for name in registry.names() {
        let _ = writeln!(help, "{name}\t --help");
    }

    help.push_str("\nOptions:\n");
    let _ = writeln!(
        help,
        "  --backend <URI>  Backend API URL [env: {BACKEND_ENV_VAR}] [default: {DEFAULT_BACKEND_URI}]"
    );
    help.push_str("  --help           Display all the commands and their usage\n");
    help.push_str("  -v, --verbose    Enable verbose logging output\n");
    help
}
