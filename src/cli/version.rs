//! Build version reporting

use std::io::{self, Write};

/// Build version from Cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit hash stamped at build time, "unknown" when not provided
pub const COMMIT: &str = match option_env!("DESK_BLUETOOTH_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Build timestamp stamped at build time, "unknown" when not provided
pub const BUILD_TIME: &str = match option_env!("DESK_BLUETOOTH_BUILD_TIME") {
    Some(time) => time,
    None => "unknown",
};

/// Write the build version, commit and time report
pub fn write<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "desk-bluetooth {}", VERSION)?;
    writeln!(w, "  commit: {}", COMMIT)?;
    writeln!(w, "  built:  {}", BUILD_TIME)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_contains_version() {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        let report = String::from_utf8(buf).unwrap();
        assert!(!report.is_empty());
        assert!(report.contains(VERSION));
        assert!(report.contains("commit:"));
    }
}
