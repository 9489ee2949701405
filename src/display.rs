//! Console progress and summary output.
//!
//! Progress lines use `[*]`/`[+]`/`[!]` tags, colored when the `colors`
//! feature is enabled. None of this output is machine-parseable.

use std::collections::BTreeMap;
use std::path::Path;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self
        }
    }
}

pub fn info(msg: &str) {
    println!("{} {}", "[*]".cyan(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "[+]".green(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "[!]".red(), msg);
}

pub fn print_header(victoria_url: &str, projects_dir: &Path) {
    println!("{} {}", "[*]".cyan(), "Claude Code History Import".bold());
    println!("{} Reading from: {}", "[*]".cyan(), projects_dir.display());
    println!("{} Target: {}", "[*]".cyan(), victoria_url);
    println!();
}

/// Final console summary: message count, per-category token totals (BTreeMap
/// keeps them sorted by category name), total cost to 2 decimals.
pub fn print_summary(
    total_messages: u64,
    token_totals: &BTreeMap<&'static str, u64>,
    total_cost: f64,
) {
    info(&format!("Parsed {} messages", format_count(total_messages)));
    info("Total tokens:");
    for (category, count) in token_totals {
        println!("    - {}: {}", category, format_count(*count));
    }
    info(&format!("Total cost: ${}", format_usd(total_cost)));
    println!();
}

pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

pub fn format_usd(v: f64) -> String {
    let s = format!("{v:.2}");
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("{}.{}", group_thousands(int_part), frac)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "0.00");
        assert_eq!(format_usd(6.0), "6.00");
        assert_eq!(format_usd(1234.567), "1,234.57");
    }
}
