//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::confusables::ConfusableTable;
use crate::engine::{Comparison, ConfusableDistance};
use crate::error::DistanceError;
use crate::skeleton::skeleton;

use super::args::{limit_override, Commands};
use super::paths::{LengthLimit, PersistentConfig};

/// Outcome of a command that can partially fail without aborting the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything succeeded
    Success,
    /// At least one comparison was rejected by the engine
    Rejected,
}

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<Outcome> {
    match command {
        Commands::Distance {
            a,
            b,
            max_len,
            no_limit,
            json,
        } => {
            let config = PersistentConfig::load_from(config_path)?
                .merge_with_cli(limit_override(max_len, no_limit), json);
            cmd_distance(&a, &b, &config, &mut std::io::stdout().lock())
        }
        Commands::Skeleton { texts } => {
            cmd_skeleton(&texts)?;
            Ok(Outcome::Success)
        }
        Commands::Class { ch } => {
            cmd_class(ch);
            Ok(Outcome::Success)
        }
        Commands::Batch {
            file,
            max_len,
            no_limit,
            json,
        } => {
            let config = PersistentConfig::load_from(config_path)?
                .merge_with_cli(limit_override(max_len, no_limit), json);
            cmd_batch(&file, &config)
        }
        Commands::Table => {
            cmd_table();
            Ok(Outcome::Success)
        }
        Commands::Settings {
            set_max_len,
            set_no_limit,
            set_json,
            reset,
        } => {
            cmd_settings(config_path, set_max_len, set_no_limit, set_json, reset)?;
            Ok(Outcome::Success)
        }
    }
}

fn engine_for(config: &PersistentConfig) -> Result<ConfusableDistance> {
    ConfusableDistance::with_config(config.engine_config()).context("Invalid length limit")
}

/// Compare one pair and write the result.
///
/// Engine errors are rendered in place and reported as [`Outcome::Rejected`]
/// rather than propagated, so the caller decides the exit status.
pub fn cmd_distance<W: Write>(
    a: &str,
    b: &str,
    config: &PersistentConfig,
    out: &mut W,
) -> Result<Outcome> {
    let engine = engine_for(config)?;
    let json = config.json_output.unwrap_or(false);

    match engine.compare(a, b) {
        Ok(cmp) => {
            if json {
                writeln!(out, "{}", serde_json::to_string(&cmp)?)?;
            } else {
                print_comparison(out, &cmp)?;
            }
            Ok(Outcome::Success)
        }
        Err(e) => {
            write_error(out, &e, json)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn print_comparison<W: Write>(out: &mut W, cmp: &Comparison) -> Result<()> {
    let distance = cmp.distance.to_string();
    let distance = match cmp.distance {
        0 => distance.green().bold(),
        1 => distance.yellow().bold(),
        _ => distance.normal().bold(),
    };
    writeln!(out, "Distance: {distance}")?;
    writeln!(out, "{}", cmp.similarity.explanation())?;
    writeln!(
        out,
        "  {} {}  {} {}",
        "a:".dimmed(),
        cmp.skeleton_a.cyan(),
        "b:".dimmed(),
        cmp.skeleton_b.cyan()
    )?;
    Ok(())
}

fn write_error<W: Write>(out: &mut W, err: &DistanceError, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "error": err.to_string(), "argument": err.argument() });
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "Distance: {}", "Error".red().bold())?;
        writeln!(out, "An error occurred: {err}")?;
    }
    Ok(())
}

fn cmd_skeleton(texts: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for text in texts {
        writeln!(out, "{}", skeleton(text))?;
    }
    Ok(())
}

fn cmd_class(ch: char) {
    let table = ConfusableTable::global();
    let class = table.class_of(ch);

    println!(
        "{} U+{:04X} {}",
        "Prototype:".bold(),
        class[0] as u32,
        class[0].to_string().green()
    );
    if class.len() == 1 {
        println!("  (no confusable characters)");
        return;
    }
    for member in &class[1..] {
        println!("  U+{:04X}  {}", *member as u32, member);
    }
}

fn cmd_table() {
    let table = ConfusableTable::global();
    println!("{}", "Confusable Table".bold().underline());
    println!("  Dataset:  Unicode confusables (single code point subset)");
    println!("  Version:  {}", table.version().cyan());
    println!("  Entries:  {}", table.len().to_string().green());
}

/// Parse one raw batch line into a pair of byte fields.
///
/// Returns `None` for blank lines and `#` comments. Fields are left as bytes
/// so UTF-8 validation is reported by the engine for that line alone.
pub fn parse_batch_line(line: &[u8]) -> Option<Result<(&[u8], &[u8])>> {
    match line.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        None | Some(b'#') => return None,
        Some(_) => {}
    }

    let mut fields = line.splitn(3, |&b| b == b'\t');
    let pair = match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(anyhow::anyhow!("expected two tab-separated fields")),
    };
    Some(pair)
}

fn cmd_batch(file: &Path, config: &PersistentConfig) -> Result<Outcome> {
    let reader: Box<dyn BufRead> = if file == Path::new("-") {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let f = std::fs::File::open(file)
            .with_context(|| format!("Failed to open input file: {}", file.display()))?;
        Box::new(BufReader::new(f))
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_batch(reader, config, &mut out)
}

/// Compare every pair read from `reader`.
///
/// A malformed or rejected line is reported on its own output line and
/// processing continues.
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    config: &PersistentConfig,
    out: &mut W,
) -> Result<Outcome> {
    let engine = engine_for(config)?;
    let json = config.json_output.unwrap_or(false);
    let mut outcome = Outcome::Success;

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line_num = idx + 1;
        let mut line = line.with_context(|| format!("Failed to read line {line_num}"))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let (a, b) = match parse_batch_line(&line) {
            None => continue,
            Some(Ok(pair)) => pair,
            Some(Err(e)) => {
                outcome = Outcome::Rejected;
                if json {
                    let value = serde_json::json!({ "line": line_num, "error": e.to_string() });
                    writeln!(out, "{value}")?;
                } else {
                    writeln!(out, "{line_num}\tError\t{e}")?;
                }
                continue;
            }
        };

        match engine.distance_bytes(a, b) {
            Ok(distance) if json => {
                let value = serde_json::json!({
                    "line": line_num,
                    "a": String::from_utf8_lossy(a),
                    "b": String::from_utf8_lossy(b),
                    "distance": distance,
                });
                writeln!(out, "{value}")?;
            }
            Ok(distance) => writeln!(out, "{line_num}\t{distance}")?,
            Err(e) => {
                outcome = Outcome::Rejected;
                if json {
                    let value = serde_json::json!({ "line": line_num, "error": e.to_string() });
                    writeln!(out, "{value}")?;
                } else {
                    writeln!(out, "{line_num}\tError\t{e}")?;
                }
            }
        }
    }

    Ok(outcome)
}

fn cmd_settings(
    config_path: Option<&Path>,
    set_max_len: Option<usize>,
    set_no_limit: bool,
    set_json: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        let path = config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, &path);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path).unwrap_or_default();
    let mut changed = false;

    if let Some(max) = set_max_len {
        if max == 0 {
            anyhow::bail!("Maximum input length must be at least 1. Use --set-no-limit to disable it.");
        }
        config.max_input_len = Some(LengthLimit::Max(max));
        println!("  Set default max input length: {}", max.to_string().green());
        changed = true;
    }

    if set_no_limit {
        config.max_input_len = Some(LengthLimit::Unlimited);
        println!("  Set default max input length: {}", "unlimited".green());
        changed = true;
    }

    if let Some(json) = set_json {
        config.json_output = Some(json);
        println!("  Set JSON output: {}", on_off(json).green());
        changed = true;
    }

    let path: PathBuf = if changed {
        let path = config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
        path
    } else {
        super::paths::config_file_path_with_override(config_path)?
    };

    println!();
    print_config(&config, &path);
    Ok(())
}

fn print_config(config: &PersistentConfig, path: &Path) {
    println!("{}", "Current Settings".bold().underline());
    println!("  Config file:      {}", path.display().to_string().cyan());
    println!(
        "  Max input length: {}",
        config
            .max_input_len
            .map_or_else(|| "default".to_string(), |l| l.to_string())
    );
    println!("  JSON output:      {}", on_off(config.json_output.unwrap_or(false)));
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(a: &str, b: &str, config: &PersistentConfig) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome = cmd_distance(a, b, config, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_distance_identical_message() {
        let (outcome, text) = render("HELLO", "HELL0", &PersistentConfig::default());
        assert_eq!(outcome, Outcome::Success);
        assert!(text.contains("Distance: 0"));
        assert!(text.contains("confusably identical"));
    }

    #[test]
    fn test_distance_error_rendered() {
        let config = PersistentConfig::default().merge_with_cli(Some(Some(2)), false);
        let (outcome, text) = render("abc", "a", &config);
        assert_eq!(outcome, Outcome::Rejected);
        assert!(text.contains("Error"));
        assert!(text.contains("An error occurred:"));
    }

    #[test]
    fn test_distance_json() {
        let config = PersistentConfig::default().merge_with_cli(None, true);
        let (_, text) = render("admin", "adm1n", &config);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["distance"], 1);
        assert_eq!(value["skeleton_b"], "admln");
    }

    #[test]
    fn test_parse_batch_line() {
        assert!(parse_batch_line(b"").is_none());
        assert!(parse_batch_line(b" \t ").is_none());
        assert!(parse_batch_line(b"   # comment").is_none());
        assert_eq!(
            parse_batch_line(b"a\tb").unwrap().unwrap(),
            (&b"a"[..], &b"b"[..])
        );
        assert!(parse_batch_line(b"no tab here").unwrap().is_err());
    }

    #[test]
    fn test_parse_batch_line_rejects_extra_fields() {
        let err = parse_batch_line(b"a\tb\tc").unwrap().unwrap_err();
        assert_eq!(err.to_string(), "expected two tab-separated fields");
        assert!(parse_batch_line(b"a\tb\t").unwrap().is_err());
    }

    #[test]
    fn test_run_batch_continues_after_errors() {
        colored::control::set_override(false);
        let input = "# pairs\nHELLO\tHELL0\nbroken line\nhello\tworld\n\n\tabc\n";
        let mut out = Vec::new();
        let outcome = run_batch(input.as_bytes(), &PersistentConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2\t0");
        assert!(lines[1].starts_with("3\tError"));
        assert_eq!(lines[2], "4\t4");
        assert_eq!(lines[3], "6\t3");
    }

    #[test]
    fn test_run_batch_reports_invalid_utf8_and_continues() {
        colored::control::set_override(false);
        let input: &[u8] = b"HELLO\tHELL0\n\xff\tabc\nhello\tworld\r\nx\ty\tz\n";
        let mut out = Vec::new();
        let outcome = run_batch(input, &PersistentConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "1\t0");
        assert!(lines[1].starts_with("2\tError\t"));
        assert!(lines[1].contains("not valid UTF-8"));
        assert_eq!(lines[2], "3\t4");
        assert_eq!(lines[3], "4\tError\texpected two tab-separated fields");
    }

    #[test]
    fn test_run_batch_invalid_utf8_json() {
        let input: &[u8] = b"\xfe\tabc\nadmin\tadm1n\n";
        let config = PersistentConfig::default().merge_with_cli(None, true);
        let mut out = Vec::new();
        let outcome = run_batch(input, &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["line"], 1);
        assert!(values[0]["error"].as_str().unwrap().contains("not valid UTF-8"));
        assert_eq!(values[1]["a"], "admin");
        assert_eq!(values[1]["distance"], 1);
    }
}
