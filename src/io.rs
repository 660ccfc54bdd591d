use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::cnf::{Clause, Cnf};
use crate::error::CnfError;

/// Parses the relaxed DIMACS-like format described in spec.md §6: one clause
/// per line, whitespace-separated signed integers, the terminator `0`
/// optional, blank lines skipped, an optional `p cnf <nvars> <nclauses>`
/// header (and `c` comment lines) accepted and ignored.
pub fn parse_cnf(reader: impl BufRead) -> Result<Cnf, CnfError> {
    let mut clauses = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        match tokens.clone().next() {
            Some("c") | Some("p") => continue,
            _ => {}
        }
        let mut literals = Vec::new();
        for token in tokens.by_ref() {
            let value: i32 = token.parse().map_err(|_| CnfError::Parse {
                line: line_no + 1,
                token: token.to_string(),
            })?;
            if value == 0 {
                break; // optional terminator
            }
            literals.push(value);
        }
        clauses.push(Clause::new(literals));
    }
    Ok(Cnf::new(clauses))
}

/// Convenience wrapper around [`parse_cnf`] reading from a file path.
pub fn parse_cnf_file(path: impl AsRef<Path>) -> Result<Cnf, CnfError> {
    let file = File::open(path)?;
    parse_cnf(BufReader::new(file))
}

/// Reads clauses interactively from a reader (one clause per line, blank
/// line to finish), for the `interactive` CLI mode. Grounded on
/// `original_source/sat_solver.py::load_manual`.
pub fn read_manual(mut reader: impl BufRead) -> Result<Cnf, CnfError> {
    let mut clauses = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            break;
        }
        let mut literals = Vec::new();
        for token in line.split_whitespace() {
            let value: i32 = token.parse().map_err(|_| CnfError::Parse {
                line: 0,
                token: token.to_string(),
            })?;
            if value == 0 {
                continue;
            }
            literals.push(value);
        }
        clauses.push(Clause::new(literals));
    }
    Ok(Cnf::new(clauses))
}

/// Writes a CNF in DIMACS form: one clause per line, explicit trailing `0`,
/// no header. Grounded on `original_source/make_benchmark.py::write_dimacs`.
pub fn write_dimacs(path: impl AsRef<Path>, cnf: &Cnf) -> std::io::Result<()> {
    use std::io::Write;
    let mut file = File::create(path)?;
    for clause in &cnf.clauses {
        for lit in clause.literals() {
            write!(file, "{lit} ")?;
        }
        writeln!(file, "0")?;
    }
    Ok(())
}

/// Extracts the instance name (final path component) from a benchmark file
/// path, for the results writer. Grounded on `util::read_instance_name`,
/// which does this with a regex rather than manual splitting.
pub fn read_instance_name(file_path: &str) -> String {
    static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    let re = PATTERN.get_or_init(|| regex::Regex::new(r"[^/\\]+$").unwrap());
    re.find(file_path).map(|m| m.as_str().to_string()).unwrap_or_else(|| file_path.to_string())
}

#[allow(dead_code)]
fn _assert_read(_: impl Read) {}
