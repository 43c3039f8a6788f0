use anyhow::Result;
use docsearch_core::{read_document_text, DisplayPolicy, RankedResult, Session};
use std::io::{BufRead, Write};

const NO_QUERY: &str = "Before results showing, you must execute 'query' command";
const RULE: &str = "------------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `query <words...>`
    Query(String),
    /// `type <n>`; the argument is validated when the command runs.
    Type(String),
    Results,
    Exit,
    Unsupported,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        match name {
            "query" => Command::Query(rest.to_string()),
            "type" => Command::Type(rest.to_string()),
            "results" => Command::Results,
            "exit" => Command::Exit,
            _ => Command::Unsupported,
        }
    }
}

/// Read commands from `input` until `exit` or end of input.
///
/// Errors from a single command are printed and the loop continues; only I/O
/// failures on `input` or `out` end the loop early.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_>, input: R, out: &mut W, policy: &DisplayPolicy) -> Result<()> {
    writeln!(out, "Dictionary length is {}", session.index().vocabulary().len())?;
    writeln!(out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter command> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        match Command::parse(&line?) {
            Command::Query(text) => match session.query(&text) {
                Ok(last) => {
                    writeln!(out, "Query is: [{}]", last.query.terms.join(", "))?;
                    print_results(out, &last.results, policy)?;
                }
                Err(e) => {
                    tracing::error!(error = %e, query = %text, "query failed");
                    writeln!(out, "Query failed: {e}")?;
                }
            },
            Command::Results => match session.last() {
                Some(last) => print_results(out, &last.results, policy)?,
                None => writeln!(out, "{NO_QUERY}")?,
            },
            Command::Type(arg) => type_document(session, &arg, out)?,
            Command::Exit => break,
            Command::Unsupported => writeln!(out, "Unsupported command!")?,
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn print_results<W: Write>(out: &mut W, results: &[RankedResult], policy: &DisplayPolicy) -> Result<()> {
    let mut shown = 0;
    for (i, result) in policy.select(results) {
        writeln!(out, "[{i}] ({:.4}) {}", result.similarity, result.path.display())?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No matching documents.")?;
    }
    Ok(())
}

fn type_document<W: Write>(session: &Session<'_>, arg: &str, out: &mut W) -> Result<()> {
    let index: usize = match arg.parse() {
        Ok(index) => index,
        Err(_) if session.last().is_none() => {
            writeln!(out, "{NO_QUERY}")?;
            return Ok(());
        }
        Err(_) => {
            writeln!(out, "Invalid result index: {arg:?}")?;
            return Ok(());
        }
    };
    let result = match session.result(index) {
        Ok(Some(result)) => result,
        Ok(None) => {
            writeln!(out, "{NO_QUERY}")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };
    let text = match read_document_text(&result.path) {
        Ok(text) => text,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    let name = result.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    writeln!(out, "Document: {}", result.path.display())?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{name}")?;
    writeln!(out)?;
    writeln!(out, "{text}")?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
