use std::io::{self, BufRead, Write};

/// Read one console line, stripping the trailing newline (`\n` or `\r\n`).
/// Returns None once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for an integer, re-prompting until a line parses. Non-integer
/// lines never advance. A closed input stream is surfaced as
/// `UnexpectedEof` — there is no console left to re-prompt.
pub fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<i64> {
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;
        let line = read_line(input)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a number",
            )
        })?;
        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => {
                tracing::debug!(input = %line, "not a number, re-prompting");
            }
        }
    }
}
