use crate::domain::arithmetic::{add, multiply, CONSTANT_VALUE};
use crate::domain::greeter::Greeter;
use crate::utils::error::Result;
use std::io::Write;

pub const GREETER_NAME: &str = "AST Explorer";

pub fn calculate() -> i64 {
    let x = add(2, 3);
    multiply(x, CONSTANT_VALUE)
}

/// Writes the greeting and the calculated result, one per line.
pub fn run_with<W: Write>(out: &mut W) -> Result<()> {
    let result = calculate();
    tracing::debug!("calculated result: {}", result);

    let greeter = Greeter::new(GREETER_NAME);
    writeln!(out, "{}", greeter.greet())?;
    writeln!(out, "Result: {}", result)?;
    out.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with(&mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate() {
        assert_eq!(calculate(), 25);
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run_with(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hello, AST Explorer!\nResult: 25\n"
        );
    }
}
