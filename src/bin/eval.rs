use std::env;
use std::process;

use intcalc_core::lexer;
use intcalc_core::parser::Parser;
use intcalc_core::ParseError;

fn run(expr: &str) -> Result<(), ParseError> {
    println!("Original expression: {}", expr);

    let tokens = lexer::tokenize(expr)?;
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    println!("Tokens: {}", rendered.join(" "));

    let root_node = Parser::new(&tokens).parse()?;
    println!("Parsed expression: {}", root_node);

    let val = root_node.eval()?;
    println!("Expression result: {}", val);
    Ok(())
}

fn main() {
    let expr = env::args().skip(1).collect::<Vec<_>>().join(" ");

    if let Err(err) = run(&expr) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
