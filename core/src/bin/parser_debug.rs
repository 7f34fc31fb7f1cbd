use bumpalo::Bump;
use lispy_core::parser::{self, ExpressionParser, Rule};
use pest::Parser;
use pest::iterators::Pair;
use std::env;

/// Print a concrete syntax node as `rule "text"`, children indented below.
fn print_syntax_tree(pair: Pair<Rule>, indent: usize) {
    println!("{:indent$}{:?} {:?}", "", pair.as_rule(), pair.as_str(), indent = indent);
    for inner in pair.into_inner() {
        print_syntax_tree(inner, indent + 2);
    }
}

fn main() -> std::io::Result<()> {
    let Some(input) = env::args().nth(1) else {
        eprintln!("usage: parser_debug <expression>");
        return Ok(());
    };

    match ExpressionParser::parse(Rule::main, &input) {
        Ok(pairs) => {
            println!("Syntax tree:");
            for pair in pairs {
                print_syntax_tree(pair, 2);
            }
        }
        Err(e) => {
            eprintln!("Parse Error:\n{}", e);
            return Ok(());
        }
    }

    let arena = Bump::new();
    match parser::parse(&arena, &input) {
        Ok(parsed) => println!("Parsed AST:\n{:#?}", parsed.expr),
        Err(e) => eprintln!("Parse Error:\n{}", e),
    }
    Ok(())
}
