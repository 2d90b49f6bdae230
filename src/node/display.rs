use std::fmt;
use std::fmt::Display;

use super::Node;

/// The canonical form is fully parenthesized, so no precedence reasoning is
/// needed to print it and re-parsing it reproduces the tree.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Num { val } => write!(f, "{}", val),
            Node::BinOp { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Node::UnOp { op, operand } => write!(f, "({} {})", op.symbol(), operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::node::Node;
    use crate::parser::Parser;

    fn parse(expr: &str) -> Node {
        let tokens = tokenize(expr).unwrap();
        Parser::new(&tokens).parse().unwrap()
    }

    #[test]
    fn it_parenthesizes_fully() {
        assert_eq!(parse("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
        assert_eq!(parse("1 - 2 - 3").to_string(), "((1 - 2) - 3)");
        assert_eq!(parse("--1").to_string(), "(- (- 1))");
        assert_eq!(parse("+5").to_string(), "(+ 5)");
        assert_eq!(parse("42").to_string(), "42");
    }

    #[test]
    fn it_round_trips_through_the_parser() {
        const CASES: [&str; 7] = [
            // easy
            "1+2",
            "1*3+5",
            "10 / 3 / 2",
            // unary operators
            "-(2*4)",
            "--7",
            "2 * -3 + +4",
            // parentheses overriding precedence
            "(1 + 2) * (3 - 4)",
        ];
        for c in &CASES {
            let root_node = parse(c);

            // format it and re-parse it to check that nothing changed
            let formatted = root_node.to_string();
            let new_root_node = parse(&formatted);

            assert_eq!(new_root_node, root_node);
            assert_eq!(new_root_node.to_string(), formatted);
            assert_eq!(new_root_node.eval(), root_node.eval());
        }
    }
}
