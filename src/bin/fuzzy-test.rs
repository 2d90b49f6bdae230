use num_bigint::BigInt;
use rand::prelude::*;

use intcalc_core::lexer;
use intcalc_core::node::Node;
use intcalc_core::op::OpKind;
use intcalc_core::parser::Parser;

fn random_bin(op: OpKind, depth: u32) -> Node {
    Node::BinOp {
        op,
        lhs: Box::new(random_node(depth + 1)),
        rhs: Box::new(random_node(depth + 1)),
    }
}

fn random_node(depth: u32) -> Node {
    let mut rng = thread_rng();
    // limit the amount of node depth
    if depth < 6 && rng.gen_range(0, 10) > 2 {
        // pick a composite node
        match rng.gen_range(0, 6) {
            0 => return random_bin(OpKind::Add, depth),
            1 => return random_bin(OpKind::Sub, depth),
            2 => return random_bin(OpKind::Mul, depth),
            3 => return random_bin(OpKind::Div, depth),
            4 => {
                return Node::UnOp {
                    op: OpKind::UnaryMinus,
                    operand: Box::new(random_node(depth + 1)),
                }
            }
            5 => {
                return Node::UnOp {
                    op: OpKind::UnaryPlus,
                    operand: Box::new(random_node(depth + 1)),
                }
            }
            _ => unreachable!(),
        }
    }

    // Leaf literals are non-negative on purpose: the lexer scans unsigned
    // digit runs, a rendered negative sign would come back as a unary node.
    Node::Num {
        val: BigInt::from(rng.gen_range(0i64, 1000)),
    }
}

fn main() {
    for i in 0..5000 {
        let node = random_node(0);

        if i != 0 {
            println!();
        }
        println!("Testing {}:", node);

        // render, re-tokenize and re-parse: the tree must come back intact
        let formatted = node.to_string();
        let tokens = lexer::tokenize(&formatted).unwrap();
        let reparsed = Parser::new(&tokens).parse().unwrap();

        assert_eq!(reparsed, node);
        assert_eq!(reparsed.to_string(), formatted);

        // a division by zero must survive the round trip too
        match node.eval() {
            Ok(val) => {
                println!("- eval: {}", val);
                assert_eq!(reparsed.eval(), Ok(val));
            }
            Err(err) => {
                println!("- eval: (error: {})", err);
                assert_eq!(reparsed.eval(), Err(err));
            }
        }
    }
}
