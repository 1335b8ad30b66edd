use mini_prolog::prelude::*;
use mini_prolog::{knowledge_base, terms};

fn print_answers(kb: &KnowledgeBase, query: &str, goals: Vec<Term>) {
    println!("?- {}.", query);
    let mut any = false;
    for solution in kb.query_with(goals, SolverConfig::unbounded().with_max_depth(1000)) {
        match solution {
            Ok(solution) => {
                any = true;
                println!("  {}", solution);
            }
            Err(err) => {
                println!("  error: {}", err);
                return;
            }
        }
    }
    if !any {
        println!("  No.");
    }
}

fn main() {
    env_logger::init();

    // Construct a knowledge base
    // with some facts and rules about a family.
    let kb = knowledge_base! {
        parent(pam, bob);
        parent(tom, bob);
        parent(tom, liz);
        parent(bob, ann);
        parent(bob, pat);
        parent(pat, jim);
        female(pam);
        female(liz);
        female(ann);
        female(pat);
        grandparent(?X, ?Y) :- parent(?X, ?Z), parent(?Z, ?Y);
        mother(?M, ?C) :- parent(?M, ?C), female(?M);
        ancestor(?A, ?D) :- parent(?A, ?D);
        ancestor(?A, ?D) :- parent(?A, ?C), ancestor(?C, ?D);
    };

    for clause in kb.clauses() {
        println!("{}", clause);
    }
    println!();

    print_answers(&kb, "parent(X, bob)", terms![parent(?X, bob)]);
    print_answers(&kb, "grandparent(G, ann)", terms![grandparent(?G, ann)]);
    print_answers(&kb, "mother(M, C)", terms![mother(?M, ?C)]);
    print_answers(&kb, "ancestor(tom, D)", terms![ancestor(tom, ?D)]);
    print_answers(&kb, "parent(jim, X)", terms![parent(jim, ?X)]);
}
