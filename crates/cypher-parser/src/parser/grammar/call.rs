use crate::parser::grammar::{expression, name, with};
use crate::{Parser, SyntaxKind, S, T};

/// CALL clause
///
/// ```txt
/// Call
///     CALL ProcName ( Expression, ... )? (YIELD Projection, ...)?
/// ```
pub(crate) fn call_clause(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::CALL);
    p.bump_kw(S![call]);
    name::proc_name(p);

    if p.at(T!['(']) {
        p.bump(S!['(']);
        if !p.at(T![')']) {
            expression::expression(p);
            while p.at(T![,]) {
                p.bump(S![,]);
                expression::expression(p);
            }
        }
        p.expect(T![')'], S![')']);
    }

    if p.at_kw("YIELD") {
        p.bump_kw(S![yield]);
        with::projection(p);
        while p.at(T![,]) {
            p.bump(S![,]);
            with::projection(p);
        }
    }

    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::Clause;
    use crate::parser::grammar::utils::first_clause;

    #[test]
    fn call_with_args_and_yield() {
        let Clause::Call(call) =
            first_clause("CALL db.index.search('idx', $q) YIELD node, score AS s RETURN s;")
        else {
            panic!("expected CALL");
        };
        assert_eq!(call.proc_name().unwrap().name(), "db.index.search");
        assert_eq!(call.args().count(), 2);
        let projections: Vec<_> = call.projections().collect();
        assert_eq!(projections.len(), 2);
        assert_eq!(projections[1].alias().unwrap().name(), "s");
    }

    #[test]
    fn bare_call() {
        let Clause::Call(call) = first_clause("CALL db.labels;") else {
            panic!("expected CALL");
        };
        assert_eq!(call.proc_name().unwrap().name(), "db.labels");
        assert_eq!(call.args().count(), 0);
    }
}
