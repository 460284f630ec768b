use crate::parser::grammar::bump_as_data;
use crate::{Parser, SyntaxKind, TokenKind, S};

/// Client command
///
/// ```txt
/// Command
///     : Name Argument*
/// ```
///
/// Commands are line-oriented: the argument list runs to the end of the
/// line. Each argument token is wrapped in a STRING node.
pub(crate) fn command(p: &mut Parser) {
    let guard = p.start_node(SyntaxKind::COMMAND);
    p.bump(S![:]);

    if p.at(TokenKind::Name) {
        p.bump(S![ident]);
    } else {
        p.err("expected a command name");
        guard.finish_node();
        return;
    }

    loop {
        if p.newline_before_current() {
            break;
        }
        match p.peek() {
            None | Some(TokenKind::Eof | TokenKind::Semicolon) => break,
            _ => {
                let arg = p.start_node(SyntaxKind::STRING);
                bump_as_data(p);
                arg.finish_node();
            }
        }
    }

    guard.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::ast::Directive;
    use crate::parser::grammar::utils::check_ok;

    fn command(input: &str) -> crate::ast::Command {
        let tree = check_ok(input);
        match tree.document().directives().next().expect("one directive") {
            Directive::Command(command) => command,
            other => panic!("expected a command, got {other:?}"),
        }
    }

    #[test]
    fn bare_command() {
        let command = command(":help");
        assert_eq!(command.name().as_deref(), Some("help"));
        assert_eq!(command.args().count(), 0);
    }

    #[test]
    fn command_with_args() {
        let command = command(":play 'movies' 42");
        assert_eq!(command.name().as_deref(), Some("play"));
        let args: Vec<String> = command.args().map(|arg| arg.value()).collect();
        assert_eq!(args, vec!["movies", "42"]);
    }

    #[test]
    fn command_stops_at_newline() {
        let tree = check_ok(":schema\nRETURN 1;");
        let directives: Vec<_> = tree.document().directives().collect();
        assert_eq!(directives.len(), 2);
        assert!(matches!(directives[0], Directive::Command(_)));
        assert!(matches!(directives[1], Directive::Statement(_)));
    }
}
