mod language;
mod syntax_kind;
mod syntax_tree;

pub(crate) mod grammar;

use crate::lexer::Lexer;
use crate::Error;
use crate::LimitTracker;
use crate::Token;
use crate::TokenKind;
use crate::{S, T};
pub use language::SyntaxElement;
pub use language::SyntaxNode;
pub use language::SyntaxNodeChildren;
pub use language::SyntaxNodePtr;
pub use language::SyntaxToken;
pub use syntax_kind::SyntaxKind;
pub use syntax_tree::SyntaxTree;
pub(crate) use language::CypherLanguage;
pub(crate) use syntax_tree::SyntaxTreeBuilder;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Parse Cypher into a lossless, typed syntax tree.
///
/// ## Example
///
/// ```rust
/// use cypher_parser::Parser;
///
/// let query = "
/// MATCH (actor:Person)-[:ACTED_IN]->(movie:Movie)
/// WHERE movie.released > 2000
/// RETURN actor.name, movie.title;
/// ";
/// let parser = Parser::new(query);
/// let tree = parser.parse();
/// // errors live beside the tree, not inside it
/// assert_eq!(0, tree.errors().len());
///
/// // Get the typed document root and walk the directives.
/// let document = tree.document();
/// assert_eq!(1, document.directives().count());
/// ```
#[derive(Debug)]
pub struct Parser<'input> {
    lexer: Lexer<'input>,
    /// The original input, for error context snippets.
    source: &'input str,
    /// One token of lookahead, so peeking doesn't re-run the lexer.
    current_token: Option<Token<'input>>,
    /// Green tree under construction.
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
    /// Trivia waiting to be attached to the tree.
    ignored: Vec<Token<'input>>,
    /// Everything recorded so far, in discovery order.
    errors: Vec<Error>,
    /// The depth limit to apply while parsing.
    recursion: Rc<Cell<LimitTracker>>,
    /// Cleared once a limit fires, so follow-on noise is dropped.
    accept_errors: bool,
}

/// Nested grammar rules deeper than this produce a limit error instead of
/// risking the call stack. Real queries nest a few dozen levels at most.
const DEFAULT_RECURSION_LIMIT: usize = 256;

impl<'input> Parser<'input> {
    /// A parser over `input`, borrowed for the life of the parse.
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Lexer::new(input),
            source: input,
            current_token: None,
            builder: Rc::new(RefCell::new(SyntaxTreeBuilder::new())),
            ignored: vec![],
            errors: Vec::new(),
            recursion: Rc::new(Cell::new(LimitTracker::new(DEFAULT_RECURSION_LIMIT))),
            accept_errors: true,
        }
    }

    /// Cap how deeply grammar rules may nest before parsing gives up with
    /// a limit error instead of risking the call stack.
    pub fn recursion_limit(self, recursion_limit: usize) -> Self {
        self.recursion
            .set(LimitTracker::new(recursion_limit));
        self
    }

    /// Abort parsing with a limit error after `token_limit` tokens, as a
    /// guard against oversized inputs. Unlimited unless set.
    pub fn token_limit(mut self, token_limit: usize) -> Self {
        self.lexer = self.lexer.with_limit(token_limit);
        self
    }

    /// Parse the whole input into one tree.
    pub fn parse(mut self) -> SyntaxTree {
        grammar::cypher::cypher_input(&mut self);
        self.finish_tree()
    }

    /// Parse directive-at-a-time: the returned iterator yields one tree per
    /// top-level directive (statement, client command, or comment).
    ///
    /// Dropping the iterator stops parsing at the directive boundary; the
    /// rest of the input is never read.
    pub fn parse_directives(self) -> Directives<'input> {
        Directives {
            parser: self,
            done: false,
        }
    }

    fn finish_tree(&mut self) -> SyntaxTree {
        let builder = std::mem::replace(&mut *self.builder.borrow_mut(), SyntaxTreeBuilder::new());
        builder.finish(
            std::mem::take(&mut self.errors),
            self.recursion.get(),
            self.lexer.limit_tracker,
        )
    }

    /// Whether `token` is next in the input.
    pub(crate) fn at(&mut self, token: TokenKind) -> bool {
        self.peek() == Some(token)
    }

    /// Whether the (case-insensitive) keyword `kw` is next in the input.
    pub(crate) fn at_kw(&mut self, kw: &str) -> bool {
        self.at(TokenKind::Name)
            && self
                .peek_data()
                .is_some_and(|data| data.eq_ignore_ascii_case(kw))
    }

    /// Whether token `n` (1-based, trivia skipped) is the keyword `kw`.
    pub(crate) fn at_kw_n(&self, n: usize, kw: &str) -> bool {
        self.peek_n(n) == Some(TokenKind::Name)
            && self
                .peek_data_n(n)
                .is_some_and(|data| data.eq_ignore_ascii_case(kw))
    }

    /// Write the current token into the tree as `kind`, then pull any
    /// trivia that follows into the queue.
    pub(crate) fn bump(&mut self, kind: SyntaxKind) {
        self.eat(kind);
        self.skip_ignored();
    }

    /// Consume a keyword token. Same as `bump`, named for grammar clarity.
    pub(crate) fn bump_kw(&mut self, kind: SyntaxKind) {
        self.bump(kind);
    }

    /// Pull whitespace and comments off the lexer into the trivia queue,
    /// leaving a meaningful token under the cursor.
    pub(crate) fn skip_ignored(&mut self) {
        while let Some(TokenKind::Comment | TokenKind::Whitespace) = self.peek() {
            let token = self.pop();
            self.ignored.push(token);
        }
    }

    /// Flush the trivia queue into whichever node is open right now.
    pub(crate) fn push_ignored(&mut self) {
        let tokens = std::mem::take(&mut self.ignored);
        for token in tokens {
            let syntax_kind = match token.kind() {
                TokenKind::Comment => SyntaxKind::COMMENT,
                TokenKind::Whitespace => SyntaxKind::WHITESPACE,
                _ => unreachable!(),
            };
            self.push_token(syntax_kind, token);
        }
    }

    /// Push queued ignored tokens at the top level, where a comment is not
    /// trivia but a directive of its own.
    pub(crate) fn flush_top_level_ignored(&mut self) {
        self.skip_ignored();
        let tokens = std::mem::take(&mut self.ignored);
        for token in tokens {
            match token.kind() {
                TokenKind::Comment => self.comment_directive(token),
                _ => self.push_token(SyntaxKind::WHITESPACE, token),
            }
        }
    }

    /// Take the leading run of trivia up to and including the first queued
    /// comment, emitting the comment as a directive node. Returns false if
    /// no comment is queued.
    pub(crate) fn take_leading_comment(&mut self) -> bool {
        self.skip_ignored();
        let Some(at) = self
            .ignored
            .iter()
            .position(|token| token.kind() == TokenKind::Comment)
        else {
            return false;
        };
        let rest = self.ignored.split_off(at + 1);
        let mut leading = std::mem::replace(&mut self.ignored, rest);
        let comment = leading.pop().expect("split_off keeps the comment");
        for token in leading {
            self.push_token(SyntaxKind::WHITESPACE, token);
        }
        self.comment_directive(comment);
        true
    }

    fn comment_directive(&mut self, token: Token<'input>) {
        let kind = if token.data().starts_with("//") {
            SyntaxKind::LINE_COMMENT
        } else {
            SyntaxKind::BLOCK_COMMENT
        };
        self.builder.borrow_mut().start_node(kind);
        self.push_token(SyntaxKind::COMMENT, token);
        self.builder.borrow_mut().finish_node();
    }

    /// The token under the cursor, if any.
    pub(crate) fn current(&mut self) -> Option<&Token<'input>> {
        self.peek_token()
    }

    /// Write the current token into the tree as `kind`, flushing queued
    /// trivia first so source order is preserved.
    fn eat(&mut self, kind: SyntaxKind) {
        self.push_ignored();
        if self.current().is_none() {
            return;
        }

        let token = self.pop();
        self.push_token(kind, token);
    }

    /// Record a limit error and stop accepting any further errors: once a
    /// limit cuts parsing short, everything after it would be noise.
    pub(crate) fn limit_err<S: Into<String>>(&mut self, message: S) {
        let Some(current) = self.current() else {
            return;
        };
        let position = current.position();
        let err = Error::limit(message, position, self.source);
        self.push_err(err);
        self.accept_errors = false;
    }

    /// Record `message` against the token under the cursor, without
    /// consuming anything.
    pub(crate) fn err(&mut self, message: &str) {
        let Some(current) = self.current() else {
            return;
        };
        let err = if current.kind() == TokenKind::Eof {
            Error::eof(message, current.position(), self.source)
        } else {
            Error::syntax(
                message,
                current.data().to_string(),
                current.position(),
                self.source,
            )
        };
        self.push_err(err);
    }

    /// Record `message` and swallow the offending token, keeping it in the
    /// tree as an ERROR leaf so byte positions stay aligned.
    pub(crate) fn err_and_pop(&mut self, message: &str) {
        self.err(message);
        self.push_ignored();
        if self.at(TokenKind::Eof) || self.current().is_none() {
            return;
        }

        let current = self.pop();
        // the offending text stays in the tree; dropping it would shift
        // every later range
        self.push_token(SyntaxKind::ERROR, current);
        self.skip_ignored();
    }

    /// Bump `token` as `kind` when it is next, or record what was missing.
    pub(crate) fn expect(&mut self, token: TokenKind, kind: SyntaxKind) {
        if self.at(token) {
            self.bump(kind);
            return;
        }
        self.err(&format!("expected {kind:?}"));
    }

    /// Bump the keyword `kw` as `kind` when it is next, or record what was
    /// missing.
    pub(crate) fn expect_kw(&mut self, kw: &str, kind: SyntaxKind) {
        if self.at_kw(kw) {
            self.bump(kind);
            return;
        }
        self.err(&format!("expected {kw}"));
    }

    /// Record an error, unless a limit already fired (see `limit_err`).
    pub(crate) fn push_err(&mut self, err: Error) {
        if self.accept_errors {
            self.errors.push(err);
        }
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Track one level of grammar nesting. Returns `None`, after pushing a
    /// limit error, when the configured recursion limit is exceeded.
    pub(crate) fn recursion_guard(&mut self) -> Option<RecursionGuard> {
        let mut tracker = self.recursion.get();
        tracker.consume();
        self.recursion.set(tracker);
        if tracker.limited() {
            self.limit_err("parser recursion limit reached");
            let mut tracker = self.recursion.get();
            tracker.release();
            self.recursion.set(tracker);
            return None;
        }
        Some(RecursionGuard {
            tracker: Rc::clone(&self.recursion),
        })
    }

    /// Whether a line break separates the previous token from the current
    /// one. Client commands are line-oriented, so their argument list ends
    /// here.
    pub(crate) fn newline_before_current(&mut self) -> bool {
        self.skip_ignored();
        self.ignored.iter().any(|token| {
            token.data().contains(['\n', '\r'])
                || (token.kind() == TokenKind::Comment && token.data().starts_with("//"))
        })
    }

    /// Pull the next token off the lexer, materializing any lexer errors
    /// as ERROR leaves on the way.
    fn next_token(&mut self) -> Option<Token<'input>> {
        loop {
            let res = self.lexer.next()?;
            match res {
                Err(err) => {
                    if err.is_limit() {
                        self.accept_errors = false;
                        self.errors.push(err);
                        return None;
                    }
                    // queued trivia goes in first, then the unlexable text
                    // as an ERROR leaf, so offsets in the tree stay true to
                    // the source
                    self.push_ignored();
                    self.builder
                        .borrow_mut()
                        .token(SyntaxKind::ERROR, err.data());
                    self.errors.push(err);
                }
                Ok(token) => {
                    return Some(token);
                }
            }
        }
    }

    /// Take the token under the cursor, advancing the input.
    pub(crate) fn pop(&mut self) -> Token<'input> {
        if let Some(token) = self.current_token.take() {
            return token;
        }

        self.next_token()
            .expect("Could not pop a token from the lexer")
    }

    /// Write `token` into the tree as a leaf of `kind`.
    pub(crate) fn push_token(&mut self, kind: SyntaxKind, token: Token) {
        self.builder.borrow_mut().token(kind, token.data());
    }

    /// Open a node of `kind`, returning a guard that closes it on drop, so
    /// a grammar function can never leave its node dangling on an early
    /// return. Trivia queued before the call stays with the parent.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) -> NodeGuard {
        self.push_ignored();

        self.builder.borrow_mut().start_node(kind);
        let guard = NodeGuard::new(self.builder.clone());
        self.skip_ignored();

        guard
    }

    /// Remember this spot so that what parses next can later be pulled
    /// under a new parent, or left as-is if no wrap turns out to be
    /// needed.
    pub(crate) fn checkpoint_node(&mut self) -> Checkpoint {
        // flush pending trivia to the parent so a later wrap starts at the
        // first meaningful token
        self.push_ignored();

        let checkpoint = self.builder.borrow().checkpoint();
        Checkpoint::new(self.builder.clone(), checkpoint)
    }

    /// The kind of the token under the cursor, without consuming it.
    pub(crate) fn peek(&mut self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind())
    }

    /// The token under the cursor, priming the lookahead slot if needed.
    pub(crate) fn peek_token(&mut self) -> Option<&Token<'input>> {
        if self.current_token.is_none() {
            self.current_token = self.next_token();
        }
        self.current_token.as_ref()
    }

    /// The kind of token `n` (1-based, trivia skipped); lookahead runs on
    /// a clone of the lexer, so nothing is consumed.
    pub(crate) fn peek_n(&self, n: usize) -> Option<TokenKind> {
        self.peek_n_inner(n).map(|token| token.kind())
    }

    fn peek_n_inner(&self, n: usize) -> Option<Token<'input>> {
        self.current_token
            .iter()
            .cloned()
            .map(Result::Ok)
            .chain(self.lexer.clone())
            .filter_map(Result::ok)
            .filter(|token| !token.kind().is_trivia())
            .nth(n - 1)
    }

    /// The text of the token under the cursor.
    pub(crate) fn peek_data(&mut self) -> Option<&'input str> {
        self.peek_token().map(|token| token.data())
    }

    /// The text of token `n` (1-based, trivia skipped).
    pub(crate) fn peek_data_n(&self, n: usize) -> Option<&'input str> {
        self.peek_n_inner(n).map(|token| token.data())
    }
}

/// Parse directive-at-a-time; see [`Parser::parse_directives`].
///
/// Each yielded [`SyntaxTree`] holds exactly one directive (plus its
/// surrounding trivia and terminator) and the errors recorded while parsing
/// it.
#[derive(Debug)]
pub struct Directives<'input> {
    parser: Parser<'input>,
    done: bool,
}

impl Iterator for Directives<'_> {
    type Item = SyntaxTree;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let p = &mut self.parser;
        p.builder.borrow_mut().start_node(SyntaxKind::CYPHER_INPUT);

        if p.take_leading_comment() {
            p.builder.borrow_mut().finish_node();
            return Some(p.finish_tree());
        }

        // stray terminators are not directives
        while p.at(T![;]) {
            p.bump(S![;]);
        }
        if p.take_leading_comment() {
            p.builder.borrow_mut().finish_node();
            return Some(p.finish_tree());
        }

        if p.at(TokenKind::Eof) || p.peek().is_none() {
            self.done = true;
            p.push_ignored();
            p.builder.borrow_mut().finish_node();
            let tree = p.finish_tree();
            if tree.errors().is_empty() {
                return None;
            }
            return Some(tree);
        }

        grammar::cypher::directive(p);
        p.builder.borrow_mut().finish_node();
        Some(p.finish_tree())
    }
}

/// Decrements the recursion tracker when a nesting level is left.
pub(crate) struct RecursionGuard {
    tracker: Rc<Cell<LimitTracker>>,
}

impl Drop for RecursionGuard {
    fn drop(&mut self) {
        let mut tracker = self.tracker.get();
        tracker.release();
        self.tracker.set(tracker);
    }
}

/// Closes the node opened by `start_node` when dropped, so every open
/// node is finished exactly once no matter how its grammar function
/// returns.
#[must_use]
pub(crate) struct NodeGuard {
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
}

impl NodeGuard {
    fn new(builder: Rc<RefCell<SyntaxTreeBuilder>>) -> Self {
        Self { builder }
    }

    pub(crate) fn finish_node(self) {
        drop(self);
    }
}

impl Drop for NodeGuard {
    fn drop(&mut self) {
        self.builder.borrow_mut().finish_node();
    }
}

/// A rowan Checkpoint that can wrap everything parsed since it was taken in
/// a new parent node. One checkpoint may wrap repeatedly, which nests:
/// `a OR b OR c` wraps twice into `((a OR b) OR c)`.
pub(crate) struct Checkpoint {
    builder: Rc<RefCell<SyntaxTreeBuilder>>,
    checkpoint: rowan::Checkpoint,
}

impl Checkpoint {
    fn new(builder: Rc<RefCell<SyntaxTreeBuilder>>, checkpoint: rowan::Checkpoint) -> Self {
        Self {
            builder,
            checkpoint,
        }
    }

    /// Put everything parsed since this checkpoint inside a new `kind`
    /// node and leave that node open: the caller keeps adding children
    /// (an operator token, a right-hand side) until the returned guard
    /// drops.
    pub(crate) fn wrap_node(&self, kind: SyntaxKind) -> NodeGuard {
        self.builder.borrow_mut().wrap_node(self.checkpoint, kind);
        NodeGuard::new(self.builder.clone())
    }
}
