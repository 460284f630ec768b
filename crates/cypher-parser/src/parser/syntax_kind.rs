//! The closed set of syntax kinds: tokens, keywords, and AST node kinds.
//!
//! Kind discriminants are part of the public contract: new kinds are
//! appended before `__LAST`, existing kinds are never reordered or removed.

#![allow(non_camel_case_types)]

/// The kind of a token or node in the syntax tree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u16)]
pub enum SyntaxKind {
    #[doc(hidden)]
    TOMBSTONE,
    #[doc(hidden)]
    EOF,

    // punctuation tokens
    SEMICOLON,
    COLON,
    COMMA,
    DOT,
    DOT_DOT,
    L_PAREN,
    R_PAREN,
    L_BRACK,
    R_BRACK,
    L_CURLY,
    R_CURLY,
    PLUS,
    PLUS_EQ,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    CARET,
    EQ,
    NOT_EQ,
    LT,
    LT_EQ,
    GT,
    GT_EQ,
    REGEX_MATCH,
    PIPE,
    DOLLAR,

    // tokens with data
    IDENT,
    QUOTED_IDENT,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING_VALUE,
    WHITESPACE,
    COMMENT,

    // keyword tokens; Cypher keywords are case-insensitive
    all_KW,
    allshortestpaths_KW,
    and_KW,
    any_KW,
    as_KW,
    asc_KW,
    ascending_KW,
    assert_KW,
    by_KW,
    call_KW,
    case_KW,
    commit_KW,
    constraint_KW,
    contains_KW,
    create_KW,
    csv_KW,
    cypher_KW,
    delete_KW,
    desc_KW,
    descending_KW,
    detach_KW,
    distinct_KW,
    drop_KW,
    else_KW,
    end_KW,
    ends_KW,
    exists_KW,
    explain_KW,
    extract_KW,
    false_KW,
    fieldterminator_KW,
    filter_KW,
    foreach_KW,
    from_KW,
    headers_KW,
    in_KW,
    index_KW,
    is_KW,
    join_KW,
    limit_KW,
    load_KW,
    match_KW,
    merge_KW,
    node_KW,
    none_KW,
    not_KW,
    null_KW,
    on_KW,
    optional_KW,
    or_KW,
    order_KW,
    periodic_KW,
    profile_KW,
    reduce_KW,
    rel_KW,
    relationship_KW,
    remove_KW,
    return_KW,
    scan_KW,
    set_KW,
    shortestpath_KW,
    single_KW,
    skip_KW,
    start_KW,
    starts_KW,
    then_KW,
    true_KW,
    union_KW,
    unique_KW,
    unwind_KW,
    using_KW,
    when_KW,
    where_KW,
    with_KW,
    xor_KW,
    yield_KW,

    // top-level nodes
    CYPHER_INPUT,
    STATEMENT,
    COMMAND,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // statement and query options
    CYPHER_OPTION,
    CYPHER_OPTION_PARAM,
    EXPLAIN_OPTION,
    PROFILE_OPTION,
    USING_PERIODIC_COMMIT,

    // schema commands
    CREATE_NODE_PROPS_INDEX,
    DROP_NODE_PROPS_INDEX,
    CREATE_UNIQUE_NODE_PROP_CONSTRAINT,
    DROP_UNIQUE_NODE_PROP_CONSTRAINT,
    CREATE_NODE_PROP_EXISTENCE_CONSTRAINT,
    DROP_NODE_PROP_EXISTENCE_CONSTRAINT,
    CREATE_REL_PROP_EXISTENCE_CONSTRAINT,
    DROP_REL_PROP_EXISTENCE_CONSTRAINT,

    // queries and clauses
    QUERY,
    UNION,
    LOAD_CSV,
    START,
    NODE_INDEX_LOOKUP,
    NODE_INDEX_QUERY,
    NODE_ID_LOOKUP,
    ALL_NODES_SCAN,
    REL_INDEX_LOOKUP,
    REL_INDEX_QUERY,
    REL_ID_LOOKUP,
    ALL_RELS_SCAN,
    MATCH,
    USING_INDEX,
    USING_JOIN,
    USING_SCAN,
    MERGE,
    ON_MATCH,
    ON_CREATE,
    CREATE,
    SET,
    SET_PROPERTY,
    SET_ALL_PROPERTIES,
    MERGE_PROPERTIES,
    SET_LABELS,
    DELETE,
    REMOVE,
    REMOVE_LABELS,
    REMOVE_PROPERTY,
    FOREACH,
    WITH,
    UNWIND,
    CALL,
    RETURN,
    PROJECTION,
    ORDER_BY,
    SORT_ITEM,

    // expressions
    UNARY_OPERATOR,
    BINARY_OPERATOR,
    COMPARISON,
    APPLY_OPERATOR,
    APPLY_ALL_OPERATOR,
    PROPERTY_OPERATOR,
    SUBSCRIPT_OPERATOR,
    SLICE_OPERATOR,
    LABELS_OPERATOR,
    LIST_COMPREHENSION,
    PATTERN_COMPREHENSION,
    CASE,
    FILTER,
    EXTRACT,
    REDUCE,
    ALL,
    ANY,
    SINGLE,
    NONE,
    COLLECTION,
    MAP,
    IDENTIFIER,
    PARAMETER,
    STRING,
    INTEGER,
    FLOAT,
    TRUE,
    FALSE,
    NULL,

    // names
    LABEL,
    RELTYPE,
    PROP_NAME,
    FUNCTION_NAME,
    INDEX_NAME,
    PROC_NAME,

    // patterns
    PATTERN,
    NAMED_PATH,
    SHORTEST_PATH,
    PATTERN_PATH,
    NODE_PATTERN,
    REL_PATTERN,
    RANGE,

    // abstract kinds: never constructed, only named as ancestors
    DIRECTIVE,
    STATEMENT_BODY,
    SCHEMA_COMMAND,
    STATEMENT_OPTION,
    QUERY_OPTION,
    QUERY_CLAUSE,
    START_POINT,
    MATCH_HINT,
    MERGE_ACTION,
    SET_ITEM,
    REMOVE_ITEM,
    EXPRESSION,

    ERROR,

    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// The abstract kinds this kind directly declares as parents.
    pub fn parents(self) -> &'static [SyntaxKind] {
        match self {
            STATEMENT | COMMAND | LINE_COMMENT | BLOCK_COMMENT => &[DIRECTIVE],
            QUERY => &[STATEMENT_BODY],
            SCHEMA_COMMAND => &[STATEMENT_BODY],
            CREATE_NODE_PROPS_INDEX
            | DROP_NODE_PROPS_INDEX
            | CREATE_UNIQUE_NODE_PROP_CONSTRAINT
            | DROP_UNIQUE_NODE_PROP_CONSTRAINT
            | CREATE_NODE_PROP_EXISTENCE_CONSTRAINT
            | DROP_NODE_PROP_EXISTENCE_CONSTRAINT
            | CREATE_REL_PROP_EXISTENCE_CONSTRAINT
            | DROP_REL_PROP_EXISTENCE_CONSTRAINT => &[SCHEMA_COMMAND],
            CYPHER_OPTION | EXPLAIN_OPTION | PROFILE_OPTION => &[STATEMENT_OPTION],
            USING_PERIODIC_COMMIT => &[QUERY_OPTION],
            LOAD_CSV | START | MATCH | MERGE | CREATE | SET | DELETE | REMOVE | FOREACH
            | WITH | UNWIND | CALL | RETURN | UNION => &[QUERY_CLAUSE],
            NODE_INDEX_LOOKUP | NODE_INDEX_QUERY | NODE_ID_LOOKUP | ALL_NODES_SCAN
            | REL_INDEX_LOOKUP | REL_INDEX_QUERY | REL_ID_LOOKUP | ALL_RELS_SCAN => {
                &[START_POINT]
            }
            USING_INDEX | USING_JOIN | USING_SCAN => &[MATCH_HINT],
            ON_MATCH | ON_CREATE => &[MERGE_ACTION],
            SET_PROPERTY | SET_ALL_PROPERTIES | MERGE_PROPERTIES | SET_LABELS => &[SET_ITEM],
            REMOVE_LABELS | REMOVE_PROPERTY => &[REMOVE_ITEM],
            UNARY_OPERATOR | BINARY_OPERATOR | COMPARISON | APPLY_OPERATOR
            | APPLY_ALL_OPERATOR | PROPERTY_OPERATOR | SUBSCRIPT_OPERATOR | SLICE_OPERATOR
            | LABELS_OPERATOR | LIST_COMPREHENSION | PATTERN_COMPREHENSION | CASE | FILTER
            | EXTRACT | REDUCE | ALL | ANY | SINGLE | NONE | COLLECTION | MAP | IDENTIFIER
            | PARAMETER | STRING | INTEGER | FLOAT | TRUE | FALSE | NULL | PATTERN_PATH => {
                &[EXPRESSION]
            }
            NAMED_PATH | SHORTEST_PATH => &[PATTERN_PATH],
            _ => &[],
        }
    }

    /// Whether `ancestor` is in this kind's ancestor set. Every kind is an
    /// ancestor of itself.
    pub fn is_a(self, ancestor: SyntaxKind) -> bool {
        self == ancestor || self.parents().iter().any(|parent| parent.is_a(ancestor))
    }

    /// Whether this kind is an AST node kind, as opposed to a token kind or
    /// an abstract ancestor.
    pub fn is_node(self) -> bool {
        (self >= CYPHER_INPUT && self < DIRECTIVE) || self == ERROR
    }

    pub(crate) fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | COMMENT)
    }
}

impl From<SyntaxKind> for u16 {
    fn from(kind: SyntaxKind) -> Self {
        kind as u16
    }
}

/// Shorthand for [`SyntaxKind`]s of punctuation and keyword tokens.
#[macro_export]
macro_rules! S {
    [;] => { $crate::SyntaxKind::SEMICOLON };
    [:] => { $crate::SyntaxKind::COLON };
    [,] => { $crate::SyntaxKind::COMMA };
    [.] => { $crate::SyntaxKind::DOT };
    [..] => { $crate::SyntaxKind::DOT_DOT };
    ['('] => { $crate::SyntaxKind::L_PAREN };
    [')'] => { $crate::SyntaxKind::R_PAREN };
    ['['] => { $crate::SyntaxKind::L_BRACK };
    [']'] => { $crate::SyntaxKind::R_BRACK };
    ['{'] => { $crate::SyntaxKind::L_CURLY };
    ['}'] => { $crate::SyntaxKind::R_CURLY };
    [+] => { $crate::SyntaxKind::PLUS };
    [+=] => { $crate::SyntaxKind::PLUS_EQ };
    [-] => { $crate::SyntaxKind::MINUS };
    [*] => { $crate::SyntaxKind::STAR };
    [/] => { $crate::SyntaxKind::SLASH };
    [%] => { $crate::SyntaxKind::PERCENT };
    [^] => { $crate::SyntaxKind::CARET };
    [=] => { $crate::SyntaxKind::EQ };
    [<>] => { $crate::SyntaxKind::NOT_EQ };
    [<] => { $crate::SyntaxKind::LT };
    [<=] => { $crate::SyntaxKind::LT_EQ };
    [>] => { $crate::SyntaxKind::GT };
    [>=] => { $crate::SyntaxKind::GT_EQ };
    [=~] => { $crate::SyntaxKind::REGEX_MATCH };
    [|] => { $crate::SyntaxKind::PIPE };
    [ident] => { $crate::SyntaxKind::IDENT };
    [all] => { $crate::SyntaxKind::all_KW };
    [allshortestpaths] => { $crate::SyntaxKind::allshortestpaths_KW };
    [and] => { $crate::SyntaxKind::and_KW };
    [any] => { $crate::SyntaxKind::any_KW };
    [as] => { $crate::SyntaxKind::as_KW };
    [asc] => { $crate::SyntaxKind::asc_KW };
    [ascending] => { $crate::SyntaxKind::ascending_KW };
    [assert] => { $crate::SyntaxKind::assert_KW };
    [by] => { $crate::SyntaxKind::by_KW };
    [call] => { $crate::SyntaxKind::call_KW };
    [case] => { $crate::SyntaxKind::case_KW };
    [commit] => { $crate::SyntaxKind::commit_KW };
    [constraint] => { $crate::SyntaxKind::constraint_KW };
    [contains] => { $crate::SyntaxKind::contains_KW };
    [create] => { $crate::SyntaxKind::create_KW };
    [csv] => { $crate::SyntaxKind::csv_KW };
    [cypher] => { $crate::SyntaxKind::cypher_KW };
    [delete] => { $crate::SyntaxKind::delete_KW };
    [desc] => { $crate::SyntaxKind::desc_KW };
    [descending] => { $crate::SyntaxKind::descending_KW };
    [detach] => { $crate::SyntaxKind::detach_KW };
    [distinct] => { $crate::SyntaxKind::distinct_KW };
    [drop] => { $crate::SyntaxKind::drop_KW };
    [else] => { $crate::SyntaxKind::else_KW };
    [end] => { $crate::SyntaxKind::end_KW };
    [ends] => { $crate::SyntaxKind::ends_KW };
    [exists] => { $crate::SyntaxKind::exists_KW };
    [explain] => { $crate::SyntaxKind::explain_KW };
    [extract] => { $crate::SyntaxKind::extract_KW };
    [false] => { $crate::SyntaxKind::false_KW };
    [fieldterminator] => { $crate::SyntaxKind::fieldterminator_KW };
    [filter] => { $crate::SyntaxKind::filter_KW };
    [foreach] => { $crate::SyntaxKind::foreach_KW };
    [from] => { $crate::SyntaxKind::from_KW };
    [headers] => { $crate::SyntaxKind::headers_KW };
    [in] => { $crate::SyntaxKind::in_KW };
    [index] => { $crate::SyntaxKind::index_KW };
    [is] => { $crate::SyntaxKind::is_KW };
    [join] => { $crate::SyntaxKind::join_KW };
    [limit] => { $crate::SyntaxKind::limit_KW };
    [load] => { $crate::SyntaxKind::load_KW };
    [match] => { $crate::SyntaxKind::match_KW };
    [merge] => { $crate::SyntaxKind::merge_KW };
    [node] => { $crate::SyntaxKind::node_KW };
    [none] => { $crate::SyntaxKind::none_KW };
    [not] => { $crate::SyntaxKind::not_KW };
    [null] => { $crate::SyntaxKind::null_KW };
    [on] => { $crate::SyntaxKind::on_KW };
    [optional] => { $crate::SyntaxKind::optional_KW };
    [or] => { $crate::SyntaxKind::or_KW };
    [order] => { $crate::SyntaxKind::order_KW };
    [periodic] => { $crate::SyntaxKind::periodic_KW };
    [profile] => { $crate::SyntaxKind::profile_KW };
    [reduce] => { $crate::SyntaxKind::reduce_KW };
    [rel] => { $crate::SyntaxKind::rel_KW };
    [relationship] => { $crate::SyntaxKind::relationship_KW };
    [remove] => { $crate::SyntaxKind::remove_KW };
    [return] => { $crate::SyntaxKind::return_KW };
    [scan] => { $crate::SyntaxKind::scan_KW };
    [set] => { $crate::SyntaxKind::set_KW };
    [shortestpath] => { $crate::SyntaxKind::shortestpath_KW };
    [single] => { $crate::SyntaxKind::single_KW };
    [skip] => { $crate::SyntaxKind::skip_KW };
    [start] => { $crate::SyntaxKind::start_KW };
    [starts] => { $crate::SyntaxKind::starts_KW };
    [then] => { $crate::SyntaxKind::then_KW };
    [true] => { $crate::SyntaxKind::true_KW };
    [union] => { $crate::SyntaxKind::union_KW };
    [unique] => { $crate::SyntaxKind::unique_KW };
    [unwind] => { $crate::SyntaxKind::unwind_KW };
    [using] => { $crate::SyntaxKind::using_KW };
    [when] => { $crate::SyntaxKind::when_KW };
    [where] => { $crate::SyntaxKind::where_KW };
    [with] => { $crate::SyntaxKind::with_KW };
    [xor] => { $crate::SyntaxKind::xor_KW };
    [yield] => { $crate::SyntaxKind::yield_KW };
}

#[cfg(test)]
mod tests {
    use super::SyntaxKind::*;

    #[test]
    fn ancestor_chains_are_transitive() {
        assert!(FLOAT.is_a(EXPRESSION));
        assert!(CREATE_UNIQUE_NODE_PROP_CONSTRAINT.is_a(SCHEMA_COMMAND));
        assert!(CREATE_UNIQUE_NODE_PROP_CONSTRAINT.is_a(STATEMENT_BODY));
        assert!(NAMED_PATH.is_a(PATTERN_PATH));
        assert!(NAMED_PATH.is_a(EXPRESSION));
        assert!(MATCH.is_a(QUERY_CLAUSE));
        assert!(!MATCH.is_a(EXPRESSION));
        assert!(EXPRESSION.is_a(EXPRESSION));
    }

    #[test]
    fn node_kind_partition() {
        assert!(STATEMENT.is_node());
        assert!(ERROR.is_node());
        assert!(NODE_PATTERN.is_node());
        assert!(!WHITESPACE.is_node());
        assert!(!match_KW.is_node());
        assert!(!EXPRESSION.is_node());
    }
}
