use super::{ast_enum, ast_node, support, AstChildren, AstNode};
use crate::{SyntaxKind, SyntaxNode};

ast_node!(
    /// The root of a parse: a sequence of directives.
    CypherInput,
    CYPHER_INPUT
);

impl CypherInput {
    pub fn directives(&self) -> AstChildren<Directive> {
        support::children(&self.syntax)
    }
}

ast_node!(
    /// A statement directive: options plus a query or schema command body.
    Statement,
    STATEMENT
);

impl Statement {
    pub fn options(&self) -> AstChildren<StatementOption> {
        support::children(&self.syntax)
    }

    pub fn body(&self) -> Option<StatementBody> {
        support::child(&self.syntax)
    }
}

ast_node!(
    /// A client command directive, e.g. `:play movies`.
    Command,
    COMMAND
);

impl Command {
    pub fn args(&self) -> AstChildren<StringLiteral> {
        support::children(&self.syntax)
    }
}

ast_node!(LineComment, LINE_COMMENT);
ast_node!(BlockComment, BLOCK_COMMENT);

ast_node!(
    /// `CYPHER 2.3 planner=cost`
    CypherOption,
    CYPHER_OPTION
);

impl CypherOption {
    pub fn version(&self) -> Option<StringLiteral> {
        support::child(&self.syntax)
    }

    pub fn params(&self) -> AstChildren<CypherOptionParam> {
        support::children(&self.syntax)
    }
}

ast_node!(CypherOptionParam, CYPHER_OPTION_PARAM);

impl CypherOptionParam {
    pub fn name(&self) -> Option<StringLiteral> {
        support::nth_child(&self.syntax, 0)
    }

    pub fn value(&self) -> Option<StringLiteral> {
        support::nth_child(&self.syntax, 1)
    }
}

ast_node!(ExplainOption, EXPLAIN_OPTION);
ast_node!(ProfileOption, PROFILE_OPTION);

ast_node!(
    /// `USING PERIODIC COMMIT 500`
    UsingPeriodicCommit,
    USING_PERIODIC_COMMIT
);

impl UsingPeriodicCommit {
    pub fn limit(&self) -> Option<Integer> {
        support::child(&self.syntax)
    }
}

ast_node!(CreateNodePropsIndex, CREATE_NODE_PROPS_INDEX);
ast_node!(DropNodePropsIndex, DROP_NODE_PROPS_INDEX);

macro_rules! index_command_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn label(&self) -> Option<Label> {
                support::child(&self.syntax)
            }

            pub fn prop_names(&self) -> AstChildren<PropName> {
                support::children(&self.syntax)
            }
        })+
    };
}

index_command_accessors!(CreateNodePropsIndex, DropNodePropsIndex);

ast_node!(
    /// `CREATE CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE`
    CreateUniqueNodePropConstraint,
    CREATE_UNIQUE_NODE_PROP_CONSTRAINT
);
ast_node!(DropUniqueNodePropConstraint, DROP_UNIQUE_NODE_PROP_CONSTRAINT);
ast_node!(
    CreateNodePropExistenceConstraint,
    CREATE_NODE_PROP_EXISTENCE_CONSTRAINT
);
ast_node!(
    DropNodePropExistenceConstraint,
    DROP_NODE_PROP_EXISTENCE_CONSTRAINT
);

macro_rules! node_constraint_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }

            pub fn label(&self) -> Option<Label> {
                support::child(&self.syntax)
            }

            pub fn expression(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::assert_KW)
            }
        })+
    };
}

node_constraint_accessors!(
    CreateUniqueNodePropConstraint,
    DropUniqueNodePropConstraint,
    CreateNodePropExistenceConstraint,
    DropNodePropExistenceConstraint
);

ast_node!(
    CreateRelPropExistenceConstraint,
    CREATE_REL_PROP_EXISTENCE_CONSTRAINT
);
ast_node!(
    DropRelPropExistenceConstraint,
    DROP_REL_PROP_EXISTENCE_CONSTRAINT
);

macro_rules! rel_constraint_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }

            pub fn reltype(&self) -> Option<RelType> {
                support::child(&self.syntax)
            }

            pub fn expression(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::assert_KW)
            }
        })+
    };
}

rel_constraint_accessors!(CreateRelPropExistenceConstraint, DropRelPropExistenceConstraint);

ast_node!(
    /// A sequence of clauses, including any UNIONs between them.
    Query,
    QUERY
);

impl Query {
    pub fn options(&self) -> AstChildren<UsingPeriodicCommit> {
        support::children(&self.syntax)
    }

    pub fn clauses(&self) -> AstChildren<Clause> {
        support::children(&self.syntax)
    }
}

ast_node!(Union, UNION);

impl Union {
    pub fn all(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::all_KW)
    }
}

ast_node!(LoadCsv, LOAD_CSV);

impl LoadCsv {
    pub fn with_headers(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::headers_KW)
    }

    pub fn url(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::from_KW)
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::child_after(&self.syntax, SyntaxKind::as_KW)
    }

    pub fn field_terminator(&self) -> Option<StringLiteral> {
        support::child_after(&self.syntax, SyntaxKind::fieldterminator_KW)
    }
}

ast_node!(Start, START);

impl Start {
    pub fn points(&self) -> AstChildren<StartPoint> {
        support::children(&self.syntax)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::where_KW)
    }
}

ast_node!(NodeIndexLookup, NODE_INDEX_LOOKUP);
ast_node!(NodeIndexQuery, NODE_INDEX_QUERY);
ast_node!(RelIndexLookup, REL_INDEX_LOOKUP);
ast_node!(RelIndexQuery, REL_INDEX_QUERY);

macro_rules! index_point_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }

            pub fn index_name(&self) -> Option<IndexName> {
                support::child(&self.syntax)
            }

            /// The queried value: a string literal or a parameter.
            pub fn lookup(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::EQ)
            }
        })+
    };
}

index_point_accessors!(NodeIndexLookup, NodeIndexQuery, RelIndexLookup, RelIndexQuery);

impl NodeIndexLookup {
    pub fn prop_name(&self) -> Option<PropName> {
        support::child(&self.syntax)
    }
}

impl RelIndexLookup {
    pub fn prop_name(&self) -> Option<PropName> {
        support::child(&self.syntax)
    }
}

ast_node!(NodeIdLookup, NODE_ID_LOOKUP);
ast_node!(RelIdLookup, REL_ID_LOOKUP);

macro_rules! id_lookup_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }

            pub fn ids(&self) -> AstChildren<Integer> {
                support::children(&self.syntax)
            }

            /// Set when the ids come from a parameter instead of a list.
            pub fn parameter(&self) -> Option<Parameter> {
                support::child(&self.syntax)
            }
        })+
    };
}

id_lookup_accessors!(NodeIdLookup, RelIdLookup);

ast_node!(AllNodesScan, ALL_NODES_SCAN);
ast_node!(AllRelsScan, ALL_RELS_SCAN);

macro_rules! scan_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }
        })+
    };
}

scan_accessors!(AllNodesScan, AllRelsScan);

ast_node!(Match, MATCH);

impl Match {
    pub fn optional(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::optional_KW)
    }

    pub fn pattern(&self) -> Option<Pattern> {
        support::child(&self.syntax)
    }

    pub fn hints(&self) -> AstChildren<MatchHint> {
        support::children(&self.syntax)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::where_KW)
    }
}

ast_node!(UsingIndex, USING_INDEX);

impl UsingIndex {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn label(&self) -> Option<Label> {
        support::child(&self.syntax)
    }

    pub fn prop_name(&self) -> Option<PropName> {
        support::child(&self.syntax)
    }
}

ast_node!(UsingJoin, USING_JOIN);

impl UsingJoin {
    pub fn identifiers(&self) -> AstChildren<Identifier> {
        support::children(&self.syntax)
    }
}

ast_node!(UsingScan, USING_SCAN);

impl UsingScan {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn label(&self) -> Option<Label> {
        support::child(&self.syntax)
    }
}

ast_node!(Merge, MERGE);

impl Merge {
    /// The single pattern part being merged.
    pub fn path(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn actions(&self) -> AstChildren<MergeAction> {
        support::children(&self.syntax)
    }
}

ast_node!(OnMatch, ON_MATCH);
ast_node!(OnCreate, ON_CREATE);

macro_rules! merge_action_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn items(&self) -> AstChildren<SetItem> {
                support::children(&self.syntax)
            }
        })+
    };
}

merge_action_accessors!(OnMatch, OnCreate);

ast_node!(Create, CREATE);

impl Create {
    pub fn unique(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::unique_KW)
    }

    pub fn pattern(&self) -> Option<Pattern> {
        support::child(&self.syntax)
    }
}

ast_node!(Set, SET);

impl Set {
    pub fn items(&self) -> AstChildren<SetItem> {
        support::children(&self.syntax)
    }
}

ast_node!(SetProperty, SET_PROPERTY);

impl SetProperty {
    pub fn property(&self) -> Option<PropertyOperator> {
        support::child(&self.syntax)
    }

    pub fn value(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::EQ)
    }
}

ast_node!(SetAllProperties, SET_ALL_PROPERTIES);

impl SetAllProperties {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::EQ)
    }
}

ast_node!(MergeProperties, MERGE_PROPERTIES);

impl MergeProperties {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::PLUS_EQ)
    }
}

ast_node!(SetLabels, SET_LABELS);

impl SetLabels {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn labels(&self) -> AstChildren<Label> {
        support::children(&self.syntax)
    }
}

ast_node!(Delete, DELETE);

impl Delete {
    pub fn detach(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::detach_KW)
    }

    pub fn expressions(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }
}

ast_node!(Remove, REMOVE);

impl Remove {
    pub fn items(&self) -> AstChildren<RemoveItem> {
        support::children(&self.syntax)
    }
}

ast_node!(RemoveLabels, REMOVE_LABELS);

impl RemoveLabels {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn labels(&self) -> AstChildren<Label> {
        support::children(&self.syntax)
    }
}

ast_node!(RemoveProperty, REMOVE_PROPERTY);

impl RemoveProperty {
    pub fn property(&self) -> Option<PropertyOperator> {
        support::child(&self.syntax)
    }
}

ast_node!(Foreach, FOREACH);

impl Foreach {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::in_KW)
    }

    pub fn clauses(&self) -> AstChildren<Clause> {
        support::children(&self.syntax)
    }
}

ast_node!(With, WITH);
ast_node!(Return, RETURN);

macro_rules! projection_body_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn distinct(&self) -> bool {
                support::has_token(&self.syntax, SyntaxKind::distinct_KW)
            }

            /// Whether the projection list begins with `*`.
            pub fn include_existing(&self) -> bool {
                support::has_token(&self.syntax, SyntaxKind::STAR)
            }

            pub fn projections(&self) -> AstChildren<Projection> {
                support::children(&self.syntax)
            }

            pub fn order_by(&self) -> Option<OrderBy> {
                support::child(&self.syntax)
            }

            pub fn skip(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::skip_KW)
            }

            pub fn limit(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::limit_KW)
            }
        })+
    };
}

projection_body_accessors!(With, Return);

impl With {
    pub fn predicate(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::where_KW)
    }
}

ast_node!(Unwind, UNWIND);

impl Unwind {
    pub fn expression(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn alias(&self) -> Option<Identifier> {
        support::child_after(&self.syntax, SyntaxKind::as_KW)
    }
}

ast_node!(Call, CALL);

impl Call {
    pub fn proc_name(&self) -> Option<ProcName> {
        support::child(&self.syntax)
    }

    pub fn args(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }

    pub fn projections(&self) -> AstChildren<Projection> {
        support::children(&self.syntax)
    }
}

ast_node!(Projection, PROJECTION);

impl Projection {
    pub fn expression(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn alias(&self) -> Option<Identifier> {
        support::child_after(&self.syntax, SyntaxKind::as_KW)
    }
}

ast_node!(OrderBy, ORDER_BY);

impl OrderBy {
    pub fn items(&self) -> AstChildren<SortItem> {
        support::children(&self.syntax)
    }
}

ast_node!(SortItem, SORT_ITEM);

impl SortItem {
    pub fn expression(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn ascending(&self) -> bool {
        !support::has_token(&self.syntax, SyntaxKind::desc_KW)
            && !support::has_token(&self.syntax, SyntaxKind::descending_KW)
    }
}

ast_node!(UnaryOperator, UNARY_OPERATOR);

impl UnaryOperator {
    pub fn operator(&self) -> &'static str {
        if support::has_token(&self.syntax, SyntaxKind::is_KW) {
            if support::has_token(&self.syntax, SyntaxKind::not_KW) {
                "IS NOT NULL"
            } else {
                "IS NULL"
            }
        } else if support::has_token(&self.syntax, SyntaxKind::not_KW) {
            "NOT"
        } else if support::has_token(&self.syntax, SyntaxKind::MINUS) {
            "-"
        } else {
            "+"
        }
    }

    pub fn argument(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }
}

ast_node!(BinaryOperator, BINARY_OPERATOR);

impl BinaryOperator {
    pub fn operator(&self) -> &'static str {
        self.syntax
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|token| operator_text(token.kind()))
            .unwrap_or("")
    }

    pub fn left(&self) -> Option<Expression> {
        support::nth_child(&self.syntax, 0)
    }

    pub fn right(&self) -> Option<Expression> {
        support::nth_child(&self.syntax, 1)
    }
}

ast_node!(
    /// A chain of comparisons collapsed into one node: `1 < 2 <= 3` has
    /// three operands and two operators.
    Comparison,
    COMPARISON
);

impl Comparison {
    pub fn length(&self) -> usize {
        self.operators().len()
    }

    pub fn operands(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }

    pub fn operators(&self) -> Vec<&'static str> {
        self.syntax
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter_map(|token| operator_text(token.kind()))
            .collect()
    }
}

fn operator_text(kind: SyntaxKind) -> Option<&'static str> {
    Some(match kind {
        SyntaxKind::PLUS => "+",
        SyntaxKind::MINUS => "-",
        SyntaxKind::STAR => "*",
        SyntaxKind::SLASH => "/",
        SyntaxKind::PERCENT => "%",
        SyntaxKind::CARET => "^",
        SyntaxKind::EQ => "=",
        SyntaxKind::NOT_EQ => "<>",
        SyntaxKind::LT => "<",
        SyntaxKind::LT_EQ => "<=",
        SyntaxKind::GT => ">",
        SyntaxKind::GT_EQ => ">=",
        SyntaxKind::REGEX_MATCH => "=~",
        SyntaxKind::starts_KW => "STARTS WITH",
        SyntaxKind::ends_KW => "ENDS WITH",
        SyntaxKind::contains_KW => "CONTAINS",
        SyntaxKind::in_KW => "IN",
        SyntaxKind::and_KW => "AND",
        SyntaxKind::or_KW => "OR",
        SyntaxKind::xor_KW => "XOR",
        _ => return None,
    })
}

ast_node!(ApplyOperator, APPLY_OPERATOR);

impl ApplyOperator {
    pub fn func_name(&self) -> Option<FunctionName> {
        support::child(&self.syntax)
    }

    pub fn distinct(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::distinct_KW)
    }

    pub fn args(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }
}

ast_node!(
    /// `count(*)` and friends.
    ApplyAllOperator,
    APPLY_ALL_OPERATOR
);

impl ApplyAllOperator {
    pub fn func_name(&self) -> Option<FunctionName> {
        support::child(&self.syntax)
    }
}

ast_node!(PropertyOperator, PROPERTY_OPERATOR);

impl PropertyOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn prop_name(&self) -> Option<PropName> {
        support::child(&self.syntax)
    }
}

ast_node!(SubscriptOperator, SUBSCRIPT_OPERATOR);

impl SubscriptOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(&self.syntax, 0)
    }

    pub fn subscript(&self) -> Option<Expression> {
        support::nth_child(&self.syntax, 1)
    }
}

ast_node!(SliceOperator, SLICE_OPERATOR);

impl SliceOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(&self.syntax, 0)
    }

    pub fn start(&self) -> Option<Expression> {
        support::child_between(&self.syntax, SyntaxKind::L_BRACK, SyntaxKind::DOT_DOT)
    }

    pub fn end(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::DOT_DOT)
    }
}

ast_node!(LabelsOperator, LABELS_OPERATOR);

impl LabelsOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::child(&self.syntax)
    }

    pub fn labels(&self) -> AstChildren<Label> {
        support::children(&self.syntax)
    }
}

ast_node!(ListComprehension, LIST_COMPREHENSION);

impl ListComprehension {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::in_KW)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::where_KW)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::PIPE)
    }
}

ast_node!(PatternComprehension, PATTERN_COMPREHENSION);

impl PatternComprehension {
    /// The path name, present only in the `[p = (a)-->(b) | ..]` form.
    pub fn identifier(&self) -> Option<Identifier> {
        if support::has_token(&self.syntax, SyntaxKind::EQ) {
            support::child_before(&self.syntax, SyntaxKind::EQ)
        } else {
            None
        }
    }

    pub fn pattern(&self) -> Option<PatternPath> {
        support::child(&self.syntax)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::where_KW)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::PIPE)
    }
}

ast_node!(Case, CASE);

impl Case {
    /// The tested value of the simple form; `None` in the searched form.
    pub fn operand(&self) -> Option<Expression> {
        support::child_before(&self.syntax, SyntaxKind::when_KW)
    }

    /// WHEN/THEN pairs, in order.
    pub fn alternatives(&self) -> Vec<(Expression, Expression)> {
        let mut pairs = Vec::new();
        let mut pending: Option<Expression> = None;
        let mut after_when = false;
        let mut after_then = false;
        for element in self.syntax.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(token) => match token.kind() {
                    SyntaxKind::when_KW => {
                        after_when = true;
                        after_then = false;
                    }
                    SyntaxKind::then_KW => {
                        after_then = true;
                        after_when = false;
                    }
                    SyntaxKind::else_KW | SyntaxKind::end_KW => break,
                    _ => {}
                },
                rowan::NodeOrToken::Node(node) => {
                    let Some(expression) = Expression::cast(node) else {
                        continue;
                    };
                    if after_when {
                        pending = Some(expression);
                        after_when = false;
                    } else if after_then {
                        if let Some(condition) = pending.take() {
                            pairs.push((condition, expression));
                        }
                        after_then = false;
                    }
                }
            }
        }
        pairs
    }

    pub fn default(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::else_KW)
    }
}

ast_node!(Filter, FILTER);
ast_node!(Extract, EXTRACT);
ast_node!(AllPredicate, ALL);
ast_node!(AnyPredicate, ANY);
ast_node!(SinglePredicate, SINGLE);
ast_node!(NonePredicate, NONE);

macro_rules! list_predicate_accessors {
    ($($name:ident),+) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(&self.syntax)
            }

            pub fn expression(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::in_KW)
            }

            pub fn predicate(&self) -> Option<Expression> {
                support::child_after(&self.syntax, SyntaxKind::where_KW)
            }
        })+
    };
}

list_predicate_accessors!(
    Filter,
    Extract,
    AllPredicate,
    AnyPredicate,
    SinglePredicate,
    NonePredicate
);

impl Extract {
    pub fn eval(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::PIPE)
    }
}

ast_node!(
    /// `reduce(acc = 0, x IN xs | acc + x)`
    Reduce,
    REDUCE
);

impl Reduce {
    pub fn accumulator(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn init(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::EQ)
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::child_after(&self.syntax, SyntaxKind::COMMA)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::in_KW)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::PIPE)
    }
}

ast_node!(
    /// A list literal.
    Collection,
    COLLECTION
);

impl Collection {
    pub fn elements(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }
}

ast_node!(Map, MAP);

impl Map {
    pub fn keys(&self) -> AstChildren<PropName> {
        support::children(&self.syntax)
    }

    pub fn values(&self) -> AstChildren<Expression> {
        support::children(&self.syntax)
    }

    pub fn entries(&self) -> Vec<(PropName, Expression)> {
        self.keys().zip(self.values()).collect()
    }
}

ast_node!(Identifier, IDENTIFIER);
ast_node!(Parameter, PARAMETER);
ast_node!(
    /// A string literal, or a bare token in string position (command
    /// arguments, option values).
    StringLiteral,
    STRING
);
ast_node!(Integer, INTEGER);
ast_node!(Float, FLOAT);
ast_node!(True, TRUE);
ast_node!(False, FALSE);
ast_node!(Null, NULL);

ast_node!(Label, LABEL);
ast_node!(RelType, RELTYPE);
ast_node!(PropName, PROP_NAME);
ast_node!(FunctionName, FUNCTION_NAME);
ast_node!(IndexName, INDEX_NAME);
ast_node!(ProcName, PROC_NAME);

ast_node!(Pattern, PATTERN);

impl Pattern {
    pub fn parts(&self) -> AstChildren<PatternPart> {
        support::children(&self.syntax)
    }
}

ast_node!(NamedPath, NAMED_PATH);

impl NamedPath {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    /// The anonymous pattern after the `=`: a pattern path or a shortest
    /// path call.
    pub fn path(&self) -> Option<Expression> {
        support::child_after(&self.syntax, SyntaxKind::EQ)
    }
}

ast_node!(ShortestPath, SHORTEST_PATH);

impl ShortestPath {
    /// `shortestPath` finds a single path, `allShortestPaths` all of them.
    pub fn single(&self) -> bool {
        support::has_token(&self.syntax, SyntaxKind::shortestpath_KW)
    }

    pub fn path(&self) -> Option<PatternPath> {
        support::child(&self.syntax)
    }
}

ast_node!(PatternPath, PATTERN_PATH);

impl PatternPath {
    pub fn elements(&self) -> AstChildren<PathElement> {
        support::children(&self.syntax)
    }

    pub fn nodes(&self) -> AstChildren<NodePattern> {
        support::children(&self.syntax)
    }
}

ast_node!(NodePattern, NODE_PATTERN);

impl NodePattern {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn labels(&self) -> AstChildren<Label> {
        support::children(&self.syntax)
    }

    /// A map literal or parameter.
    pub fn properties(&self) -> Option<Expression> {
        properties_child(&self.syntax)
    }
}

/// Direction of a relationship pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelDirection {
    Outbound,
    Inbound,
    Bidirectional,
}

ast_node!(RelPattern, REL_PATTERN);

impl RelPattern {
    pub fn direction(&self) -> RelDirection {
        let inbound = support::has_token(&self.syntax, SyntaxKind::LT);
        let outbound = support::has_token(&self.syntax, SyntaxKind::GT);
        match (inbound, outbound) {
            (true, false) => RelDirection::Inbound,
            (false, true) => RelDirection::Outbound,
            _ => RelDirection::Bidirectional,
        }
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.syntax)
    }

    pub fn reltypes(&self) -> AstChildren<RelType> {
        support::children(&self.syntax)
    }

    pub fn varlength(&self) -> Option<Range> {
        support::child(&self.syntax)
    }

    pub fn properties(&self) -> Option<Expression> {
        properties_child(&self.syntax)
    }
}

fn properties_child(parent: &SyntaxNode) -> Option<Expression> {
    parent
        .children()
        .find(|child| matches!(child.kind(), SyntaxKind::MAP | SyntaxKind::PARAMETER))
        .and_then(Expression::cast)
}

ast_node!(
    /// A variable-length specifier: `*`, `*2`, `*1..3`, `*..3`.
    Range,
    RANGE
);

impl Range {
    pub fn start(&self) -> Option<Integer> {
        if support::has_token(&self.syntax, SyntaxKind::DOT_DOT) {
            support::child_between(&self.syntax, SyntaxKind::STAR, SyntaxKind::DOT_DOT)
        } else {
            support::child(&self.syntax)
        }
    }

    pub fn end(&self) -> Option<Integer> {
        if support::has_token(&self.syntax, SyntaxKind::DOT_DOT) {
            support::child_after(&self.syntax, SyntaxKind::DOT_DOT)
        } else {
            support::child(&self.syntax)
        }
    }
}

/// Any expression; the wrapper for slots that accept every expression
/// kind. Cast to a concrete type for kind-specific slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    pub(crate) syntax: SyntaxNode,
}

impl Expression {
    pub fn kind(&self) -> SyntaxKind {
        self.syntax.kind()
    }
}

impl AstNode for Expression {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_node() && kind.is_a(SyntaxKind::EXPRESSION)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        Self::can_cast(syntax.kind()).then_some(Self { syntax })
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

ast_enum!(
    /// A top-level unit of input.
    Directive {
        Statement,
        Command,
        LineComment,
        BlockComment,
    }
);

ast_enum!(StatementOption {
    CypherOption,
    ExplainOption,
    ProfileOption,
});

ast_enum!(
    /// The body of a statement: a query or one of the schema commands.
    StatementBody {
        Query,
        CreateNodePropsIndex,
        DropNodePropsIndex,
        CreateUniqueNodePropConstraint,
        DropUniqueNodePropConstraint,
        CreateNodePropExistenceConstraint,
        DropNodePropExistenceConstraint,
        CreateRelPropExistenceConstraint,
        DropRelPropExistenceConstraint,
    }
);

ast_enum!(
    /// Any clause of a query.
    Clause {
        Match,
        Create,
        Merge,
        Delete,
        Remove,
        Set,
        With,
        Unwind,
        Foreach,
        LoadCsv,
        Start,
        Return,
        Call,
        Union,
    }
);

ast_enum!(StartPoint {
    NodeIndexLookup,
    NodeIndexQuery,
    NodeIdLookup,
    AllNodesScan,
    RelIndexLookup,
    RelIndexQuery,
    RelIdLookup,
    AllRelsScan,
});

ast_enum!(MatchHint {
    UsingIndex,
    UsingJoin,
    UsingScan,
});

ast_enum!(MergeAction {
    OnMatch,
    OnCreate,
});

ast_enum!(SetItem {
    SetProperty,
    SetAllProperties,
    MergeProperties,
    SetLabels,
});

ast_enum!(RemoveItem {
    RemoveLabels,
    RemoveProperty,
});

ast_enum!(
    /// One comma-separated part of a pattern.
    PatternPart {
        NamedPath,
        ShortestPath,
        PatternPath,
    }
);

ast_enum!(
    /// The alternating nodes and relationships of a pattern path.
    PathElement {
        NodePattern,
        RelPattern,
    }
);
