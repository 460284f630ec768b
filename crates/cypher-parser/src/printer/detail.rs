//! Per-kind display names and one-line detail strings. Details cite child
//! nodes by ordinal (`@N`); leaf kinds print their own payload.

use super::Ordinals;
use crate::ast::{self, AstNode};
use crate::{SyntaxKind, SyntaxNode};

pub(super) fn node_name(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        CYPHER_INPUT => "input",
        STATEMENT => "statement",
        COMMAND => "command",
        LINE_COMMENT => "line comment",
        BLOCK_COMMENT => "block comment",
        CYPHER_OPTION => "CYPHER",
        CYPHER_OPTION_PARAM => "cypher parameter",
        EXPLAIN_OPTION => "EXPLAIN",
        PROFILE_OPTION => "PROFILE",
        USING_PERIODIC_COMMIT => "USING PERIODIC COMMIT",
        CREATE_NODE_PROPS_INDEX => "CREATE INDEX",
        DROP_NODE_PROPS_INDEX => "DROP INDEX",
        CREATE_UNIQUE_NODE_PROP_CONSTRAINT => "CREATE UNIQUE CONSTRAINT",
        DROP_UNIQUE_NODE_PROP_CONSTRAINT => "DROP UNIQUE CONSTRAINT",
        CREATE_NODE_PROP_EXISTENCE_CONSTRAINT => "CREATE CONSTRAINT",
        DROP_NODE_PROP_EXISTENCE_CONSTRAINT => "DROP CONSTRAINT",
        CREATE_REL_PROP_EXISTENCE_CONSTRAINT => "CREATE REL CONSTRAINT",
        DROP_REL_PROP_EXISTENCE_CONSTRAINT => "DROP REL CONSTRAINT",
        QUERY => "query",
        UNION => "UNION",
        LOAD_CSV => "LOAD CSV",
        START => "START",
        NODE_INDEX_LOOKUP => "node index lookup",
        NODE_INDEX_QUERY => "node index query",
        NODE_ID_LOOKUP => "node id lookup",
        ALL_NODES_SCAN => "all nodes scan",
        REL_INDEX_LOOKUP => "rel index lookup",
        REL_INDEX_QUERY => "rel index query",
        REL_ID_LOOKUP => "rel id lookup",
        ALL_RELS_SCAN => "all rels scan",
        MATCH => "MATCH",
        USING_INDEX => "USING INDEX",
        USING_JOIN => "USING JOIN",
        USING_SCAN => "USING SCAN",
        MERGE => "MERGE",
        ON_MATCH => "ON MATCH",
        ON_CREATE => "ON CREATE",
        CREATE => "CREATE",
        SET => "SET",
        SET_PROPERTY => "set property",
        SET_ALL_PROPERTIES => "set all properties",
        MERGE_PROPERTIES => "merge properties",
        SET_LABELS => "set labels",
        DELETE => "DELETE",
        REMOVE => "REMOVE",
        REMOVE_LABELS => "remove labels",
        REMOVE_PROPERTY => "remove property",
        FOREACH => "FOREACH",
        WITH => "WITH",
        UNWIND => "UNWIND",
        CALL => "CALL",
        RETURN => "RETURN",
        PROJECTION => "projection",
        ORDER_BY => "ORDER BY",
        SORT_ITEM => "sort item",
        UNARY_OPERATOR => "unary operator",
        BINARY_OPERATOR => "binary operator",
        COMPARISON => "comparison",
        APPLY_OPERATOR => "apply",
        APPLY_ALL_OPERATOR => "apply all",
        PROPERTY_OPERATOR => "property",
        SUBSCRIPT_OPERATOR => "subscript",
        SLICE_OPERATOR => "slice",
        LABELS_OPERATOR => "has labels",
        LIST_COMPREHENSION => "list comprehension",
        PATTERN_COMPREHENSION => "pattern comprehension",
        CASE => "case",
        FILTER => "filter",
        EXTRACT => "extract",
        REDUCE => "reduce",
        ALL => "all",
        ANY => "any",
        SINGLE => "single",
        NONE => "none",
        COLLECTION => "collection",
        MAP => "map",
        IDENTIFIER => "identifier",
        PARAMETER => "parameter",
        STRING => "string",
        INTEGER => "integer",
        FLOAT => "float",
        TRUE => "TRUE",
        FALSE => "FALSE",
        NULL => "NULL",
        LABEL => "label",
        RELTYPE => "rel type",
        PROP_NAME => "prop name",
        FUNCTION_NAME => "function name",
        INDEX_NAME => "index name",
        PROC_NAME => "proc name",
        PATTERN => "pattern",
        NAMED_PATH => "named path",
        SHORTEST_PATH => "shortestPath",
        PATTERN_PATH => "pattern path",
        NODE_PATTERN => "node pattern",
        REL_PATTERN => "rel pattern",
        RANGE => "range",
        ERROR => "error",
        _ => "?",
    }
}

fn at<N: AstNode>(ordinals: &Ordinals, node: &N) -> String {
    format!("@{}", ordinals.get(node.syntax()).unwrap_or(0))
}

fn list<N: AstNode>(ordinals: &Ordinals, nodes: impl Iterator<Item = N>) -> String {
    let ordinals: Vec<String> = nodes.map(|node| at(ordinals, &node)).collect();
    format!("[{}]", ordinals.join(", "))
}

pub(super) fn detail(node: &SyntaxNode, ords: &Ordinals) -> Option<String> {
    use SyntaxKind::*;
    let detail = match node.kind() {
        STATEMENT => {
            let statement = ast::Statement::cast(node.clone())?;
            let mut parts = Vec::new();
            if statement.options().next().is_some() {
                parts.push(format!("options={}", list(ords, statement.options())));
            }
            if let Some(body) = statement.body() {
                parts.push(format!("body={}", at(ords, &body)));
            }
            parts.join(", ")
        }
        COMMAND => {
            let command = ast::Command::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(name) = command.name() {
                parts.push(format!("name={name:?}"));
            }
            if command.args().next().is_some() {
                parts.push(format!("args={}", list(ords, command.args())));
            }
            parts.join(", ")
        }
        LINE_COMMENT => {
            let comment = ast::LineComment::cast(node.clone())?;
            format!("{:?}", comment.text())
        }
        BLOCK_COMMENT => {
            let comment = ast::BlockComment::cast(node.clone())?;
            format!("{:?}", comment.text())
        }
        CYPHER_OPTION => {
            let option = ast::CypherOption::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(version) = option.version() {
                parts.push(format!("version={}", at(ords, &version)));
            }
            if option.params().next().is_some() {
                parts.push(format!("params={}", list(ords, option.params())));
            }
            parts.join(", ")
        }
        CYPHER_OPTION_PARAM => {
            let param = ast::CypherOptionParam::cast(node.clone())?;
            format!(
                "{}={}",
                param.name().map(|name| at(ords, &name)).unwrap_or_default(),
                param
                    .value()
                    .map(|value| at(ords, &value))
                    .unwrap_or_default()
            )
        }
        USING_PERIODIC_COMMIT => {
            let option = ast::UsingPeriodicCommit::cast(node.clone())?;
            let limit = option.limit()?;
            format!("limit={}", at(ords, &limit))
        }
        CREATE_NODE_PROPS_INDEX | DROP_NODE_PROPS_INDEX => {
            let (label, props) = match node.kind() {
                CREATE_NODE_PROPS_INDEX => {
                    let index = ast::CreateNodePropsIndex::cast(node.clone())?;
                    (index.label(), list(ords, index.prop_names()))
                }
                _ => {
                    let index = ast::DropNodePropsIndex::cast(node.clone())?;
                    (index.label(), list(ords, index.prop_names()))
                }
            };
            format!(
                "ON=(:{}({}))",
                label.map(|label| at(ords, &label)).unwrap_or_default(),
                props
            )
        }
        CREATE_UNIQUE_NODE_PROP_CONSTRAINT | DROP_UNIQUE_NODE_PROP_CONSTRAINT => {
            let (identifier, label, expression) = match node.kind() {
                CREATE_UNIQUE_NODE_PROP_CONSTRAINT => {
                    let c = ast::CreateUniqueNodePropConstraint::cast(node.clone())?;
                    (c.identifier(), c.label(), c.expression())
                }
                _ => {
                    let c = ast::DropUniqueNodePropConstraint::cast(node.clone())?;
                    (c.identifier(), c.label(), c.expression())
                }
            };
            format!(
                "ON=({}:{}), IS UNIQUE=({})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                label.map(|n| at(ords, &n)).unwrap_or_default(),
                expression.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        CREATE_NODE_PROP_EXISTENCE_CONSTRAINT | DROP_NODE_PROP_EXISTENCE_CONSTRAINT => {
            let (identifier, label, expression) = match node.kind() {
                CREATE_NODE_PROP_EXISTENCE_CONSTRAINT => {
                    let c = ast::CreateNodePropExistenceConstraint::cast(node.clone())?;
                    (c.identifier(), c.label(), c.expression())
                }
                _ => {
                    let c = ast::DropNodePropExistenceConstraint::cast(node.clone())?;
                    (c.identifier(), c.label(), c.expression())
                }
            };
            format!(
                "ON=({}:{}), exists=({})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                label.map(|n| at(ords, &n)).unwrap_or_default(),
                expression.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        CREATE_REL_PROP_EXISTENCE_CONSTRAINT | DROP_REL_PROP_EXISTENCE_CONSTRAINT => {
            let (identifier, reltype, expression) = match node.kind() {
                CREATE_REL_PROP_EXISTENCE_CONSTRAINT => {
                    let c = ast::CreateRelPropExistenceConstraint::cast(node.clone())?;
                    (c.identifier(), c.reltype(), c.expression())
                }
                _ => {
                    let c = ast::DropRelPropExistenceConstraint::cast(node.clone())?;
                    (c.identifier(), c.reltype(), c.expression())
                }
            };
            format!(
                "ON=()-[{}:{}]-(), exists=({})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                reltype.map(|n| at(ords, &n)).unwrap_or_default(),
                expression.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        QUERY => {
            let query = ast::Query::cast(node.clone())?;
            let mut parts = Vec::new();
            if query.options().next().is_some() {
                parts.push(format!("options={}", list(ords, query.options())));
            }
            parts.push(format!("clauses={}", list(ords, query.clauses())));
            parts.join(", ")
        }
        UNION => {
            let union = ast::Union::cast(node.clone())?;
            if union.all() {
                String::from("ALL")
            } else {
                return None;
            }
        }
        LOAD_CSV => {
            let load = ast::LoadCsv::cast(node.clone())?;
            let mut parts = Vec::new();
            if load.with_headers() {
                parts.push(String::from("WITH HEADERS"));
            }
            if let Some(url) = load.url() {
                parts.push(format!("url={}", at(ords, &url)));
            }
            if let Some(identifier) = load.identifier() {
                parts.push(format!("AS={}", at(ords, &identifier)));
            }
            if let Some(terminator) = load.field_terminator() {
                parts.push(format!("FIELDTERMINATOR={}", at(ords, &terminator)));
            }
            parts.join(", ")
        }
        START => {
            let start = ast::Start::cast(node.clone())?;
            let mut parts = vec![format!("points={}", list(ords, start.points()))];
            if let Some(predicate) = start.predicate() {
                parts.push(format!("WHERE={}", at(ords, &predicate)));
            }
            parts.join(", ")
        }
        NODE_INDEX_LOOKUP | REL_INDEX_LOOKUP => {
            let entity = if node.kind() == NODE_INDEX_LOOKUP {
                "node"
            } else {
                "rel"
            };
            let (identifier, index, prop, lookup) = if node.kind() == NODE_INDEX_LOOKUP {
                let p = ast::NodeIndexLookup::cast(node.clone())?;
                (p.identifier(), p.index_name(), p.prop_name(), p.lookup())
            } else {
                let p = ast::RelIndexLookup::cast(node.clone())?;
                (p.identifier(), p.index_name(), p.prop_name(), p.lookup())
            };
            format!(
                "{}={entity}:{}({} = {})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                index.map(|n| at(ords, &n)).unwrap_or_default(),
                prop.map(|n| at(ords, &n)).unwrap_or_default(),
                lookup.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        NODE_INDEX_QUERY | REL_INDEX_QUERY => {
            let entity = if node.kind() == NODE_INDEX_QUERY {
                "node"
            } else {
                "rel"
            };
            let (identifier, index, lookup) = if node.kind() == NODE_INDEX_QUERY {
                let p = ast::NodeIndexQuery::cast(node.clone())?;
                (p.identifier(), p.index_name(), p.lookup())
            } else {
                let p = ast::RelIndexQuery::cast(node.clone())?;
                (p.identifier(), p.index_name(), p.lookup())
            };
            format!(
                "{}={entity}:{}({})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                index.map(|n| at(ords, &n)).unwrap_or_default(),
                lookup.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        NODE_ID_LOOKUP | REL_ID_LOOKUP => {
            let entity = if node.kind() == NODE_ID_LOOKUP {
                "node"
            } else {
                "rel"
            };
            let (identifier, ids) = if node.kind() == NODE_ID_LOOKUP {
                let p = ast::NodeIdLookup::cast(node.clone())?;
                (p.identifier(), list(ords, p.ids()))
            } else {
                let p = ast::RelIdLookup::cast(node.clone())?;
                (p.identifier(), list(ords, p.ids()))
            };
            format!(
                "{}={entity}({ids})",
                identifier.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        ALL_NODES_SCAN | ALL_RELS_SCAN => {
            let entity = if node.kind() == ALL_NODES_SCAN {
                "node"
            } else {
                "rel"
            };
            let identifier = if node.kind() == ALL_NODES_SCAN {
                ast::AllNodesScan::cast(node.clone())?.identifier()
            } else {
                ast::AllRelsScan::cast(node.clone())?.identifier()
            };
            format!(
                "{}={entity}(*)",
                identifier.map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        MATCH => {
            let clause = ast::Match::cast(node.clone())?;
            let mut parts = Vec::new();
            if clause.optional() {
                parts.push(String::from("OPTIONAL"));
            }
            if let Some(pattern) = clause.pattern() {
                parts.push(format!("pattern={}", at(ords, &pattern)));
            }
            if clause.hints().next().is_some() {
                parts.push(format!("hints={}", list(ords, clause.hints())));
            }
            if let Some(predicate) = clause.predicate() {
                parts.push(format!("WHERE={}", at(ords, &predicate)));
            }
            parts.join(", ")
        }
        USING_INDEX => {
            let hint = ast::UsingIndex::cast(node.clone())?;
            format!(
                "{}:{}({})",
                hint.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                hint.label().map(|n| at(ords, &n)).unwrap_or_default(),
                hint.prop_name().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        USING_JOIN => {
            let hint = ast::UsingJoin::cast(node.clone())?;
            format!("ON={}", list(ords, hint.identifiers()))
        }
        USING_SCAN => {
            let hint = ast::UsingScan::cast(node.clone())?;
            format!(
                "{}:{}",
                hint.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                hint.label().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        MERGE => {
            let merge = ast::Merge::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(path) = merge.path() {
                parts.push(format!("path={}", at(ords, &path)));
            }
            if merge.actions().next().is_some() {
                parts.push(format!("actions={}", list(ords, merge.actions())));
            }
            parts.join(", ")
        }
        ON_MATCH | ON_CREATE => {
            let items = if node.kind() == ON_MATCH {
                list(ords, ast::OnMatch::cast(node.clone())?.items())
            } else {
                list(ords, ast::OnCreate::cast(node.clone())?.items())
            };
            format!("items={items}")
        }
        CREATE => {
            let create = ast::Create::cast(node.clone())?;
            let mut parts = Vec::new();
            if create.unique() {
                parts.push(String::from("UNIQUE"));
            }
            if let Some(pattern) = create.pattern() {
                parts.push(format!("pattern={}", at(ords, &pattern)));
            }
            parts.join(", ")
        }
        SET => {
            let set = ast::Set::cast(node.clone())?;
            format!("items={}", list(ords, set.items()))
        }
        SET_PROPERTY => {
            let item = ast::SetProperty::cast(node.clone())?;
            format!(
                "{}={}",
                item.property().map(|n| at(ords, &n)).unwrap_or_default(),
                item.value().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        SET_ALL_PROPERTIES => {
            let item = ast::SetAllProperties::cast(node.clone())?;
            format!(
                "{}={}",
                item.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                item.expression().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        MERGE_PROPERTIES => {
            let item = ast::MergeProperties::cast(node.clone())?;
            format!(
                "{}+={}",
                item.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                item.expression().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        SET_LABELS => {
            let item = ast::SetLabels::cast(node.clone())?;
            let labels: Vec<String> = item.labels().map(|label| at(ords, &label)).collect();
            format!(
                "{}:{}",
                item.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                labels.join(":")
            )
        }
        DELETE => {
            let delete = ast::Delete::cast(node.clone())?;
            let mut parts = Vec::new();
            if delete.detach() {
                parts.push(String::from("DETACH"));
            }
            parts.push(format!(
                "expressions={}",
                list(ords, delete.expressions())
            ));
            parts.join(", ")
        }
        REMOVE => {
            let remove = ast::Remove::cast(node.clone())?;
            format!("items={}", list(ords, remove.items()))
        }
        REMOVE_LABELS => {
            let item = ast::RemoveLabels::cast(node.clone())?;
            let labels: Vec<String> = item.labels().map(|label| at(ords, &label)).collect();
            format!(
                "{}:{}",
                item.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                labels.join(":")
            )
        }
        REMOVE_PROPERTY => {
            let item = ast::RemoveProperty::cast(node.clone())?;
            format!(
                "prop={}",
                item.property().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        FOREACH => {
            let foreach = ast::Foreach::cast(node.clone())?;
            format!(
                "[{} IN {} | {}]",
                foreach.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                foreach.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                list(ords, foreach.clauses())
            )
        }
        WITH | RETURN => {
            let (distinct, star, projections, order_by, skip, limit, predicate) =
                if node.kind() == WITH {
                    let clause = ast::With::cast(node.clone())?;
                    (
                        clause.distinct(),
                        clause.include_existing(),
                        list(ords, clause.projections()),
                        clause.order_by(),
                        clause.skip(),
                        clause.limit(),
                        clause.predicate(),
                    )
                } else {
                    let clause = ast::Return::cast(node.clone())?;
                    (
                        clause.distinct(),
                        clause.include_existing(),
                        list(ords, clause.projections()),
                        clause.order_by(),
                        clause.skip(),
                        clause.limit(),
                        None,
                    )
                };
            let mut parts = Vec::new();
            if distinct {
                parts.push(String::from("DISTINCT"));
            }
            if star {
                parts.push(String::from("*"));
            }
            if projections != "[]" {
                parts.push(format!("projections={projections}"));
            }
            if let Some(order_by) = order_by {
                parts.push(format!("ORDER BY={}", at(ords, &order_by)));
            }
            if let Some(skip) = skip {
                parts.push(format!("SKIP={}", at(ords, &skip)));
            }
            if let Some(limit) = limit {
                parts.push(format!("LIMIT={}", at(ords, &limit)));
            }
            if let Some(predicate) = predicate {
                parts.push(format!("WHERE={}", at(ords, &predicate)));
            }
            parts.join(", ")
        }
        UNWIND => {
            let unwind = ast::Unwind::cast(node.clone())?;
            format!(
                "expression={}, alias={}",
                unwind.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                unwind.alias().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        CALL => {
            let call = ast::Call::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(name) = call.proc_name() {
                parts.push(format!("name={}", at(ords, &name)));
            }
            if call.args().next().is_some() {
                parts.push(format!("args={}", list(ords, call.args())));
            }
            if call.projections().next().is_some() {
                parts.push(format!("YIELD={}", list(ords, call.projections())));
            }
            parts.join(", ")
        }
        PROJECTION => {
            let projection = ast::Projection::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(expression) = projection.expression() {
                parts.push(format!("expression={}", at(ords, &expression)));
            }
            if let Some(alias) = projection.alias() {
                parts.push(format!("alias={}", at(ords, &alias)));
            }
            parts.join(", ")
        }
        ORDER_BY => {
            let order_by = ast::OrderBy::cast(node.clone())?;
            format!("items={}", list(ords, order_by.items()))
        }
        SORT_ITEM => {
            let item = ast::SortItem::cast(node.clone())?;
            let direction = if item.ascending() {
                "ASCENDING"
            } else {
                "DESCENDING"
            };
            format!(
                "expression={}, {direction}",
                item.expression().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        UNARY_OPERATOR => {
            let unary = ast::UnaryOperator::cast(node.clone())?;
            let argument = unary.argument().map(|n| at(ords, &n)).unwrap_or_default();
            match unary.operator() {
                postfix @ ("IS NULL" | "IS NOT NULL") => format!("{argument} {postfix}"),
                prefix => format!("{prefix} {argument}"),
            }
        }
        BINARY_OPERATOR => {
            let binary = ast::BinaryOperator::cast(node.clone())?;
            format!(
                "{} {} {}",
                binary.left().map(|n| at(ords, &n)).unwrap_or_default(),
                binary.operator(),
                binary.right().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        COMPARISON => {
            let comparison = ast::Comparison::cast(node.clone())?;
            let operators = comparison.operators();
            let mut out = String::new();
            for (i, operand) in comparison.operands().enumerate() {
                if i > 0 {
                    let op = operators.get(i - 1).copied().unwrap_or("?");
                    out.push_str(&format!(" {op} "));
                }
                out.push_str(&at(ords, &operand));
            }
            out
        }
        APPLY_OPERATOR => {
            let apply = ast::ApplyOperator::cast(node.clone())?;
            let args: Vec<String> = apply.args().map(|arg| at(ords, &arg)).collect();
            let distinct = if apply.distinct() { "DISTINCT " } else { "" };
            format!(
                "{}({distinct}{})",
                apply.func_name().map(|n| at(ords, &n)).unwrap_or_default(),
                args.join(", ")
            )
        }
        APPLY_ALL_OPERATOR => {
            let apply = ast::ApplyAllOperator::cast(node.clone())?;
            format!(
                "{}(*)",
                apply.func_name().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        PROPERTY_OPERATOR => {
            let property = ast::PropertyOperator::cast(node.clone())?;
            format!(
                "{}.{}",
                property.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                property.prop_name().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        SUBSCRIPT_OPERATOR => {
            let subscript = ast::SubscriptOperator::cast(node.clone())?;
            format!(
                "{}[{}]",
                subscript.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                subscript.subscript().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        SLICE_OPERATOR => {
            let slice = ast::SliceOperator::cast(node.clone())?;
            format!(
                "{}[{}..{}]",
                slice.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                slice.start().map(|n| at(ords, &n)).unwrap_or_default(),
                slice.end().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        LABELS_OPERATOR => {
            let labels = ast::LabelsOperator::cast(node.clone())?;
            let names: Vec<String> = labels.labels().map(|label| at(ords, &label)).collect();
            format!(
                "{}:{}",
                labels.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                names.join(":")
            )
        }
        LIST_COMPREHENSION => {
            let comprehension = ast::ListComprehension::cast(node.clone())?;
            let mut out = format!(
                "[{} IN {}",
                comprehension
                    .identifier()
                    .map(|n| at(ords, &n))
                    .unwrap_or_default(),
                comprehension
                    .expression()
                    .map(|n| at(ords, &n))
                    .unwrap_or_default()
            );
            if let Some(predicate) = comprehension.predicate() {
                out.push_str(&format!(" WHERE {}", at(ords, &predicate)));
            }
            if let Some(eval) = comprehension.eval() {
                out.push_str(&format!(" | {}", at(ords, &eval)));
            }
            out.push(']');
            out
        }
        PATTERN_COMPREHENSION => {
            let comprehension = ast::PatternComprehension::cast(node.clone())?;
            let mut out = String::from("[");
            if let Some(identifier) = comprehension.identifier() {
                out.push_str(&format!("{}=", at(ords, &identifier)));
            }
            out.push_str(
                &comprehension
                    .pattern()
                    .map(|n| at(ords, &n))
                    .unwrap_or_default(),
            );
            if let Some(predicate) = comprehension.predicate() {
                out.push_str(&format!(" WHERE {}", at(ords, &predicate)));
            }
            if let Some(eval) = comprehension.eval() {
                out.push_str(&format!(" | {}", at(ords, &eval)));
            }
            out.push(']');
            out
        }
        CASE => {
            let case = ast::Case::cast(node.clone())?;
            let mut parts = Vec::new();
            if let Some(operand) = case.operand() {
                parts.push(format!("expression={}", at(ords, &operand)));
            }
            let alternatives: Vec<String> = case
                .alternatives()
                .iter()
                .map(|(when, then)| format!("({}:{})", at(ords, when), at(ords, then)))
                .collect();
            parts.push(format!("alternatives=[{}]", alternatives.join(", ")));
            if let Some(default) = case.default() {
                parts.push(format!("default={}", at(ords, &default)));
            }
            parts.join(", ")
        }
        FILTER | ALL | ANY | SINGLE | NONE => {
            let (identifier, expression, predicate) = match node.kind() {
                FILTER => {
                    let p = ast::Filter::cast(node.clone())?;
                    (p.identifier(), p.expression(), p.predicate())
                }
                ALL => {
                    let p = ast::AllPredicate::cast(node.clone())?;
                    (p.identifier(), p.expression(), p.predicate())
                }
                ANY => {
                    let p = ast::AnyPredicate::cast(node.clone())?;
                    (p.identifier(), p.expression(), p.predicate())
                }
                SINGLE => {
                    let p = ast::SinglePredicate::cast(node.clone())?;
                    (p.identifier(), p.expression(), p.predicate())
                }
                _ => {
                    let p = ast::NonePredicate::cast(node.clone())?;
                    (p.identifier(), p.expression(), p.predicate())
                }
            };
            let mut out = format!(
                "({} IN {}",
                identifier.map(|n| at(ords, &n)).unwrap_or_default(),
                expression.map(|n| at(ords, &n)).unwrap_or_default()
            );
            if let Some(predicate) = predicate {
                out.push_str(&format!(" WHERE {}", at(ords, &predicate)));
            }
            out.push(')');
            out
        }
        EXTRACT => {
            let extract = ast::Extract::cast(node.clone())?;
            let mut out = format!(
                "({} IN {}",
                extract.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                extract.expression().map(|n| at(ords, &n)).unwrap_or_default()
            );
            if let Some(predicate) = extract.predicate() {
                out.push_str(&format!(" WHERE {}", at(ords, &predicate)));
            }
            if let Some(eval) = extract.eval() {
                out.push_str(&format!(" | {}", at(ords, &eval)));
            }
            out.push(')');
            out
        }
        REDUCE => {
            let reduce = ast::Reduce::cast(node.clone())?;
            format!(
                "({}={}, {} IN {} | {})",
                reduce.accumulator().map(|n| at(ords, &n)).unwrap_or_default(),
                reduce.init().map(|n| at(ords, &n)).unwrap_or_default(),
                reduce.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                reduce.expression().map(|n| at(ords, &n)).unwrap_or_default(),
                reduce.eval().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        COLLECTION => {
            let collection = ast::Collection::cast(node.clone())?;
            list(ords, collection.elements())
        }
        MAP => {
            let map = ast::Map::cast(node.clone())?;
            let entries: Vec<String> = map
                .entries()
                .iter()
                .map(|(key, value)| format!("{}:{}", at(ords, key), at(ords, value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        IDENTIFIER => {
            let identifier = ast::Identifier::cast(node.clone())?;
            format!("`{}`", identifier.name())
        }
        PARAMETER => {
            let parameter = ast::Parameter::cast(node.clone())?;
            format!("${}", parameter.name())
        }
        STRING => {
            let literal = ast::StringLiteral::cast(node.clone())?;
            format!("{:?}", literal.value())
        }
        INTEGER => ast::Integer::cast(node.clone())?.text(),
        FLOAT => ast::Float::cast(node.clone())?.text(),
        LABEL => format!(":{}", ast::Label::cast(node.clone())?.name()),
        RELTYPE => format!(":{}", ast::RelType::cast(node.clone())?.name()),
        PROP_NAME => ast::PropName::cast(node.clone())?.name(),
        FUNCTION_NAME => ast::FunctionName::cast(node.clone())?.name(),
        INDEX_NAME => ast::IndexName::cast(node.clone())?.name(),
        PROC_NAME => ast::ProcName::cast(node.clone())?.name(),
        PATTERN => {
            let pattern = ast::Pattern::cast(node.clone())?;
            format!("paths={}", list(ords, pattern.parts()))
        }
        NAMED_PATH => {
            let named = ast::NamedPath::cast(node.clone())?;
            format!(
                "{}={}",
                named.identifier().map(|n| at(ords, &n)).unwrap_or_default(),
                named.path().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        SHORTEST_PATH => {
            let shortest = ast::ShortestPath::cast(node.clone())?;
            let which = if shortest.single() {
                "shortestPath"
            } else {
                "allShortestPaths"
            };
            format!(
                "{which}({})",
                shortest.path().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        PATTERN_PATH => {
            let path = ast::PatternPath::cast(node.clone())?;
            format!("elements={}", list(ords, path.elements()))
        }
        NODE_PATTERN => {
            let pattern = ast::NodePattern::cast(node.clone())?;
            let mut out = String::from("(");
            if let Some(identifier) = pattern.identifier() {
                out.push_str(&at(ords, &identifier));
            }
            for label in pattern.labels() {
                out.push_str(&format!(":{}", at(ords, &label)));
            }
            if let Some(properties) = pattern.properties() {
                out.push_str(&format!(" {{{}}}", at(ords, &properties)));
            }
            out.push(')');
            out
        }
        REL_PATTERN => {
            let pattern = ast::RelPattern::cast(node.clone())?;
            let mut inner = String::new();
            if let Some(identifier) = pattern.identifier() {
                inner.push_str(&at(ords, &identifier));
            }
            for reltype in pattern.reltypes() {
                inner.push_str(&format!(":{}", at(ords, &reltype)));
            }
            if let Some(range) = pattern.varlength() {
                inner.push_str(&format!("*{}", at(ords, &range)));
            }
            if let Some(properties) = pattern.properties() {
                inner.push_str(&format!(" {{{}}}", at(ords, &properties)));
            }
            let (head, tail) = match pattern.direction() {
                ast::RelDirection::Outbound => ("-", "->"),
                ast::RelDirection::Inbound => ("<-", "-"),
                ast::RelDirection::Bidirectional => ("-", "-"),
            };
            format!("{head}[{inner}]{tail}")
        }
        RANGE => {
            let range = ast::Range::cast(node.clone())?;
            format!(
                "{}..{}",
                range.start().map(|n| at(ords, &n)).unwrap_or_default(),
                range.end().map(|n| at(ords, &n)).unwrap_or_default()
            )
        }
        _ => return None,
    };

    if detail.is_empty() {
        None
    } else {
        Some(detail)
    }
}
