//! The structural printer: renders a parse result one line per node, with
//! dense preorder ordinals so detail strings can cite subnodes as `@N`.

mod detail;

use std::collections::HashMap;
use std::io;

use crate::color::ColorScheme;
use crate::{SyntaxNode, SyntaxNodePtr};

/// Dense preorder ordinals for every node of a tree, excluding the root
/// itself: the first directive is `@0`.
///
/// Ordinals are assigned depth-first, children left to right, and are
/// dense: `0..len`.
#[derive(Debug, Clone)]
pub struct Ordinals {
    map: HashMap<SyntaxNodePtr, u32>,
    len: u32,
}

impl Ordinals {
    pub fn of(root: &SyntaxNode) -> Self {
        let mut map = HashMap::new();
        let mut next = 0u32;
        for node in root.descendants().skip(1) {
            map.insert(SyntaxNodePtr::new(&node), next);
            next += 1;
        }
        Self { map, len: next }
    }

    pub fn get(&self, node: &SyntaxNode) -> Option<u32> {
        self.map.get(&SyntaxNodePtr::new(node)).copied()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

struct Row {
    ordinal: u32,
    start: usize,
    end: usize,
    depth: usize,
    name: &'static str,
    detail: Option<String>,
}

/// Render the tree under `root`. `width` softly bounds lines: details are
/// truncated with an ellipsis, structure never is. `0` means unlimited.
pub(crate) fn print_tree<W: io::Write>(
    out: &mut W,
    root: &SyntaxNode,
    width: usize,
    colors: &ColorScheme,
) -> io::Result<()> {
    let ordinals = Ordinals::of(root);

    let mut rows = Vec::new();
    collect(root, 0, &ordinals, &mut rows);

    let ordinal_width = rows
        .iter()
        .map(|row| format!("@{}", row.ordinal).len())
        .max()
        .unwrap_or(2);
    let range_width = rows
        .iter()
        .map(|row| format!("{}..{}", row.start, row.end).len())
        .max()
        .unwrap_or(0);
    let name_width = rows
        .iter()
        .map(|row| row.depth * 2 + row.name.len())
        .max()
        .unwrap_or(0);

    for row in &rows {
        let ordinal = format!("@{}", row.ordinal);
        let range = format!("{}..{}", row.start, row.end);
        let indent = "> ".repeat(row.depth);
        let name_pad = name_width - (indent.len() + row.name.len());

        let prefix_visible =
            ordinal_width + 2 + range_width + 2 + indent.len() + row.name.len() + name_pad;

        write!(
            out,
            "{}{}{}{}",
            colors.ast_ordinal.begin,
            ordinal,
            colors.ast_ordinal.end,
            " ".repeat(ordinal_width - ordinal.len() + 2)
        )?;
        write!(
            out,
            "{}{}{}{}  ",
            " ".repeat(range_width - range.len()),
            colors.ast_range.begin,
            range,
            colors.ast_range.end
        )?;
        write!(
            out,
            "{}{}{}{}{}{}{}",
            colors.ast_indent.begin,
            indent,
            colors.ast_indent.end,
            colors.ast_type.begin,
            row.name,
            colors.ast_type.end,
            " ".repeat(name_pad)
        )?;

        if let Some(detail) = &row.detail {
            let detail = clip(detail, width, prefix_visible + 2);
            if !detail.is_empty() {
                write!(
                    out,
                    "  {}{}{}",
                    colors.ast_desc.begin, detail, colors.ast_desc.end
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Truncate `detail` so the visible line stays within `width`.
fn clip(detail: &str, width: usize, used: usize) -> String {
    if width == 0 {
        return detail.to_string();
    }
    let avail = width.saturating_sub(used);
    let len = detail.chars().count();
    if len <= avail {
        return detail.to_string();
    }
    if avail < 4 {
        return String::new();
    }
    let mut clipped: String = detail.chars().take(avail - 3).collect();
    clipped.push_str("...");
    clipped
}

fn collect(node: &SyntaxNode, depth: usize, ordinals: &Ordinals, rows: &mut Vec<Row>) {
    for child in node.children() {
        let range = child.text_range();
        rows.push(Row {
            ordinal: ordinals.get(&child).unwrap_or(0),
            start: range.start().into(),
            end: range.end().into(),
            depth,
            name: detail::node_name(child.kind()),
            detail: detail::detail(&child, ordinals),
        });
        collect(&child, depth + 1, ordinals, rows);
    }
}
