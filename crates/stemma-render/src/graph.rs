//! The recursive genealogy-to-DOT renderer.
//!
//! `render` walks the normalized house tree and emits one DOT document:
//! default edge/node attribute blocks, a cluster per non-root house, a
//! cluster per family with a union node joining the parents to a siblings
//! node fanning out to the children, and a node statement per person.
//!
//! All traversal state lives in an explicit [`RenderContext`]; rendering is a
//! pure, total transformation of the input tree.

use crate::block::{Block, serialize};
use crate::counter::Counters;
use crate::defaults::FAMILY_COLORS;
use crate::escape::{escape_id, quote};
use crate::label::person_label;
use crate::slug::{TreePath, slugify};
use crate::style::{AttrValue, Attrs, Stylesheet};
use stemma_core::{Family, Genealogy, House, Person};

const INDENT_UNIT: &str = "  ";

const LINE: &str =
    "###########################################################################";
const LINE2: &str =
    "# -------------------------------------------------------------------------";

/// Per-render state: the resolved stylesheet and the color-cycling counters.
#[derive(Debug)]
pub struct RenderContext {
    stylesheet: Stylesheet,
    counters: Counters,
}

impl RenderContext {
    pub fn new(doc: &Genealogy) -> Self {
        Self {
            stylesheet: Stylesheet::with_document_styles(&doc.styles),
            counters: Counters::new(),
        }
    }
}

/// Renders a genealogy document to DOT text.
///
/// Each call uses a fresh [`RenderContext`], so rendering the same tree twice
/// yields byte-identical documents (the family color rotation restarts at the
/// first palette entry).
pub fn render(doc: &Genealogy) -> String {
    let mut ctx = RenderContext::new(doc);
    render_with(doc, &mut ctx)
}

/// Renders with caller-managed context state.
///
/// Reusing one context across calls keeps the family color rotation running
/// instead of restarting it.
pub fn render_with(doc: &Genealogy, ctx: &mut RenderContext) -> String {
    tracing::debug!(
        people = doc.root.people.len(),
        families = doc.root.families.len(),
        houses = doc.root.houses.len(),
        "rendering genealogy document"
    );

    let tree = Block::seq(vec![
        Block::line("digraph G {"),
        Block::indent(vec![
            Block::line("edge ["),
            Block::indent(ctx.stylesheet.resolve(&[":edge"], &Attrs::new())),
            Block::line("]"),
            Block::blank(),
            Block::line("node ["),
            Block::indent(ctx.stylesheet.resolve(&[":node"], &Attrs::new())),
            Block::line("]"),
            Block::blank(),
            Block::seq(ctx.stylesheet.resolve(&[":digraph"], &Attrs::new())),
            render_house(ctx, &doc.root, &TreePath::root()),
        ]),
        Block::line("}"),
    ]);

    serialize(&tree, INDENT_UNIT)
}

/// Renders a house: its families (declaration order), its people (insertion
/// order), then its nested houses (insertion order).
///
/// The root house contributes its contents directly; a top-level cluster
/// around everything would be meaningless. Non-root houses are wrapped in a
/// labeled cluster keyed by their path slug, styled by `:house` plus a
/// depth-specific `:house-<n>` class.
fn render_house(ctx: &mut RenderContext, house: &House, path: &TreePath) -> Block {
    let mut meat: Vec<Block> = Vec::new();
    for (idx, family) in house.families.iter().enumerate() {
        meat.push(render_family(ctx, family, &path.child(idx)));
    }
    for (id, person) in &house.people {
        meat.push(render_person(ctx, id, person, &path.child(id.as_str())));
    }
    for (id, child) in &house.houses {
        meat.push(render_house(ctx, child, &path.child(id.as_str())));
    }
    let meat = Block::seq(meat);

    if path.is_root() {
        return meat;
    }

    let name = match &house.name {
        Some(name) => name.clone(),
        None => path.last().map(ToString::to_string).unwrap_or_default(),
    };
    let depth_class = format!(":house-{}", path.depth());

    Block::seq(vec![
        Block::blank(),
        Block::line(LINE),
        Block::line(format!("# House {path}")),
        Block::line(LINE),
        Block::blank(),
        Block::line(format!("subgraph cluster_{} {{", slugify(path))),
        Block::indent({
            let mut body = vec![Block::line(format!("label=<<b>{name}</b>>"))];
            body.extend(
                ctx.stylesheet
                    .resolve(&[":house", depth_class.as_str()], &Attrs::new()),
            );
            body.push(Block::blank());
            body.push(meat);
            body
        }),
        Block::line("}"),
    ])
}

/// Renders one family cluster: the sub-families, a comment summary, the
/// parents' union node, the siblings node, and the edges between them.
fn render_family(ctx: &mut RenderContext, family: &Family, path: &TreePath) -> Block {
    let slug = slugify(path);
    let color_index = ctx.counters.next("family") as usize;
    let color = FAMILY_COLORS[color_index % FAMILY_COLORS.len()];

    let union = format!("union_{slug}");
    let siblings = format!("siblings_{slug}");

    let has_parents = family.has_parents();
    let has_children = family.has_children();
    // The same-rank ordering chain only makes sense with two or more
    // children, counting both groups.
    let has_many_children = family.child_count() > 1;

    let mut body: Vec<Block> = Vec::new();

    if let Some(house_name) = family.house.as_deref() {
        body.push(render_house_prelude(ctx, family, house_name));
    }

    // Deeper families are declared last. Rendering them first lets the layout
    // engine place their unions before the outer family's parent union, which
    // stacks the generations correctly.
    for (idx, sub) in family.families.iter().rev().enumerate() {
        body.push(render_family(ctx, sub, &path.child(idx)));
    }

    body.push(Block::blank());
    body.push(Block::line(format!("# Family {}", summarize_family(family))));
    body.push(Block::line(LINE2));
    body.push(Block::blank());

    body.push(Block::when(has_parents, || {
        render_parents(ctx, family, &union, color)
    }));
    body.push(Block::when(has_parents && has_children, || {
        render_parent_child_link(ctx, &union, &siblings, color)
    }));
    body.push(Block::when(has_children, || {
        render_children(ctx, family, &siblings, color)
    }));
    body.push(Block::when(has_many_children, || {
        render_sibling_order(ctx, family)
    }));

    Block::seq(vec![
        Block::blank(),
        Block::line(format!("subgraph cluster_family_{slug} {{")),
        Block::indent(ctx.stylesheet.resolve(&[":family"], &Attrs::new())),
        Block::indent(body),
        Block::line("}"),
    ])
}

/// The `[parents] -> [children]` comment line, both groups concatenated and
/// empty entries dropped.
fn summarize_family(family: &Family) -> String {
    let parents: Vec<&str> = family
        .parents
        .iter()
        .chain(&family.parents2)
        .map(String::as_str)
        .filter(|id| !id.is_empty())
        .collect();
    let children: Vec<&str> = family
        .children
        .iter()
        .chain(&family.children2)
        .map(String::as_str)
        .filter(|id| !id.is_empty())
        .collect();

    format!("[{}] -> [{}]", parents.join(", "), children.join(", "))
}

/// A bold house label (and optional hyperlink) shown inside the family
/// cluster when the family carries a `house` name.
fn render_house_prelude(ctx: &mut RenderContext, family: &Family, house_name: &str) -> Block {
    let mut overrides = Attrs::from_iter([(
        "label".to_string(),
        AttrValue::html(format!("<b>{house_name}</b>")),
    )]);
    if let Some(link) = family.links.first() {
        overrides.insert("href".to_string(), AttrValue::text(link.as_str()));
    }
    Block::seq(ctx.stylesheet.resolve(&[":house"], &overrides))
}

/// The union node plus one edge set per non-empty parent group.
fn render_parents(ctx: &mut RenderContext, family: &Family, union: &str, color: &str) -> Block {
    let fill = Attrs::from_iter([("fillcolor".to_string(), AttrValue::text(color))]);
    let stroke = Attrs::from_iter([("color".to_string(), AttrValue::text(color))]);

    let mut blocks = vec![
        Block::line(format!("{union} [")),
        Block::indent(ctx.stylesheet.resolve(&[":union"], &fill)),
        Block::line("]"),
    ];

    let groups: [(&[String], &[&str]); 2] = [
        (&family.parents, &[":parent-link"]),
        (&family.parents2, &[":parent-link", ":parent2-link"]),
    ];
    for (group, classes) in groups {
        if group.is_empty() {
            continue;
        }
        blocks.push(Block::blank());
        blocks.push(Block::line(format!(
            "{{{}}} -> {union} [",
            join_ids(group)
        )));
        blocks.push(Block::indent(ctx.stylesheet.resolve(classes, &stroke)));
        blocks.push(Block::line("]"));
    }

    Block::seq(blocks)
}

/// The single edge joining the union node to the siblings node.
fn render_parent_child_link(
    ctx: &mut RenderContext,
    union: &str,
    siblings: &str,
    color: &str,
) -> Block {
    let stroke = Attrs::from_iter([("color".to_string(), AttrValue::text(color))]);

    Block::seq(vec![
        Block::blank(),
        Block::line(format!("{union} -> {siblings} [")),
        Block::indent(
            ctx.stylesheet
                .resolve(&[":parent-link", ":parent-child-link"], &stroke),
        ),
        Block::line("]"),
    ])
}

/// The siblings node plus one edge set per non-empty child group.
fn render_children(ctx: &mut RenderContext, family: &Family, siblings: &str, color: &str) -> Block {
    let fill = Attrs::from_iter([("fillcolor".to_string(), AttrValue::text(color))]);
    let stroke = Attrs::from_iter([("color".to_string(), AttrValue::text(color))]);

    let mut blocks = vec![
        Block::line(format!("{siblings} [")),
        Block::indent(ctx.stylesheet.resolve(&[":children"], &fill)),
        Block::line("]"),
    ];

    let groups: [(&[String], &[&str]); 2] = [
        (&family.children, &[":child-link"]),
        (&family.children2, &[":child-link", ":child2-link"]),
    ];
    for (group, classes) in groups {
        if group.is_empty() {
            continue;
        }
        blocks.push(Block::blank());
        blocks.push(Block::line(format!(
            "{siblings} -> {{{}}} [",
            join_ids(group)
        )));
        blocks.push(Block::indent(ctx.stylesheet.resolve(classes, &stroke)));
        blocks.push(Block::line("]"));
    }

    Block::seq(blocks)
}

/// An invisible edge chain across all children (both groups, in order) that
/// pins their left-to-right ordering without drawing anything.
fn render_sibling_order(ctx: &mut RenderContext, family: &Family) -> Block {
    let chain = family
        .children
        .iter()
        .chain(&family.children2)
        .map(|id| quote(id))
        .collect::<Vec<_>>()
        .join(" -> ");
    let overrides = Attrs::from_iter([("style".to_string(), AttrValue::raw("invis"))]);

    Block::seq(vec![
        Block::blank(),
        Block::line(format!("{chain} [")),
        Block::indent(ctx.stylesheet.resolve(&[":child-links"], &overrides)),
        Block::line("]"),
    ])
}

/// One node statement per person, labeled by the devised display name (or the
/// bare identifier when no name resolves) and linked to the person's first
/// URL when present.
fn render_person(ctx: &mut RenderContext, id: &str, person: &Person, path: &TreePath) -> Block {
    tracing::trace!(%path, "rendering person");

    let mut overrides = Attrs::from_iter([("label".to_string(), person_label(person, id))]);
    if let Some(link) = person.links.first() {
        overrides.insert("href".to_string(), AttrValue::text(link.as_str()));
    }
    let classes: Vec<&str> = person.class.iter().map(String::as_str).collect();

    Block::seq(vec![
        Block::line(format!("{} [", quote(id))),
        Block::indent(ctx.stylesheet.resolve(&classes, &overrides)),
        Block::line("]"),
    ])
}

/// Escaped identifiers joined for a `{A, B}` edge-set endpoint.
fn join_ids(ids: &[String]) -> String {
    ids.iter()
        .map(|id| escape_id(id))
        .collect::<Vec<_>>()
        .join(", ")
}
