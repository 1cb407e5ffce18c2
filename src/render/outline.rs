//! ASCII outline of the assembled page.

use crate::assembly::{Cell, Observes, SectionPlan};
use kjv_core::RevealTrigger;

const STATIC: char = '·';
const OWN: char = '●';
const SECTION: char = '○';
const MOUNT: char = '◆';

fn cell_symbol(cell: &Cell) -> char {
    match cell.reveal {
        None => STATIC,
        Some(reveal) => match (reveal.trigger, reveal.observes) {
            (RevealTrigger::Mount, _) => MOUNT,
            (RevealTrigger::Intersection, Observes::Itself) => OWN,
            (RevealTrigger::Intersection, Observes::Section) => SECTION,
        },
    }
}

fn cell_label(cell: &Cell) -> String {
    let mut label = format!("{} {}", cell_symbol(cell), cell.key);
    if let Some(reveal) = cell.reveal {
        if reveal.delay > 0 {
            label.push_str(&format!(" +{}ms", reveal.delay));
        }
    }
    label
}

struct Node {
    label: String,
    children: Vec<Node>,
}

fn plan_node(plan: &SectionPlan, width: f64) -> Node {
    let children = plan
        .blocks
        .iter()
        .map(|block| match block.cells.as_slice() {
            [only] => Node {
                label: cell_label(only),
                children: Vec::new(),
            },
            cells => Node {
                label: format!(
                    "{} [{} × {} cols]",
                    block.name,
                    cells.len(),
                    block.columns.at(width)
                ),
                children: cells
                    .iter()
                    .map(|cell| Node {
                        label: cell_label(cell),
                        children: Vec::new(),
                    })
                    .collect(),
            },
        })
        .collect();

    Node {
        label: format!("{} #{}", plan.kind.title(), plan.anchor),
        children,
    }
}

/// Render section plans as an ASCII tree, with grid columns resolved at
/// `width`.
///
/// Example output:
/// ```text
/// About #about
/// ├── ○ about.heading
/// ├── ○ about.markers +300ms
/// └── facts [6 × 3 cols]
///     ├── ● about.facts.0
///     └── ● about.facts.1 +100ms
/// ```
///
/// `●` watches its own element, `○` the section, `◆` reveals on mount and
/// `·` never hides.
pub fn render_outline(plans: &[SectionPlan], width: f64) -> String {
    let mut output = String::new();
    for plan in plans {
        render_node(&mut output, &plan_node(plan, width), "", true, true);
    }
    output
}

fn render_node(output: &mut String, node: &Node, prefix: &str, is_last: bool, is_root: bool) {
    if is_root {
        output.push_str(&node.label);
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&node.label);
    }
    output.push('\n');

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{plan_section, SectionKind};

    #[test]
    fn test_footer_is_a_single_static_cell() {
        let output = render_outline(&[plan_section(SectionKind::Footer)], 1280.0);
        assert_eq!(output, "Footer #footer\n└── · footer.body\n");
    }

    #[test]
    fn test_contact_shows_section_delays() {
        let output = render_outline(&[plan_section(SectionKind::Contact)], 1280.0);
        assert_eq!(
            output,
            "Contact #contact\n├── ○ contact.heading\n├── ○ contact.form +200ms\n└── ○ contact.details +400ms\n"
        );
    }

    #[test]
    fn test_hero_stats_are_marked_as_mount_reveals() {
        let output = render_outline(&[plan_section(SectionKind::Hero)], 1280.0);
        assert!(output.contains("◆ home.stats.0 +600ms"));
        assert!(output.contains("└── ◆ home.stats.3 +1200ms"));
    }

    #[test]
    fn test_grid_columns_follow_width() {
        let plan = [plan_section(SectionKind::About)];
        assert!(render_outline(&plan, 1280.0).contains("facts [6 × 3 cols]"));
        assert!(render_outline(&plan, 375.0).contains("facts [6 × 1 cols]"));
    }
}
