//! Fact diagrams.
//!
//! ```text
//! No(
//!   Yes(expected 3, and got 3) &&
//!   No(expected 3, but got 4)
//! )
//! ```
//!
//! Each nesting level indents by two spaces. Leaf-shaped facts render on one
//! line unless their mid-sentence message spans several lines.

use super::{Fact, FactKind};
use std::fmt;

const INDENT: &str = "  ";

impl Fact {
    /// `Yes`, `No` or `VacuousYes`.
    pub fn string_prefix(&self) -> &'static str {
        if self.is_vacuous_yes() {
            "VacuousYes"
        } else if self.is_yes() {
            "Yes"
        } else {
            "No"
        }
    }

    /// Render this fact indented `level` steps.
    pub fn fact_diagram(&self, level: usize) -> String {
        let mut output = String::new();
        self.write_diagram(&mut output, level, true);
        output
    }

    fn write_diagram(&self, output: &mut String, level: usize, indent_first: bool) {
        if indent_first {
            push_indent(output, level);
        }
        output.push_str(self.string_prefix());
        output.push('(');

        match self.kind() {
            FactKind::Binary(binary) => {
                output.push('\n');
                binary.left.write_diagram(output, level + 1, true);
                output.push(' ');
                output.push_str(binary.op.symbol());
                output.push('\n');
                binary.right.write_diagram(output, level + 1, true);
                output.push('\n');
                push_indent(output, level);
            }
            FactKind::Not(underlying) if !underlying.is_leaf() => {
                output.push('\n');
                push_indent(output, level + 1);
                output.push('!');
                underlying.write_diagram(output, level + 1, false);
                output.push('\n');
                push_indent(output, level);
            }
            FactKind::VacuousYes(underlying) if !underlying.is_leaf() => {
                output.push('\n');
                underlying.write_diagram(output, level + 1, true);
                output.push('\n');
                push_indent(output, level);
            }
            _ => {
                let message = self.mid_sentence_fact_message();
                if message.contains('\n') {
                    for line in message.lines() {
                        output.push('\n');
                        push_indent(output, level + 1);
                        output.push_str(line);
                    }
                    output.push('\n');
                    push_indent(output, level);
                } else {
                    output.push_str(message);
                }
            }
        }

        output.push(')');
    }
}

fn push_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str(INDENT);
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fact_diagram(0))
    }
}
