//! Source block formatting.
//!
//! Turns the literal value of a source or example block into the text that
//! goes inside the code fence. Escaping happens afterwards, in the exporter.

use crate::ir::nodes::CodeBlock;

/// Formats the lines of a code block before they are escaped.
pub trait CodeFormatter: Send + Sync {
    fn format(&self, block: &CodeBlock) -> String;
}

/// Removes common indentation and trailing blank lines, and numbers lines
/// when the block asks for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodeFormatter {
    /// Keep indentation even for blocks that don't set `preserve_indent`.
    pub preserve_indentation: bool,
}

impl CodeFormatter for DefaultCodeFormatter {
    fn format(&self, block: &CodeBlock) -> String {
        let Some(value) = block.value.as_deref() else {
            return String::new();
        };
        let value = value.trim_end();
        let mut lines: Vec<&str> = value.lines().collect();
        // Leading blank lines carry no content.
        while lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }

        let lines = if self.preserve_indentation || block.preserve_indent {
            lines
        } else {
            dedent(&lines)
        };

        match block.number_lines {
            Some(start) => number_lines(&lines, start),
            None => lines.join("\n"),
        }
    }
}

/// Strip the smallest indentation shared by all non-blank lines.
fn dedent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|&line| line.get(min_indent..).unwrap_or_else(|| line.trim_start()))
        .collect()
}

/// Prefix each line with its number, right-aligned to the widest one.
fn number_lines(lines: &[&str], start: usize) -> String {
    let last = start.saturating_add(lines.len().saturating_sub(1));
    let width = last.to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}  {line}", start.saturating_add(i)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(block: CodeBlock) -> String {
        DefaultCodeFormatter::default().format(&block)
    }

    #[test]
    fn test_missing_value_is_empty() {
        assert_eq!(format(CodeBlock::default()), "");
    }

    #[test]
    fn test_common_indent_removed() {
        let block = CodeBlock::new("    fn main() {\n        run();\n    }\n\n");
        assert_eq!(format(block), "fn main() {\n    run();\n}");
    }

    #[test]
    fn test_blank_lines_do_not_limit_dedent() {
        let block = CodeBlock::new("\n  a\n\n  b\n");
        assert_eq!(format(block), "a\n\nb");
    }

    #[test]
    fn test_preserve_indent() {
        let mut block = CodeBlock::new("  a\n    b");
        block.preserve_indent = true;
        assert_eq!(format(block), "  a\n    b");

        let formatter = DefaultCodeFormatter {
            preserve_indentation: true,
        };
        assert_eq!(formatter.format(&CodeBlock::new("  a")), "  a");
    }

    #[test]
    fn test_numbered_lines() {
        let mut block = CodeBlock::new("a\nb\nc");
        block.number_lines = Some(9);
        assert_eq!(format(block), " 9  a\n10  b\n11  c");
    }

    #[test]
    fn test_numbered_lines_saturate_at_max() {
        let mut block = CodeBlock::new("a\nb");
        block.number_lines = Some(usize::MAX);
        let max = usize::MAX.to_string();
        assert_eq!(format(block), format!("{max}  a\n{max}  b"));
    }
}
