//! RcDoc-based pretty-printer with termcolor annotations for expression trees.
//!
//! Role
//! - Convert a [`Node`] into an annotated document suitable for width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! Layout
//! - Binary operators are infix and left-associative; parentheses are only inserted where
//!   precedence or associativity requires them (`1 - (2 - 3)`, `(true || false) && true`).
//! - Conditionals print as `if c then a else b` and break over several lines when too wide.

use std::io::{self, Write};

use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::expr::variant::BinaryOp;
use crate::expr::{Expr, Node, NodeType};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,  // if, then, else
    Operator, // +, -, <, >, &&, ||
    Number,
    Boolean,
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Number => {
                s.set_fg(Some(Color::Green));
            }
            Style::Boolean => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

fn kw(s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(Style::Keyword)
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(Style::Operator)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn precedence(t: NodeType) -> u8 {
    use NodeType::*;

    match t {
        If => 1,
        Or => 2,
        And => 3,
        LessThan | GreaterThan => 4,
        Add | Subtract => 5,
        Number | Boolean => 255,
    }
}

/// Position of a child relative to its parent operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Inner,
}

#[inline]
fn requires_parens(current: NodeType, parent: NodeType, side: Side) -> bool {
    let current_prec = precedence(current);
    let parent_prec = precedence(parent);

    if parent == NodeType::If {
        // Only a nested conditional needs delimiting inside if/then/else.
        return current == NodeType::If && side != Side::Right;
    }
    if parent_prec != current_prec {
        return parent_prec > current_prec;
    }

    // Same precedence level: left-associative operators chain freely on the left, comparisons
    // do not chain at all.
    match current {
        NodeType::LessThan | NodeType::GreaterThan => true,
        _ => side != Side::Left,
    }
}

fn to_doc_child(node: &Node, parent: NodeType, side: Side, depth: u8) -> RcDoc<'static, Style> {
    if requires_parens(node.node_type(), parent, side) {
        lparen(depth)
            .append(to_doc_with_depth(node, depth.wrapping_add(1)))
            .append(rparen(depth))
            .group()
    } else {
        to_doc_with_depth(node, depth)
    }
}

fn to_doc_binary(
    parent: NodeType,
    bop: BinaryOp,
    left: &Node,
    right: &Node,
    depth: u8,
) -> RcDoc<'static, Style> {
    to_doc_child(left, parent, Side::Left, depth)
        .append(RcDoc::space())
        .append(op(bop.symbol()))
        .append(RcDoc::space())
        .append(to_doc_child(right, parent, Side::Right, depth))
        .group()
}

/// Depth-aware variant that colors parentheses by nesting level.
fn to_doc_with_depth(node: &Node, depth: u8) -> RcDoc<'static, Style> {
    let parent = node.node_type();
    match &node.expr {
        Expr::Number(n) => RcDoc::as_string(n).annotate(Style::Number),
        Expr::Boolean(b) => RcDoc::as_string(b).annotate(Style::Boolean),
        Expr::If {
            condition,
            when_true,
            when_false,
        } => kw("if")
            .append(RcDoc::space())
            .append(to_doc_child(condition, parent, Side::Inner, depth))
            .append(RcDoc::line())
            .append(kw("then"))
            .append(RcDoc::space())
            .append(to_doc_child(when_true, parent, Side::Inner, depth))
            .append(RcDoc::line())
            .append(kw("else"))
            .append(RcDoc::space())
            .append(to_doc_child(when_false, parent, Side::Right, depth))
            .group()
            .nest(2),
        _ => match node.as_binary() {
            Some((bop, left, right)) => to_doc_binary(parent, bop, left, right, depth),
            None => RcDoc::nil(),
        },
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Pretty-printing conveniences for expression trees.
pub trait PrettyNode {
    /// Build an RcDoc representation with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()>;

    /// Format into a plain string (no colors) at the given width.
    fn pretty_string_width(&self, width: usize) -> String;

    /// Format into a plain string (no colors) at width 80.
    #[inline]
    fn pretty_string(&self) -> String {
        self.pretty_string_width(80)
    }
}

impl PrettyNode for Node {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_to(&self.pretty_doc(), width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(terminal_width(), &mut stdout)
    }

    fn pretty_string_width(&self, width: usize) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc().render_fmt(width, &mut buf);
        buf
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = FmtWrite::new(f);
        self.pretty_doc().render_raw(80, &mut w)
    }
}
