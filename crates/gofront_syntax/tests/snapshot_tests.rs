//! Golden snapshot tests for the syntax front end
//!
//! These tests render token streams, diagnostics and tree outlines as text and compare them against inline
//! snapshots, so changes to scanning, recovery or tree shape are reviewed and intentional.
//!
//! Run with: `cargo test -p gofront_syntax --test snapshot_tests`
//! Review changes: `cargo insta review`

use gofront_core::lang::{keywords, operators};
use gofront_syntax::ast::{Decl, SourceFile, Spec, Stmt, StmtNode};
use gofront_syntax::lexer::{self, TokenKind};
use gofront_syntax::location::PathInterner;
use gofront_syntax::parser;
use gofront_syntax::source::MemorySource;

/// One line per token: `line kind [value]`.
fn dump_tokens(source: &str) -> String {
    let (tokens, diagnostics) = lexer::lex(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
    tokens
        .iter()
        .map(|t| match &t.kind {
            TokenKind::Literal(value) => format!("{} {} {}", t.loc.line, t.kind, value),
            kind => format!("{} {}", t.loc.line, kind),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per diagnostic, rendered with its location.
fn dump_diagnostics(path: &str, source: &str) -> String {
    let mut interner = PathInterner::new();
    let parsed = parser::parse_file(MemorySource::new(source).with_path(path), &mut interner);
    parsed
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented outline of declarations and statements.
fn outline(file: &SourceFile) -> String {
    let mut out = vec![format!("package {}", file.package.node)];
    for decl in &file.decls {
        match &decl.node {
            Decl::Gen(g) => {
                for spec in &g.specs {
                    out.push(match &spec.node {
                        Spec::Import(i) => format!("import {}", i.path.node.as_text().unwrap_or("?")),
                        Spec::Value(v) => {
                            let names: Vec<_> = v.names.iter().map(|n| n.node.as_str()).collect();
                            format!("{} {}", keywords::as_str(g.keyword), names.join(", "))
                        }
                        Spec::Type(t) => format!("type {}", t.name.node),
                    });
                }
            }
            Decl::Func(f) => {
                out.push(format!("func {}", f.name.node));
                if let Some(body) = &f.body {
                    outline_stmts(&body.node.stmts, 1, &mut out);
                }
            }
            Decl::Bad => out.push("bad".to_string()),
        }
    }
    out.join("\n")
}

fn outline_stmts(stmts: &[StmtNode], depth: usize, out: &mut Vec<String>) {
    for stmt in stmts {
        outline_stmt(&stmt.node, depth, out);
    }
}

fn outline_stmt(stmt: &Stmt, depth: usize, out: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match stmt {
        Stmt::Assign { op, .. } => out.push(format!("{pad}assign {}", operators::as_str(*op))),
        Stmt::Expr(_) => out.push(format!("{pad}expr")),
        Stmt::Return(_) => out.push(format!("{pad}return")),
        Stmt::Branch { keyword, .. } => out.push(format!("{pad}{}", keywords::as_str(*keyword))),
        Stmt::Block(b) => {
            out.push(format!("{pad}block"));
            outline_stmts(&b.stmts, depth + 1, out);
        }
        Stmt::If(i) => {
            out.push(format!("{pad}if"));
            outline_stmts(&i.then.node.stmts, depth + 1, out);
            if let Some(els) = &i.els {
                out.push(format!("{pad}else"));
                outline_stmt(&els.node, depth + 1, out);
            }
        }
        Stmt::For(f) => {
            out.push(format!("{pad}for"));
            outline_stmts(&f.body.node.stmts, depth + 1, out);
        }
        Stmt::Range(r) => {
            out.push(format!("{pad}range"));
            outline_stmts(&r.body.node.stmts, depth + 1, out);
        }
        Stmt::Switch(s) => {
            out.push(format!("{pad}switch"));
            for clause in &s.clauses {
                let label = if clause.node.list.is_some() { "case" } else { "default" };
                out.push(format!("{pad}  {label}"));
                outline_stmts(&clause.node.body, depth + 2, out);
            }
        }
        _ => out.push(format!("{pad}other")),
    }
}

#[test]
fn test_token_stream_snapshot() {
    let source = "package main\n\nfunc main() {\n\tx := 0x1F + 'a'\n}\n";
    insta::assert_snapshot!(dump_tokens(source), @r"
    1 `package`
    1 identifier `main`
    1 `;`
    3 `func`
    3 identifier `main`
    3 `(`
    3 `)`
    3 `{`
    4 identifier `x`
    4 `:=`
    4 integer literal 31
    4 `+`
    4 rune literal 'a'
    4 `;`
    5 `}`
    5 `;`
    6 end of input
    ");
}

#[test]
fn test_recovery_diagnostics_snapshot() {
    let source = r#"package p

const (
	a = 1 ]
	b = 2
)

func f(a ...int, b int) {
	x := y[4 bad]
	s := "abc\q"
}
"#;
    insta::assert_snapshot!(dump_diagnostics("demo.go", source), @r"
    demo.go:4: expected `)`, found `]`
    demo.go:8: illegal variadic parameter
    demo.go:9: expected `:`, found identifier `bad`
    demo.go:10: illegal escape sequence
    ");
}

#[test]
fn test_tree_outline_snapshot() {
    let source = r#"package main

import "fmt"

type Point struct {
	X, Y int
}

func main() {
	pts := []Point{{1, 2}, {3, 4}}
	for _, p := range pts {
		if p.X > 1 {
			fmt.Println(p)
		} else {
			continue
		}
	}
	switch len(pts) {
	case 2:
		return
	}
}
"#;
    let parsed = parser::parse_source(source);
    assert!(parsed.is_clean(), "unexpected diagnostics: {:?}", parsed.diagnostics);
    insta::assert_snapshot!(outline(&parsed.file), @r"
    package main
    import fmt
    type Point
    func main
      assign :=
      range
        if
          expr
        else
          block
            continue
      switch
        case
          return
    ");
}
