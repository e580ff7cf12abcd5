#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, on the ambiguities the nesting level resolves,
/// and on the parser's error recovery behavior (one diagnostic per mistake, no cascades).
mod tests {
    use super::*;

    fn kinds(diagnostics: &Diagnostics) -> Vec<DiagnosticKind> {
        diagnostics.iter().map(|d| d.kind.clone()).collect()
    }

    fn parse_ok(source: &str) -> SourceFile {
        let parsed = parse_source(source);
        assert!(parsed.is_clean(), "unexpected diagnostics: {:?}", kinds(&parsed.diagnostics));
        parsed.file
    }

    fn expr_ok(source: &str) -> Expr {
        let (expr, diagnostics) = parse_expr(source);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", kinds(&diagnostics));
        expr.node
    }

    fn stmt_ok(source: &str) -> Stmt {
        let (stmt, diagnostics) = parse_stmt(source);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", kinds(&diagnostics));
        stmt.node
    }

    fn func_body(file: &SourceFile, index: usize) -> &[StmtNode] {
        match &file.decls[index].node {
            Decl::Func(f) => &f.body.as_ref().expect("function has a body").node.stmts,
            other => panic!("expected function, got {other:?}"),
        }
    }

    fn params(source: &str) -> Vec<Field> {
        let file = parse_ok(source);
        match &file.decls[0].node {
            Decl::Func(f) => f.ty.params.iter().map(|p| p.node.clone()).collect(),
            other => panic!("expected function, got {other:?}"),
        }
    }

    fn names(field: &Field) -> Vec<&str> {
        field.names.iter().map(|n| n.node.as_str()).collect()
    }

    fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    // ========================================================================
    // Files and declarations
    // ========================================================================

    #[test]
    fn test_minimal_file() {
        let file = parse_ok("package main\n\nfunc main() {}\n");
        assert_eq!(file.package.node, "main");
        assert_eq!(file.decls.len(), 1);
        assert_eq!(file.loc.line, 1);
    }

    #[test]
    fn test_imports() {
        let file = parse_ok("package p\n\nimport \"fmt\"\nimport (\n\tio \"io\"\n\t. \"strings\"\n)\n");
        let imports: Vec<_> = file.imports().collect();
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[0].name, None);
        assert_eq!(imports[0].path.node.as_text(), Some("fmt"));
        assert_eq!(imports[1].name.as_ref().map(|n| n.node.as_str()), Some("io"));
        assert_eq!(imports[2].name.as_ref().map(|n| n.node.as_str()), Some("."));
    }

    #[test]
    fn test_missing_import_path() {
        let parsed = parse_source("package p\nimport fmt\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedToken {
                expected: "import path".into(),
                found: "`;`".into()
            }]
        );
        let imports: Vec<_> = parsed.file.imports().collect();
        assert_eq!(imports[0].path.node, Constant::Error);
    }

    #[test]
    fn test_value_and_type_specs() {
        let file = parse_ok("package p\nconst (\n\tA = iota\n\tB\n)\nvar x, y int = 1, 2\ntype T []string\n");
        let Decl::Gen(consts) = &file.decls[0].node else {
            panic!("expected const group");
        };
        assert!(consts.grouped);
        assert_eq!(consts.keyword, KeywordId::Const);
        assert_eq!(consts.specs.len(), 2);
        let Spec::Value(b) = &consts.specs[1].node else {
            panic!("expected value spec");
        };
        assert!(b.values.is_empty(), "later constants may omit their values");

        let Decl::Gen(vars) = &file.decls[1].node else {
            panic!("expected var");
        };
        let Spec::Value(spec) = &vars.specs[0].node else {
            panic!("expected value spec");
        };
        assert_eq!(spec.names.len(), 2);
        assert_eq!(spec.ty.as_ref().map(|t| t.node.clone()), Some(ident("int")));
        assert_eq!(spec.values.len(), 2);

        let Decl::Gen(types) = &file.decls[2].node else {
            panic!("expected type");
        };
        assert!(matches!(
            &types.specs[0].node,
            Spec::Type(TypeSpec { ty, .. }) if matches!(ty.node, Expr::ArrayType { len: ArrayLen::Slice, .. })
        ));
    }

    #[test]
    fn test_first_constant_requires_value() {
        let parsed = parse_source("package p\nconst (\n\tA\n)\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`=`".into(),
                found: "`;`".into()
            }]
        );
    }

    #[test]
    fn test_method_declaration() {
        let file = parse_ok("package p\nfunc (r *Reader) Read(p []byte) (n int, err error) {\n\treturn 0, nil\n}\n");
        let Decl::Func(f) = &file.decls[0].node else {
            panic!("expected function");
        };
        let recv = f.recv.as_ref().expect("receiver");
        assert_eq!(names(&recv[0].node), vec!["r"]);
        assert!(matches!(recv[0].node.ty.node, Expr::Star(_)));
        assert_eq!(f.name.node, "Read");
        assert_eq!(f.ty.results.len(), 2);
        assert_eq!(names(&f.ty.results[1].node), vec!["err"]);
    }

    #[test]
    fn test_function_without_body() {
        let file = parse_ok("package p\nfunc sqrt(x float64) float64\n");
        let Decl::Func(f) = &file.decls[0].node else {
            panic!("expected function");
        };
        assert!(f.body.is_none());
        assert_eq!(f.ty.results.len(), 1);
    }

    #[test]
    fn test_declaration_locations() {
        let file = parse_ok("package p\n\nvar a int\n\n// comment\nfunc f() {\n}\n");
        let lines: Vec<u32> = file.decls.iter().map(|d| d.loc.line).collect();
        assert_eq!(lines, vec![3, 6]);
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    #[test]
    fn test_const_group_recovery_reports_once() {
        let source = "package p\nconst (\n\ta = 1 ]\n\tb = 2\n)\nvar x int\n";
        let parsed = parse_source(source);
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`)`".into(),
                found: "`]`".into()
            }]
        );
        let Decl::Gen(group) = &parsed.file.decls[0].node else {
            panic!("expected const group");
        };
        assert_eq!(group.specs.len(), 2, "the member after the bad line is kept");
        assert_eq!(parsed.file.decls.len(), 2, "the declaration after the group is parsed");
    }

    #[test]
    fn test_malformed_group_member_reports_its_own_error_only() {
        let source = "package p\nconst (\n\ta = 1\n\tb c d\n\te = 3\n)\n";
        let parsed = parse_source(source);
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`=`".into(),
                found: "identifier `d`".into()
            }]
        );
        assert_eq!(parsed.diagnostics.iter().next().map(|d| d.location.line), Some(4));
        let Decl::Gen(group) = &parsed.file.decls[0].node else {
            panic!("expected const group");
        };
        assert_eq!(group.specs.len(), 3);
    }

    #[test]
    fn test_stray_token_line_in_group_reports_once() {
        let source = "package p\nconst (\n\ta = 1\n\t]\n\tb = 2\n)\n";
        let parsed = parse_source(source);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics.iter().next().map(|d| d.location.line), Some(4));
    }

    #[test]
    fn test_unexpected_toplevel_token_is_single_error() {
        let parsed = parse_source("package p\n)\nfunc f() {}\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedDeclaration { found: "`)`".into() }]
        );
        assert!(matches!(parsed.file.decls[0].node, Decl::Bad));
        assert!(matches!(parsed.file.decls[1].node, Decl::Func(_)));
    }

    #[test]
    fn test_missing_operand_does_not_swallow_next_statement() {
        let parsed = parse_source("package p\nfunc f() {\n\tx := ;\n\ty := 2\n}\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedOperand { found: "`;`".into() }]
        );
        let body = func_body(&parsed.file, 0);
        assert_eq!(body.len(), 2);
        assert!(matches!(&body[1].node, Stmt::Assign { op: OperatorId::Define, .. }));
    }

    #[test]
    fn test_garbage_statements_terminate() {
        let parsed = parse_source("package p\nfunc f() { ] ] ] }\nfunc g() {}\n");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.file.decls.len(), 2);
    }

    #[test]
    fn test_missing_semicolon_between_statements() {
        let parsed = parse_source("package p\nfunc f() { a := 1 b := 2 }\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`;`".into(),
                found: "identifier `b`".into()
            }]
        );
    }

    #[test]
    fn test_missing_package_clause() {
        let parsed = parse_source("func f() {}\n");
        assert!(matches!(
            kinds(&parsed.diagnostics).first(),
            Some(DiagnosticKind::ExpectedToken { expected, .. }) if expected == "`package`"
        ));
    }

    #[test]
    fn test_lexical_diagnostics_are_interleaved() {
        let parsed = parse_source("package p\nvar s = \"abc\nvar t = 1 @ 2\n");
        let kinds = kinds(&parsed.diagnostics);
        assert_eq!(kinds[0], DiagnosticKind::UnterminatedLiteral { what: "string" });
        assert!(kinds.contains(&DiagnosticKind::IllegalCharacter('@')));
    }

    // ========================================================================
    // Parameter lists
    // ========================================================================

    #[test]
    fn test_parameters_one_named_group() {
        let params = params("package p\nfunc f(a, b int) {}\n");
        assert_eq!(params.len(), 1);
        assert_eq!(names(&params[0]), vec!["a", "b"]);
        assert_eq!(params[0].ty.node, ident("int"));
    }

    #[test]
    fn test_parameters_unnamed_types() {
        let params = params("package p\nfunc f(int, string) {}\n");
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|p| p.names.is_empty()));
        assert_eq!(params[1].ty.node, ident("string"));
    }

    #[test]
    fn test_parameters_several_groups() {
        let params = params("package p\nfunc f(a, b int, c string, d ...float64) {}\n");
        assert_eq!(params.len(), 3);
        assert_eq!(names(&params[0]), vec!["a", "b"]);
        assert_eq!(names(&params[1]), vec!["c"]);
        assert!(matches!(params[2].ty.node, Expr::Ellipsis(_)));
    }

    #[test]
    fn test_parameters_three_unnamed_types() {
        let params = params("package p\nfunc f(T1, T2, T3) {}\n");
        assert_eq!(params.len(), 3);
        assert!(params.iter().all(|p| p.names.is_empty()));
        let types: Vec<_> = params.iter().map(|p| p.ty.node.clone()).collect();
        assert_eq!(types, vec![ident("T1"), ident("T2"), ident("T3")]);
    }

    #[test]
    fn test_parameters_two_named_groups() {
        let params = params("package p\nfunc f(x, y T1, z T2) {}\n");
        assert_eq!(params.len(), 2);
        assert_eq!(names(&params[0]), vec!["x", "y"]);
        assert_eq!(params[0].ty.node, ident("T1"));
        assert_eq!(names(&params[1]), vec!["z"]);
        assert_eq!(params[1].ty.node, ident("T2"));
    }

    #[test]
    fn test_variadic_group_before_last_is_illegal() {
        let parsed = parse_source("package p\nfunc f(x, y ... T1, z ... T2) {}\n");
        let found: Vec<_> = parsed.diagnostics.iter().map(|d| (d.kind.clone(), d.location.line)).collect();
        assert_eq!(found, vec![(DiagnosticKind::IllegalVariadic, 2)]);
    }

    #[test]
    fn test_parameter_names_must_be_identifiers() {
        let parsed = parse_source("package p\nfunc f(a, []int string) {}\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedIdentifier { found: "type".into() }]
        );
    }

    #[test]
    fn test_variadic_only_last() {
        for source in [
            "package p\nfunc f(a ...int, b int) {}\n",
            "package p\nfunc f(...int, string) {}\n",
            "package p\nfunc f(a, b ...int) {}\n",
            "package p\nfunc f() (...int) {}\n",
        ] {
            let parsed = parse_source(source);
            assert_eq!(kinds(&parsed.diagnostics), vec![DiagnosticKind::IllegalVariadic], "{source}");
        }
        assert_eq!(params("package p\nfunc f(...int) {}\n").len(), 1);
    }

    // ========================================================================
    // Types
    // ========================================================================

    #[test]
    fn test_struct_fields() {
        let file = parse_ok("package p\ntype S struct {\n\ta, b int\n\tT\n\t*pkg.U\n\tc string \"json:\\\"c\\\"\"\n}\n");
        let Decl::Gen(g) = &file.decls[0].node else {
            panic!("expected type decl");
        };
        let Spec::Type(spec) = &g.specs[0].node else {
            panic!("expected type spec");
        };
        let Expr::StructType(fields) = &spec.ty.node else {
            panic!("expected struct");
        };
        assert_eq!(fields.len(), 4);
        assert_eq!(names(&fields[0].node), vec!["a", "b"]);
        assert!(fields[1].node.names.is_empty());
        assert!(matches!(&fields[2].node.ty.node, Expr::Star(inner) if matches!(inner.node, Expr::Selector { .. })));
        assert_eq!(
            fields[3].node.tag.as_ref().and_then(|t| t.node.as_text()),
            Some("json:\"c\"")
        );
    }

    #[test]
    fn test_interface_elements() {
        let file = parse_ok("package p\ntype I interface {\n\tio.Reader\n\tClose() error\n}\n");
        let Decl::Gen(g) = &file.decls[0].node else {
            panic!("expected type decl");
        };
        let Spec::Type(spec) = &g.specs[0].node else {
            panic!("expected type spec");
        };
        let Expr::InterfaceType(elems) = &spec.ty.node else {
            panic!("expected interface");
        };
        assert!(matches!(elems[0].node, InterfaceElem::Embedded(_)));
        assert!(matches!(&elems[1].node, InterfaceElem::Method { name, ty } if name.node == "Close" && ty.results.len() == 1));
    }

    #[test]
    fn test_bad_struct_field() {
        let parsed = parse_source("package p\ntype S struct {\n\t1\n\tb int\n}\n");
        assert_eq!(
            kinds(&parsed.diagnostics),
            vec![DiagnosticKind::ExpectedField {
                found: "integer literal".into()
            }]
        );
    }

    #[test]
    fn test_channel_directions() {
        let dir = |source: &str| match expr_ok(source) {
            Expr::ChanType { dir, .. } => dir,
            other => panic!("expected channel type, got {other:?}"),
        };
        assert_eq!(dir("chan int"), ChanDir::Both);
        assert_eq!(dir("chan<- int"), ChanDir::Send);
        assert_eq!(dir("<-chan int"), ChanDir::Recv);
        match expr_ok("chan<- chan int") {
            Expr::ChanType { dir, elem } => {
                assert_eq!(dir, ChanDir::Send);
                assert!(matches!(elem.node, Expr::ChanType { dir: ChanDir::Both, .. }));
            }
            other => panic!("expected channel type, got {other:?}"),
        }
    }

    #[test]
    fn test_map_and_func_types() {
        assert!(matches!(expr_ok("map[string][]int"), Expr::MapType { .. }));
        assert!(matches!(expr_ok("func(int) (bool, error)"), Expr::FuncType(FuncType { ref results, .. }) if results.len() == 2));
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_binary_precedence() {
        // a || b && c == d + e * f
        let Expr::Binary { op, rhs, .. } = expr_ok("a || b && c == d + e * f") else {
            panic!("expected binary");
        };
        assert_eq!(op, OperatorId::LogOr);
        let Expr::Binary { op, rhs, .. } = rhs.node else {
            panic!("expected binary");
        };
        assert_eq!(op, OperatorId::LogAnd);
        let Expr::Binary { op, rhs, .. } = rhs.node else {
            panic!("expected binary");
        };
        assert_eq!(op, OperatorId::Eql);
        let Expr::Binary { op, rhs, .. } = rhs.node else {
            panic!("expected binary");
        };
        assert_eq!(op, OperatorId::Add);
        assert!(matches!(rhs.node, Expr::Binary { op: OperatorId::Mul, .. }));
    }

    #[test]
    fn test_binary_is_left_associative() {
        let Expr::Binary { lhs, rhs, .. } = expr_ok("a - b - c") else {
            panic!("expected binary");
        };
        assert!(matches!(lhs.node, Expr::Binary { op: OperatorId::Sub, .. }));
        assert_eq!(rhs.node, ident("c"));
    }

    #[test]
    fn test_unary_operators() {
        assert!(matches!(expr_ok("-x"), Expr::Unary { op: OperatorId::Sub, .. }));
        assert!(matches!(expr_ok("*p"), Expr::Star(_)));
        assert!(matches!(expr_ok("&T{}"), Expr::Unary { op: OperatorId::And, .. }));
        assert!(matches!(expr_ok("<-ch"), Expr::Unary { op: OperatorId::Arrow, .. }));
        assert!(matches!(expr_ok("!ok && ^m > 0"), Expr::Binary { op: OperatorId::LogAnd, .. }));
    }

    #[test]
    fn test_primary_suffixes() {
        let Expr::Call { func, args, ellipsis } = expr_ok("a.b[i](x, ys...)") else {
            panic!("expected call");
        };
        assert!(ellipsis);
        assert_eq!(args.len(), 2);
        let Expr::Index { operand, .. } = func.node else {
            panic!("expected index");
        };
        assert!(matches!(operand.node, Expr::Selector { ref field, .. } if field.node == "b"));
    }

    #[test]
    fn test_type_assertions() {
        assert!(matches!(expr_ok("x.(int)"), Expr::TypeAssert { ty: Some(_), .. }));
        assert!(matches!(expr_ok("x.(type)"), Expr::TypeAssert { ty: None, .. }));
    }

    #[test]
    fn test_slice_forms() {
        let slice = |source: &str| match expr_ok(source) {
            Expr::Slice(s) => (s.low.is_some(), s.high.is_some(), s.max.is_some(), s.three),
            other => panic!("expected slice, got {other:?}"),
        };
        assert_eq!(slice("x[1:2]"), (true, true, false, false));
        assert_eq!(slice("x[:]"), (false, false, false, false));
        assert_eq!(slice("x[1:]"), (true, false, false, false));
        assert_eq!(slice("x[:2]"), (false, true, false, false));
        assert_eq!(slice("x[1:2:3]"), (true, true, true, true));
        assert_eq!(slice("x[:2:3]"), (false, true, true, true));
        assert!(matches!(expr_ok("x[1]"), Expr::Index { .. }));
    }

    #[test]
    fn test_three_index_slice_needs_middle_and_final() {
        let (_, diags) = parse_expr("x[1::3]");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::MalformedSlice {
                reason: "middle index required in 3-index slice"
            }]
        );
        let (_, diags) = parse_expr("x[1:2:]");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::MalformedSlice {
                reason: "final index required in 3-index slice"
            }]
        );
    }

    #[test]
    fn test_index_without_colon_or_bracket_reports_once() {
        let (expr, diags) = parse_expr("x[4 bad]");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`:`".into(),
                found: "identifier `bad`".into()
            }]
        );
        assert!(matches!(expr.node, Expr::Slice(SliceExpr { low: Some(_), three: false, .. })));
    }

    #[test]
    fn test_composite_literals() {
        let Expr::CompositeLit { ty, elements } = expr_ok("[][]int{{1}, {2, 3}}") else {
            panic!("expected composite literal");
        };
        assert!(ty.is_some());
        assert!(matches!(&elements[1].node, Expr::CompositeLit { ty: None, elements } if elements.len() == 2));

        let Expr::CompositeLit { elements, .. } = expr_ok("map[string]int{\"a\": 1, \"b\": 2,\n}") else {
            panic!("expected composite literal");
        };
        assert!(elements.iter().all(|e| matches!(e.node, Expr::KeyValue { .. })));

        assert!(matches!(
            expr_ok("[...]string{\"x\"}"),
            Expr::CompositeLit { ty: Some(ref t), .. } if matches!(t.node, Expr::ArrayType { len: ArrayLen::Ellipsis, .. })
        ));
        assert!(matches!(expr_ok("pkg.Point{X: 1}"), Expr::CompositeLit { .. }));
        assert!(matches!(expr_ok("struct{}{}"), Expr::CompositeLit { .. }));
    }

    #[test]
    fn test_bare_type_name_composite_literal() {
        let Expr::CompositeLit { ty: Some(ty), elements } = expr_ok("T { 1, 2, 3 }") else {
            panic!("expected composite literal");
        };
        assert_eq!(ty.node, ident("T"));
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn test_type_name_literal_at_statement_level() {
        let Stmt::Assign { rhs, .. } = stmt_ok("x = T { 1, 2, 3 }") else {
            panic!("expected assignment");
        };
        assert!(matches!(&rhs[0].node, Expr::CompositeLit { elements, .. } if elements.len() == 3));
    }

    #[test]
    fn test_if_header_brace_opens_block() {
        let Stmt::If(stmt) = stmt_ok("if true { }") else {
            panic!("expected if");
        };
        assert_eq!(stmt.cond.node, ident("true"));
        assert!(stmt.then.node.stmts.is_empty());

        let Stmt::If(stmt) = stmt_ok("if x == T {\n\ty()\n}") else {
            panic!("expected if");
        };
        assert!(matches!(stmt.cond.node, Expr::Binary { op: OperatorId::Eql, .. }));
        assert_eq!(stmt.then.node.stmts.len(), 1);
    }

    #[test]
    fn test_literal_type_allowed_in_header_when_not_a_type_name() {
        let Stmt::Range(range) = stmt_ok("for _, v := range []int{1, 2} {\n\tuse(v)\n}") else {
            panic!("expected range");
        };
        assert!(matches!(range.expr.node, Expr::CompositeLit { .. }));
        assert_eq!(range.body.node.stmts.len(), 1);
    }

    #[test]
    fn test_parenthesized_literal_in_header() {
        let Stmt::If(stmt) = stmt_ok("if x == (T{}) {}") else {
            panic!("expected if");
        };
        let Expr::Binary { rhs, .. } = stmt.cond.node else {
            panic!("expected comparison");
        };
        assert!(matches!(&rhs.node, Expr::Paren(inner) if matches!(inner.node, Expr::CompositeLit { .. })));
    }

    #[test]
    fn test_func_literal_in_header() {
        let Stmt::If(stmt) = stmt_ok("if f := func() bool { return true }; f() {}") else {
            panic!("expected if");
        };
        let init = stmt.init.expect("init statement");
        assert!(matches!(&init.node, Stmt::Assign { rhs, .. } if matches!(rhs[0].node, Expr::FuncLit { .. })));
        assert!(matches!(stmt.cond.node, Expr::Call { .. }));
    }

    #[test]
    fn test_conversion_and_receive_from_typed_channel() {
        assert!(matches!(expr_ok("[]byte(s)"), Expr::Call { .. }));
        assert!(matches!(expr_ok("make(<-chan int, 1)"), Expr::Call { ref args, .. } if matches!(args[0].node, Expr::ChanType { dir: ChanDir::Recv, .. })));
    }

    #[test]
    fn test_trailing_tokens_after_expression() {
        let (_, diags) = parse_expr("a b");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ExpectedToken {
                expected: "end of input".into(),
                found: "identifier `b`".into()
            }]
        );
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_simple_statements() {
        assert!(matches!(stmt_ok("x++"), Stmt::IncDec { op: OperatorId::Inc, .. }));
        assert!(matches!(stmt_ok("ch <- v"), Stmt::Send { .. }));
        assert!(matches!(stmt_ok("a, b = b, a"), Stmt::Assign { op: OperatorId::Assign, .. }));
        assert!(matches!(stmt_ok("x &^= mask"), Stmt::Assign { op: OperatorId::AndNotAssign, .. }));
        assert!(matches!(stmt_ok("v, ok := <-ch"), Stmt::Assign { ref lhs, .. } if lhs.len() == 2));
        assert!(matches!(stmt_ok("f(x)"), Stmt::Expr(_)));
        assert!(matches!(stmt_ok("a, b := f()"), Stmt::Assign { ref rhs, .. } if rhs.len() == 1));
    }

    #[test]
    fn test_arity_mismatch() {
        let (_, diags) = parse_stmt("a, b := 1, 2, 3");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ArityMismatch {
                context: "short variable declaration",
                expected: 2,
                found: 3
            }]
        );
        let (_, diags) = parse_stmt("a, b += 1");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ArityMismatch {
                context: "assignment operation",
                expected: 1,
                found: 2
            }]
        );
        let (_, diags) = parse_stmt("for a, b, c := range x {}");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ArityMismatch {
                context: "range clause",
                expected: 2,
                found: 3
            }]
        );
    }

    #[test]
    fn test_control_flow_keywords() {
        assert!(matches!(stmt_ok("return"), Stmt::Return(ref r) if r.is_empty()));
        assert!(matches!(stmt_ok("return a, b"), Stmt::Return(ref r) if r.len() == 2));
        assert!(matches!(
            stmt_ok("break Outer"),
            Stmt::Branch { keyword: KeywordId::Break, label: Some(_) }
        ));
        assert!(matches!(
            stmt_ok("fallthrough"),
            Stmt::Branch { keyword: KeywordId::Fallthrough, label: None }
        ));
        assert!(matches!(stmt_ok("go f()"), Stmt::Go(_)));
        assert!(matches!(stmt_ok("defer mu.Unlock()"), Stmt::Defer(_)));
    }

    #[test]
    fn test_labeled_statements() {
        let file = parse_ok("package p\nfunc f() {\nOuter:\n\tfor {\n\t\tgoto Outer\n\t}\nEnd:\n}\n");
        let body = func_body(&file, 0);
        assert!(matches!(&body[0].node, Stmt::Labeled { label, stmt } if label.node == "Outer" && matches!(stmt.node, Stmt::For(_))));
        assert!(matches!(&body[1].node, Stmt::Labeled { stmt, .. } if matches!(stmt.node, Stmt::Empty)));
    }

    #[test]
    fn test_local_declarations() {
        let file = parse_ok("package p\nfunc f() {\n\tvar x int\n\tconst c = 1\n\ttype T struct{}\n}\n");
        let body = func_body(&file, 0);
        assert_eq!(body.len(), 3);
        assert!(body.iter().all(|s| matches!(s.node, Stmt::Decl(Decl::Gen(_)))));
    }

    #[test]
    fn test_if_else_chain() {
        let Stmt::If(stmt) = stmt_ok("if x := f(); x > 0 {\n} else if x < 0 {\n} else {\n}") else {
            panic!("expected if");
        };
        assert!(stmt.init.is_some());
        let els = stmt.els.expect("else branch");
        let Stmt::If(inner) = els.node else {
            panic!("expected else-if");
        };
        assert!(matches!(inner.els.map(|e| e.node), Some(Stmt::Block(_))));
    }

    #[test]
    fn test_else_requires_if_or_block() {
        let (_, diags) = parse_stmt("if x {} else for {}");
        assert_eq!(
            kinds(&diags)[0],
            DiagnosticKind::ExpectedToken {
                expected: "`if` or `{`".into(),
                found: "`for`".into()
            }
        );
    }

    #[test]
    fn test_for_forms() {
        assert!(matches!(stmt_ok("for {}"), Stmt::For(ForStmt { init: None, cond: None, post: None, .. })));
        assert!(matches!(stmt_ok("for x < 10 {}"), Stmt::For(ForStmt { cond: Some(_), init: None, .. })));
        assert!(matches!(
            stmt_ok("for i := 0; i < 10; i++ {}"),
            Stmt::For(ForStmt { init: Some(_), cond: Some(_), post: Some(_), .. })
        ));
        assert!(matches!(stmt_ok("for ;; {}"), Stmt::For(ForStmt { init: None, cond: None, post: None, .. })));
        assert!(matches!(
            stmt_ok("for k, v := range m {}"),
            Stmt::Range(RangeStmt { key: Some(_), value: Some(_), define: true, .. })
        ));
        assert!(matches!(
            stmt_ok("for k = range m {}"),
            Stmt::Range(RangeStmt { key: Some(_), value: None, define: false, .. })
        ));
        assert!(matches!(stmt_ok("for range ch {}"), Stmt::Range(RangeStmt { key: None, .. })));
    }

    #[test]
    fn test_expression_switch() {
        let Stmt::Switch(stmt) = stmt_ok("switch x := f(); x {\ncase 1, 2:\n\ty()\ncase 3:\ndefault:\n}") else {
            panic!("expected switch");
        };
        assert!(stmt.init.is_some());
        assert_eq!(stmt.tag.map(|t| t.node), Some(ident("x")));
        assert_eq!(stmt.clauses.len(), 3);
        assert_eq!(stmt.clauses[0].node.list.as_ref().map(Vec::len), Some(2));
        assert_eq!(stmt.clauses[0].node.body.len(), 1);
        assert!(stmt.clauses[2].node.list.is_none());
    }

    #[test]
    fn test_tagless_switch() {
        assert!(matches!(stmt_ok("switch {\ncase x > 0:\n}"), Stmt::Switch(SwitchStmt { tag: None, .. })));
    }

    #[test]
    fn test_type_switch() {
        let Stmt::TypeSwitch(stmt) = stmt_ok("switch v := x.(type) {\ncase int, []string:\ncase nil:\n}") else {
            panic!("expected type switch");
        };
        assert!(matches!(stmt.guard.node, Stmt::Assign { op: OperatorId::Define, .. }));
        let list = stmt.clauses[0].node.list.as_ref().expect("case list");
        assert!(matches!(list[1].node, Expr::ArrayType { .. }));

        assert!(matches!(stmt_ok("switch x.(type) {}"), Stmt::TypeSwitch(_)));
    }

    #[test]
    fn test_switch_body_recovery() {
        let (stmt, diags) = parse_stmt("switch x {\ny()\ncase 1:\n}");
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ExpectedToken {
                expected: "`case` or `default`".into(),
                found: "identifier `y`".into()
            }]
        );
        assert!(matches!(stmt.node, Stmt::Switch(SwitchStmt { ref clauses, .. }) if clauses.len() == 1));
    }

    #[test]
    fn test_select() {
        let Stmt::Select(clauses) = stmt_ok("select {\ncase ch <- 1:\ncase v, ok := <-in:\n\tuse(v, ok)\ncase <-done:\ndefault:\n}")
        else {
            panic!("expected select");
        };
        assert_eq!(clauses.len(), 4);
        assert!(matches!(clauses[0].node.comm.as_deref().map(|s| &s.node), Some(Stmt::Send { .. })));
        assert!(matches!(clauses[1].node.comm.as_deref().map(|s| &s.node), Some(Stmt::Assign { .. })));
        assert!(matches!(clauses[2].node.comm.as_deref().map(|s| &s.node), Some(Stmt::Expr(_))));
        assert!(clauses[3].node.comm.is_none());
        assert_eq!(clauses[1].node.body.len(), 1);
    }

    #[test]
    fn test_block_and_empty_statements() {
        let file = parse_ok("package p\nfunc f() {\n\t{\n\t\tx()\n\t}\n\t;\n}\n");
        let body = func_body(&file, 0);
        assert!(matches!(&body[0].node, Stmt::Block(b) if b.stmts.len() == 1));
        assert!(matches!(body[1].node, Stmt::Empty));
    }

    #[test]
    fn test_bad_statement_reports_once() {
        let (stmt, diags) = parse_stmt(")");
        assert!(stmt.node.is_bad());
        assert_eq!(
            kinds(&diags),
            vec![DiagnosticKind::ExpectedToken {
                expected: "statement".into(),
                found: "`)`".into()
            }]
        );
    }
}
