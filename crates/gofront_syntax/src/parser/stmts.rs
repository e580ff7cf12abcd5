/// Statement parsing.
///
/// This chunk handles blocks and statement lists (including separator recovery), simple statements, and the
/// control statements `if`, `switch`, `select` and `for` with their headers.
impl<S: ByteSource> Parser<S> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `{ stmt_list }`
    fn block(&mut self) -> Located<Block> {
        let loc = self.want(&LBRACE);
        let stmts = self.stmt_list();
        self.want(&RBRACE);
        Located::new(Block { stmts }, loc)
    }

    /// Statements up to `}`, `case`, `default` or end of input.
    ///
    /// ## Notes
    /// - A statement not followed by `;` reports once, unless the statement itself already reported, and parsing
    ///   resumes at the next statement boundary.
    fn stmt_list(&mut self) -> Vec<StmtNode> {
        let mut stmts = Vec::new();
        while !self.at_stmt_list_end() {
            let before = self.diagnostic_count();
            stmts.push(self.stmt());
            if self.at_stmt_list_end() || self.got(&SEMI) {
                continue;
            }
            if self.diagnostic_count() == before {
                self.error_expected(SEMI.to_string());
            }
            self.advance(STMT_SYNC);
            self.got(&SEMI);
        }
        stmts
    }

    fn at_stmt_list_end(&mut self) -> bool {
        let tok = self.tok();
        tok.same_kind(&RBRACE)
            || tok.same_kind(&TokenKind::Eof)
            || tok.is_keyword(KeywordId::Case)
            || tok.is_keyword(KeywordId::Default)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse one statement (without its terminating `;`).
    fn stmt(&mut self) -> StmtNode {
        let loc = self.loc();
        if let Some(keyword) = self.tok().keyword_id() {
            let node = match keyword {
                KeywordId::Const | KeywordId::Type | KeywordId::Var => Stmt::Decl(Decl::Gen(self.gen_decl(keyword))),
                KeywordId::Go => {
                    self.consume();
                    Stmt::Go(self.expr(0))
                }
                KeywordId::Defer => {
                    self.consume();
                    Stmt::Defer(self.expr(0))
                }
                KeywordId::Return => {
                    self.consume();
                    if self.at(&SEMI) || self.at(&RBRACE) {
                        Stmt::Return(Vec::new())
                    } else {
                        Stmt::Return(self.expr_list(0))
                    }
                }
                KeywordId::Break | KeywordId::Continue | KeywordId::Goto => {
                    self.consume();
                    let label = if self.tok().is_ident() { Some(self.ident()) } else { None };
                    Stmt::Branch { keyword, label }
                }
                KeywordId::Fallthrough => {
                    self.consume();
                    Stmt::Branch { keyword, label: None }
                }
                KeywordId::If => return self.if_stmt(),
                KeywordId::Switch => return self.switch_stmt(),
                KeywordId::Select => return self.select_stmt(),
                KeywordId::For => return self.for_stmt(),
                KeywordId::Func | KeywordId::Struct | KeywordId::Map | KeywordId::Chan | KeywordId::Interface => {
                    return self.simple_stmt(SimpleMode::LabelOk, 0);
                }
                _ => return self.bad_stmt(loc),
            };
            return Located::new(node, loc);
        }

        if self.at(&LBRACE) {
            let block = self.block();
            return Located::new(Stmt::Block(block.node), loc);
        }
        if self.at(&SEMI) || self.at(&RBRACE) {
            return Located::new(Stmt::Empty, loc);
        }
        if self.starts_simple_stmt() {
            return self.simple_stmt(SimpleMode::LabelOk, 0);
        }
        self.bad_stmt(loc)
    }

    fn bad_stmt(&mut self, loc: Location) -> StmtNode {
        self.error_expected("statement");
        self.advance(STMT_SYNC);
        Located::new(Stmt::Bad, loc)
    }

    /// Tokens that begin an expression (and so a simple statement), other than keywords.
    fn starts_simple_stmt(&mut self) -> bool {
        match self.tok() {
            TokenKind::Ident(_) | TokenKind::Literal(_) => true,
            TokenKind::Punctuation(id) => matches!(id, PunctuationId::LParen | PunctuationId::LBracket),
            TokenKind::Operator(id) => operators::is_prefix(*id),
            _ => false,
        }
    }

    /// Simple statement in statement position.
    fn simple_stmt(&mut self, mode: SimpleMode, lvl: i32) -> StmtNode {
        let loc = self.loc();
        match self.simple(mode, lvl) {
            Simple::Stmt(stmt) => stmt,
            Simple::Range { .. } => Located::new(Stmt::Bad, loc),
        }
    }

    /// Expression, send, inc/dec, assignment, short variable declaration, label or (in `for` headers) range
    /// clause.
    fn simple(&mut self, mode: SimpleMode, lvl: i32) -> Simple {
        let loc = self.loc();
        let mut lhs = self.expr_list(lvl);

        let node = match self.tok().operator_id() {
            Some(op) if operators::family(op) == OperatorFamily::Assignment => {
                self.consume();
                if mode == SimpleMode::RangeOk
                    && matches!(op, OperatorId::Assign | OperatorId::Define)
                    && self.got_keyword(KeywordId::Range)
                {
                    let expr = self.expr(lvl);
                    if lhs.len() > 2 {
                        self.arity_mismatch("range clause", 2, lhs.len(), loc);
                    }
                    return Simple::Range {
                        lhs,
                        define: op == OperatorId::Define,
                        expr,
                    };
                }
                let rhs = self.expr_list(lvl);
                self.check_assign_arity(op, lhs.len(), rhs.len(), loc.clone());
                Stmt::Assign { lhs, op, rhs }
            }
            Some(op @ (OperatorId::Inc | OperatorId::Dec)) => {
                self.consume();
                if lhs.len() > 1 {
                    self.arity_mismatch("increment statement", 1, lhs.len(), loc.clone());
                }
                Stmt::IncDec {
                    operand: lhs.swap_remove(0),
                    op,
                }
            }
            Some(OperatorId::Arrow) => {
                self.consume();
                if lhs.len() > 1 {
                    self.arity_mismatch("send statement", 1, lhs.len(), loc.clone());
                }
                let value = self.expr(lvl);
                Stmt::Send {
                    chan: lhs.swap_remove(0),
                    value,
                }
            }
            _ => {
                let label_ok = mode == SimpleMode::LabelOk && lhs.len() == 1 && lhs[0].node.as_ident().is_some();
                if label_ok && self.at(&COLON) {
                    return Simple::Stmt(self.labeled_stmt(lhs.swap_remove(0), loc));
                }
                if lhs.len() > 1 {
                    self.error_expected("`:=`, `=` or `,`");
                }
                Stmt::Expr(lhs.swap_remove(0))
            }
        };
        Simple::Stmt(Located::new(node, loc))
    }

    /// `label: stmt`; a label directly before `}` labels an empty statement.
    fn labeled_stmt(&mut self, label: ExprNode, loc: Location) -> StmtNode {
        self.consume();
        let label = match label.node {
            Expr::Ident(name) => Located::new(name, label.loc),
            _ => Located::new("_".to_string(), label.loc),
        };
        let stmt = if self.at(&RBRACE) {
            Located::new(Stmt::Empty, self.loc())
        } else {
            self.stmt()
        };
        Located::new(
            Stmt::Labeled {
                label,
                stmt: Box::new(stmt),
            },
            loc,
        )
    }

    fn check_assign_arity(&mut self, op: OperatorId, lhs: usize, rhs: usize, loc: Location) {
        match op {
            OperatorId::Assign | OperatorId::Define => {
                if rhs > 1 && rhs != lhs {
                    let context = if op == OperatorId::Define {
                        "short variable declaration"
                    } else {
                        "assignment"
                    };
                    self.arity_mismatch(context, lhs, rhs, loc);
                }
            }
            _ if lhs != 1 => self.arity_mismatch("assignment operation", 1, lhs, loc),
            _ if rhs != 1 => self.arity_mismatch("assignment operation", 1, rhs, loc),
            _ => {}
        }
    }

    fn arity_mismatch(&mut self, context: &'static str, expected: usize, found: usize, loc: Location) {
        self.report(
            DiagnosticKind::ArityMismatch {
                context,
                expected,
                found,
            },
            loc,
        );
    }

    /// Unwrap the expression of a control clause header, reporting anything else.
    fn header_expr(&mut self, stmt: StmtNode, what: &str) -> ExprNode {
        match stmt.node {
            Stmt::Expr(expr) => expr,
            _ => {
                self.report(
                    DiagnosticKind::ExpectedToken {
                        expected: what.to_string(),
                        found: "simple statement".to_string(),
                    },
                    stmt.loc.clone(),
                );
                Located::new(Expr::Bad, stmt.loc)
            }
        }
    }

    // ========================================================================
    // If
    // ========================================================================

    /// `if [ init ; ] cond block [ else ( if_stmt | block ) ]`
    fn if_stmt(&mut self) -> StmtNode {
        let loc = self.consume().loc;
        let (init, cond) = self.if_header();
        let then = self.block();
        let els = if self.got_keyword(KeywordId::Else) {
            if self.at_keyword(KeywordId::If) {
                Some(Box::new(self.if_stmt()))
            } else if self.at(&LBRACE) {
                let block = self.block();
                Some(Box::new(Located::new(Stmt::Block(block.node), block.loc)))
            } else {
                let else_loc = self.loc();
                self.error_expected("`if` or `{`");
                Some(Box::new(Located::new(Stmt::Bad, else_loc)))
            }
        } else {
            None
        };
        Located::new(
            Stmt::If(IfStmt {
                init,
                cond,
                then,
                els,
            }),
            loc,
        )
    }

    fn if_header(&mut self) -> (Option<Box<StmtNode>>, ExprNode) {
        let loc = self.loc();
        if self.at(&LBRACE) {
            self.error_expected("condition");
            return (None, Located::new(Expr::Bad, loc));
        }
        let mut init = None;
        let mut cond = None;
        if !self.at(&SEMI) {
            cond = Some(self.simple_stmt(SimpleMode::Basic, -1));
        }
        if self.got(&SEMI) {
            init = cond.take().map(Box::new);
            if !self.at(&LBRACE) {
                cond = Some(self.simple_stmt(SimpleMode::Basic, -1));
            }
        }
        let cond = match cond {
            Some(stmt) => self.header_expr(stmt, "condition"),
            None => {
                let loc = self.loc();
                self.error_expected("condition");
                Located::new(Expr::Bad, loc)
            }
        };
        (init, cond)
    }

    // ========================================================================
    // Switch and select
    // ========================================================================

    /// Expression or type switch.
    fn switch_stmt(&mut self) -> StmtNode {
        let loc = self.consume().loc;
        let mut init = None;
        let mut tag = None;
        if !self.at(&LBRACE) {
            if !self.at(&SEMI) {
                tag = Some(self.simple_stmt(SimpleMode::Basic, -1));
            }
            if self.got(&SEMI) {
                init = tag.take().map(Box::new);
                if !self.at(&LBRACE) {
                    tag = Some(self.simple_stmt(SimpleMode::Basic, -1));
                }
            }
        }

        let type_switch = tag.as_ref().is_some_and(|t| is_type_switch_guard(&t.node));
        let clauses = self.clause_list(|p| p.case_clause(type_switch));

        let node = match tag {
            Some(guard) if type_switch => Stmt::TypeSwitch(TypeSwitchStmt {
                init,
                guard: Box::new(guard),
                clauses,
            }),
            tag => {
                let tag = tag.map(|t| self.header_expr(t, "switch expression"));
                Stmt::Switch(SwitchStmt { init, tag, clauses })
            }
        };
        Located::new(node, loc)
    }

    /// `select { comm_clause... }`
    fn select_stmt(&mut self) -> StmtNode {
        let loc = self.consume().loc;
        let clauses = self.clause_list(Self::comm_clause);
        Located::new(Stmt::Select(clauses), loc)
    }

    /// Braced sequence of `case`/`default` clauses.
    fn clause_list<T>(&mut self, mut clause: impl FnMut(&mut Self) -> T) -> Vec<T> {
        self.want(&LBRACE);
        let mut clauses = Vec::new();
        while !self.at(&RBRACE) && !self.at_eof() {
            if self.at_keyword(KeywordId::Case) || self.at_keyword(KeywordId::Default) {
                clauses.push(clause(self));
            } else {
                self.error_expected("`case` or `default`");
                self.advance(CLAUSE_SYNC);
            }
        }
        self.want(&RBRACE);
        clauses
    }

    /// `case list:` or `default:` followed by statements.
    fn case_clause(&mut self, type_switch: bool) -> Located<CaseClause> {
        let loc = self.loc();
        let list = if self.got_keyword(KeywordId::Case) {
            Some(if type_switch { self.type_list() } else { self.expr_list(0) })
        } else {
            self.consume();
            None
        };
        self.want(&COLON);
        let body = self.stmt_list();
        Located::new(CaseClause { list, body }, loc)
    }

    fn type_list(&mut self) -> Vec<ExprNode> {
        let mut list = vec![self.ty()];
        while self.got(&COMMA) {
            list.push(self.ty());
        }
        list
    }

    /// `case send_or_recv:` or `default:` followed by statements.
    fn comm_clause(&mut self) -> Located<CommClause> {
        let loc = self.loc();
        let comm = if self.got_keyword(KeywordId::Case) {
            let stmt_loc = self.loc();
            let mut lhs = self.expr_list(0);
            let node = match self.tok().operator_id() {
                Some(OperatorId::Arrow) => {
                    self.consume();
                    if lhs.len() > 1 {
                        self.arity_mismatch("send statement", 1, lhs.len(), stmt_loc.clone());
                    }
                    let value = self.expr(0);
                    Stmt::Send {
                        chan: lhs.swap_remove(0),
                        value,
                    }
                }
                Some(op @ (OperatorId::Assign | OperatorId::Define)) => {
                    self.consume();
                    if lhs.len() > 2 {
                        self.arity_mismatch("receive statement", 2, lhs.len(), stmt_loc.clone());
                    }
                    let rhs = vec![self.expr(0)];
                    Stmt::Assign { lhs, op, rhs }
                }
                _ => {
                    if lhs.len() > 1 {
                        self.arity_mismatch("receive statement", 1, lhs.len(), stmt_loc.clone());
                    }
                    Stmt::Expr(lhs.swap_remove(0))
                }
            };
            Some(Box::new(Located::new(node, stmt_loc)))
        } else {
            self.consume();
            None
        };
        self.want(&COLON);
        let body = self.stmt_list();
        Located::new(CommClause { comm, body }, loc)
    }

    // ========================================================================
    // For
    // ========================================================================

    /// Infinite loop, condition loop, three-clause loop or range loop.
    fn for_stmt(&mut self) -> StmtNode {
        let loc = self.consume().loc;
        let mut init = None;
        let mut cond = None;
        let mut post = None;
        let mut range = None;

        if !self.at(&LBRACE) {
            if self.got_keyword(KeywordId::Range) {
                range = Some((Vec::new(), false, self.expr(-1)));
            } else if !self.at(&SEMI) {
                match self.simple(SimpleMode::RangeOk, -1) {
                    Simple::Range { lhs, define, expr } => range = Some((lhs, define, expr)),
                    Simple::Stmt(stmt) => cond = Some(stmt),
                }
            }
            if range.is_none() && self.got(&SEMI) {
                init = cond.take().map(Box::new);
                if !self.at(&SEMI) {
                    cond = Some(self.simple_stmt(SimpleMode::Basic, -1));
                }
                self.want(&SEMI);
                if !self.at(&LBRACE) {
                    post = Some(Box::new(self.simple_stmt(SimpleMode::Basic, -1)));
                }
            }
        }

        let body = self.block();
        let node = match range {
            Some((lhs, define, expr)) => {
                let mut vars = lhs.into_iter();
                Stmt::Range(RangeStmt {
                    key: vars.next(),
                    value: vars.next(),
                    define,
                    expr,
                    body,
                })
            }
            None => {
                let cond = cond.map(|c| self.header_expr(c, "loop condition"));
                Stmt::For(ForStmt { init, cond, post, body })
            }
        };
        Located::new(node, loc)
    }
}

/// `x.(type)` or `v := x.(type)`.
fn is_type_switch_guard(stmt: &Stmt) -> bool {
    let is_guard = |e: &ExprNode| matches!(e.node, Expr::TypeAssert { ty: None, .. });
    match stmt {
        Stmt::Expr(expr) => is_guard(expr),
        Stmt::Assign {
            lhs,
            op: OperatorId::Define,
            rhs,
        } => lhs.len() == 1 && rhs.len() == 1 && is_guard(&rhs[0]),
        _ => false,
    }
}
