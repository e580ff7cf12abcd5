/// Expression parsing.
///
/// Binary operators are parsed by one function per precedence level, lowest first. Unary operators bind tighter
/// than any binary operator, and primary suffixes (selectors, indexes, slices, calls, type assertions, composite
/// literal bodies) bind tightest.
///
/// ## Notes
/// - Every function threads the nesting level `lvl` (see the `Parser` notes).
impl<S: ByteSource> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self, lvl: i32) -> ExprNode {
        self.or_expr(lvl)
    }

    /// `expr { "," expr }`
    fn expr_list(&mut self, lvl: i32) -> Vec<ExprNode> {
        let mut list = vec![self.expr(lvl)];
        while self.got(&COMMA) {
            list.push(self.expr(lvl));
        }
        list
    }

    fn or_expr(&mut self, lvl: i32) -> ExprNode {
        self.binary_level(OperatorFamily::LogicalOr, lvl, Self::and_expr)
    }

    fn and_expr(&mut self, lvl: i32) -> ExprNode {
        self.binary_level(OperatorFamily::LogicalAnd, lvl, Self::relational_expr)
    }

    fn relational_expr(&mut self, lvl: i32) -> ExprNode {
        self.binary_level(OperatorFamily::Relational, lvl, Self::additive_expr)
    }

    fn additive_expr(&mut self, lvl: i32) -> ExprNode {
        self.binary_level(OperatorFamily::Additive, lvl, Self::multiplicative_expr)
    }

    fn multiplicative_expr(&mut self, lvl: i32) -> ExprNode {
        self.binary_level(OperatorFamily::Multiplicative, lvl, Self::unary_expr)
    }

    /// Left-associative loop over the operators of one family.
    fn binary_level(&mut self, family: OperatorFamily, lvl: i32, next: fn(&mut Self, i32) -> ExprNode) -> ExprNode {
        let mut lhs = next(self, lvl);
        while let Some(op) = self
            .tok()
            .operator_id()
            .filter(|op| operators::family(*op) == family)
        {
            self.consume();
            let rhs = next(self, lvl);
            let loc = lhs.loc.clone();
            lhs = Located::new(
                Expr::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                loc,
            );
        }
        lhs
    }

    /// Prefix operators, then a primary expression.
    fn unary_expr(&mut self, lvl: i32) -> ExprNode {
        let loc = self.loc();
        match self.tok().operator_id() {
            Some(op @ (OperatorId::Add | OperatorId::Sub | OperatorId::Not | OperatorId::Xor | OperatorId::And)) => {
                self.consume();
                let operand = self.unary_expr(lvl);
                Located::new(
                    Expr::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    loc,
                )
            }
            Some(OperatorId::Mul) => {
                self.consume();
                let operand = self.unary_expr(lvl);
                Located::new(Expr::Star(Box::new(operand)), loc)
            }
            Some(OperatorId::Arrow) if self.peek_kind(1).is_keyword(KeywordId::Chan) => {
                let ty = self.chan_type();
                self.primary_suffixes(ty, lvl)
            }
            Some(OperatorId::Arrow) => {
                self.consume();
                let operand = self.unary_expr(lvl);
                Located::new(
                    Expr::Unary {
                        op: OperatorId::Arrow,
                        operand: Box::new(operand),
                    },
                    loc,
                )
            }
            _ => self.primary_expr(lvl),
        }
    }

    fn primary_expr(&mut self, lvl: i32) -> ExprNode {
        let operand = self.operand(lvl);
        self.primary_suffixes(operand, lvl)
    }

    /// Apply selectors, type assertions, indexes, slices, calls and composite literal bodies to `x`.
    fn primary_suffixes(&mut self, mut x: ExprNode, lvl: i32) -> ExprNode {
        loop {
            let loc = x.loc.clone();
            match self.tok().punctuation_id() {
                Some(PunctuationId::Dot) => {
                    self.consume();
                    if self.got(&LPAREN) {
                        let ty = if self.got_keyword(KeywordId::Type) {
                            None
                        } else {
                            Some(Box::new(self.ty()))
                        };
                        self.want(&RPAREN);
                        x = Located::new(
                            Expr::TypeAssert {
                                operand: Box::new(x),
                                ty,
                            },
                            loc,
                        );
                    } else {
                        let field = self.ident();
                        x = Located::new(
                            Expr::Selector {
                                operand: Box::new(x),
                                field,
                            },
                            loc,
                        );
                    }
                }
                Some(PunctuationId::LBracket) => x = self.index_or_slice(x, lvl),
                Some(PunctuationId::LParen) => x = self.call(x, lvl),
                // In headers (`lvl < 0`) only a bare `T {` is read as a block; `[]int{1}` is still a literal.
                Some(PunctuationId::LBrace) if is_literal_type(&x.node) && (lvl >= 0 || !is_type_name(&x.node)) => {
                    x = self.composite_lit(Some(x), lvl);
                }
                _ => return x,
            }
        }
    }

    /// Identifiers, literals, parenthesized expressions, function literals and type operands.
    fn operand(&mut self, lvl: i32) -> ExprNode {
        let loc = self.loc();
        if self.tok().is_ident() {
            let name = self.ident();
            return Located::new(Expr::Ident(name.node), name.loc);
        }
        if let Some(value) = self.literal() {
            return Located::new(Expr::Literal(value.node), value.loc);
        }
        if self.got(&LPAREN) {
            let inner = self.expr(lvl + 1);
            self.want(&RPAREN);
            return Located::new(Expr::Paren(Box::new(inner)), loc);
        }
        if self.at_keyword(KeywordId::Func) {
            return self.func_type_or_lit();
        }
        if let Some(ty) = self.try_type_with(true) {
            return ty;
        }
        let found = self.found();
        self.report(DiagnosticKind::ExpectedOperand { found }, loc.clone());
        self.advance(EXPR_SYNC);
        Located::new(Expr::Bad, loc)
    }

    /// `func signature`, followed by a body for a function literal.
    fn func_type_or_lit(&mut self) -> ExprNode {
        let loc = self.consume().loc;
        let ty = self.signature();
        if !self.at(&LBRACE) {
            return Located::new(Expr::FuncType(ty), loc);
        }
        let body = self.block();
        Located::new(Expr::FuncLit { ty, body }, loc)
    }

    /// `x[i]`, `x[lo:hi]` or `x[lo:hi:max]`.
    fn index_or_slice(&mut self, x: ExprNode, lvl: i32) -> ExprNode {
        let loc = x.loc.clone();
        self.consume();
        let inner = lvl + 1;

        let mut index: [Option<ExprNode>; 3] = [None, None, None];
        let mut colons = 0;
        if !self.at(&COLON) {
            index[0] = Some(self.expr(inner));
        }
        while colons < 2 && self.got(&COLON) {
            colons += 1;
            if !self.at(&COLON) && !self.at(&RBRACKET) && !self.at_eof() {
                index[colons] = Some(self.expr(inner));
            }
        }

        if colons == 0 {
            if self.got(&RBRACKET) {
                let index = index[0].take().unwrap_or_else(|| Located::new(Expr::Bad, loc.clone()));
                return Located::new(
                    Expr::Index {
                        operand: Box::new(x),
                        index: Box::new(index),
                    },
                    loc,
                );
            }
            self.error_expected(COLON.to_string());
            self.advance(INDEX_SYNC);
            self.got(&RBRACKET);
        } else {
            self.want(&RBRACKET);
        }

        let three = colons == 2;
        let [low, high, max] = index;
        if three {
            if high.is_none() {
                self.report(
                    DiagnosticKind::MalformedSlice {
                        reason: "middle index required in 3-index slice",
                    },
                    loc.clone(),
                );
            }
            if max.is_none() {
                self.report(
                    DiagnosticKind::MalformedSlice {
                        reason: "final index required in 3-index slice",
                    },
                    loc.clone(),
                );
            }
        }
        Located::new(
            Expr::Slice(SliceExpr {
                operand: Box::new(x),
                low: low.map(Box::new),
                high: high.map(Box::new),
                max: max.map(Box::new),
                three,
            }),
            loc,
        )
    }

    /// `f(args)` with an optional trailing `...`.
    fn call(&mut self, func: ExprNode, lvl: i32) -> ExprNode {
        let loc = func.loc.clone();
        self.consume();
        let mut args = Vec::new();
        let mut ellipsis = false;
        while !self.at(&RPAREN) && !self.at_eof() {
            args.push(self.expr(lvl + 1));
            ellipsis |= self.got(&ELLIPSIS);
            if !self.got(&COMMA) {
                break;
            }
        }
        self.want(&RPAREN);
        Located::new(
            Expr::Call {
                func: Box::new(func),
                args,
                ellipsis,
            },
            loc,
        )
    }

    /// `{ element, ... }` after a literal type, or alone for an elided element type.
    fn composite_lit(&mut self, ty: Option<ExprNode>, lvl: i32) -> ExprNode {
        let loc = match &ty {
            Some(ty) => ty.loc.clone(),
            None => self.loc(),
        };
        self.want(&LBRACE);
        let mut elements = Vec::new();
        while !self.at(&RBRACE) && !self.at_eof() {
            elements.push(self.element(lvl + 1));
            if !self.got(&COMMA) {
                break;
            }
        }
        self.want(&RBRACE);
        Located::new(
            Expr::CompositeLit {
                ty: ty.map(Box::new),
                elements,
            },
            loc,
        )
    }

    /// `value` or `key: value`.
    fn element(&mut self, lvl: i32) -> ExprNode {
        let key = self.element_value(lvl);
        if !self.got(&COLON) {
            return key;
        }
        let loc = key.loc.clone();
        let value = self.element_value(lvl);
        Located::new(
            Expr::KeyValue {
                key: Box::new(key),
                value: Box::new(value),
            },
            loc,
        )
    }

    fn element_value(&mut self, lvl: i32) -> ExprNode {
        if self.at(&LBRACE) {
            self.composite_lit(None, lvl)
        } else {
            self.expr(lvl)
        }
    }
}

/// Expressions that may be followed by a composite literal body.
fn is_literal_type(expr: &Expr) -> bool {
    match expr {
        Expr::Ident(_) | Expr::ArrayType { .. } | Expr::StructType(_) | Expr::MapType { .. } => true,
        Expr::Selector { operand, .. } => matches!(operand.node, Expr::Ident(_)),
        _ => false,
    }
}

/// `T` or `pkg.T`: the literal types that are ambiguous with a following block.
fn is_type_name(expr: &Expr) -> bool {
    match expr {
        Expr::Ident(_) => true,
        Expr::Selector { operand, .. } => matches!(operand.node, Expr::Ident(_)),
        _ => false,
    }
}
