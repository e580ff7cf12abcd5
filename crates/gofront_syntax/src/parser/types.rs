/// Type parsing.
///
/// Types are expressions in the tree, so every function here returns an [`ExprNode`]. This chunk also owns
/// signatures and parameter lists, whose grouping cannot be decided until the list has been read.
impl<S: ByteSource> Parser<S> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse a type, reporting [`DiagnosticKind::ExpectedType`] and returning `Bad` if none starts here.
    fn ty(&mut self) -> ExprNode {
        if let Some(ty) = self.try_type() {
            return ty;
        }
        let loc = self.loc();
        let found = self.found();
        self.report(DiagnosticKind::ExpectedType { found }, loc.clone());
        self.advance(EXPR_SYNC);
        Located::new(Expr::Bad, loc)
    }

    /// Parse a type if the current token can start one.
    fn try_type(&mut self) -> Option<ExprNode> {
        self.try_type_with(false)
    }

    /// ## Parameters
    /// - `ellipsis_len`: accept `[...]T`, which only appears as the type of a composite literal.
    fn try_type_with(&mut self, ellipsis_len: bool) -> Option<ExprNode> {
        let loc = self.loc();
        let tok = self.tok();
        if tok.is_ident() {
            return Some(self.type_name());
        }
        if tok.same_kind(&LBRACKET) {
            return Some(self.array_type(ellipsis_len));
        }
        if tok.same_kind(&LPAREN) {
            self.consume();
            let inner = self.ty();
            self.want(&RPAREN);
            return Some(Located::new(Expr::Paren(Box::new(inner)), loc));
        }
        if tok.is_operator(OperatorId::Mul) {
            self.consume();
            let base = self.ty();
            return Some(Located::new(Expr::Star(Box::new(base)), loc));
        }
        if tok.is_operator(OperatorId::Arrow) {
            return Some(self.chan_type());
        }
        let ty = match tok.keyword_id()? {
            KeywordId::Struct => self.struct_type(),
            KeywordId::Interface => self.interface_type(),
            KeywordId::Map => self.map_type(),
            KeywordId::Chan => self.chan_type(),
            KeywordId::Func => {
                self.consume();
                Located::new(Expr::FuncType(self.signature()), loc)
            }
            _ => return None,
        };
        Some(ty)
    }

    /// `name` or `package.name`
    fn type_name(&mut self) -> ExprNode {
        let name = self.ident();
        let loc = name.loc.clone();
        let base = Located::new(Expr::Ident(name.node), name.loc);
        if !self.got(&DOT) {
            return base;
        }
        let field = self.ident();
        Located::new(
            Expr::Selector {
                operand: Box::new(base),
                field,
            },
            loc,
        )
    }

    /// `[]T`, `[N]T` or, with `ellipsis_len`, `[...]T`.
    fn array_type(&mut self, ellipsis_len: bool) -> ExprNode {
        let loc = self.consume().loc;
        let len = if self.got(&RBRACKET) {
            ArrayLen::Slice
        } else {
            let len = if ellipsis_len && self.got(&ELLIPSIS) {
                ArrayLen::Ellipsis
            } else {
                ArrayLen::Expr(Box::new(self.expr(0)))
            };
            self.want(&RBRACKET);
            len
        };
        let elem = self.ty();
        Located::new(
            Expr::ArrayType {
                len,
                elem: Box::new(elem),
            },
            loc,
        )
    }

    /// `map [ K ] V`
    fn map_type(&mut self) -> ExprNode {
        let loc = self.consume().loc;
        self.want(&LBRACKET);
        let key = self.ty();
        self.want(&RBRACKET);
        let value = self.ty();
        Located::new(
            Expr::MapType {
                key: Box::new(key),
                value: Box::new(value),
            },
            loc,
        )
    }

    /// `chan T`, `chan<- T` or `<-chan T`.
    ///
    /// ## Notes
    /// - `chan<- chan int` is a send-only channel of `chan int`: the arrow binds to the leftmost `chan`.
    fn chan_type(&mut self) -> ExprNode {
        let loc = self.loc();
        let dir = if self.got_keyword(KeywordId::Chan) {
            if self.got(&ARROW) { ChanDir::Send } else { ChanDir::Both }
        } else {
            self.want(&ARROW);
            self.want_keyword(KeywordId::Chan);
            ChanDir::Recv
        };
        let elem = self.ty();
        Located::new(
            Expr::ChanType {
                dir,
                elem: Box::new(elem),
            },
            loc,
        )
    }

    // ========================================================================
    // Struct and interface bodies
    // ========================================================================

    /// `struct { { field ; } }`
    fn struct_type(&mut self) -> ExprNode {
        let loc = self.consume().loc;
        let fields = self.body_list(
            |tok| tok.is_ident() || tok.is_operator(OperatorId::Mul),
            Self::field_decl,
            |found| DiagnosticKind::ExpectedField { found },
        );
        Located::new(Expr::StructType(fields), loc)
    }

    /// `interface { { method | embedded ; } }`
    fn interface_type(&mut self) -> ExprNode {
        let loc = self.consume().loc;
        let elems = self.body_list(
            TokenKind::is_ident,
            Self::method_spec,
            |found| DiagnosticKind::ExpectedMethodSpec { found },
        );
        Located::new(Expr::InterfaceType(elems), loc)
    }

    /// Parse a braced, `;`-separated body of struct fields or interface elements.
    ///
    /// ## Parameters
    /// - `starts`: whether a token can begin an item.
    /// - `item`: parses one item.
    /// - `missing`: diagnostic for a token that cannot begin an item.
    ///
    /// ## Notes
    /// - A declaration keyword inside the body means the closing `}` is missing; the body ends there and `want`
    ///   reports it once.
    fn body_list<T>(
        &mut self,
        starts: fn(&TokenKind) -> bool,
        item: fn(&mut Self) -> T,
        missing: fn(String) -> DiagnosticKind,
    ) -> Vec<T> {
        self.want(&LBRACE);
        let mut items = Vec::new();
        loop {
            if self.at(&RBRACE) || self.at_eof() || DECL_START.contains(self.tok()) {
                break;
            }
            if starts(self.tok()) {
                items.push(item(self));
                if self.at(&RBRACE) || self.got(&SEMI) {
                    continue;
                }
                self.error_expected("`;` or `}`");
            } else {
                let loc = self.loc();
                let found = self.found();
                self.report(missing(found), loc);
            }
            self.advance(BODY_SYNC);
            if !self.got(&SEMI) {
                break;
            }
        }
        self.want(&RBRACE);
        items
    }

    /// `a, b T "tag"`, `T "tag"`, `pkg.T` or `*T`.
    fn field_decl(&mut self) -> Located<Field> {
        let loc = self.loc();
        let (names, ty) = if self.tok().is_ident() {
            let embedded = {
                let next = self.peek_kind(1);
                next.same_kind(&DOT) || next.same_kind(&SEMI) || next.same_kind(&RBRACE) || next.is_string_literal()
            };
            if embedded {
                (Vec::new(), self.type_name())
            } else {
                let names = self.ident_list();
                (names, self.ty())
            }
        } else {
            let star = self.consume().loc;
            let base = self.type_name();
            (Vec::new(), Located::new(Expr::Star(Box::new(base)), star))
        };
        let tag = if self.tok().is_string_literal() {
            self.literal()
        } else {
            None
        };
        Located::new(Field { names, ty, tag }, loc)
    }

    /// `name signature` or an embedded interface name.
    fn method_spec(&mut self) -> Located<InterfaceElem> {
        let loc = self.loc();
        if self.peek_kind(1).same_kind(&LPAREN) {
            let name = self.ident();
            let ty = self.signature();
            return Located::new(InterfaceElem::Method { name, ty }, loc);
        }
        Located::new(InterfaceElem::Embedded(self.type_name()), loc)
    }

    // ========================================================================
    // Signatures
    // ========================================================================

    /// `( params ) [ results ]`
    fn signature(&mut self) -> FuncType {
        let params = self.parameters(true);
        let results = if self.at(&LPAREN) {
            self.parameters(false)
        } else if let Some(ty) = self.try_type() {
            let loc = ty.loc.clone();
            vec![Located::new(
                Field {
                    names: Vec::new(),
                    ty,
                    tag: None,
                },
                loc,
            )]
        } else {
            Vec::new()
        };
        FuncType { params, results }
    }

    /// `( [ parameter_list ] )`
    ///
    /// ## Parameters
    /// - `ellipsis_ok`: a final `...T` parameter is allowed (parameters, but not results or receivers).
    fn parameters(&mut self, ellipsis_ok: bool) -> Vec<Located<Field>> {
        self.want(&LPAREN);
        let fields = if self.at(&RPAREN) {
            Vec::new()
        } else {
            self.parameter_list(ellipsis_ok)
        };
        self.want(&RPAREN);
        fields
    }

    /// Parse parameter entries, deciding afterwards whether they are names or types.
    ///
    /// ## Notes
    /// - `(a, b int)` is one group of two names, `(int, string)` is two unnamed types, and `(a, b int, c string)`
    ///   is two groups. The entries before the first type are read as types; if a type follows them, they were
    ///   names all along and must be identifiers.
    fn parameter_list(&mut self, ellipsis_ok: bool) -> Vec<Located<Field>> {
        let mut list = Vec::new();
        loop {
            list.push(self.var_type(ellipsis_ok));
            if !self.got(&COMMA) || self.at(&RPAREN) {
                break;
            }
        }

        let fields = match self.try_var_type(ellipsis_ok) {
            Some(ty) => {
                let names = self.names_from(list);
                let loc = names.first().map_or_else(|| ty.loc.clone(), |n| n.loc.clone());
                let mut fields = vec![Located::new(Field { names, ty, tag: None }, loc)];
                while self.got(&COMMA) {
                    if self.at(&RPAREN) {
                        break;
                    }
                    let loc = self.loc();
                    let names = self.ident_list();
                    let ty = self.var_type(ellipsis_ok);
                    fields.push(Located::new(Field { names, ty, tag: None }, loc));
                }
                fields
            }
            None => list
                .into_iter()
                .map(|ty| {
                    let loc = ty.loc.clone();
                    Located::new(
                        Field {
                            names: Vec::new(),
                            ty,
                            tag: None,
                        },
                        loc,
                    )
                })
                .collect(),
        };
        if ellipsis_ok {
            self.check_variadic(&fields);
        }
        fields
    }

    /// A parameter type, possibly `...T`.
    fn var_type(&mut self, ellipsis_ok: bool) -> ExprNode {
        match self.try_var_type(ellipsis_ok) {
            Some(ty) => ty,
            None => self.ty(),
        }
    }

    fn try_var_type(&mut self, ellipsis_ok: bool) -> Option<ExprNode> {
        if !self.at(&ELLIPSIS) {
            return self.try_type();
        }
        let loc = self.consume().loc;
        if !ellipsis_ok {
            self.report(DiagnosticKind::IllegalVariadic, loc.clone());
        }
        let elem = self.ty();
        Some(Located::new(Expr::Ellipsis(Box::new(elem)), loc))
    }

    /// Reinterpret entries read as types as parameter names.
    fn names_from(&mut self, list: Vec<ExprNode>) -> Vec<Name> {
        list.into_iter()
            .map(|entry| match entry.node {
                Expr::Ident(name) => Located::new(name, entry.loc),
                other => {
                    let found = describe_expr(&other).to_string();
                    self.report(DiagnosticKind::ExpectedIdentifier { found }, entry.loc.clone());
                    Located::new("_".to_string(), entry.loc)
                }
            })
            .collect()
    }

    /// Only the final parameter may be variadic, and only if it declares a single name.
    fn check_variadic(&mut self, fields: &[Located<Field>]) {
        for (i, field) in fields.iter().enumerate() {
            let is_last = i + 1 == fields.len();
            if matches!(field.node.ty.node, Expr::Ellipsis(_)) && (!is_last || field.node.names.len() > 1) {
                self.report(DiagnosticKind::IllegalVariadic, field.node.ty.loc.clone());
            }
        }
    }
}

/// Short description of an expression for "found ..." messages.
fn describe_expr(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ellipsis(_) => "variadic type",
        Expr::ArrayType { .. }
        | Expr::StructType(_)
        | Expr::FuncType(_)
        | Expr::InterfaceType(_)
        | Expr::MapType { .. }
        | Expr::ChanType { .. }
        | Expr::Star(_) => "type",
        Expr::Selector { .. } => "qualified name",
        _ => "expression",
    }
}
