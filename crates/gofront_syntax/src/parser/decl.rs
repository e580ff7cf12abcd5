/// Declaration parsing.
///
/// This chunk parses the top-level structure of a source file:
/// - The `package` clause and leading imports
/// - `const` / `var` / `type` / `import` declarations, single or grouped
/// - Function and method declarations
impl<S: ByteSource> Parser<S> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `package name ; { import ; } { decl ; }`
    fn source_file(&mut self) -> SourceFile {
        let loc = self.loc();
        let package = if self.got_keyword(KeywordId::Package) {
            let name = self.ident();
            self.expect_decl_semi(false);
            name
        } else {
            self.error_expected("`package`");
            Located::new("_".to_string(), loc.clone())
        };

        let mut decls = Vec::new();
        while self.at_keyword(KeywordId::Import) {
            decls.push(self.decl());
        }
        while !self.at_eof() {
            decls.push(self.decl());
        }
        SourceFile { package, decls, loc }
    }

    /// Parse one top-level declaration and its terminating `;`.
    fn decl(&mut self) -> Located<Decl> {
        let loc = self.loc();
        let before = self.diagnostic_count();
        let node = match self.tok().keyword_id() {
            Some(keyword @ (KeywordId::Const | KeywordId::Var | KeywordId::Type | KeywordId::Import)) => {
                Decl::Gen(self.gen_decl(keyword))
            }
            Some(KeywordId::Func) => Decl::Func(self.func_decl()),
            _ => {
                let found = self.found();
                self.report(DiagnosticKind::ExpectedDeclaration { found }, loc.clone());
                self.advance(DECL_START);
                return Located::new(Decl::Bad, loc);
            }
        };
        let quiet = self.diagnostic_count() > before;
        self.expect_decl_semi(quiet);
        Located::new(node, loc)
    }

    /// `keyword spec` or `keyword ( { spec ; } )`.
    ///
    /// ## Notes
    /// - A malformed group member reports one diagnostic and skips to the next `;` or `)`: its own error if it
    ///   reported one, "expected `)`" otherwise. If recovery lands on a declaration keyword instead, the group is
    ///   abandoned without a second diagnostic.
    fn gen_decl(&mut self, keyword: KeywordId) -> GenDecl {
        self.consume();
        if !self.got(&LPAREN) {
            let spec = self.spec(keyword, 0);
            return GenDecl {
                keyword,
                specs: vec![spec],
                grouped: false,
            };
        }

        let mut specs = Vec::new();
        loop {
            if self.at(&RPAREN) || self.at_eof() {
                break;
            }
            let before = self.diagnostic_count();
            if self.at_spec_start(keyword) {
                let index = specs.len();
                specs.push(self.spec(keyword, index));
                if self.at(&RPAREN) || self.got(&SEMI) {
                    continue;
                }
            }
            if self.diagnostic_count() == before {
                self.error_expected(RPAREN.to_string());
            }
            if !self.recover_group() {
                return GenDecl {
                    keyword,
                    specs,
                    grouped: true,
                };
            }
        }
        self.want(&RPAREN);
        GenDecl {
            keyword,
            specs,
            grouped: true,
        }
    }

    /// Skip to the next group member. Returns `false` if the group cannot be resumed.
    fn recover_group(&mut self) -> bool {
        self.advance(GROUP_SYNC);
        self.got(&SEMI) || self.at(&RPAREN)
    }

    fn at_spec_start(&mut self, keyword: KeywordId) -> bool {
        let tok = self.tok();
        match keyword {
            KeywordId::Import => tok.is_ident() || tok.same_kind(&DOT) || tok.is_string_literal(),
            _ => tok.is_ident(),
        }
    }

    fn spec(&mut self, keyword: KeywordId, index: usize) -> Located<Spec> {
        let loc = self.loc();
        let node = match keyword {
            KeywordId::Import => Spec::Import(self.import_spec()),
            KeywordId::Type => Spec::Type(self.type_spec()),
            _ => Spec::Value(self.value_spec(keyword, index)),
        };
        Located::new(node, loc)
    }

    /// `[ "." | name ] "path"`
    fn import_spec(&mut self) -> ImportSpec {
        let name = if self.at(&DOT) {
            let loc = self.consume().loc;
            Some(Located::new(".".to_string(), loc))
        } else if self.tok().is_ident() {
            Some(self.ident())
        } else {
            None
        };
        let path = if self.tok().is_string_literal() {
            self.literal()
        } else {
            None
        };
        let path = match path {
            Some(path) => path,
            None => {
                let loc = self.loc();
                self.error_expected("import path");
                Located::new(Constant::Error, loc)
            }
        };
        ImportSpec { name, path }
    }

    /// `name type`
    fn type_spec(&mut self) -> TypeSpec {
        let name = self.ident();
        let ty = self.ty();
        TypeSpec { name, ty }
    }

    /// `names [ type ] [ = values ]`
    ///
    /// ## Parameters
    /// - `index`: position inside a group. The first constant of a group, and any typed constant, must have values;
    ///   later untyped constants repeat the previous expression list.
    fn value_spec(&mut self, keyword: KeywordId, index: usize) -> ValueSpec {
        let names = self.ident_list();
        let ty = self.try_type();
        let values = if self.got(&ASSIGN) {
            self.expr_list(0)
        } else {
            if keyword == KeywordId::Const && (ty.is_some() || index == 0) {
                self.error_expected(ASSIGN.to_string());
            }
            Vec::new()
        };
        ValueSpec { names, ty, values }
    }

    /// `func [ receiver ] name signature [ body ]`
    fn func_decl(&mut self) -> FuncDecl {
        self.consume();
        let recv = if self.at(&LPAREN) {
            Some(self.parameters(false))
        } else {
            None
        };
        let name = self.ident();
        let ty = self.signature();
        let body = if self.at(&LBRACE) { Some(self.block()) } else { None };
        FuncDecl { recv, name, ty, body }
    }
}
