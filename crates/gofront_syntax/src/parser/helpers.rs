/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`tok`, `peek_kind`, `consume`)
/// - Matching / expecting tokens (`at`, `got`, `want`) and their keyword variants
/// - Diagnostics (`report`, `error_expected`)
/// - Error recovery (`advance`)
impl<S: ByteSource> Parser<S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token kind without consuming it.
    fn tok(&mut self) -> &TokenKind {
        &self.lexer.peek(0).kind
    }

    /// Return the kind of the token `k` positions ahead.
    fn peek_kind(&mut self, k: usize) -> &TokenKind {
        &self.lexer.peek(k).kind
    }

    /// Location of the current token.
    fn loc(&mut self) -> Location {
        self.lexer.peek(0).loc.clone()
    }

    fn consume(&mut self) -> Token {
        self.lexer.consume()
    }

    fn at_eof(&mut self) -> bool {
        matches!(self.tok(), TokenKind::Eof)
    }

    /// Return `true` if the current token “matches” `kind`.
    ///
    /// ## Notes
    /// - For ID-carrying tokens the IDs must match; for identifiers and literals the payload is ignored.
    fn at(&mut self, kind: &TokenKind) -> bool {
        self.tok().same_kind(kind)
    }

    fn at_keyword(&mut self, id: KeywordId) -> bool {
        self.tok().is_keyword(id)
    }

    /// Consume the current token if it matches `kind`.
    fn got(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.consume();
            true
        } else {
            false
        }
    }

    fn got_keyword(&mut self, id: KeywordId) -> bool {
        self.got(&TokenKind::Keyword(id))
    }

    /// Consume `kind` or report it as expected.
    ///
    /// ## Returns
    /// The location where `kind` was (or should have been).
    ///
    /// ## Notes
    /// - A mismatching token is left in place; recovery is the caller's decision.
    fn want(&mut self, kind: &TokenKind) -> Location {
        let loc = self.loc();
        if !self.got(kind) {
            self.error_expected(kind.to_string());
        }
        loc
    }

    fn want_keyword(&mut self, id: KeywordId) -> Location {
        self.want(&TokenKind::Keyword(id))
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn report(&mut self, kind: DiagnosticKind, loc: Location) {
        self.lexer.report(kind, loc);
    }

    /// Describe the current token for a "found ..." message.
    fn found(&mut self) -> String {
        self.tok().to_string()
    }

    /// Report [`DiagnosticKind::ExpectedToken`] at the current token.
    fn error_expected(&mut self, expected: impl Into<String>) {
        let loc = self.loc();
        let found = self.found();
        self.report(
            DiagnosticKind::ExpectedToken {
                expected: expected.into(),
                found,
            },
            loc,
        );
    }

    fn diagnostic_count(&self) -> usize {
        self.lexer.diagnostic_count()
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Skip tokens until one in `stop` (or end of input) is current.
    ///
    /// ## Notes
    /// - Nothing is consumed if the current token is already in `stop`.
    fn advance(&mut self, stop: TokenSet) {
        let loc = self.loc();
        let mut skipped = 0usize;
        while !self.at_eof() && !stop.contains(self.tok()) {
            self.consume();
            skipped += 1;
        }
        if skipped > 0 {
            tracing::trace!(skipped, line = loc.line, "resynchronized");
        }
    }

    /// Require a `;` after a declaration.
    ///
    /// ## Parameters
    /// - `quiet`: the declaration already reported an error; skip to the next declaration without another one.
    fn expect_decl_semi(&mut self, quiet: bool) {
        if self.got(&SEMI) {
            return;
        }
        if !quiet {
            self.error_expected(SEMI.to_string());
        }
        self.advance(DECL_START);
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    /// `identifier`, or a `_` placeholder after reporting.
    fn ident(&mut self) -> Name {
        if self.tok().is_ident() {
            let token = self.consume();
            if let TokenKind::Ident(name) = token.kind {
                return Located::new(name, token.loc);
            }
        }
        let loc = self.loc();
        let found = self.found();
        self.report(DiagnosticKind::ExpectedIdentifier { found }, loc.clone());
        Located::new("_".to_string(), loc)
    }

    /// `identifier { "," identifier }`
    fn ident_list(&mut self) -> Vec<Name> {
        let mut names = vec![self.ident()];
        while self.got(&COMMA) {
            names.push(self.ident());
        }
        names
    }

    /// Consume the current token if it is a literal.
    fn literal(&mut self) -> Option<Located<Constant>> {
        if !matches!(self.tok(), TokenKind::Literal(_)) {
            return None;
        }
        let token = self.consume();
        match token.kind {
            TokenKind::Literal(value) => Some(Located::new(value, token.loc)),
            _ => None,
        }
    }
}
