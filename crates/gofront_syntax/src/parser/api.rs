// ============================================================================
// Public API
// ============================================================================

/// Outcome of parsing one source file.
///
/// ## Notes
/// - `file` is always present; malformed regions appear as `Bad` nodes.
/// - `diagnostics` holds lexical and syntactic diagnostics in discovery order.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub file: SourceFile,
    pub diagnostics: Diagnostics,
}

impl Parsed {
    /// Return `true` if the parse reported nothing.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse one source file from a byte source.
///
/// ## Parameters
/// - `source`: the bytes to parse; its path (if any) appears in every location.
/// - `interner`: shared path table, so files parsed in one session share path handles.
///
/// ## Returns
/// The syntax tree plus every diagnostic. A parse never fails outright.
#[tracing::instrument(skip_all, fields(path = source.path().unwrap_or(ANONYMOUS_PATH)))]
pub fn parse_file<S: ByteSource>(source: S, interner: &mut PathInterner) -> Parsed {
    let lexer = Lexer::new(source, interner);
    Parser::new(lexer).parse_file()
}

/// Parse in-memory source text.
pub fn parse_source(source: &str) -> Parsed {
    let mut interner = PathInterner::new();
    parse_file(MemorySource::new(source), &mut interner)
}

/// Parse a standalone expression (used by tests and tooling).
pub fn parse_expr(source: &str) -> (ExprNode, Diagnostics) {
    let mut interner = PathInterner::new();
    Parser::new(Lexer::new(MemorySource::new(source), &mut interner)).parse_expr()
}

/// Parse a standalone statement, as if it appeared inside a function body.
pub fn parse_stmt(source: &str) -> (StmtNode, Diagnostics) {
    let mut interner = PathInterner::new();
    Parser::new(Lexer::new(MemorySource::new(source), &mut interner)).parse_stmt()
}
