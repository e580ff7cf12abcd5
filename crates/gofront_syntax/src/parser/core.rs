/// Parser core types and entrypoints.
///
/// This chunk defines the [`Parser`] type, the token shorthands and resynchronization sets shared by the other
/// chunks, and the small internal result types of statement parsing.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.
/// - The only parsing context is the expression nesting level `lvl`, passed explicitly. Control clause headers
///   parse at `-1`, bracketed sub-expressions at `lvl + 1`, and block bodies start over at `0`. A composite
///   literal whose type is a bare type name is only recognized at `lvl >= 0`, which keeps `if x == T {` a
///   comparison followed by a block.

// ============================================================================
// Token shorthands
// ============================================================================

const COMMA: TokenKind = TokenKind::Punctuation(PunctuationId::Comma);
const SEMI: TokenKind = TokenKind::Punctuation(PunctuationId::Semicolon);
const COLON: TokenKind = TokenKind::Punctuation(PunctuationId::Colon);
const DOT: TokenKind = TokenKind::Punctuation(PunctuationId::Dot);
const ELLIPSIS: TokenKind = TokenKind::Punctuation(PunctuationId::Ellipsis);
const LPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::LParen);
const RPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::RParen);
const LBRACKET: TokenKind = TokenKind::Punctuation(PunctuationId::LBracket);
const RBRACKET: TokenKind = TokenKind::Punctuation(PunctuationId::RBracket);
const LBRACE: TokenKind = TokenKind::Punctuation(PunctuationId::LBrace);
const RBRACE: TokenKind = TokenKind::Punctuation(PunctuationId::RBrace);
const ASSIGN: TokenKind = TokenKind::Operator(OperatorId::Assign);
const ARROW: TokenKind = TokenKind::Operator(OperatorId::Arrow);

// ============================================================================
// Resynchronization sets
// ============================================================================
// Every set implicitly contains end of input (see `advance`).

/// Keywords that begin a top-level declaration.
const DECL_START: TokenSet = TokenSet::keywords(&[
    KeywordId::Const,
    KeywordId::Func,
    KeywordId::Import,
    KeywordId::Type,
    KeywordId::Var,
]);

/// Keywords that can only begin a statement.
const STMT_START: TokenSet = TokenSet::keywords(&[
    KeywordId::Break,
    KeywordId::Const,
    KeywordId::Continue,
    KeywordId::Defer,
    KeywordId::Fallthrough,
    KeywordId::For,
    KeywordId::Go,
    KeywordId::Goto,
    KeywordId::If,
    KeywordId::Return,
    KeywordId::Select,
    KeywordId::Switch,
    KeywordId::Type,
    KeywordId::Var,
]);

/// Clause boundaries inside `switch` and `select` bodies.
const CLAUSE_SYNC: TokenSet = TokenSet::keywords(&[KeywordId::Case, KeywordId::Default])
    .union(TokenSet::punctuation(&[PunctuationId::RBrace]));

/// Recovery after a malformed statement.
const STMT_SYNC: TokenSet = STMT_START
    .union(CLAUSE_SYNC)
    .union(TokenSet::punctuation(&[PunctuationId::Semicolon]));

/// Recovery inside a parenthesized declaration group.
const GROUP_SYNC: TokenSet =
    DECL_START.union(TokenSet::punctuation(&[PunctuationId::RParen, PunctuationId::Semicolon]));

/// Recovery inside struct and interface bodies.
const BODY_SYNC: TokenSet =
    DECL_START.union(TokenSet::punctuation(&[PunctuationId::Semicolon, PunctuationId::RBrace]));

/// Recovery after a malformed operand or type. Stops before anything that closes or separates the enclosing
/// construct, and before keywords that start the next statement or declaration.
const EXPR_SYNC: TokenSet = TokenSet::punctuation(&[
    PunctuationId::Comma,
    PunctuationId::Semicolon,
    PunctuationId::Colon,
    PunctuationId::RParen,
    PunctuationId::RBracket,
    PunctuationId::LBrace,
    PunctuationId::RBrace,
])
.union(STMT_START)
.union(DECL_START)
.union(CLAUSE_SYNC);

/// Recovery inside `[...]` after an index that is neither closed nor followed by `:`.
const INDEX_SYNC: TokenSet = TokenSet::punctuation(&[
    PunctuationId::RBracket,
    PunctuationId::Semicolon,
    PunctuationId::RParen,
    PunctuationId::RBrace,
]);

// ============================================================================
// Internal result types
// ============================================================================

/// Which extra forms a simple statement may take in its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimpleMode {
    Basic,
    /// Statement position: `L: stmt` is allowed.
    LabelOk,
    /// `for` header: `k, v := range x` is allowed.
    RangeOk,
}

/// Result of parsing a simple statement.
enum Simple {
    Stmt(StmtNode),
    /// The `k, v := range x` part of a `for` header; the body is parsed by the caller.
    Range {
        lhs: Vec<ExprNode>,
        define: bool,
        expr: ExprNode,
    },
}

/// Parser state.
///
/// ## Notes
/// - The lexer owns the diagnostic accumulator; the parser reports through it so lexical and syntactic
///   diagnostics come out in discovery order.
pub struct Parser<S> {
    lexer: Lexer<S>,
}

impl<S: ByteSource> Parser<S> {
    /// Create a parser over a token stream.
    pub fn new(lexer: Lexer<S>) -> Self {
        Self { lexer }
    }

    /// Parse one complete source file.
    pub fn parse_file(mut self) -> Parsed {
        let file = self.source_file();
        let diagnostics = self.lexer.into_diagnostics();
        tracing::debug!(
            decls = file.decls.len(),
            diagnostics = diagnostics.len(),
            "parsed source file"
        );
        Parsed { file, diagnostics }
    }

    /// Parse a single expression followed by end of input.
    pub fn parse_expr(mut self) -> (ExprNode, Diagnostics) {
        let expr = self.expr(0);
        self.finish_fragment();
        (expr, self.lexer.into_diagnostics())
    }

    /// Parse a single statement followed by end of input.
    pub fn parse_stmt(mut self) -> (StmtNode, Diagnostics) {
        let stmt = self.stmt();
        self.finish_fragment();
        (stmt, self.lexer.into_diagnostics())
    }

    fn finish_fragment(&mut self) {
        self.got(&SEMI);
        if !self.at_eof() {
            self.error_expected("end of input");
        }
    }
}
