//! Syntax tree definitions.
//!
//! The tree is a closed set of sum types, one variant per production. Every child is owned by exactly one parent
//! (`Box` for single children, `Vec` for ordered lists), so the tree has no sharing and no cycles.
//!
//! Types are expressions here: `[]int`, `*T` and `map[K]V` are [`Expr`] variants. Parameter lists and composite
//! literals rely on this, since the parser cannot know whether a leading operand is a type until it sees what
//! follows.

use gofront_core::lang::keywords::KeywordId;
use gofront_core::lang::operators::OperatorId;

pub use crate::literal::Constant;
pub use crate::location::{Located, Location};

/// An identifier with its location.
pub type Name = Located<String>;

pub type ExprNode = Located<Expr>;
pub type StmtNode = Located<Stmt>;

/// One parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub package: Name,
    /// Declarations in source order; import declarations come first.
    pub decls: Vec<Located<Decl>>,
    pub loc: Location,
}

impl SourceFile {
    /// Iterate over every import spec in the file.
    pub fn imports(&self) -> impl Iterator<Item = &ImportSpec> {
        self.decls
            .iter()
            .flat_map(|d| match &d.node {
                Decl::Gen(gen_decl) => gen_decl.specs.as_slice(),
                _ => &[],
            })
            .filter_map(|s| match &s.node {
                Spec::Import(import) => Some(import),
                _ => None,
            })
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// Placeholder for a declaration that could not be parsed.
    Bad,
    Gen(GenDecl),
    Func(FuncDecl),
}

/// `import`, `const`, `var` or `type` with one spec or a parenthesized group.
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub keyword: KeywordId,
    pub specs: Vec<Located<Spec>>,
    pub grouped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// `name "path"`, `. "path"` or `"path"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub name: Option<Name>,
    pub path: Located<Constant>,
}

/// A `const` or `var` spec: `a, b T = x, y`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<Name>,
    pub ty: Option<ExprNode>,
    pub values: Vec<ExprNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: Name,
    pub ty: ExprNode,
}

/// Function or method declaration. A missing body declares an externally implemented function.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub recv: Option<Vec<Located<Field>>>,
    pub name: Name,
    pub ty: FuncType,
    pub body: Option<Located<Block>>,
}

// ============================================================================
// Fields and signatures
// ============================================================================

/// A struct field, parameter or result group.
///
/// ## Notes
/// - `names` is empty for embedded struct fields and for unnamed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub names: Vec<Name>,
    pub ty: ExprNode,
    pub tag: Option<Located<Constant>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub params: Vec<Located<Field>>,
    pub results: Vec<Located<Field>>,
}

/// One entry of an interface body.
#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceElem {
    Method { name: Name, ty: FuncType },
    Embedded(ExprNode),
}

/// Length part of an array or slice type.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLen {
    /// `[]T`
    Slice,
    /// `[...]T`, only inside composite literals.
    Ellipsis,
    /// `[N]T`
    Expr(Box<ExprNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Placeholder for an expression or type that could not be parsed.
    Bad,
    Ident(String),
    Literal(Constant),
    /// `T{...}`; `ty` is `None` for elided element types such as the inner braces of `[][]int{{1}}`.
    CompositeLit {
        ty: Option<Box<ExprNode>>,
        elements: Vec<ExprNode>,
    },
    FuncLit {
        ty: FuncType,
        body: Located<Block>,
    },
    Paren(Box<ExprNode>),
    Selector {
        operand: Box<ExprNode>,
        field: Name,
    },
    /// `x.(T)`; `ty` is `None` for the `x.(type)` guard of a type switch.
    TypeAssert {
        operand: Box<ExprNode>,
        ty: Option<Box<ExprNode>>,
    },
    Index {
        operand: Box<ExprNode>,
        index: Box<ExprNode>,
    },
    Slice(SliceExpr),
    Call {
        func: Box<ExprNode>,
        args: Vec<ExprNode>,
        /// Trailing `...` after the last argument.
        ellipsis: bool,
    },
    /// `*x`: dereference or pointer type.
    Star(Box<ExprNode>),
    Unary {
        op: OperatorId,
        operand: Box<ExprNode>,
    },
    Binary {
        op: OperatorId,
        lhs: Box<ExprNode>,
        rhs: Box<ExprNode>,
    },
    /// `key: value` inside a composite literal.
    KeyValue {
        key: Box<ExprNode>,
        value: Box<ExprNode>,
    },

    // ========== Types ==========
    ArrayType {
        len: ArrayLen,
        elem: Box<ExprNode>,
    },
    StructType(Vec<Located<Field>>),
    FuncType(FuncType),
    InterfaceType(Vec<Located<InterfaceElem>>),
    MapType {
        key: Box<ExprNode>,
        value: Box<ExprNode>,
    },
    ChanType {
        dir: ChanDir,
        elem: Box<ExprNode>,
    },
    /// `...T` as the type of a variadic parameter.
    Ellipsis(Box<ExprNode>),
}

/// `x[low:high]` or `x[low:high:max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub operand: Box<ExprNode>,
    pub low: Option<Box<ExprNode>>,
    pub high: Option<Box<ExprNode>>,
    pub max: Option<Box<ExprNode>>,
    /// `true` for the three-index form.
    pub three: bool,
}

impl Expr {
    pub fn is_bad(&self) -> bool {
        matches!(self, Expr::Bad)
    }

    /// Return the name if this is a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Ident(name) => Some(name),
            _ => None,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Placeholder for a statement that could not be parsed.
    Bad,
    Decl(Decl),
    Empty,
    Labeled {
        label: Name,
        stmt: Box<StmtNode>,
    },
    Expr(ExprNode),
    /// `ch <- v`
    Send {
        chan: ExprNode,
        value: ExprNode,
    },
    IncDec {
        operand: ExprNode,
        op: OperatorId,
    },
    /// Assignment, compound assignment or short variable declaration (`op` is `:=`).
    Assign {
        lhs: Vec<ExprNode>,
        op: OperatorId,
        rhs: Vec<ExprNode>,
    },
    Go(ExprNode),
    Defer(ExprNode),
    Return(Vec<ExprNode>),
    /// `break`, `continue`, `goto` or `fallthrough`.
    Branch {
        keyword: KeywordId,
        label: Option<Name>,
    },
    Block(Block),
    If(IfStmt),
    Switch(SwitchStmt),
    TypeSwitch(TypeSwitchStmt),
    Select(Vec<Located<CommClause>>),
    For(ForStmt),
    Range(RangeStmt),
}

impl Stmt {
    pub fn is_bad(&self) -> bool {
        matches!(self, Stmt::Bad)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub init: Option<Box<StmtNode>>,
    pub cond: ExprNode,
    pub then: Located<Block>,
    /// Either another `if` or a block.
    pub els: Option<Box<StmtNode>>,
}

/// `case a, b:` or `default:`; `list` is `None` for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub list: Option<Vec<ExprNode>>,
    pub body: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub init: Option<Box<StmtNode>>,
    pub tag: Option<ExprNode>,
    pub clauses: Vec<Located<CaseClause>>,
}

/// `switch x := y.(type) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSwitchStmt {
    pub init: Option<Box<StmtNode>>,
    /// The guard: `y.(type)` as an expression statement or `x := y.(type)`.
    pub guard: Box<StmtNode>,
    pub clauses: Vec<Located<CaseClause>>,
}

/// `case ch <- v:`, `case x := <-ch:` or `default:`; `comm` is `None` for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommClause {
    pub comm: Option<Box<StmtNode>>,
    pub body: Vec<StmtNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<StmtNode>>,
    pub cond: Option<ExprNode>,
    pub post: Option<Box<StmtNode>>,
    pub body: Located<Block>,
}

/// `for k, v := range x { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct RangeStmt {
    pub key: Option<ExprNode>,
    pub value: Option<ExprNode>,
    /// `true` for `:=`, `false` for `=`.
    pub define: bool,
    pub expr: ExprNode,
    pub body: Located<Block>,
}
