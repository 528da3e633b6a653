//! Operator and keyword tokens.
//!
//! Both sets are fixed. Symbols outside them never become an `Expr`.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// All operators, in symbol order `+ - * /`.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Reserved words that head a keyword expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    /// `(let name value)`: bind a variable.
    Let,
    /// `(set name value)`: reserved, no evaluation rule.
    Set,
    /// `(begin ...)`: reserved, no evaluation rule.
    Begin,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Self::Let, Self::Set, Self::Begin];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Set => "set",
            Self::Begin => "begin",
        }
    }

    /// Look up a keyword by its spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == name)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
