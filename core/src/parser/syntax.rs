// Common syntax structures shared by the parser and the evaluator.

use core::{cell::RefCell, fmt, ops::Range};

use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};

/// Source text plus the span of every node allocated for it.
#[derive(Debug)]
pub struct AnnotatedSource<'a, T> {
    pub source: &'a str,
    spans: RefCell<HashMap<*const T, Span, DefaultHashBuilder, &'a Bump>>,
}

impl<'a, T> AnnotatedSource<'a, T> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self {
            source,
            spans: RefCell::new(HashMap::new_in(arena)),
        }
    }
    pub fn add_span(&self, node: &T, span: Span) {
        let p = node as *const _;
        self.spans.borrow_mut().insert(p, span);
    }
    pub fn span_of(&self, node: &T) -> Option<Span> {
        let p = node as *const _;
        self.spans.borrow().get(&p).cloned()
    }
    pub fn snippet(&self, span: &Span) -> &'a str {
        span.str_of(self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// Operators accepted in the head position of an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Min,
        Operator::Max,
    ];

    /// Resolve an operator from its source spelling.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "%" => Some(Operator::Rem),
            "^" => Some(Operator::Pow),
            "min" => Some(Operator::Min),
            "max" => Some(Operator::Max),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "^",
            Operator::Min => "min",
            Operator::Max => "max",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
