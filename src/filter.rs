//! Number filters for the usage table: `<x`, `<= x`, `=x`, `>= x`, `>x`

use crate::error::{TagnetError, TagnetResult};
use regex_lite::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

fn filter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(<=|>=|==|<|>|=)\s*(\d+)\s*$").expect("filter pattern is valid")
    })
}

/// Comparison applied as `count <op> threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Comparison {
    pub fn evaluate(self, lhs: u64, rhs: u64) -> bool {
        match self {
            Comparison::Lt => lhs < rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Eq => lhs == rhs,
            Comparison::Ge => lhs >= rhs,
            Comparison::Gt => lhs > rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Eq => "=",
            Comparison::Ge => ">=",
            Comparison::Gt => ">",
        }
    }
}

impl FromStr for Comparison {
    type Err = TagnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Comparison::Lt),
            "<=" => Ok(Comparison::Le),
            "=" | "==" => Ok(Comparison::Eq),
            ">=" => Ok(Comparison::Ge),
            ">" => Ok(Comparison::Gt),
            other => Err(TagnetError::InvalidFilter(other.to_string())),
        }
    }
}

/// A pre-validated count predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFilter {
    pub comparison: Comparison,
    pub threshold: u64,
}

impl NumberFilter {
    pub fn new(comparison: Comparison, threshold: u64) -> Self {
        Self {
            comparison,
            threshold,
        }
    }

    /// Parse `<x`, `= x`, `>=x` and friends; `==` is accepted as `=`
    pub fn parse(input: &str) -> TagnetResult<Self> {
        let invalid = || TagnetError::InvalidFilter(input.to_string());
        let captures = filter_pattern().captures(input).ok_or_else(invalid)?;
        let comparison = captures[1].parse()?;
        let threshold = captures[2].parse().map_err(|_| invalid())?;
        Ok(Self::new(comparison, threshold))
    }

    pub fn matches(&self, count: u64) -> bool {
        self.comparison.evaluate(count, self.threshold)
    }
}

impl FromStr for NumberFilter {
    type Err = TagnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for NumberFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.comparison.symbol(), self.threshold)
    }
}
