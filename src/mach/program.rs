use crate::lang::ast::{Line, Statement};
use crate::LineNumber;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// ## Assembled program
///
/// An ordered line-number → statement map, built once from parser
/// output and never mutated afterward. On a duplicate line number the
/// first occurrence wins; later ones are discarded. Immutable and
/// `Send + Sync`, so a running [`super::Runtime`] and an external
/// backend may read it concurrently.
#[derive(Debug, Clone, Default)]
pub struct Program {
    lines: BTreeMap<LineNumber, Statement>,
}

impl Program {
    pub fn new(lines: Vec<Line>) -> Program {
        let mut map: BTreeMap<LineNumber, Statement> = BTreeMap::new();
        for line in lines {
            map.entry(line.number).or_insert(line.statement);
        }
        Program { lines: map }
    }

    pub fn get(&self, line_number: LineNumber) -> Option<&Statement> {
        self.lines.get(&line_number)
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.lines.keys().next().copied()
    }

    /// The next-greater line number present, if any.
    pub fn line_after(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.lines
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> Iter<'_, LineNumber, Statement> {
        self.lines.iter()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (number, statement) in &self.lines {
            writeln!(f, "{} {}", number, statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::parse;

    #[test]
    fn test_first_occurrence_wins() {
        let program = Program::new(parse("10 PRINT 1\n10 PRINT 2\n20 END").unwrap());
        assert_eq!(program.len(), 2);
        assert_eq!(program.to_string(), "10 PRINT 1\n20 END\n");
    }

    #[test]
    fn test_line_after() {
        let program = Program::new(parse("10 END\n30 END\n20 END").unwrap());
        assert_eq!(program.first_line(), Some(10));
        assert_eq!(program.line_after(10), Some(20));
        assert_eq!(program.line_after(20), Some(30));
        assert_eq!(program.line_after(30), None);
        assert_eq!(program.line_after(15), Some(20));
    }
}
