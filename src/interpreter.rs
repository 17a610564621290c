use std::io::Write;

use tracing::{debug, trace};

use crate::common::{InterpretResult, StatementError, StatementResult};
use crate::expression::{parse_number, Expression};
use crate::scope_stack::ScopeStack;
use crate::statement::Statement;
use crate::symbol_table::SymbolTable;
use crate::value::format_number;
use crate::variable::{ScopeDepth, ScopeEntry, VariableRecord, GLOBAL_DEPTH};

pub struct Interpreter<W: Write> {
    scope_depth: ScopeDepth,
    symbols: SymbolTable,
    scopes: ScopeStack,
    out: W,
    line: u32,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            scope_depth: GLOBAL_DEPTH,
            symbols: SymbolTable::new(),
            scopes: ScopeStack::new(),
            out,
            line: 0,
        }
    }

    /// Runs one line of source. Statement failures are reported and
    /// swallowed; only a failing output sink is returned as an error.
    pub fn interpret_line(&mut self, source: &str) -> InterpretResult {
        self.line += 1;
        match self.execute(source) {
            Ok(Some(output)) => writeln!(self.out, "{}", output)?,
            Ok(None) => (),
            Err(StatementError::Undefined(name)) => writeln!(self.out, "{} IS UNDEFINED", name)?,
            Err(e) => eprintln!("[line {}] Error: {}", self.line, e),
        }
        Ok(())
    }

    /// Executes a line and returns the output it produces, if any.
    pub fn execute(&mut self, source: &str) -> StatementResult<Option<String>> {
        let statement = Statement::parse(source)?;
        debug!(line = self.line, ?statement, "statement found");

        match statement {
            Statement::Empty | Statement::Comment => Ok(None),
            Statement::Start => {
                self.begin_scope();
                Ok(None)
            }
            Statement::Finish => self.end_scope().map(|_| None),
            Statement::Var { name, value } => {
                self.declare(name, value);
                Ok(None)
            }
            Statement::Print(name) => {
                let record = self.resolve(name)?;
                Ok(Some(format!("{} IS {}", name, format_number(record.value))))
            }
            Statement::PrintExpression(expr) => self.print_expression(&expr).map(Some),
            Statement::Increment(name) => self.step(name, 1.0).map(|_| None),
            Statement::Decrement(name) => self.step(name, -1.0).map(|_| None),
            Statement::Assign { name, value } => self.assign(name, value).map(|_| None),
        }
    }

    #[cfg(test)]
    pub fn scope_depth(&self) -> ScopeDepth {
        self.scope_depth
    }

    #[cfg(test)]
    pub fn lookup(&self, name: &str) -> Option<&VariableRecord> {
        self.symbols.lookup(name)
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn begin_scope(&mut self) -> () {
        self.scope_depth += 1;
        debug!(depth = self.scope_depth, "scope opened");
    }

    /// Drops every declaration made at the current depth, newest first, then
    /// leaves the scope.
    fn end_scope(&mut self) -> StatementResult<()> {
        if self.scope_depth == GLOBAL_DEPTH {
            return Err(StatementError::UnbalancedFinish);
        }

        let mut removed = 0;
        while let Some(entry) = self.scopes.peek() {
            if entry.scope_depth != self.scope_depth {
                break;
            }
            if let Some(entry) = self.scopes.pop() {
                self.symbols.remove(&entry);
                removed += 1;
            }
        }

        debug!(depth = self.scope_depth, removed, "scope closed");
        self.scope_depth -= 1;
        trace!("symbol table:\n{}", self.symbols);
        Ok(())
    }

    fn declare(&mut self, name: &str, value: f64) -> () {
        let record = VariableRecord::new(self.scope_depth, value, name);
        debug!(%name, value, depth = self.scope_depth, "variable declared");
        self.scopes.push(ScopeEntry::from(&record));
        self.symbols.insert(record);
    }

    fn resolve(&self, name: &str) -> StatementResult<&VariableRecord> {
        self.symbols
            .lookup(name)
            .ok_or_else(|| StatementError::Undefined(name.to_string()))
    }

    fn resolve_mut(&mut self, name: &str) -> StatementResult<&mut VariableRecord> {
        self.symbols
            .lookup_mut(name)
            .ok_or_else(|| StatementError::Undefined(name.to_string()))
    }

    fn print_expression(&self, expr: &Expression) -> StatementResult<String> {
        let result = expr.evaluate(&self.symbols)?;
        Ok(format!("{} IS {}", expr, format_number(result)))
    }

    fn step(&mut self, name: &str, delta: f64) -> StatementResult<()> {
        self.resolve_mut(name)?.value += delta;
        Ok(())
    }

    fn assign(&mut self, name: &str, value: Option<&str>) -> StatementResult<()> {
        let record = self.resolve_mut(name)?;
        let value = value.ok_or_else(|| {
            StatementError::Parse(format!("expected '{} = <number>'", name))
        })?;
        record.value = parse_number(value)?;
        Ok(())
    }
}
