//! Operators and dice equations.

use alloc::vec::Vec;
use core::fmt;

use crate::error::EquationError;

// Halves round towards positive infinity, so -2.5 becomes -2.
#[cfg(feature = "std")]
fn round_nearest(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_nearest(value: f64) -> f64 {
    libm::floor(value + 0.5)
}

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl Operator {
    /// All operators in cycling order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the operator that follows this one in cycling order.
    ///
    /// ```
    /// use alcoroll::Operator;
    ///
    /// assert_eq!(Operator::Add.next(), Operator::Sub);
    /// assert_eq!(Operator::Div.next(), Operator::Add);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Add => Self::Sub,
            Self::Sub => Self::Mul,
            Self::Mul => Self::Div,
            Self::Div => Self::Add,
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '−',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    const fn binds_tight(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered sequence of operands joined by operator slots.
///
/// There is always one slot fewer than there are operands. A slot may be
/// unset while the player is still building the equation; such an equation
/// has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equation {
    operands: Vec<u32>,
    operators: Vec<Option<Operator>>,
}

impl Equation {
    /// Creates an empty equation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Assembles an equation from operands and operator slots.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::OperatorCount`] unless there is exactly one
    /// slot fewer than operands (or no slots for no operands).
    pub fn from_parts(
        operands: Vec<u32>,
        operators: Vec<Option<Operator>>,
    ) -> Result<Self, EquationError> {
        let expected = operands.len().saturating_sub(1);
        if operators.len() != expected {
            return Err(EquationError::OperatorCount {
                operands: operands.len(),
                expected,
                operators: operators.len(),
            });
        }
        Ok(Self {
            operands,
            operators,
        })
    }

    /// Appends an operand, opening an unset operator slot before it when the
    /// equation is not empty.
    pub fn push(&mut self, operand: u32) {
        if !self.operands.is_empty() {
            self.operators.push(None);
        }
        self.operands.push(operand);
    }

    /// Appends an operand joined by `operator`.
    ///
    /// The operator is dropped when the equation is empty.
    pub fn push_with(&mut self, operator: Operator, operand: u32) {
        if !self.operands.is_empty() {
            self.operators.push(Some(operator));
        }
        self.operands.push(operand);
    }

    /// Removes the last operand together with the slot before it.
    pub fn pop(&mut self) -> Option<u32> {
        let operand = self.operands.pop()?;
        self.operators.pop();
        Some(operand)
    }

    /// Sets the operator slot at `index`. Returns `false` if there is no such slot.
    pub fn set_operator(&mut self, index: usize, operator: Operator) -> bool {
        match self.operators.get_mut(index) {
            Some(slot) => {
                *slot = Some(operator);
                true
            }
            None => false,
        }
    }

    /// Advances the slot at `index` to the next operator.
    ///
    /// An unset slot becomes [`Operator::Add`]. Returns the new operator, or
    /// `None` if there is no such slot.
    pub fn cycle_operator(&mut self, index: usize) -> Option<Operator> {
        let slot = self.operators.get_mut(index)?;
        let next = slot.map_or(Operator::Add, Operator::next);
        *slot = Some(next);
        Some(next)
    }

    /// Returns the operands.
    #[must_use]
    pub fn operands(&self) -> &[u32] {
        &self.operands
    }

    /// Returns the operator slots.
    #[must_use]
    pub fn operators(&self) -> &[Option<Operator>] {
        &self.operators
    }

    /// Returns the number of operands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Returns whether the equation has no operands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Returns whether every operator slot is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.operands.is_empty() && self.operators.iter().all(Option::is_some)
    }

    /// Evaluates the equation with the usual precedence and rounds the value
    /// to the nearest integer, halves upwards.
    ///
    /// Returns `None` when the equation is empty, has an unset slot, or the
    /// arithmetic leaves the finite range (for example a division by zero).
    ///
    /// ```
    /// use alcoroll::{Equation, Operator};
    ///
    /// let mut equation = Equation::new();
    /// equation.push(2);
    /// equation.push_with(Operator::Add, 3);
    /// equation.push_with(Operator::Mul, 4);
    /// assert_eq!(equation.evaluate(), Some(14));
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> Option<i64> {
        let (&first, rest) = self.operands.split_first()?;

        // Sum of finished terms, and the term still open to × and ÷.
        let mut total = 0.0;
        let mut sign = Operator::Add;
        let mut term = f64::from(first);

        for (slot, &operand) in self.operators.iter().zip(rest) {
            let operator = (*slot)?;
            let value = f64::from(operand);
            if operator.binds_tight() {
                term = operator.apply(term, value);
            } else {
                total = sign.apply(total, term);
                sign = operator;
                term = value;
            }
        }
        total = sign.apply(total, term);

        if !total.is_finite() {
            return None;
        }

        Some(round_nearest(total) as i64)
    }
}

impl fmt::Display for Equation {
    /// Renders the equation in infix form, showing unset slots as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            write!(f, "{first}")?;
        }
        for (slot, operand) in self.operators.iter().zip(operands) {
            match slot {
                Some(operator) => write!(f, " {operator} {operand}")?,
                None => write!(f, " ? {operand}")?,
            }
        }
        Ok(())
    }
}
