use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operand {
	Left,
	Right,
}

impl Display for Operand {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Self::Left => "left",
			Self::Right => "right",
		})
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("{0} operand is missing")]
	MissingOperand(Operand),
}
