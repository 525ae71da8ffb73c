//! Key expressions: fragments in, parsed keys and their source ranges out.

pub mod fragment;
pub mod parser;
pub mod ranges;

pub use fragment::{Fragment, FragmentKind};
pub use parser::{KeyExpressionParser, KeySyntax, ParsedKey, Token};
pub use ranges::KeyRanges;
