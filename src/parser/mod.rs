//! Annotation comment parser.
//!
//! Turns the text of one source file into group contributions:
//!
//! 1. [`block`] finds `/** ... */` comments and splits them into logical lines
//! 2. [`section`] reads the `<tag> (paren) {curly} name description` grammar
//! 3. [`tag`] interprets each logical line into a block record
//! 4. [`assemble`] turns a record into an endpoint or group definition
//!
//! # Usage
//!
//! ```ignore
//! use apidoc::parser::parse_contributions;
//!
//! let source = std::fs::read_to_string("src/api/dogs.js")?;
//! for contribution in parse_contributions("src/api/dogs.js", &source)? {
//!     println!("{}", contribution.group());
//! }
//! ```

pub mod assemble;
pub mod block;
pub mod section;
pub mod span;
pub mod tag;

pub use assemble::{assemble, Contribution};
pub use block::{extract_blocks, DocBlock, LogicalLine};
pub use section::{parse_section, ParsedSection, SectionMode};
pub use span::Location;
pub use tag::{interpret_block, parse_example, parse_param, BlockRecord};

use crate::error::Result;

/// Parse one file into its block contributions, in source order.
///
/// Fails on the first grammar violation; nothing from the file is kept.
pub fn parse_contributions(path: &str, source: &str) -> Result<Vec<Contribution>> {
    let source = source.replace("\r\n", "\n");
    let mut contributions = Vec::new();

    for block in extract_blocks(path, &source) {
        let record = interpret_block(&block)?;
        if let Some(contribution) = assemble(record) {
            contributions.push(contribution);
        }
    }

    Ok(contributions)
}
