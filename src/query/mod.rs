//! Cursor abstractions, the top-k queue, and the query algorithms

mod and;
mod maxscore;
mod or;
mod range;
mod scored;
#[cfg(test)]
mod tests;
mod topk;
mod traits;
mod wand;

pub use and::*;
pub use maxscore::*;
pub use or::*;
pub use range::*;
pub use scored::*;
pub use topk::*;
pub use traits::*;
pub use wand::*;
