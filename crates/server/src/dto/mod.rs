mod nearest;

pub use nearest::*;
