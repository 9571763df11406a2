mod output;
mod scan;
mod std_traits;

pub use output::*;
pub use scan::*;

#[cfg(test)]
mod test;
