use super::{LocalAlignment, ScoreAndEnds};
use std::fmt::{Display, Formatter, Result, Write};

/// Writes `fields` separated by tabs.
fn write_tab_separated<const K: usize>(f: &mut Formatter<'_>, fields: [usize; K]) -> Result {
    let mut buff = itoa::Buffer::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            f.write_char('\t')?;
        }
        f.write_str(buff.format(field))?;
    }
    Ok(())
}

/// Renders `score`, `ref_begin`, `ref_end`, `query_begin`, and `query_end` as
/// one tab-separated row.
impl Display for LocalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tab_separated(
            f,
            [
                usize::from(self.score),
                self.ref_begin,
                self.ref_end,
                self.query_begin,
                self.query_end,
            ],
        )
    }
}

impl Display for ScoreAndEnds {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tab_separated(f, [usize::from(self.score), self.ref_end, self.query_end])
    }
}
