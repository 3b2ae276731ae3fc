use std::fmt::{Display, Write};

/// Leading text of the printed sequence line.
pub const LINE_PREFIX: &str = "Generated Random Numbers: ";

/// Format samples as a single line: the prefix, then every value followed
/// by one space. No trailing newline.
pub fn format_line<T: Display>(samples: &[T]) -> String {
    let mut line = String::from(LINE_PREFIX);
    for value in samples {
        // Writing into a String cannot fail
        let _ = write!(line, "{} ", value);
    }
    line
}
