//! Text rendering of buffer contents for debugging
//!
//! ```text
//! row | Jump Attack
//!   0 |   1*      0
//!   1 |    0      0
//!   2 |    0      0
//! ```
//!
//! One column per registered input, one line per row (newest first). Cells
//! show the hold time, with `*` marking a consumed press.

use crate::InputBuffer;

/// Render every row of the buffer as a fixed-width table
pub fn render_debug_table(buffer: &InputBuffer) -> String {
    let widths: Vec<usize> = buffer
        .registry()
        .iter()
        .map(|id| id.as_str().len().max(4))
        .collect();

    let mut out = String::from("row |");
    for (id, width) in buffer.registry().iter().zip(&widths) {
        out.push_str(&format!(" {:>width$}", id.as_str(), width = *width));
    }
    out.push('\n');

    for (index, row) in buffer.rows().enumerate() {
        out.push_str(&format!("{index:>3} |"));
        for (state, width) in row.iter().zip(&widths) {
            let marker = if state.used { "*" } else { "" };
            let cell = format!("{}{marker}", state.hold_time);
            out.push_str(&format!(" {cell:>width$}", width = *width));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdfast_core::RawInputTable;

    #[test]
    fn test_render_resting_buffer() {
        let buffer = InputBuffer::new(2, ["Jump"].into_iter().collect());
        assert_eq!(
            render_debug_table(&buffer),
            "row | Jump\n  0 |    0\n  1 |    0\n"
        );
    }

    #[test]
    fn test_render_marks_used_press() {
        let mut buffer = InputBuffer::new(3, ["Jump", "Attack"].into_iter().collect());
        let mut raw = RawInputTable::new();
        raw.set_button("Jump", true);
        buffer.update_buffer(&raw);
        assert!(buffer.consume_input("Jump"));

        let table = render_debug_table(&buffer);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "row | Jump Attack");
        assert_eq!(lines[1], "  0 |   1*      0");
        assert_eq!(lines[2], "  1 |    0      0");
    }

    #[test]
    fn test_render_release_marker() {
        let mut buffer = InputBuffer::new(2, ["Jump"].into_iter().collect());
        let mut raw = RawInputTable::new();
        raw.set_button("Jump", true);
        buffer.update_buffer(&raw);
        raw.set_button("Jump", false);
        buffer.update_buffer(&raw);

        let table = render_debug_table(&buffer);
        assert!(table.contains("  0 |   -1"));
        assert!(table.contains("  1 |    1"));
    }

    #[test]
    fn test_used_marker_stays_on_consumed_row() {
        let mut buffer = InputBuffer::new(3, ["Jump"].into_iter().collect());
        let mut raw = RawInputTable::new();
        raw.set_button("Jump", true);
        buffer.update_buffer(&raw);
        assert!(buffer.consume_input("Jump"));
        buffer.update_buffer(&raw);

        let table = render_debug_table(&buffer);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[1], "  0 |    2");
        assert_eq!(lines[2], "  1 |   1*");
    }
}
