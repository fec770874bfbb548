//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span 和 SourceFile

use crate::util::span::{Position, SourceFile, Span, REPL_NAME};

mod position_tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = Position::with_offset(10, 20, 0);
        assert_eq!(format!("{}", pos), "10:20");
    }

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(
            Position::with_offset(1, 1, 0),
            Position::with_offset(1, 4, 3),
        );
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::point(Position::with_offset(1, 1, 0)).is_empty());
    }
}

mod source_file_tests {
    use super::*;

    #[test]
    fn test_repl_name() {
        let src = SourceFile::repl("use 'math'");
        assert_eq!(src.name, REPL_NAME);
        assert!(src.is_repl());
        assert!(!SourceFile::new("main.cool", "").is_repl());
    }

    #[test]
    fn test_position_first_line() {
        let src = SourceFile::new("t", "abc\ndef");
        let pos = src.position_from_offset(2);
        assert_eq!((pos.line, pos.column, pos.offset), (1, 3, 2));
    }

    #[test]
    fn test_position_after_newline() {
        let src = SourceFile::new("t", "abc\ndef");
        assert_eq!(src.position_from_offset(3).line, 1);
        let pos = src.position_from_offset(4);
        assert_eq!((pos.line, pos.column), (2, 1));
        let pos = src.position_from_offset(7);
        assert_eq!((pos.line, pos.column), (2, 4));
    }

    #[test]
    fn test_position_counts_characters() {
        let src = SourceFile::new("t", "'é' x");
        // 'é' is two bytes; `x` sits at byte 5 but column 5
        let pos = src.position_from_offset(5);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_position_past_end_is_clamped() {
        let src = SourceFile::new("t", "ab");
        assert_eq!(src.position_from_offset(99).offset, 2);
    }

    #[test]
    fn test_line_text() {
        let src = SourceFile::new("t", "first\r\nsecond\n");
        assert_eq!(src.line_count(), 3);
        assert_eq!(src.line_text(1), "first");
        assert_eq!(src.line_text(2), "second");
        assert_eq!(src.line_text(3), "");
        assert_eq!(src.line_text(0), "");
        assert_eq!(src.line_text(4), "");
    }

    #[test]
    fn test_source_text() {
        let src = SourceFile::new("t", "enum Direction {}");
        let span = src.span_from_range(5, 14);
        assert_eq!(src.source_text(span), Some("Direction"));
    }
}
