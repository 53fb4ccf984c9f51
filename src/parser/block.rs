//! Brace-delimited block extraction.
//!
//! The data tables are a subset of Lua with unbounded nesting, so instead of
//! a grammar we count `{`/`}` depth over raw bytes. Both brackets are ASCII,
//! which keeps every returned offset on a UTF-8 char boundary.

/// A top-level block found inside a larger segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// The block text, from `{` through its matching `}`.
    pub text: &'a str,
    /// Byte offset of the opening `{` within the scanned segment.
    pub offset: usize,
}

impl<'a> Block<'a> {
    /// Byte offset one past the closing `}`.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The block content without its outer braces.
    pub fn inner(&self) -> &'a str {
        &self.text[1..self.text.len() - 1]
    }
}

/// Find the exclusive end of the block opening at `start`.
///
/// Returns `None` when `start` is out of range, does not point at `{`, or
/// the block never closes.
pub fn block_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (idx, &byte) in bytes.iter().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract the block opening at `start`, including both braces.
pub fn extract_block(text: &str, start: usize) -> Option<&str> {
    block_end(text, start).map(|end| &text[start..end])
}

/// Split a segment into its top-level blocks, in source order.
///
/// Text between blocks is skipped, as are stray closing braces. An
/// unterminated trailing block ends the scan.
pub fn top_level_blocks(segment: &str) -> Vec<Block<'_>> {
    let bytes = segment.as_bytes();
    let mut blocks = Vec::new();
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != b'{' {
            idx += 1;
            continue;
        }
        match block_end(segment, idx) {
            Some(end) => {
                blocks.push(Block {
                    text: &segment[idx..end],
                    offset: idx,
                });
                idx = end;
            }
            None => break,
        }
    }

    blocks
}

/// Find the `{` of the smallest block enclosing `offset`.
pub fn enclosing_block_start(text: &str, offset: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;

    for idx in (0..offset.min(bytes.len())).rev() {
        match bytes[idx] {
            b'}' => depth += 1,
            b'{' if depth == 0 => return Some(idx),
            b'{' => depth -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nested_block() {
        let text = "x = { a = { b = 1 }, c = {} } tail";
        let start = text.find('{').unwrap();

        let block = extract_block(text, start).unwrap();

        assert_eq!(block, "{ a = { b = 1 }, c = {} }");
    }

    #[test]
    fn test_extract_block_is_balanced() {
        let text = "{{{}}{}}{";
        let block = extract_block(text, 0).unwrap();

        assert!(block.starts_with('{'));
        assert!(block.ends_with('}'));
        let opens = block.matches('{').count();
        let closes = block.matches('}').count();
        assert_eq!(opens, closes);
        assert_eq!(block, "{{{}}{}}");
    }

    #[test]
    fn test_extract_block_not_at_brace() {
        assert_eq!(extract_block("abc {}", 0), None);
    }

    #[test]
    fn test_extract_block_out_of_range() {
        assert_eq!(extract_block("{}", 5), None);
    }

    #[test]
    fn test_extract_block_unterminated() {
        assert_eq!(extract_block("{ { }", 0), None);
    }

    #[test]
    fn test_top_level_blocks_in_order() {
        let segment = "-- header\n{ a = {1} },\n{ b = 2 }, trailing";

        let blocks = top_level_blocks(segment);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "{ a = {1} }");
        assert_eq!(blocks[1].text, "{ b = 2 }");
        assert_eq!(&segment[blocks[1].offset..blocks[1].end()], "{ b = 2 }");
    }

    #[test]
    fn test_top_level_blocks_skips_unterminated_tail() {
        let blocks = top_level_blocks("{1} } {2} {3");

        let texts: Vec<_> = blocks.iter().map(|b| b.text).collect();
        assert_eq!(texts, vec!["{1}", "{2}"]);
    }

    #[test]
    fn test_block_inner() {
        let blocks = top_level_blocks("{ x }");
        assert_eq!(blocks[0].inner(), " x ");
    }

    #[test]
    fn test_enclosing_block_start_skips_closed_siblings() {
        let text = "{ [\"a\"] = {1}, [\"groupName\"] = \"A\" }";
        let marker = text.find("[\"groupName\"]").unwrap();

        assert_eq!(enclosing_block_start(text, marker), Some(0));
    }

    #[test]
    fn test_enclosing_block_start_none_at_top_level() {
        let text = "{1} marker";
        assert_eq!(enclosing_block_start(text, text.find("marker").unwrap()), None);
    }

    #[test]
    fn test_extended_latin_text() {
        let text = "{ [\"name\"] = \"Hadihajó ÁÉ\" }";
        let block = extract_block(text, 0).unwrap();
        assert_eq!(block, text);
    }
}
